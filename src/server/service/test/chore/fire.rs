use super::*;

/// Tests two consecutive weekly reminders with more chores than people.
///
/// Expected: assignments rotate by one person per posted reminder
#[tokio::test]
async fn posts_and_rotates_assignments() {
    let ctx = TestContext::new();
    ctx.state
        .chores
        .configure(chores_param("A,B,C", "x,y,z,w", "monday"))
        .await
        .unwrap();

    ctx.engine.fire(Weekday::Mon).await;
    ctx.engine.fire(Weekday::Mon).await;

    let sent = ctx.messenger.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(
        sent[0],
        (
            CHANNEL_ID,
            "🧹 Weekly chores for Monday!\nA → x\nB → y\nC → z\nA → w".to_string()
        )
    );
    assert_eq!(
        sent[1].1,
        "🧹 Weekly chores for Monday!\nB → x\nC → y\nA → z\nB → w"
    );
    assert_eq!(
        ctx.state.chores.get(GUILD_ID).await.unwrap().rotation_index,
        2
    );
}

/// Tests that the rotation index wraps around the people list.
///
/// Expected: index back at zero after one firing per person
#[tokio::test]
async fn rotation_wraps_around() {
    let ctx = TestContext::new();
    ctx.state
        .chores
        .configure(chores_param("A,B", "x", "tuesday,thursday"))
        .await
        .unwrap();

    ctx.engine.fire(Weekday::Tue).await;
    ctx.engine.fire(Weekday::Thu).await;

    let sent = ctx.messenger.sent();
    assert_eq!(sent[0].1, "🧹 Weekly chores for Tuesday!\nA → x");
    assert_eq!(sent[1].1, "🧹 Weekly chores for Thursday!\nB → x");
    assert_eq!(
        ctx.state.chores.get(GUILD_ID).await.unwrap().rotation_index,
        0
    );
}

/// Tests firing when the destination channel cannot be reached.
///
/// Expected: nothing posted, rotation index unchanged, next firing uses the same
/// assignments once the channel is back
#[tokio::test]
async fn unreachable_channel_does_not_advance() {
    let ctx = TestContext::new();
    let schedule = ctx
        .state
        .chores
        .configure(chores_param("A,B", "x", "monday"))
        .await
        .unwrap();
    ctx.messenger.make_unreachable(CHANNEL_ID);

    let outcome = ctx
        .state
        .chores
        .fire(GUILD_ID, schedule.revision, Weekday::Mon)
        .await;

    assert_eq!(outcome, FireOutcome::Skipped);
    assert!(ctx.messenger.sent().is_empty());
    assert_eq!(
        ctx.state.chores.get(GUILD_ID).await.unwrap().rotation_index,
        0
    );
}

/// Tests a trigger of a replaced schedule firing late.
///
/// Expected: nothing posted and the new schedule's rotation is untouched
#[tokio::test]
async fn stale_trigger_is_ignored() {
    let ctx = TestContext::new();
    ctx.state
        .chores
        .configure(chores_param("A,B", "x", "monday"))
        .await
        .unwrap();
    ctx.state
        .chores
        .configure(chores_param("C,D", "y", "monday"))
        .await
        .unwrap();

    ctx.engine.fire_cancelled().await;

    assert!(ctx.messenger.sent().is_empty());
    assert_eq!(
        ctx.state.chores.get(GUILD_ID).await.unwrap().rotation_index,
        0
    );
}

/// Tests firing for a guild without a schedule.
///
/// Expected: Skipped with nothing posted
#[tokio::test]
async fn missing_schedule_is_skipped() {
    let ctx = TestContext::new();

    let outcome = ctx.state.chores.fire(GUILD_ID, 1, Weekday::Mon).await;

    assert_eq!(outcome, FireOutcome::Skipped);
    assert!(ctx.messenger.sent().is_empty());
}

/// Tests that a reminder reads the schedule at firing time.
///
/// Expected: Posted to the configured channel with the current revision
#[tokio::test]
async fn fire_reports_posted() {
    let ctx = TestContext::new();
    let schedule = ctx
        .state
        .chores
        .configure(chores_param("A", "x,y", "sunday"))
        .await
        .unwrap();

    let outcome = ctx
        .state
        .chores
        .fire(GUILD_ID, schedule.revision, Weekday::Sun)
        .await;

    assert_eq!(outcome, FireOutcome::Posted);
    assert_eq!(
        ctx.messenger.sent(),
        vec![(
            CHANNEL_ID,
            "🧹 Weekly chores for Sunday!\nA → x\nA → y".to_string()
        )]
    );
}
