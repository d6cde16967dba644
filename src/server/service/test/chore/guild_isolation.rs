use super::*;
use std::time::Duration;

/// Tests that a slow reminder post in one guild does not block another guild.
///
/// Verifies that while a reminder for one guild is stuck sending, configuring and
/// clearing a different guild still complete promptly, and the stuck reminder finishes
/// normally once the send is released.
///
/// Expected: the other guild is configured and cleared within the timeout, the held
/// reminder is then Posted
#[tokio::test]
async fn slow_send_does_not_block_other_guilds() {
    let ctx = TestContext::new();
    let schedule = ctx
        .state
        .chores
        .configure(chores_param("A,B", "x", "monday"))
        .await
        .unwrap();
    ctx.messenger.hold(CHANNEL_ID);

    let chores = ctx.state.chores.clone();
    let revision = schedule.revision;
    let firing =
        tokio::spawn(async move { chores.fire(GUILD_ID, revision, Weekday::Mon).await });
    ctx.messenger.wait_for_held_send().await;

    let mut other = chores_param("C", "y", "friday");
    other.guild_id = GUILD_ID + 1;
    let configured = tokio::time::timeout(
        Duration::from_secs(1),
        ctx.state.chores.configure(other),
    )
    .await
    .expect("configuring another guild was blocked by a pending send");
    assert!(configured.is_ok());

    let cleared = tokio::time::timeout(
        Duration::from_secs(1),
        ctx.state.chores.clear(GUILD_ID + 1),
    )
    .await
    .expect("clearing another guild was blocked by a pending send");
    assert!(cleared);

    ctx.messenger.release();
    assert_eq!(firing.await.unwrap(), FireOutcome::Posted);
    assert_eq!(
        ctx.state.chores.get(GUILD_ID).await.unwrap().rotation_index,
        1
    );
}

/// Tests that the same guild stays serialized behind a pending reminder.
///
/// Verifies that reconfiguring the guild whose reminder is sending waits for the send
/// to finish, so the old rotation advance never lands on the new schedule.
///
/// Expected: reconfigure blocked until release, new schedule starts at index 0
#[tokio::test]
async fn same_guild_waits_for_pending_send() {
    let ctx = TestContext::new();
    let schedule = ctx
        .state
        .chores
        .configure(chores_param("A,B", "x", "monday"))
        .await
        .unwrap();
    ctx.messenger.hold(CHANNEL_ID);

    let chores = ctx.state.chores.clone();
    let revision = schedule.revision;
    let firing =
        tokio::spawn(async move { chores.fire(GUILD_ID, revision, Weekday::Mon).await });
    ctx.messenger.wait_for_held_send().await;

    let blocked = tokio::time::timeout(
        Duration::from_millis(100),
        ctx.state.chores.configure(chores_param("C,D", "y", "monday")),
    )
    .await;
    assert!(blocked.is_err());

    ctx.messenger.release();
    assert_eq!(firing.await.unwrap(), FireOutcome::Posted);

    let replaced = ctx
        .state
        .chores
        .configure(chores_param("C,D", "y", "monday"))
        .await
        .unwrap();
    assert_eq!(replaced.rotation_index, 0);
    assert_eq!(
        ctx.state.chores.get(GUILD_ID).await.unwrap().people,
        vec!["C", "D"]
    );
}
