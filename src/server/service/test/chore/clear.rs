use super::*;

/// Tests clearing a configured guild.
///
/// Expected: true, schedule removed and every trigger cancelled
#[tokio::test]
async fn clears_schedule_and_triggers() {
    let ctx = TestContext::new();
    ctx.state
        .chores
        .configure(chores_param("A,B", "x", "monday,friday"))
        .await
        .unwrap();

    assert!(ctx.state.chores.clear(GUILD_ID).await);

    assert!(ctx.state.chores.get(GUILD_ID).await.is_none());
    assert_eq!(ctx.engine.active_count(), 0);
    assert_eq!(ctx.engine.cancelled_count(), 2);

    ctx.engine.fire_cancelled().await;
    assert!(ctx.messenger.sent().is_empty());
}

/// Tests clearing a guild that has no schedule.
///
/// Expected: false
#[tokio::test]
async fn clear_without_schedule() {
    let ctx = TestContext::new();

    assert!(!ctx.state.chores.clear(GUILD_ID).await);
}
