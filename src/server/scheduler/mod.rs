//! Recurring trigger engine used by chore schedules.
//!
//! A chore schedule installs one weekly trigger per active day. The service layer only
//! talks to the `TriggerEngine` trait: `schedule` installs a trigger and returns a handle,
//! `cancel` stops it from firing again. `CronTriggerEngine` is the production engine
//! backed by `tokio-cron-scheduler`.

pub mod cron;

use chrono::Weekday;
use chrono_tz::Tz;
use serenity::async_trait;
use std::{future::Future, pin::Pin, sync::Arc};
use uuid::Uuid;

use crate::server::error::AppError;

/// Future returned by a trigger callback
pub type TriggerFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Callback run every time a trigger fires
pub type TriggerCallback = Arc<dyn Fn() -> TriggerFuture + Send + Sync>;

/// When a weekly trigger fires: once per week on `weekday` at `hour:minute` local time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerSpec {
    pub weekday: Weekday,
    pub hour: u32,
    pub minute: u32,
    pub timezone: Tz,
}

impl TriggerSpec {
    /// Six-field cron expression (`sec min hour day-of-month month day-of-week`)
    ///
    /// Days of week are written as names (`MON`..`SUN`) so the expression does not
    /// depend on whether the cron dialect counts Sunday as 0 or 7.
    pub fn cron_expression(&self) -> String {
        format!(
            "0 {} {} * * {}",
            self.minute,
            self.hour,
            self.weekday.to_string().to_uppercase()
        )
    }
}

/// Handle to a live trigger, used to cancel it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriggerHandle(pub Uuid);

#[async_trait]
pub trait TriggerEngine: Send + Sync {
    /// Installs a recurring trigger that runs `callback` at every occurrence of `spec`.
    async fn schedule(
        &self,
        spec: TriggerSpec,
        callback: TriggerCallback,
    ) -> Result<TriggerHandle, AppError>;

    /// Stops a trigger. Once this returns the callback is not started again.
    async fn cancel(&self, handle: TriggerHandle) -> Result<(), AppError>;
}
