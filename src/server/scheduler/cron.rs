use serenity::async_trait;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    scheduler::{TriggerCallback, TriggerEngine, TriggerHandle, TriggerSpec},
};

/// Trigger engine backed by a running `tokio-cron-scheduler` instance
///
/// Each trigger is a separate cron job evaluated in the trigger's own time zone, so
/// reminders follow daylight saving changes of that zone. Clones share the scheduler.
#[derive(Clone)]
pub struct CronTriggerEngine {
    scheduler: JobScheduler,
}

impl CronTriggerEngine {
    /// Creates and starts the underlying job scheduler
    ///
    /// # Returns
    /// - `Ok(CronTriggerEngine)` - Running engine ready to accept triggers
    /// - `Err(AppError::SchedulerErr)` - Scheduler failed to initialize or start
    pub async fn start() -> Result<Self, AppError> {
        let scheduler = JobScheduler::new().await?;
        scheduler.start().await?;

        tracing::info!("Chore trigger scheduler started");

        Ok(Self { scheduler })
    }
}

#[async_trait]
impl TriggerEngine for CronTriggerEngine {
    async fn schedule(
        &self,
        spec: TriggerSpec,
        callback: TriggerCallback,
    ) -> Result<TriggerHandle, AppError> {
        let expression = spec.cron_expression();

        let job = Job::new_async_tz(expression.as_str(), spec.timezone, move |_uuid, _lock| {
            let callback = callback.clone();

            Box::pin(async move {
                callback().await;
            })
        })?;

        let id = self.scheduler.add(job).await?;

        tracing::debug!(
            "Installed trigger {} ({} {})",
            id,
            expression,
            spec.timezone.name()
        );

        Ok(TriggerHandle(id))
    }

    async fn cancel(&self, handle: TriggerHandle) -> Result<(), AppError> {
        self.scheduler.remove(&handle.0).await?;

        tracing::debug!("Removed trigger {}", handle.0);

        Ok(())
    }
}
