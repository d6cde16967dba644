//! Weekly chore schedules with rotating assignments.
//!
//! This module provides the `ChoreScheduleService` which owns the per-guild chore
//! schedule and the recurring triggers derived from it. Reconfiguring a guild always
//! cancels every trigger of the previous schedule before new ones are installed. Schedule
//! mutations and trigger firings are serialized per guild, so no two trigger sets for the
//! same guild are ever active at once while other guilds proceed independently.
//!
//! - `rotation` - Deterministic person-to-chore assignment and index advance

pub mod rotation;

use chrono::Weekday;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};
use tokio::sync::Mutex;

use crate::server::{
    data::chore_schedule::ChoreScheduleRepository,
    error::{validation::ValidationError, AppError},
    model::chore::{ChoreSchedule, ConfigureChoresParam, FireOutcome, TimeOfDay},
    scheduler::{TriggerCallback, TriggerEngine, TriggerFuture, TriggerHandle, TriggerSpec},
    service::messenger::ChannelMessenger,
    util::{
        parse::split_csv,
        validate::{parse_days, parse_time, parse_timezone, validate_text_channel, weekday_name},
    },
};

/// Service managing chore schedules and their triggers.
///
/// Clones share the same repository, trigger engine, messenger and locks, which lets each
/// installed trigger hold its own handle back to the service.
#[derive(Clone)]
pub struct ChoreScheduleService {
    repo: ChoreScheduleRepository,
    engine: Arc<dyn TriggerEngine>,
    messenger: Arc<dyn ChannelMessenger>,
    /// One lock per guild serializing configure, clear and fire for that guild
    guild_locks: Arc<Mutex<HashMap<u64, Arc<Mutex<()>>>>>,
    next_revision: Arc<AtomicU64>,
}

impl ChoreScheduleService {
    pub fn new(
        repo: ChoreScheduleRepository,
        engine: Arc<dyn TriggerEngine>,
        messenger: Arc<dyn ChannelMessenger>,
    ) -> Self {
        Self {
            repo,
            engine,
            messenger,
            guild_locks: Arc::new(Mutex::new(HashMap::new())),
            next_revision: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Creates or replaces the chore schedule of a guild.
    ///
    /// Every input is validated before anything else happens, so a rejected request leaves
    /// the existing schedule and its triggers untouched. Otherwise the previous schedule's
    /// triggers are cancelled, the new schedule is stored with a rotation index of 0, and
    /// one weekly trigger is installed per active day.
    ///
    /// If installing a trigger fails, the triggers installed so far are cancelled and
    /// the guild is left without a schedule.
    ///
    /// # Arguments
    /// - `param` - Raw schedule options as typed by the user
    ///
    /// # Returns
    /// - `Ok(ChoreSchedule)` - The stored schedule including its trigger handles
    /// - `Err(AppError::ValidationErr)` - Invalid time, days, time zone, channel, people
    ///   or chores
    /// - `Err(AppError::SchedulerErr)` - A trigger could not be installed
    pub async fn configure(&self, param: ConfigureChoresParam) -> Result<ChoreSchedule, AppError> {
        let (hour, minute) = parse_time(&param.time)?;
        let days = parse_days(&param.days)?;
        let timezone = parse_timezone(&param.timezone)?;
        validate_text_channel(param.channel.kind)?;

        let people = split_csv(&param.people);
        if people.is_empty() {
            return Err(ValidationError::EmptyPeople.into());
        }
        let chores = split_csv(&param.chores);
        if chores.is_empty() {
            return Err(ValidationError::EmptyChores.into());
        }

        let lock = self.guild_lock(param.guild_id).await;
        let _guard = lock.lock().await;

        if let Some(previous) = self.repo.delete(param.guild_id).await {
            self.cancel_triggers(&previous).await;
            tracing::info!(
                "Cancelled {} trigger(s) of previous chore schedule for guild {}",
                previous.triggers.len(),
                param.guild_id
            );
        }

        let mut schedule = ChoreSchedule {
            guild_id: param.guild_id,
            people,
            chores,
            days: days.clone(),
            time: TimeOfDay { hour, minute },
            timezone,
            channel_id: param.channel.id,
            rotation_index: 0,
            revision: self.next_revision.fetch_add(1, Ordering::Relaxed),
            triggers: Vec::with_capacity(days.len()),
        };

        for day in days {
            match self.install_trigger(&schedule, day).await {
                Ok(handle) => schedule.triggers.push(handle),
                Err(e) => {
                    self.cancel_triggers(&schedule).await;
                    return Err(e);
                }
            }
        }

        self.repo.put(schedule.clone()).await;

        tracing::info!(
            "Configured chore schedule for guild {}: {} at {} {} ({} trigger(s))",
            schedule.guild_id,
            schedule.describe_days(),
            schedule.time,
            schedule.timezone.name(),
            schedule.triggers.len()
        );

        Ok(schedule)
    }

    /// Removes the chore schedule of a guild and cancels its triggers.
    ///
    /// # Returns
    /// - `true` - A schedule existed and was removed
    /// - `false` - The guild had no schedule
    pub async fn clear(&self, guild_id: u64) -> bool {
        let lock = self.guild_lock(guild_id).await;
        let _guard = lock.lock().await;

        let Some(schedule) = self.repo.delete(guild_id).await else {
            return false;
        };

        self.cancel_triggers(&schedule).await;
        tracing::info!("Cleared chore schedule for guild {}", guild_id);

        true
    }

    /// Gets the current chore schedule of a guild
    #[cfg(test)]
    pub async fn get(&self, guild_id: u64) -> Option<ChoreSchedule> {
        self.repo.get(guild_id).await
    }

    /// Posts this week's assignments for a guild and advances the rotation.
    ///
    /// Called by a trigger on each firing. The schedule is read fresh from the repository,
    /// never from a snapshot taken when the trigger was installed. Nothing is posted when
    /// the guild no longer has a schedule or the schedule was replaced after this trigger
    /// was installed. The rotation only advances when the reminder was actually posted.
    ///
    /// # Arguments
    /// - `guild_id` - Guild whose schedule fired
    /// - `revision` - Schedule revision the trigger was installed for
    /// - `weekday` - Day the trigger is installed for, used in the reminder header
    ///
    /// # Returns
    /// - `FireOutcome::Posted` - Reminder posted and rotation advanced
    /// - `FireOutcome::Skipped` - Nothing posted, rotation unchanged
    pub async fn fire(&self, guild_id: u64, revision: u64, weekday: Weekday) -> FireOutcome {
        let lock = self.guild_lock(guild_id).await;
        let _guard = lock.lock().await;

        let Some(schedule) = self.repo.get(guild_id).await else {
            tracing::warn!(
                "Chore trigger fired for guild {} without a schedule, skipping",
                guild_id
            );
            return FireOutcome::Skipped;
        };

        if schedule.revision != revision {
            tracing::debug!(
                "Ignoring stale chore trigger for guild {} (revision {}, current {})",
                guild_id,
                revision,
                schedule.revision
            );
            return FireOutcome::Skipped;
        }

        let assignments = rotation::assign(
            &schedule.people,
            &schedule.chores,
            schedule.rotation_index,
        );
        let content = format!(
            "🧹 Weekly chores for {}!\n{}",
            weekday_name(weekday),
            rotation::render(&assignments)
        );

        if let Err(e) = self.messenger.send(schedule.channel_id, &content).await {
            tracing::warn!(
                "Failed to post chore reminder to channel {} for guild {}: {}",
                schedule.channel_id,
                guild_id,
                e
            );
            return FireOutcome::Skipped;
        }

        let next_index = rotation::next_index(schedule.rotation_index, schedule.people.len());
        self.repo
            .advance_rotation(guild_id, revision, schedule.rotation_index, next_index)
            .await;

        tracing::info!(
            "Posted chore reminder for guild {} to channel {}, rotation {} -> {}",
            guild_id,
            schedule.channel_id,
            schedule.rotation_index,
            next_index
        );

        FireOutcome::Posted
    }

    /// Text announcing a new schedule in its destination channel
    pub fn announcement(schedule: &ChoreSchedule) -> String {
        format!(
            "🧹 Weekly chores have been scheduled! ({} at {} {})",
            schedule.describe_days(),
            schedule.time,
            schedule.timezone.name()
        )
    }

    /// Lock serializing schedule changes and firings of one guild
    ///
    /// Entries are never removed: a waiter may still hold the old lock, and replacing it
    /// would let two callers for the same guild run at once.
    async fn guild_lock(&self, guild_id: u64) -> Arc<Mutex<()>> {
        self.guild_locks
            .lock()
            .await
            .entry(guild_id)
            .or_default()
            .clone()
    }

    async fn install_trigger(
        &self,
        schedule: &ChoreSchedule,
        weekday: Weekday,
    ) -> Result<TriggerHandle, AppError> {
        let spec = TriggerSpec {
            weekday,
            hour: schedule.time.hour,
            minute: schedule.time.minute,
            timezone: schedule.timezone,
        };

        let service = self.clone();
        let guild_id = schedule.guild_id;
        let revision = schedule.revision;
        let callback: TriggerCallback = Arc::new(move || -> TriggerFuture {
            let service = service.clone();
            Box::pin(async move {
                service.fire(guild_id, revision, weekday).await;
            })
        });

        self.engine.schedule(spec, callback).await
    }

    async fn cancel_triggers(&self, schedule: &ChoreSchedule) {
        for handle in &schedule.triggers {
            if let Err(e) = self.engine.cancel(*handle).await {
                tracing::error!(
                    "Failed to cancel chore trigger {:?} for guild {}: {}",
                    handle,
                    schedule.guild_id,
                    e
                );
            }
        }
    }
}
