//! Domain & parameter models for weekly chore schedules
//!
//! Defines the chore schedule domain model stored per guild, the raw parameters the
//! create command provides, and the assignment pairs produced by the rotation.

use chrono::{
    DateTime, Datelike, Days, Duration, LocalResult, NaiveDateTime, TimeZone, Utc, Weekday,
};
use chrono_tz::Tz;
use serenity::all::ChannelType;
use std::fmt;

use crate::server::{scheduler::TriggerHandle, util::validate::weekday_name};

/// Channel selected as the destination for chore reminders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestinationChannel {
    pub id: u64,
    pub kind: ChannelType,
}

/// Parameters for configuring a guild's weekly chores
///
/// All text fields are the raw option values as typed by the user; they are
/// validated and normalized by the chore schedule service before anything is stored.
#[derive(Debug, Clone)]
pub struct ConfigureChoresParam {
    pub guild_id: u64,
    pub people: String,
    pub chores: String,
    pub days: String,
    pub time: String,
    pub timezone: String,
    pub channel: DestinationChannel,
}

/// Wall-clock time of day in 24-hour form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// The chore schedule domain model
///
/// One schedule exists per guild. `people` and `chores` keep the order they were given
/// in since the order defines the rotation. `rotation_index` is always within
/// `0..people.len()` and is shared by every day of the schedule.
///
/// `revision` identifies this configuration; triggers installed for an older revision
/// never act on a newer one. `triggers` holds exactly one live trigger per entry in `days`.
#[derive(Debug, Clone)]
pub struct ChoreSchedule {
    pub guild_id: u64,
    pub people: Vec<String>,
    pub chores: Vec<String>,
    pub days: Vec<Weekday>,
    pub time: TimeOfDay,
    pub timezone: Tz,
    pub channel_id: u64,
    pub rotation_index: usize,
    pub revision: u64,
    pub triggers: Vec<TriggerHandle>,
}

impl ChoreSchedule {
    /// Human readable list of active days, or "every day" when all seven are active
    pub fn describe_days(&self) -> String {
        if self.days.len() == 7 {
            return "every day".to_string();
        }

        self.days
            .iter()
            .map(|day| weekday_name(*day))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Computes the next instant a reminder will fire strictly after `now`.
    ///
    /// Walks forward day by day in the schedule's time zone and resolves the local time
    /// the same way the cron engine does: a time repeated by a fall-back transition
    /// fires at its first occurrence, and a time skipped by a spring-forward transition
    /// fires at the first valid minute after the gap.
    ///
    /// # Arguments
    /// - `now` - Reference instant
    ///
    /// # Returns
    /// - `Some(DateTime<Utc>)` - Next firing instant
    /// - `None` - No active day produces a valid local time within the next week
    pub fn next_occurrence(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let today = now.with_timezone(&self.timezone).date_naive();

        (0..=7).find_map(|offset| {
            let date = today.checked_add_days(Days::new(offset))?;
            if !self.days.contains(&date.weekday()) {
                return None;
            }

            let naive = date.and_hms_opt(self.time.hour, self.time.minute, 0)?;
            let instant = resolve_local(self.timezone, naive)?.with_timezone(&Utc);

            (instant > now).then_some(instant)
        })
    }
}

/// Longest daylight saving gap searched past a skipped local time
const MAX_GAP_MINUTES: i64 = 120;

fn resolve_local(timezone: Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    match timezone.from_local_datetime(&naive) {
        LocalResult::Single(local) => Some(local),
        LocalResult::Ambiguous(first, _) => Some(first),
        LocalResult::None => (1..=MAX_GAP_MINUTES).find_map(|minutes| {
            let shifted = naive.checked_add_signed(Duration::minutes(minutes))?;
            timezone.from_local_datetime(&shifted).earliest()
        }),
    }
}

/// A single person-to-chore pairing produced by the rotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoreAssignment {
    pub person: String,
    pub chore: String,
}

impl fmt::Display for ChoreAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.person, self.chore)
    }
}

/// Result of a trigger firing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    /// Reminder was posted and the rotation advanced
    Posted,
    /// Nothing was posted and the rotation is unchanged
    Skipped,
}
