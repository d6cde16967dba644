//! Validation of chore schedule input.
//!
//! Pure functions with no side effects. The chore schedule service runs all of them
//! before touching any stored state so a rejected request leaves the previous schedule
//! untouched.

use chrono::Weekday;
use chrono_tz::Tz;
use serenity::all::ChannelType;

use crate::server::{error::validation::ValidationError, util::parse::split_csv};

/// Canonical weekday names in calendar order starting on Monday
const WEEKDAYS: [(&str, Weekday); 7] = [
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

/// Inputs that expand to all seven days, compared case-insensitively
const EVERY_DAY_SENTINELS: [&str; 2] = ["every day", "everyday"];

/// Display name of a weekday, e.g. "Monday"
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parses a 24-hour `HH:MM` time.
///
/// Both fields must be exactly two digits, hour `00`-`23` and minute `00`-`59`.
///
/// # Returns
/// - `Ok((hour, minute))` - Valid time
/// - `Err(ValidationError::InvalidTime)` - Anything else, including 12-hour forms
pub fn parse_time(input: &str) -> Result<(u32, u32), ValidationError> {
    let invalid = || ValidationError::InvalidTime(input.to_string());

    let (hour, minute) = input.trim().split_once(':').ok_or_else(invalid)?;
    let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(hour) || !two_digits(minute) {
        return Err(invalid());
    }

    let hour: u32 = hour.parse().map_err(|_| invalid())?;
    let minute: u32 = minute.parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }

    Ok((hour, minute))
}

/// Parses a comma separated list of weekday names, or an "every day" sentinel.
///
/// Names are matched case-insensitively against the seven canonical weekday names.
/// Repeated days are kept once, in first-seen order. The sentinel expands to Monday
/// through Sunday.
///
/// # Returns
/// - `Ok(Vec<Weekday>)` - At least one valid day
/// - `Err(ValidationError::EmptyDays)` - No day was given
/// - `Err(ValidationError::InvalidDays)` - One or more tokens are not weekday names
pub fn parse_days(input: &str) -> Result<Vec<Weekday>, ValidationError> {
    let trimmed = input.trim().to_lowercase();
    if EVERY_DAY_SENTINELS.contains(&trimmed.as_str()) {
        return Ok(WEEKDAYS.iter().map(|(_, day)| *day).collect());
    }

    let tokens: Vec<String> = split_csv(&trimmed);
    if tokens.is_empty() {
        return Err(ValidationError::EmptyDays);
    }

    let mut days = Vec::with_capacity(tokens.len());
    let mut invalid = Vec::new();
    for token in tokens {
        match WEEKDAYS.iter().find(|(name, _)| *name == token) {
            Some((_, day)) if !days.contains(day) => days.push(*day),
            Some(_) => {}
            None => invalid.push(token),
        }
    }

    if !invalid.is_empty() {
        return Err(ValidationError::InvalidDays(invalid));
    }

    Ok(days)
}

/// Resolves an IANA time zone identifier such as `America/Los_Angeles`.
///
/// # Returns
/// - `Ok(Tz)` - Known time zone
/// - `Err(ValidationError::InvalidTimeZone)` - Identifier not in the time zone database
pub fn parse_timezone(input: &str) -> Result<Tz, ValidationError> {
    input
        .trim()
        .parse::<Tz>()
        .map_err(|_| ValidationError::InvalidTimeZone(input.to_string()))
}

/// Checks that a channel can receive text messages from the bot.
///
/// # Returns
/// - `Ok(())` - Text, announcement, or thread channel
/// - `Err(ValidationError::NonTextChannel)` - Voice, stage, category, forum, etc.
pub fn validate_text_channel(kind: ChannelType) -> Result<(), ValidationError> {
    match kind {
        ChannelType::Text
        | ChannelType::News
        | ChannelType::PublicThread
        | ChannelType::PrivateThread
        | ChannelType::NewsThread => Ok(()),
        _ => Err(ValidationError::NonTextChannel),
    }
}
