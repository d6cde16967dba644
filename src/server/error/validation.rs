use thiserror::Error;

/// Rejected chore schedule input.
///
/// Each variant corresponds to exactly one violated constraint so the user knows
/// which option to fix. Validation always runs before any schedule state is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Time is not a 24-hour `HH:MM` value.
    #[error("Invalid time '{0}'. Use 24-hour HH:MM format, e.g. 07:30 or 18:00.")]
    InvalidTime(String),

    /// One or more day names are not weekdays.
    #[error(
        "Invalid day(s): {}. Use full weekday names like monday,wednesday or \"every day\".",
        .0.join(", ")
    )]
    InvalidDays(Vec<String>),

    /// No day was provided at all.
    #[error("Please provide at least one day, e.g. monday,thursday or \"every day\".")]
    EmptyDays,

    /// Time zone is not a known IANA identifier.
    #[error("Invalid timezone '{0}'. Use an IANA name such as America/Los_Angeles.")]
    InvalidTimeZone(String),

    /// Destination channel cannot receive text messages.
    #[error("The reminder channel must be a text channel.")]
    NonTextChannel,

    /// People list is empty after trimming.
    #[error("Please provide at least one person.")]
    EmptyPeople,

    /// Chore list is empty after trimming.
    #[error("Please provide at least one chore.")]
    EmptyChores,
}
