//! Error types and user-facing error messages.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors. Since every inbound
//! command must be answered with exactly one reply, `AppError::user_message` maps each
//! error to the text shown to the invoking user while logging anything unexpected.

pub mod config;
pub mod validation;

use thiserror::Error;

use crate::server::error::{config::ConfigError, validation::ValidationError};

/// Generic reply used when an error is not something the user can act on.
const GENERIC_ERROR_MESSAGE: &str = "Something went wrong, please try again.";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion. Validation errors carry their own
/// actionable message, while infrastructure errors are logged and replaced with a
/// generic message before reaching the user.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Invalid command input rejected before any state was mutated.
    ///
    /// The message is shown to the invoking user verbatim.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error raised while installing or removing a trigger.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// I/O error, e.g. failing to bind the liveness endpoint.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error shown to the user as-is.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Converts the error into the message shown to the invoking user.
    ///
    /// Validation and bad request errors are returned verbatim since they describe
    /// what the user needs to fix. All other errors are logged with full details and
    /// replaced by a generic message to avoid leaking implementation details.
    ///
    /// # Returns
    /// - `String` - Message suitable for an interaction reply
    pub fn user_message(&self) -> String {
        match self {
            Self::ValidationErr(err) => format!("❌ {}", err),
            Self::BadRequest(msg) => msg.clone(),
            err => {
                tracing::error!("{}", err);
                GENERIC_ERROR_MESSAGE.to_string()
            }
        }
    }
}
