//! Error types for the dashboards.
//!
//! Each domain has its own error enum (gateway, validation, configuration, repository data)
//! and they are aggregated into [`Error`]. Actions never let an error escape to the UI event
//! loop: they catch it and hand it to [`Error::to_notification`], which logs it and converts it
//! into exactly one toast.

pub mod api;
pub mod config;
pub mod data;
pub mod validation;

use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    error::{api::ApiError, config::ConfigError, data::DataError, validation::ValidationError},
    ui::toast::{Notification, ToastLevel},
};

/// Main error type for the dashboards.
///
/// Uses `thiserror`'s `#[from]` so that repository, gateway and validation failures convert
/// with `?` at the call site.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Gateway error (network, timeout, status-code mapping, decoding).
    #[error(transparent)]
    Api(#[from] ApiError),
    /// Client-side field check failed before any request was attempted.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Configuration error (invalid environment value).
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Repository lookup error (unknown record id).
    #[error(transparent)]
    Data(#[from] DataError),
}

impl Error {
    /// Converts the error into the single user-facing notification for the failed action.
    ///
    /// Validation failures become warnings and everything else becomes an error toast.
    /// Gateway and data errors keep their own message. Configuration errors are logged in
    /// full, and the user sees a generic message instead.
    pub fn to_notification(&self) -> Notification {
        match self {
            Self::Validation(err) => {
                tracing::debug!("Validation error: {}", err);

                Notification::new(err.to_string(), ToastLevel::Warning)
            }
            Self::Api(err) => {
                match err {
                    ApiError::Timeout | ApiError::Network(_) => {
                        tracing::warn!("Request failed: {}", err)
                    }
                    _ => tracing::error!("API error: {}", err),
                }

                Notification::new(err.to_string(), ToastLevel::Error)
            }
            Self::Data(err) => {
                tracing::error!("Data error: {}", err);

                Notification::new(err.to_string(), ToastLevel::Error)
            }
            Self::Config(err) => {
                tracing::error!("Configuration error: {}", err);

                Notification::new(
                    "The dashboard is misconfigured, please contact an administrator.",
                    ToastLevel::Error,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_become_warnings() {
        let err = Error::from(ValidationError::TooShort {
            field: "title",
            min: 5,
        });

        let notification = err.to_notification();

        assert_eq!(notification.level, ToastLevel::Warning);
        assert_eq!(
            notification.message,
            "The title must be at least 5 characters long"
        );
    }

    #[test]
    fn timeout_keeps_its_distinct_message() {
        let notification = Error::from(ApiError::Timeout).to_notification();

        assert_eq!(notification.level, ToastLevel::Error);
        assert_eq!(notification.message, ApiError::Timeout.to_string());
        assert_ne!(
            notification.message,
            ApiError::Network("offline".to_string()).to_string()
        );
    }

    #[test]
    fn config_errors_hide_details_from_the_user() {
        let err = Error::from(ConfigError::InvalidEnvValue {
            var: "INTERNHUB_PAGE_SIZE".to_string(),
            reason: "must be greater than zero".to_string(),
        });

        let notification = err.to_notification();

        assert!(!notification.message.contains("INTERNHUB_PAGE_SIZE"));
    }
}
