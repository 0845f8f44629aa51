use thiserror::Error;

/// Client-side field checks run before a request is attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The {0} field is required")]
    Required(&'static str),
    #[error("The {field} must be at least {min} characters long")]
    TooShort { field: &'static str, min: usize },
    #[error("The {0} must be a positive whole number")]
    NotPositive(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid {0} date (YYYY-MM-DD)")]
    InvalidDate(&'static str),
    #[error("The start date must not be after the end date")]
    DateRange,
}
