//! Form handling that runs before any request is made.
//!
//! Each `validate_*` function turns raw form input into the typed request body, or the first
//! [`ValidationError`](crate::error::validation::ValidationError) that blocks submission.

pub mod company_offer;
pub mod offer;
pub mod report;
pub mod user;
