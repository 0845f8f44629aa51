use crate::{error::validation::ValidationError, model::offer::RejectOffer};

/// Builds the reject request. The reason is mandatory.
pub fn validate_rejection(reason: &str) -> Result<RejectOffer, ValidationError> {
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(ValidationError::Required("rejection reason"));
    }

    Ok(RejectOffer {
        reason: reason.to_string(),
    })
}
