use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors produced by the API gateway.
///
/// Status codes are mapped by [`ApiError::from_status`]. Timeouts get their own variant so the
/// user can tell a slow connection apart from other network failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request exceeded the configured timeout.
    #[error("The request took too long to complete. Check your connection.")]
    Timeout,
    /// The request could not be sent or the connection dropped.
    #[error("Connection error. Please check your internet connection.")]
    Network(String),
    /// 401: stored credentials were cleared and the user is sent back to the login page.
    #[error("Not authorized. Please sign in again.")]
    Unauthorized,
    /// 403
    #[error("You do not have permission to perform this action.")]
    Forbidden,
    /// 404
    #[error("The requested resource was not found.")]
    NotFound,
    /// 500
    #[error("Server error. Please try again later.")]
    Server,
    /// Any other non-2xx status, carrying the JSON body's `message` when present.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// The body of a successful response could not be decoded.
    #[error("Failed to read the server response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Maps a non-success status code to its error.
    ///
    /// Returns `None` for 2xx statuses. For statuses without a dedicated variant the body is
    /// parsed as JSON and its `message` field is used, falling back to `HTTP error <code>`.
    pub fn from_status(status: u16, body: &[u8]) -> Option<Self> {
        match status {
            200..=299 => None,
            401 => Some(Self::Unauthorized),
            403 => Some(Self::Forbidden),
            404 => Some(Self::NotFound),
            500 => Some(Self::Server),
            _ => {
                let message = serde_json::from_slice::<ErrorDto>(body)
                    .ok()
                    .map(|dto| dto.message)
                    .filter(|message| !message.trim().is_empty())
                    .unwrap_or_else(|| format!("HTTP error {}", status));

                Some(Self::Http { status, message })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_statuses_are_not_errors() {
        assert_eq!(ApiError::from_status(200, b""), None);
        assert_eq!(ApiError::from_status(204, b""), None);
    }

    #[test]
    fn maps_dedicated_statuses() {
        assert_eq!(ApiError::from_status(401, b""), Some(ApiError::Unauthorized));
        assert_eq!(ApiError::from_status(403, b""), Some(ApiError::Forbidden));
        assert_eq!(ApiError::from_status(404, b""), Some(ApiError::NotFound));
        assert_eq!(ApiError::from_status(500, b""), Some(ApiError::Server));
    }

    #[test]
    fn uses_json_message_for_other_statuses() {
        let body = br#"{"message": "Offer already approved"}"#;

        assert_eq!(
            ApiError::from_status(409, body),
            Some(ApiError::Http {
                status: 409,
                message: "Offer already approved".to_string()
            })
        );
    }

    #[test]
    fn falls_back_to_generic_message() {
        let err = ApiError::from_status(502, b"<html>Bad gateway</html>").unwrap();
        assert_eq!(err.to_string(), "HTTP error 502");

        let err = ApiError::from_status(422, br#"{"detail": "nope"}"#).unwrap();
        assert_eq!(err.to_string(), "HTTP error 422");
    }
}
