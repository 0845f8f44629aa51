use thiserror::Error;

/// Errors raised by repositories independently of the transport.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("{entity} {id} was not found")]
    NotFound { entity: &'static str, id: u64 },
}
