use serde::{Deserialize, Serialize};

/// Error body returned by the backend for failed requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub message: String,
}

/// Paginated list envelope used by the REST backend.
///
/// List endpoints answer either with a bare array or with this envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Page { count: u64, results: Vec<T> },
    Plain(Vec<T>),
}

impl<T> ListResponse<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Page { results, .. } => results,
            Self::Plain(items) => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_paginated_lists() {
        let plain: ListResponse<u32> = serde_json::from_str("[1, 2, 3]").unwrap();
        let page: ListResponse<u32> =
            serde_json::from_str(r#"{"count": 40, "results": [4, 5]}"#).unwrap();

        assert_eq!(plain.into_items(), vec![1, 2, 3]);
        assert_eq!(page.into_items(), vec![4, 5]);
    }
}
