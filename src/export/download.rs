use base64::{engine::general_purpose::STANDARD, Engine};

/// A file ready to be handed to the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl Download {
    pub fn new(filename: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn csv(filename: impl Into<String>, content: String) -> Self {
        Self::new(filename, "text/csv;charset=utf-8", content.into_bytes())
    }

    pub fn text(filename: impl Into<String>, content: String) -> Self {
        Self::new(filename, "text/plain;charset=utf-8", content.into_bytes())
    }

    /// `data:` URL the browser can save without an object URL.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

/// Extracts the file name from a `Content-Disposition` header value.
///
/// Returns `None` when there is no non-empty `filename=` parameter.
pub fn filename_from_content_disposition(header: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|part| {
            let (key, value) = part.split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case("filename")
                .then(|| value.trim().replace('"', ""))
        })
        .filter(|name| !name.is_empty())
}
