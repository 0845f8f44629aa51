use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::export::Download;

/// Hands `download` to the browser as a file save.
pub fn save_download(download: &Download) {
    // serde_json produces a valid JS string literal
    let (Ok(href), Ok(name)) = (
        serde_json::to_string(&download.data_url()),
        serde_json::to_string(&download.filename),
    ) else {
        tracing::error!("Failed to encode download {}", download.filename);
        return;
    };

    tracing::debug!(
        "Saving {} ({} bytes)",
        download.filename,
        download.bytes.len()
    );

    let _ = document::eval(&format!(
        r#"
        const link = document.createElement("a");
        link.href = {href};
        link.download = {name};
        document.body.appendChild(link);
        link.click();
        link.remove();
        "#,
    ));
}
