use dioxus_logger::tracing;

use crate::config::{Config, Panel};

/// Clears the stored credentials of `panel` and returns to the login page.
pub fn sign_out(config: &Config, panel: Panel) {
    tracing::info!("Signing out of the {:?} panel", panel);

    #[cfg(feature = "web")]
    {
        use crate::api::{BrowserSession, Session};

        BrowserSession::new(panel.storage_prefix(), config.login_path.clone()).end();
    }

    #[cfg(not(feature = "web"))]
    let _ = config;
}
