use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        backend::Backend,
        components::{ConfirmHost, Layout, LoaderOverlay, ToastHost},
        router::Nav,
        state::Ui,
    },
    config::{Config, Panel},
};

/// Root component. Builds the panel's services once and provides them through context.
#[component]
pub fn App() -> Element {
    let config = use_context_provider(load_config);
    let panel = use_hook(|| config.panel_for_path(&location_path()));

    use_context_provider(|| {
        tracing::info!("Starting {:?} panel with {:?} data", panel, config.data_source);
        Backend::from_config(&config, panel)
    });
    use_context_provider(Ui::new);
    let nav = use_context_provider(|| Nav::new(panel));

    use_future(move || nav.follow_browser_history());

    let title = match panel {
        Panel::Admin => "InternHub Administration",
        Panel::Company => "InternHub Company",
    };

    rsx! {
        Title { "{title}" }
        Meta {
            name: "description",
            content: "Internship management dashboards",
        }
        Layout {}
        ToastHost {}
        ConfirmHost {}
        LoaderOverlay {}
    }
}

fn load_config() -> Config {
    match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration, using defaults: {}", e);
            Config::default()
        }
    }
}

#[cfg(feature = "web")]
fn location_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[cfg(not(feature = "web"))]
fn location_path() -> String {
    "/".to_string()
}
