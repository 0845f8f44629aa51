use dioxus::prelude::*;

use crate::client::state::use_ui;

#[component]
pub fn LoaderOverlay() -> Element {
    let ui = use_ui();

    if !ui.loader.read().is_visible() {
        return rsx!();
    }

    rsx!(
        div { class: "fixed inset-0 z-40 flex items-center justify-center bg-base-100/60",
            span { class: "loading loading-spinner loading-lg" }
        }
    )
}
