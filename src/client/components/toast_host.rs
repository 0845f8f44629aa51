use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

use crate::client::state::use_ui;

#[component]
pub fn ToastHost() -> Element {
    let ui = use_ui();
    let toasts = ui.toasts.read().toasts().to_vec();

    rsx!(
        div { class: "toast toast-top toast-end z-50",
            for toast in toasts {
                div {
                    key: "{toast.id.0}",
                    class: format!("alert {} shadow", toast.level.alert_class()),
                    span { "{toast.message}" }
                    button {
                        class: "btn btn-ghost btn-xs",
                        onclick: move |_| {
                            let mut toasts = ui.toasts;
                            toasts.write().dismiss(toast.id);
                        },
                        Icon { width: 12, height: 12, icon: FaXmark }
                    }
                }
            }
        }
    )
}
