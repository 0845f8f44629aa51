use dioxus::prelude::*;

use crate::{client::state::use_ui, ui::ConfirmOutcome};

/// Renders the most recent pending confirmation.
#[component]
pub fn ConfirmHost() -> Element {
    let ui = use_ui();
    let Some(request) = ui.confirm.read().current().cloned() else {
        return rsx!();
    };

    let id = request.id;
    let resolve = move |outcome: ConfirmOutcome| {
        let mut confirm = ui.confirm;
        confirm.write().resolve(id, outcome);
    };
    let confirm_class = request.options.kind.button_class();

    rsx!(
        div {
            class: "modal modal-open z-50",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    resolve(ConfirmOutcome::Dismissed);
                }
            },
            div { class: "modal-box",
                h3 { class: "font-bold text-lg", "{request.options.title}" }
                p { class: "py-4", "{request.message}" }
                div { class: "modal-action",
                    button {
                        class: "btn",
                        onclick: move |_| resolve(ConfirmOutcome::Cancelled),
                        "{request.options.cancel_text}"
                    }
                    button {
                        class: "btn {confirm_class}",
                        onclick: move |_| resolve(ConfirmOutcome::Confirmed),
                        "{request.options.confirm_text}"
                    }
                }
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| resolve(ConfirmOutcome::Dismissed),
            }
        }
    )
}
