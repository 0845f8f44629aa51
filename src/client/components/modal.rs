use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

/// Dialog chrome shared by every modal. Backdrop clicks and the close button call `on_close`.
#[component]
pub fn ModalFrame(
    title: String,
    on_close: EventHandler<()>,
    #[props(default)] wide: bool,
    children: Element,
) -> Element {
    let width = if wide { "max-w-3xl" } else { "" };

    rsx!(
        div {
            class: "modal modal-open",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            div { class: "modal-box {width}",
                div { class: "flex items-center justify-between mb-4",
                    h3 { class: "font-bold text-lg", "{title}" }
                    button {
                        class: "btn btn-ghost btn-sm btn-circle",
                        onclick: move |_| on_close.call(()),
                        Icon { width: 14, height: 14, icon: FaXmark }
                    }
                }
                {children}
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| on_close.call(()),
            }
        }
    )
}
