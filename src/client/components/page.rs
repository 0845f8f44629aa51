use dioxus::prelude::*;

#[component]
pub fn Page(
    title: String,
    subtitle: Option<String>,
    actions: Option<Element>,
    class: Option<&'static str>,
    children: Element,
) -> Element {
    let class: &str = if let Some(class) = class { class } else { "" };

    rsx!(
        div {
            class: "flex flex-col gap-6 {class}",
            div { class: "flex flex-wrap items-center justify-between gap-4",
                div {
                    h1 { class: "text-2xl font-semibold", "{title}" }
                    if let Some(subtitle) = subtitle {
                        p { class: "text-sm opacity-70", "{subtitle}" }
                    }
                }
                if let Some(actions) = actions {
                    div { class: "flex gap-2", {actions} }
                }
            }
            {children}
        }
    )
}
