use dioxus::prelude::*;

#[component]
pub fn Badge(class: &'static str, label: String) -> Element {
    rsx!(
        span { class: "badge {class}", "{label}" }
    )
}
