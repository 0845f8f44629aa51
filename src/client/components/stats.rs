use dioxus::prelude::*;

#[component]
pub fn StatCard(title: String, value: String, class: Option<&'static str>) -> Element {
    let class: &str = if let Some(class) = class { class } else { "" };

    rsx!(
        div { class: "stat bg-base-200 rounded-box",
            div { class: "stat-title", "{title}" }
            div { class: "stat-value {class}", "{value}" }
        }
    )
}
