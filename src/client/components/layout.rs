use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBars, FaBriefcase, FaFileLines, FaHouse, FaRightFromBracket, FaUserGraduate, FaUsers,
};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        router::{nav_items, use_nav, NavIcon, View},
        routes::{admin, company},
        util::sign_out,
    },
    config::{Config, Panel},
};

/// Sidebar, top bar and the container the router mounts views into.
#[component]
pub fn Layout() -> Element {
    let nav = use_nav();
    let config = use_context::<Config>();
    let panel = nav.panel();

    let title = match panel {
        Panel::Admin => "InternHub · Administration",
        Panel::Company => "InternHub · Company",
    };

    rsx!(
        div { class: "drawer lg:drawer-open",
            input { id: "sidebar", r#type: "checkbox", class: "drawer-toggle" }
            div { class: "drawer-content flex flex-col min-h-screen",
                div { class: "navbar bg-base-200 sticky top-0 z-10",
                    div { class: "navbar-start gap-2",
                        label { r#for: "sidebar", class: "btn btn-ghost btn-square lg:hidden",
                            Icon { width: 18, height: 18, icon: FaBars }
                        }
                        p { class: "text-xl", "{title}" }
                    }
                    div { class: "navbar-end",
                        button {
                            class: "btn btn-outline btn-sm flex gap-2",
                            onclick: move |_| sign_out(&config, panel),
                            Icon { width: 14, height: 14, icon: FaRightFromBracket }
                            "Sign out"
                        }
                    }
                }
                ViewOutlet {}
            }
            div { class: "drawer-side",
                label { r#for: "sidebar", class: "drawer-overlay" }
                ul { class: "menu bg-base-200 min-h-full w-64 p-4 gap-1",
                    for item in nav_items(panel).iter().copied() {
                        li { key: "{item.path}",
                            a {
                                class: if nav.is_active(item.path) { "menu-active" } else { "" },
                                onclick: move |_| nav.navigate(item.path),
                                NavIconView { icon: item.icon }
                                "{item.label}"
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn NavIconView(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx!(Icon { width: 16, height: 16, icon: FaHouse }),
        NavIcon::Users => rsx!(Icon { width: 16, height: 16, icon: FaUsers }),
        NavIcon::Offers => rsx!(Icon { width: 16, height: 16, icon: FaBriefcase }),
        NavIcon::Reports => rsx!(Icon { width: 16, height: 16, icon: FaFileLines }),
        NavIcon::Applicants => rsx!(Icon { width: 16, height: 16, icon: FaUserGraduate }),
    }
}

/// Renders the mounted view. The generation key rebuilds it on every navigation.
#[component]
fn ViewOutlet() -> Element {
    let nav = use_nav();
    let generation = nav.generation();
    let Some(view) = nav.view() else {
        return rsx!();
    };

    rsx!(
        main { key: "{generation}", class: "p-6 w-full max-w-[1440px]",
            {render_view(view)}
        }
    )
}

fn render_view(view: View) -> Element {
    match view {
        View::AdminDashboard => rsx!(admin::Dashboard {}),
        View::Users => rsx!(admin::Users {}),
        View::Offers => rsx!(admin::Offers {}),
        View::Reports => rsx!(admin::Reports {}),
        View::CompanyDashboard => rsx!(company::Dashboard {}),
        View::CompanyOffers => rsx!(company::Offers {}),
        View::NewCompanyOffer => rsx!(company::OfferForm { offer_id: None }),
        View::EditCompanyOffer(id) => rsx!(company::OfferForm { offer_id: Some(id) }),
        View::CompanyApplicants(offer_id) => rsx!(company::Applicants { offer_id }),
    }
}
