use chrono::Utc;
use dioxus::prelude::*;

use crate::{
    client::{
        backend::backend,
        components::{Page, StatCard},
        router::use_nav,
        state::use_ui,
    },
    data::{ApplicantRepository, CompanyOfferRepository},
    model::{
        applicant::{Applicant, ApplicantStatus},
        company_offer::{CompanyOffer, CompanyOfferSummary},
        dashboard::Activity,
    },
    util::{format::format_number, time::format_relative_time},
};

#[component]
pub fn Dashboard() -> Element {
    let ui = use_ui();
    let nav = use_nav();
    let mut offers = use_signal(Vec::<CompanyOffer>::new);
    let mut applicants = use_signal(Vec::<Applicant>::new);
    let mut activity = use_signal(Vec::<Activity>::new);

    use_future(move || async move {
        let backend = backend();
        if let Some(loaded) = ui.run(backend.list_company_offers()).await {
            offers.set(loaded);
        }
        if let Some(loaded) = ui.run(backend.list_applicants()).await {
            applicants.set(loaded);
        }
        if let Some(loaded) = ui.run(backend.company_activity()).await {
            activity.set(loaded);
        }
    });

    let summary = CompanyOfferSummary::from_offers(offers.read().iter());
    let new_applications = applicants
        .read()
        .iter()
        .filter(|applicant| applicant.status == ApplicantStatus::New)
        .count();
    let now = Utc::now();

    rsx!(
        Page { title: "Dashboard", subtitle: "Your internship offers at a glance".to_string(),
            div { class: "stats stats-vertical lg:stats-horizontal shadow",
                StatCard { title: "Active offers", value: format_number(summary.active as u64), class: "text-success" }
                StatCard { title: "Drafts", value: format_number(summary.drafts as u64) }
                StatCard { title: "New applications", value: format_number(new_applications as u64), class: "text-info" }
            }
            div { class: "grid gap-6 lg:grid-cols-2",
                div { class: "card bg-base-200",
                    div { class: "card-body",
                        h2 { class: "card-title", "Recent activity" }
                        if activity.read().is_empty() {
                            p { class: "opacity-70", "No recent activity" }
                        }
                        ul { class: "flex flex-col gap-3",
                            for entry in activity() {
                                li { key: "{entry.id}", class: "flex justify-between gap-4",
                                    span { "{entry.description}" }
                                    span { class: "text-sm opacity-70 whitespace-nowrap",
                                        {format_relative_time(&entry.timestamp, now)}
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "card bg-base-200",
                    div { class: "card-body",
                        h2 { class: "card-title", "Quick actions" }
                        div { class: "flex flex-col gap-2",
                            button { class: "btn btn-primary", onclick: move |_| nav.navigate("/offers/new"), "Publish a new offer" }
                            button { class: "btn btn-outline", onclick: move |_| nav.navigate("/applicants"), "Review applicants" }
                            button { class: "btn btn-outline", onclick: move |_| nav.navigate("/offers"), "Manage offers" }
                        }
                    }
                }
            }
        }
    )
}
