use chrono::Utc;
use dioxus::prelude::*;

use crate::{
    client::{
        backend::backend, components::{Page, StatCard}, router::use_nav, state::use_ui,
    },
    data::{DashboardRepository, ReportRepository},
    model::{
        dashboard::{Activity, DashboardStats},
        report::ReportType,
    },
    service::report::quick_report,
    util::{format::format_number, time::format_relative_time},
};

const QUICK_REPORTS: [ReportType; 3] = [
    ReportType::Users,
    ReportType::Offers,
    ReportType::Applications,
];

#[component]
pub fn Dashboard() -> Element {
    let ui = use_ui();
    let nav = use_nav();
    let mut stats = use_signal(|| None::<DashboardStats>);
    let mut activity = use_signal(Vec::<Activity>::new);

    use_future(move || async move {
        let backend = backend();
        if let Some(loaded) = ui.run(backend.dashboard_stats()).await {
            stats.set(Some(loaded));
        }
        if let Some(loaded) = ui.run(backend.recent_activity()).await {
            activity.set(loaded);
        }
    });

    let generate = move |report_type: ReportType| {
        spawn(async move {
            let request = quick_report(report_type, Utc::now().date_naive());
            let key = format!("quick-report:{}", report_type.as_str());

            if let Some(report) = ui.run_once(&key, backend().generate_report(&request)).await {
                ui.success(format!("{} generated", report.name));
                nav.navigate("/reports");
            }
        });
    };

    let now = Utc::now();

    rsx!(
        Page { title: "Dashboard", subtitle: "Overview of the internship platform".to_string(),
            div { class: "stats stats-vertical lg:stats-horizontal shadow",
                if let Some(stats) = stats() {
                    StatCard { title: "Total users", value: format_number(stats.total_users) }
                    StatCard { title: "Pending offers", value: format_number(stats.pending_offers), class: "text-warning" }
                    StatCard { title: "Active internships", value: format_number(stats.active_internships), class: "text-success" }
                } else {
                    div { class: "skeleton h-24 w-full" }
                }
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
                        h2 { class: "card-title", "Quick reports" }
                        p { class: "text-sm opacity-70", "PDF covering the previous month" }
                        div { class: "flex flex-wrap gap-2",
                            for report_type in QUICK_REPORTS {
                                button {
                                    key: "{report_type.as_str()}",
                                    class: "btn btn-outline btn-sm",
                                    disabled: ui.is_pending(&format!("quick-report:{}", report_type.as_str())),
                                    onclick: move |_| generate(report_type),
                                    "{report_type.label()} report"
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
