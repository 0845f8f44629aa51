use chrono::Utc;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        backend::backend,
        components::{Badge, EmptyRow, ModalFrame, Page, PaginationBar, SortHeader, StatCard},
        state::use_ui,
        util::{filter_list, page_list, save_download, sort_list},
    },
    config::Config,
    data::{ApplicantRepository, CompanyOfferRepository},
    export::{export_filename, to_csv, Download},
    listing::{Filters, ListController},
    model::{
        applicant::{Applicant, ApplicantStatus, ApplicantUpdate},
        company_offer::CompanyOffer,
    },
    ui::{ConfirmKind, ConfirmOptions, ModalOptions, ModalState},
    util::format::format_number,
};

/// Key of the offer filter. Holds the offer id.
const OFFER_FILTER: &str = "offer";

/// All applicants of the company, or only those of `offer_id` when reached from an offer.
#[component]
pub fn Applicants(offer_id: Option<u64>) -> Element {
    let ui = use_ui();
    let page_size = use_context::<Config>().page_size;
    let mut applicants = use_signal(|| {
        let mut list = ListController::<Applicant>::new(page_size);
        if let Some(id) = offer_id {
            list.set_filter(OFFER_FILTER, id.to_string());
        }
        list
    });
    let mut offers = use_signal(Vec::<CompanyOffer>::new);
    let mut modal = use_signal(ModalState::<Applicant>::new);

    use_future(move || async move {
        let backend = backend();
        if let Some(loaded) = ui.run(backend.list_applicants()).await {
            applicants.write().replace_all(loaded);
        }
        if let Some(loaded) = ui.run(backend.list_company_offers()).await {
            offers.set(loaded);
        }
    });

    let close = move |_: ()| {
        modal.write().close_current();
    };

    let mut show_profile = move |applicant: Applicant| {
        let title = applicant.name.clone();
        modal.write().show_modal(ModalOptions::new(title, applicant));
    };

    let mut on_updated = move |updated: Applicant| {
        let reopen = modal
            .read()
            .current()
            .is_some_and(|current| current.content.id == updated.id);
        applicants.write().upsert(updated.clone());
        if reopen {
            show_profile(updated);
        }
    };

    let change_status = move |(applicant, status): (Applicant, ApplicantStatus)| {
        spawn(async move {
            let options = match status {
                ApplicantStatus::Rejected => ConfirmOptions {
                    title: "Reject applicant?".to_string(),
                    confirm_text: "Reject".to_string(),
                    kind: ConfirmKind::Warning,
                    ..ConfirmOptions::default()
                },
                _ => ConfirmOptions::info("Update status?", "Update"),
            };
            let message = format!("{} will be marked as {}.", applicant.name, status.label().to_lowercase());

            let update = ApplicantUpdate::Status { status };
            let backend = backend();
            let request = backend.update_applicant(applicant.offer_id, applicant.id, &update);
            let changed = ui
                .confirm_once(&status_key(applicant.id), message, options, request)
                .await;
            if let Some(updated) = changed {
                tracing::info!("Applicant {} is now {}", updated.id, updated.status.as_str());
                ui.success(format!("{} marked as {}", updated.name, updated.status.label().to_lowercase()));
                on_updated(updated);
            }
        });
    };

    let save_notes = move |(applicant, notes): (Applicant, String)| {
        spawn(async move {
            let update = ApplicantUpdate::Notes { notes };
            let backend = backend();
            let request = backend.update_applicant(applicant.offer_id, applicant.id, &update);
            if let Some(updated) = ui.run_once(&notes_key(applicant.id), request).await {
                ui.success("Notes saved");
                on_updated(updated);
            }
        });
    };

    let export = move |_: MouseEvent| {
        let list = applicants.read();
        let rows = list.filtered();
        if rows.is_empty() {
            ui.warning("There are no applicants to export");
            return;
        }

        let filename = export_filename("applicants", Utc::now().date_naive());
        tracing::info!("Exporting {} applicants to {}", rows.len(), filename);
        save_download(&Download::csv(filename, to_csv(rows)));
        ui.success("Applicants exported");
    };

    let view = applicants.read().render();
    let sort = applicants.read().sort().cloned();
    let offer_filter = applicants.read().filters().selected(OFFER_FILTER).to_string();
    let status_filter = applicants.read().filters().selected("status").to_string();

    let subtitle = match offer_id.and_then(|id| offers.read().iter().find(|o| o.id == id).cloned()) {
        Some(offer) => format!("Applications to {}", offer.title),
        None => "Students who applied to your offers".to_string(),
    };

    let dialog = modal.read().current().cloned().map(|current| {
        let id = current.content.id;
        rsx!(
            ModalFrame { title: current.title, on_close: close, wide: true,
                ApplicantProfile {
                    applicant: current.content,
                    updating_status: ui.is_pending(&status_key(id)),
                    saving_notes: ui.is_pending(&notes_key(id)),
                    on_status: change_status,
                    on_notes: save_notes,
                }
            }
        )
    });

    rsx!(
        Page {
            title: "Applicants",
            subtitle,
            actions: rsx!(
                button { class: "btn btn-outline btn-sm", onclick: export, "Export CSV" }
            ),
            div { class: "stats stats-vertical lg:stats-horizontal shadow",
                StatCard { title: "Total", value: format_number(view.stats.total as u64) }
                for status in ApplicantStatus::ALL.iter().copied() {
                    StatCard {
                        key: "{status.as_str()}",
                        title: status.label().to_string(),
                        value: format_number(view.stats.count(status.as_str()) as u64),
                    }
                }
            }
            div { class: "flex flex-wrap gap-2",
                input {
                    class: "input input-bordered input-sm w-64",
                    r#type: "search",
                    placeholder: "Search by name, email or program",
                    oninput: move |event| filter_list(applicants, Filters::SEARCH, event.value()),
                }
                select {
                    class: "select select-bordered select-sm",
                    value: "{offer_filter}",
                    onchange: move |event| filter_list(applicants, OFFER_FILTER, event.value()),
                    option { value: "all", "All offers" }
                    for offer in offers() {
                        option { key: "{offer.id}", value: "{offer.id}", "{offer.title}" }
                    }
                }
                select {
                    class: "select select-bordered select-sm",
                    value: "{status_filter}",
                    onchange: move |event| filter_list(applicants, "status", event.value()),
                    option { value: "all", "All statuses" }
                    for status in ApplicantStatus::ALL.iter().copied() {
                        option { key: "{status.as_str()}", value: status.as_str(), "{status.label()}" }
                    }
                }
            }
            div { class: "overflow-x-auto",
                table { class: "table table-zebra",
                    thead {
                        tr {
                            SortHeader { label: "Name", column: "name", sort: sort.clone(), on_sort: move |column| sort_list(applicants, column) }
                            SortHeader { label: "Offer", column: "offer", sort: sort.clone(), on_sort: move |column| sort_list(applicants, column) }
                            th { "Program" }
                            SortHeader { label: "Semester", column: "semester", sort: sort.clone(), on_sort: move |column| sort_list(applicants, column) }
                            th { "Status" }
                            SortHeader { label: "Applied", column: "application_date", sort: sort.clone(), on_sort: move |column| sort_list(applicants, column) }
                            th {}
                        }
                    }
                    tbody {
                        if view.body.is_empty() {
                            EmptyRow { columns: 7, message: "No applicants match the filters" }
                        }
                        for applicant in view.body.rows().iter().cloned() {
                            ApplicantRow {
                                key: "{applicant.id}",
                                applicant,
                                on_profile: move |applicant| show_profile(applicant),
                            }
                        }
                    }
                }
            }
            PaginationBar { pagination: view.pagination, on_page: move |page| page_list(applicants, page) }
        }
        {dialog}
    )
}

#[component]
fn ApplicantRow(applicant: Applicant, on_profile: EventHandler<Applicant>) -> Element {
    let profile = applicant.clone();

    rsx!(
        tr {
            td {
                p { class: "font-medium", "{applicant.name}" }
                p { class: "text-xs opacity-70", "{applicant.email}" }
            }
            td { "{applicant.offer_title}" }
            td { "{applicant.program}" }
            td { "{applicant.semester}" }
            td { Badge { class: applicant.status.badge_class(), label: applicant.status.label().to_string() } }
            td { "{applicant.application_date}" }
            td {
                button { class: "btn btn-ghost btn-xs", onclick: move |_| on_profile.call(profile.clone()), "Profile" }
            }
        }
    )
}

#[component]
fn ApplicantProfile(
    applicant: Applicant,
    updating_status: bool,
    saving_notes: bool,
    on_status: EventHandler<(Applicant, ApplicantStatus)>,
    on_notes: EventHandler<(Applicant, String)>,
) -> Element {
    let mut notes = use_signal(|| applicant.notes.clone());
    let mailto = applicant.mailto();
    let noted = applicant.clone();

    rsx!(
        div { class: "flex flex-col gap-4",
            div { class: "flex items-center gap-2",
                Badge { class: applicant.status.badge_class(), label: applicant.status.label().to_string() }
                span { class: "text-sm opacity-70", "Applied on {applicant.application_date}" }
            }
            div { class: "grid grid-cols-2 gap-2 text-sm",
                span { class: "opacity-70", "Email" }
                span { "{applicant.email}" }
                span { class: "opacity-70", "Phone" }
                span { "{applicant.phone}" }
                span { class: "opacity-70", "Offer" }
                span { "{applicant.offer_title}" }
                span { class: "opacity-70", "Program" }
                span { "{applicant.program}, semester {applicant.semester}" }
                if let Some(cv) = &applicant.cv {
                    span { class: "opacity-70", "CV" }
                    a { class: "link link-primary", href: "{cv}", target: "_blank", "Open CV" }
                }
            }
            div { class: "flex flex-wrap gap-2",
                for status in ApplicantStatus::ALL.iter().copied().filter(|status| *status != applicant.status) {
                    StatusButton {
                        key: "{status.as_str()}",
                        applicant: applicant.clone(),
                        status,
                        disabled: updating_status,
                        on_status,
                    }
                }
            }
            label { class: "form-control",
                span { class: "label-text", "Notes" }
                textarea {
                    class: "textarea textarea-bordered h-24",
                    value: "{notes}",
                    oninput: move |event| notes.set(event.value()),
                }
            }
            div { class: "modal-action",
                a { class: "btn btn-outline", href: "{mailto}", "Contact" }
                button {
                    class: "btn btn-primary",
                    disabled: saving_notes,
                    onclick: move |_| on_notes.call((noted.clone(), notes())),
                    "Save notes"
                }
            }
        }
    )
}

#[component]
fn StatusButton(
    applicant: Applicant,
    status: ApplicantStatus,
    disabled: bool,
    on_status: EventHandler<(Applicant, ApplicantStatus)>,
) -> Element {
    let class = match status {
        ApplicantStatus::Accepted => "btn btn-sm btn-success",
        ApplicantStatus::Rejected => "btn btn-sm btn-error btn-outline",
        _ => "btn btn-sm btn-outline",
    };

    rsx!(
        button {
            class,
            disabled,
            onclick: move |_| on_status.call((applicant.clone(), status)),
            "Mark as {status.label().to_lowercase()}"
        }
    )
}

fn status_key(applicant_id: u64) -> String {
    format!("applicant-status:{}", applicant_id)
}

fn notes_key(applicant_id: u64) -> String {
    format!("applicant-notes:{}", applicant_id)
}
