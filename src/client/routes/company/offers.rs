use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        backend::backend,
        components::{Badge, EmptyRow, ModalFrame, Page, PaginationBar, SortHeader, StatCard},
        router::use_nav,
        state::use_ui,
        util::{filter_list, page_list, sort_list},
    },
    config::Config,
    data::CompanyOfferRepository,
    listing::{Filters, ListController},
    model::company_offer::{CompanyOffer, CompanyOfferStatus, CompanyOfferSummary},
    ui::{ConfirmOptions, ModalOptions, ModalState},
    util::format::format_number,
};

#[component]
pub fn Offers() -> Element {
    let ui = use_ui();
    let nav = use_nav();
    let page_size = use_context::<Config>().page_size;
    let mut offers = use_signal(|| ListController::<CompanyOffer>::new(page_size));
    let mut modal = use_signal(ModalState::<CompanyOffer>::new);

    use_future(move || async move {
        if let Some(loaded) = ui.run(backend().list_company_offers()).await {
            offers.write().replace_all(loaded);
        }
    });

    let close = move |_: ()| {
        modal.write().close_current();
    };

    let mut show_details = move |offer: CompanyOffer| {
        let title = offer.title.clone();
        modal.write().show_modal(ModalOptions::new(title, offer));
    };

    let change_status = move |(offer, status): (CompanyOffer, CompanyOfferStatus)| {
        spawn(async move {
            let (message, options) = match status {
                CompanyOfferStatus::Active => (
                    format!("{} will become visible to students.", offer.title),
                    ConfirmOptions::info("Publish offer?", "Publish"),
                ),
                _ => (
                    format!("{} will stop receiving applications.", offer.title),
                    ConfirmOptions::default(),
                ),
            };

            let backend = backend();
            let request = backend.set_company_offer_status(offer.id, status);
            let changed = ui
                .confirm_once(&status_key(offer.id), message, options, request)
                .await;
            if let Some(updated) = changed {
                tracing::info!("Offer {} is now {}", updated.id, updated.status.as_str());
                ui.success(format!("{} is now {}", updated.title, updated.status.label().to_lowercase()));
                offers.write().upsert(updated);
                modal.write().close_current();
            }
        });
    };

    let delete = move |offer: CompanyOffer| {
        spawn(async move {
            let deleted = ui
                .confirm_once(
                    &delete_key(offer.id),
                    format!("{} and its applications will be removed.", offer.title),
                    ConfirmOptions::danger("Delete offer?", "Delete"),
                    backend().delete_company_offer(offer.id),
                )
                .await;

            if deleted.is_some() {
                offers.write().remove(offer.id);
                modal.write().close_current();
                ui.success(format!("{} deleted", offer.title));
            }
        });
    };

    let edit = move |id: u64| nav.navigate(&format!("/offers/{}/edit", id));
    let view_applicants = move |id: u64| nav.navigate(&format!("/offers/{}/applicants", id));

    let view = offers.read().render();
    let summary = CompanyOfferSummary::from_offers(offers.read().filtered());
    let sort = offers.read().sort().cloned();
    let status_filter = offers.read().filters().selected("status").to_string();

    let dialog = modal.read().current().cloned().map(|current| {
        let offer = current.content;
        let busy = ui.is_pending(&status_key(offer.id)) || ui.is_pending(&delete_key(offer.id));
        rsx!(
            ModalFrame { title: current.title, on_close: close, wide: true,
                CompanyOfferDetails {
                    offer,
                    busy,
                    on_edit: edit,
                    on_view_applicants: view_applicants,
                    on_status: change_status,
                    on_delete: delete,
                }
            }
        )
    });

    rsx!(
        Page {
            title: "My offers",
            subtitle: "Internships your company publishes".to_string(),
            actions: rsx!(
                button { class: "btn btn-primary btn-sm", onclick: move |_| nav.navigate("/offers/new"), "New offer" }
            ),
            div { class: "stats stats-vertical lg:stats-horizontal shadow",
                StatCard { title: "Active", value: format_number(summary.active as u64), class: "text-success" }
                StatCard { title: "Drafts", value: format_number(summary.drafts as u64) }
                StatCard { title: "Closed", value: format_number(summary.closed as u64) }
                StatCard { title: "Applicants", value: format_number(summary.total_applicants), class: "text-info" }
            }
            div { class: "flex flex-wrap gap-2",
                input {
                    class: "input input-bordered input-sm w-64",
                    r#type: "search",
                    placeholder: "Search offers",
                    oninput: move |event| filter_list(offers, Filters::SEARCH, event.value()),
                }
                select {
                    class: "select select-bordered select-sm",
                    value: "{status_filter}",
                    onchange: move |event| filter_list(offers, "status", event.value()),
                    option { value: "all", "All statuses" }
                    for status in CompanyOfferStatus::ALL.iter().copied() {
                        option { key: "{status.as_str()}", value: status.as_str(), "{status.label()}" }
                    }
                }
            }
            div { class: "overflow-x-auto",
                table { class: "table table-zebra",
                    thead {
                        tr {
                            SortHeader { label: "Title", column: "title", sort: sort.clone(), on_sort: move |column| sort_list(offers, column) }
                            th { "Area" }
                            th { "Status" }
                            SortHeader { label: "Applicants", column: "applicants", sort: sort.clone(), on_sort: move |column| sort_list(offers, column) }
                            SortHeader { label: "Created", column: "created_date", sort: sort.clone(), on_sort: move |column| sort_list(offers, column) }
                            th {}
                        }
                    }
                    tbody {
                        if view.body.is_empty() {
                            EmptyRow { columns: 6, message: "No offers match the filters" }
                        }
                        for offer in view.body.rows().iter().cloned() {
                            CompanyOfferRow {
                                key: "{offer.id}",
                                offer,
                                on_details: move |offer| show_details(offer),
                                on_edit: edit,
                            }
                        }
                    }
                }
            }
            PaginationBar { pagination: view.pagination, on_page: move |page| page_list(offers, page) }
        }
        {dialog}
    )
}

#[component]
fn CompanyOfferRow(
    offer: CompanyOffer,
    on_details: EventHandler<CompanyOffer>,
    on_edit: EventHandler<u64>,
) -> Element {
    let id = offer.id;
    let details = offer.clone();

    rsx!(
        tr {
            td { class: "font-medium", "{offer.title}" }
            td { "{offer.area}" }
            td { Badge { class: offer.status.badge_class(), label: offer.status.label().to_string() } }
            td { "{offer.applicants}" }
            td { "{offer.created_date}" }
            td { class: "flex gap-1",
                button { class: "btn btn-ghost btn-xs", onclick: move |_| on_details.call(details.clone()), "Details" }
                button { class: "btn btn-ghost btn-xs", onclick: move |_| on_edit.call(id), "Edit" }
            }
        }
    )
}

#[component]
fn CompanyOfferDetails(
    offer: CompanyOffer,
    busy: bool,
    on_edit: EventHandler<u64>,
    on_view_applicants: EventHandler<u64>,
    on_status: EventHandler<(CompanyOffer, CompanyOfferStatus)>,
    on_delete: EventHandler<CompanyOffer>,
) -> Element {
    let id = offer.id;
    let published = match offer.published_date {
        Some(date) => date.to_string(),
        None => "Not published".to_string(),
    };
    let publish = offer.clone();
    let close = offer.clone();
    let delete = offer.clone();

    rsx!(
        div { class: "flex flex-col gap-4",
            div { class: "flex items-center gap-2",
                Badge { class: offer.status.badge_class(), label: offer.status.label().to_string() }
                span { class: "text-sm opacity-70", "{offer.area} · {offer.modality.label()}" }
            }
            p { "{offer.description}" }
            div { class: "grid grid-cols-2 gap-2 text-sm",
                span { class: "opacity-70", "Requirements" }
                span { "{offer.requirements}" }
                span { class: "opacity-70", "Vacancies" }
                span { "{offer.vacancies}" }
                span { class: "opacity-70", "Duration" }
                span { "{offer.duration} months" }
                span { class: "opacity-70", "Applicants" }
                span { "{offer.applicants}" }
                span { class: "opacity-70", "Published" }
                span { "{published}" }
            }
            div { class: "modal-action flex-wrap",
                button { class: "btn btn-ghost text-error", disabled: busy, onclick: move |_| on_delete.call(delete.clone()), "Delete" }
                if offer.status == CompanyOfferStatus::Draft {
                    button {
                        class: "btn btn-success",
                        disabled: busy,
                        onclick: move |_| on_status.call((publish.clone(), CompanyOfferStatus::Active)),
                        "Publish"
                    }
                }
                if offer.status == CompanyOfferStatus::Active {
                    button {
                        class: "btn btn-warning",
                        disabled: busy,
                        onclick: move |_| on_status.call((close.clone(), CompanyOfferStatus::Closed)),
                        "Close"
                    }
                }
                button { class: "btn", onclick: move |_| on_edit.call(id), "Edit" }
                button { class: "btn btn-primary", onclick: move |_| on_view_applicants.call(id), "View applicants" }
            }
        }
    )
}

fn status_key(offer_id: u64) -> String {
    format!("offer-status:{}", offer_id)
}

fn delete_key(offer_id: u64) -> String {
    format!("delete-offer:{}", offer_id)
}
