use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        backend::backend,
        components::{Badge, EmptyRow, ModalFrame, Page, PaginationBar, SortHeader, StatCard},
        state::use_ui,
        util::{filter_list, page_list, sort_list},
    },
    config::Config,
    data::OfferRepository,
    error::Error,
    listing::{Filters, ListController},
    model::offer::{companies, Offer, OfferStatus},
    service::offer::validate_rejection,
    ui::{ConfirmOptions, ModalOptions, ModalState},
    util::{
        format::format_number,
        time::{format_date, format_relative_time},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub enum OfferModal {
    Details(Offer),
    Reject(Offer),
}

/// Review queue for the offers companies submit.
#[component]
pub fn Offers() -> Element {
    let ui = use_ui();
    let page_size = use_context::<Config>().page_size;
    let mut offers = use_signal(|| ListController::<Offer>::new(page_size));
    let mut modal = use_signal(ModalState::<OfferModal>::new);

    use_future(move || async move {
        if let Some(loaded) = ui.run(backend().list_offers()).await {
            offers.write().replace_all(loaded);
        }
    });

    let mut close = move |_: ()| {
        modal.write().close_current();
    };

    let mut show_details = move |offer: Offer| {
        let title = offer.title.clone();
        modal
            .write()
            .show_modal(ModalOptions::new(title, OfferModal::Details(offer)));
    };

    let mut show_reject = move |offer: Offer| {
        let title = format!("Reject {}", offer.title);
        modal
            .write()
            .show_modal(ModalOptions::new(title, OfferModal::Reject(offer)));
    };

    let approve = move |offer: Offer| {
        spawn(async move {
            let key = approve_key(offer.id);
            let approved = ui
                .confirm_once(
                    &key,
                    format!("{} will be visible to students.", offer.title),
                    ConfirmOptions::info("Approve offer?", "Approve"),
                    backend().approve_offer(offer.id),
                )
                .await;

            if let Some(updated) = approved {
                tracing::info!("Approved offer {}", updated.id);
                ui.success(format!("{} approved", updated.title));
                offers.write().upsert(updated);
                modal.write().close_current();
            }
        });
    };

    let close_offer = move |offer: Offer| {
        spawn(async move {
            let key = close_key(offer.id);
            let closed = ui
                .confirm_once(
                    &key,
                    format!("{} will stop receiving applications.", offer.title),
                    ConfirmOptions::default(),
                    backend().close_offer(offer.id),
                )
                .await;

            if let Some(updated) = closed {
                tracing::info!("Closed offer {}", updated.id);
                ui.success(format!("{} closed", updated.title));
                offers.write().upsert(updated);
                modal.write().close_current();
            }
        });
    };

    let on_rejected = move |updated: Offer| {
        tracing::info!("Rejected offer {}", updated.id);
        ui.success(format!("{} rejected", updated.title));
        offers.write().upsert(updated);
        modal.write().close_current();
    };

    let view = offers.read().render();
    let sort = offers.read().sort().cloned();
    let company_names = companies(offers.read().items());
    let status_filter = offers.read().filters().selected("status").to_string();
    let company_filter = offers.read().filters().selected("company").to_string();

    let dialog = modal.read().current().cloned().map(|current| match current.content {
        OfferModal::Details(offer) => {
            let approved = offer.clone();
            let rejected = offer.clone();
            let closed = offer.clone();
            let busy = ui.is_pending(&approve_key(offer.id))
                || ui.is_pending(&reject_key(offer.id))
                || ui.is_pending(&close_key(offer.id));
            rsx!(
                ModalFrame { title: current.title, on_close: close, wide: true,
                    OfferDetails { offer: offer.clone() }
                    div { class: "modal-action",
                        if offer.status == OfferStatus::Pending {
                            button { class: "btn btn-error btn-outline", disabled: busy, onclick: move |_| show_reject(rejected.clone()), "Reject" }
                            button { class: "btn btn-success", disabled: busy, onclick: move |_| approve(approved.clone()), "Approve" }
                        }
                        if offer.status == OfferStatus::Approved {
                            button { class: "btn btn-warning", disabled: busy, onclick: move |_| close_offer(closed.clone()), "Close offer" }
                        }
                        button { class: "btn", onclick: move |_| close(()), "Done" }
                    }
                }
            )
        }
        OfferModal::Reject(offer) => rsx!(
            ModalFrame { title: current.title, on_close: close,
                RejectForm { offer, on_rejected, on_cancel: close }
            }
        ),
    });

    rsx!(
        Page { title: "Offers", subtitle: "Review the internships companies publish".to_string(),
            div { class: "stats stats-vertical lg:stats-horizontal shadow",
                StatCard { title: "Total", value: format_number(view.stats.total as u64) }
                StatCard { title: "Pending", value: format_number(view.stats.count("pending") as u64), class: "text-warning" }
                StatCard { title: "Approved", value: format_number(view.stats.count("approved") as u64), class: "text-success" }
                StatCard { title: "Rejected", value: format_number(view.stats.count("rejected") as u64), class: "text-error" }
            }
            div { class: "flex flex-wrap gap-2",
                input {
                    class: "input input-bordered input-sm w-64",
                    r#type: "search",
                    placeholder: "Search by title or company",
                    oninput: move |event| filter_list(offers, Filters::SEARCH, event.value()),
                }
                select {
                    class: "select select-bordered select-sm",
                    value: "{status_filter}",
                    onchange: move |event| filter_list(offers, "status", event.value()),
                    option { value: "all", "All statuses" }
                    for status in OfferStatus::ALL.iter().copied() {
                        option { key: "{status.as_str()}", value: status.as_str(), "{status.label()}" }
                    }
                }
                select {
                    class: "select select-bordered select-sm",
                    value: "{company_filter}",
                    onchange: move |event| filter_list(offers, "company", event.value()),
                    option { value: "all", "All companies" }
                    for company in company_names {
                        option { key: "{company}", value: "{company}", "{company}" }
                    }
                }
            }
            div { class: "overflow-x-auto",
                table { class: "table table-zebra",
                    thead {
                        tr {
                            SortHeader { label: "Title", column: "title", sort: sort.clone(), on_sort: move |column| sort_list(offers, column) }
                            SortHeader { label: "Company", column: "company", sort: sort.clone(), on_sort: move |column| sort_list(offers, column) }
                            th { "Status" }
                            SortHeader { label: "Applications", column: "applications", sort: sort.clone(), on_sort: move |column| sort_list(offers, column) }
                            SortHeader { label: "Submitted", column: "created_at", sort: sort.clone(), on_sort: move |column| sort_list(offers, column) }
                            th {}
                        }
                    }
                    tbody {
                        if view.body.is_empty() {
                            EmptyRow { columns: 6, message: "No offers match the filters" }
                        }
                        for offer in view.body.rows().iter().cloned() {
                            OfferRow { key: "{offer.id}", offer, on_details: move |offer| show_details(offer) }
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
fn OfferRow(offer: Offer, on_details: EventHandler<Offer>) -> Element {
    let details = offer.clone();

    rsx!(
        tr {
            td { class: "font-medium", "{offer.title}" }
            td { "{offer.company}" }
            td { Badge { class: offer.status.badge_class(), label: offer.status.label().to_string() } }
            td { "{offer.applications}" }
            td { {format_date(&offer.created_at)} }
            td {
                button { class: "btn btn-ghost btn-xs", onclick: move |_| on_details.call(details.clone()), "Details" }
            }
        }
    )
}

#[component]
fn OfferDetails(offer: Offer) -> Element {
    let now = chrono::Utc::now();
    let salary = format_number(offer.salary);

    rsx!(
        div { class: "flex flex-col gap-4",
            div { class: "flex items-center gap-2",
                Badge { class: offer.status.badge_class(), label: offer.status.label().to_string() }
                span { class: "text-sm opacity-70",
                    "{offer.company} · submitted {format_relative_time(&offer.created_at, now)}"
                }
            }
            p { "{offer.description}" }
            div { class: "grid grid-cols-2 gap-2 text-sm",
                span { class: "opacity-70", "Requirements" }
                span { "{offer.requirements}" }
                span { class: "opacity-70", "Monthly stipend" }
                span { "$ {salary}" }
                span { class: "opacity-70", "Duration" }
                span { "{offer.duration} months" }
                span { class: "opacity-70", "Modality" }
                span { "{offer.modality.label()}" }
                span { class: "opacity-70", "Location" }
                span { "{offer.location}" }
                span { class: "opacity-70", "Applications" }
                span { "{offer.applications}" }
            }
            if let Some(reason) = &offer.rejection_reason {
                div { class: "alert alert-error",
                    span { "Rejected: {reason}" }
                }
            }
        }
    )
}

#[component]
fn RejectForm(offer: Offer, on_rejected: EventHandler<Offer>, on_cancel: EventHandler<()>) -> Element {
    let ui = use_ui();
    let offer_id = offer.id;
    let mut reason = use_signal(String::new);
    let pending = ui.is_pending(&reject_key(offer_id));

    let submit = move |event: FormEvent| {
        event.prevent_default();
        spawn(async move {
            let key = reject_key(offer_id);
            if let Some(updated) = ui.run_once(&key, reject(offer_id, reason())).await {
                on_rejected.call(updated);
            }
        });
    };

    rsx!(
        form { class: "flex flex-col gap-3", onsubmit: submit,
            p { class: "text-sm opacity-70", "{offer.company} will see this reason." }
            textarea {
                class: "textarea textarea-bordered h-28",
                placeholder: "Why is this offer rejected?",
                value: "{reason}",
                oninput: move |event| reason.set(event.value()),
            }
            div { class: "modal-action",
                button { class: "btn", r#type: "button", onclick: move |_| on_cancel.call(()), "Cancel" }
                button { class: "btn btn-error", r#type: "submit", disabled: pending, "Reject offer" }
            }
        }
    )
}

fn approve_key(offer_id: u64) -> String {
    format!("approve-offer:{}", offer_id)
}

fn reject_key(offer_id: u64) -> String {
    format!("reject-offer:{}", offer_id)
}

fn close_key(offer_id: u64) -> String {
    format!("close-offer:{}", offer_id)
}

async fn reject(offer_id: u64, reason: String) -> Result<Offer, Error> {
    let rejection = validate_rejection(&reason)?;

    backend().reject_offer(offer_id, &rejection).await
}
