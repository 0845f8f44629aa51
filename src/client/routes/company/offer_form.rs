use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{backend::backend, components::Page, router::use_nav, state::use_ui},
    data::CompanyOfferRepository,
    error::Error,
    model::{
        company_offer::{CompanyOffer, CompanyOfferStatus},
        offer::Modality,
    },
    service::company_offer::{validate_company_offer, CompanyOfferForm},
};

/// Create form when `offer_id` is `None`, edit form otherwise.
#[component]
pub fn OfferForm(offer_id: Option<u64>) -> Element {
    let ui = use_ui();
    let nav = use_nav();
    let mut form = use_signal(CompanyOfferForm::default);
    let mut loaded = use_signal(|| offer_id.is_none());

    use_future(move || async move {
        let Some(id) = offer_id else {
            return;
        };

        match ui.run(backend().get_company_offer(id)).await {
            Some(offer) => {
                form.set(CompanyOfferForm::from_offer(&offer));
                loaded.set(true);
            }
            None => nav.navigate("/offers"),
        }
    });

    let save = move |status: CompanyOfferStatus| {
        spawn(async move {
            let key = match offer_id {
                Some(id) => format!("save-offer:{}", id),
                None => "create-offer".to_string(),
            };
            if let Some(saved) = ui.run_once(&key, save_offer(offer_id, form(), status)).await {
                tracing::info!("Saved offer {} as {}", saved.id, saved.status.as_str());
                let message = match saved.status {
                    CompanyOfferStatus::Draft => format!("{} saved as draft", saved.title),
                    _ => format!("{} published", saved.title),
                };
                ui.success(message);
                nav.navigate("/offers");
            }
        });
    };

    let (title, subtitle) = match offer_id {
        Some(_) => ("Edit offer", "Changes apply as soon as you save"),
        None => ("New offer", "Save it as a draft or publish it right away"),
    };
    let saving = ui.is_pending("create-offer")
        || offer_id.is_some_and(|id| ui.is_pending(&format!("save-offer:{}", id)));

    if !loaded() {
        return rsx!(
            Page { title: title.to_string(), div { class: "skeleton h-96 w-full" } }
        );
    }

    rsx!(
        Page { title: title.to_string(), subtitle: subtitle.to_string(),
            form {
                class: "card bg-base-200",
                onsubmit: move |event| event.prevent_default(),
                div { class: "card-body grid gap-4 md:grid-cols-2",
                    label { class: "form-control md:col-span-2",
                        span { class: "label-text", "Title" }
                        input {
                            class: "input input-bordered",
                            value: "{form.read().title}",
                            oninput: move |event| form.write().title = event.value(),
                        }
                    }
                    label { class: "form-control md:col-span-2",
                        span { class: "label-text", "Description" }
                        textarea {
                            class: "textarea textarea-bordered h-32",
                            value: "{form.read().description}",
                            oninput: move |event| form.write().description = event.value(),
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Area" }
                        input {
                            class: "input input-bordered",
                            value: "{form.read().area}",
                            oninput: move |event| form.write().area = event.value(),
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Modality" }
                        select {
                            class: "select select-bordered",
                            value: form.read().modality.as_str(),
                            onchange: move |event| {
                                if let Some(modality) = Modality::parse(&event.value()) {
                                    form.write().modality = modality;
                                }
                            },
                            for modality in Modality::ALL.iter().copied() {
                                option { key: "{modality.as_str()}", value: modality.as_str(), "{modality.label()}" }
                            }
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Vacancies" }
                        input {
                            class: "input input-bordered",
                            r#type: "number",
                            min: "1",
                            value: "{form.read().vacancies}",
                            oninput: move |event| form.write().vacancies = event.value(),
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Duration (months)" }
                        input {
                            class: "input input-bordered",
                            r#type: "number",
                            min: "1",
                            value: "{form.read().duration}",
                            oninput: move |event| form.write().duration = event.value(),
                        }
                    }
                    label { class: "form-control md:col-span-2",
                        span { class: "label-text", "Requirements" }
                        textarea {
                            class: "textarea textarea-bordered h-24",
                            value: "{form.read().requirements}",
                            oninput: move |event| form.write().requirements = event.value(),
                        }
                    }
                    div { class: "md:col-span-2 flex justify-end gap-2",
                        button { class: "btn btn-ghost", r#type: "button", onclick: move |_| nav.navigate("/offers"), "Cancel" }
                        button {
                            class: "btn btn-outline",
                            r#type: "button",
                            disabled: saving,
                            onclick: move |_| save(CompanyOfferStatus::Draft),
                            "Save draft"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: saving,
                            onclick: move |_| save(CompanyOfferStatus::Active),
                            "Publish"
                        }
                    }
                }
            }
        }
    )
}

async fn save_offer(
    id: Option<u64>,
    form: CompanyOfferForm,
    status: CompanyOfferStatus,
) -> Result<CompanyOffer, Error> {
    let draft = validate_company_offer(&form, status)?;
    let backend = backend();

    match id {
        Some(id) => backend.update_company_offer(id, &draft).await,
        None => backend.create_company_offer(&draft).await,
    }
}
