use dioxus::prelude::*;

use crate::{
    client::{backend::backend, components::Badge, state::use_ui},
    data::UserRepository,
    error::Error,
    model::{
        document::{documents_title, DocumentPreview, UserDocument},
        user::{User, UserStatus, UserType},
    },
    service::user::{validate_new_user, validate_user_update, UserForm},
    util::{
        format::format_file_size,
        time::{format_date, format_datetime},
    },
};

/// Create form when `user` is `None`, edit form otherwise.
#[component]
pub fn UserFormModal(
    user: Option<User>,
    on_saved: EventHandler<User>,
    on_cancel: EventHandler<()>,
) -> Element {
    let ui = use_ui();
    let editing = user.as_ref().map(|user| user.id);
    let mut form = use_signal(|| user.as_ref().map(UserForm::from_user).unwrap_or_default());

    let key = match editing {
        Some(id) => format!("save-user:{}", id),
        None => "create-user".to_string(),
    };
    let saving = ui.is_pending(&key);

    let submit = move |event: FormEvent| {
        event.prevent_default();
        let key = key.clone();
        spawn(async move {
            if let Some(saved) = ui.run_once(&key, save_user(editing, form())).await {
                on_saved.call(saved);
            }
        });
    };

    let password_hint = if editing.is_some() {
        "Leave blank to keep the current password"
    } else {
        "Required for new accounts"
    };

    rsx!(
        form { class: "flex flex-col gap-3", onsubmit: submit,
            label { class: "form-control",
                span { class: "label-text", "Name" }
                input {
                    class: "input input-bordered",
                    value: "{form.read().name}",
                    oninput: move |event| form.write().name = event.value(),
                }
            }
            label { class: "form-control",
                span { class: "label-text", "Email" }
                input {
                    class: "input input-bordered",
                    r#type: "email",
                    value: "{form.read().email}",
                    oninput: move |event| form.write().email = event.value(),
                }
            }
            div { class: "grid grid-cols-2 gap-3",
                label { class: "form-control",
                    span { class: "label-text", "Type" }
                    select {
                        class: "select select-bordered",
                        value: form.read().user_type.as_str(),
                        onchange: move |event| {
                            if let Some(user_type) = UserType::parse(&event.value()) {
                                form.write().user_type = user_type;
                            }
                        },
                        for user_type in UserType::ALL.iter().copied() {
                            option { key: "{user_type.as_str()}", value: user_type.as_str(), "{user_type.label()}" }
                        }
                    }
                }
                label { class: "form-control",
                    span { class: "label-text", "Status" }
                    select {
                        class: "select select-bordered",
                        value: form.read().status.as_str(),
                        onchange: move |event| {
                            if let Some(status) = UserStatus::parse(&event.value()) {
                                form.write().status = status;
                            }
                        },
                        for status in UserStatus::ALL.iter().copied() {
                            option { key: "{status.as_str()}", value: status.as_str(), "{status.label()}" }
                        }
                    }
                }
            }
            label { class: "form-control",
                span { class: "label-text", "Password" }
                input {
                    class: "input input-bordered",
                    r#type: "password",
                    value: "{form.read().password}",
                    oninput: move |event| form.write().password = event.value(),
                }
                span { class: "label-text-alt opacity-70", "{password_hint}" }
            }
            div { class: "modal-action",
                button { class: "btn", r#type: "button", onclick: move |_| on_cancel.call(()), "Cancel" }
                button { class: "btn btn-primary", r#type: "submit", disabled: saving, "Save" }
            }
        }
    )
}

async fn save_user(id: Option<u64>, form: UserForm) -> Result<User, Error> {
    let backend = backend();

    match id {
        Some(id) => {
            let update = validate_user_update(&form)?;
            backend.update_user(id, &update).await
        }
        None => {
            let new_user = validate_new_user(&form)?;
            backend.create_user(&new_user).await
        }
    }
}

#[component]
pub fn UserDetails(
    user: User,
    documents: Vec<UserDocument>,
    on_preview: EventHandler<(User, UserDocument)>,
    on_download: EventHandler<(u64, u64)>,
) -> Element {
    let user_id = user.id;
    let last_login = match &user.last_login {
        Some(at) => format_datetime(at),
        None => "Never".to_string(),
    };

    rsx!(
        div { class: "flex flex-col gap-4",
            div { class: "grid grid-cols-2 gap-2 text-sm",
                span { class: "opacity-70", "Email" }
                span { "{user.email}" }
                span { class: "opacity-70", "Type" }
                span { Badge { class: user.user_type.badge_class(), label: user.user_type.label().to_string() } }
                span { class: "opacity-70", "Status" }
                span { Badge { class: user.status.badge_class(), label: user.status.label().to_string() } }
                span { class: "opacity-70", "Registered" }
                span { {format_date(&user.created_at)} }
                span { class: "opacity-70", "Last login" }
                span { "{last_login}" }
            }
            h4 { class: "font-semibold", {documents_title(user.user_type)} }
            if documents.is_empty() {
                p { class: "opacity-70", "No documents uploaded" }
            }
            ul { class: "flex flex-col gap-2",
                for document in documents.iter().cloned() {
                    DocumentItem {
                        key: "{document.id}",
                        user: user.clone(),
                        document,
                        on_preview,
                        on_download: move |document_id| on_download.call((user_id, document_id)),
                    }
                }
            }
        }
    )
}

#[component]
fn DocumentItem(
    user: User,
    document: UserDocument,
    on_preview: EventHandler<(User, UserDocument)>,
    on_download: EventHandler<u64>,
) -> Element {
    let document_id = document.id;
    let previewed = (user, document.clone());

    rsx!(
        li { class: "flex items-center justify-between gap-4 bg-base-200 rounded-box p-3",
            div {
                p { class: "font-medium", "{document.name}" }
                p { class: "text-xs opacity-70", "{document.kind} · {format_file_size(document.size)}" }
            }
            div { class: "flex gap-1",
                button {
                    class: "btn btn-ghost btn-xs",
                    onclick: move |_| on_preview.call(previewed.clone()),
                    "Preview"
                }
                button {
                    class: "btn btn-ghost btn-xs",
                    onclick: move |_| on_download.call(document_id),
                    "Download"
                }
            }
        }
    )
}

#[component]
pub fn DocumentPreviewBody(preview: DocumentPreview) -> Element {
    rsx!(
        p { class: "text-xs opacity-70 mb-2",
            "{preview.document.kind} · {format_file_size(preview.document.size)}"
        }
        pre { class: "bg-base-200 rounded-box p-4 text-sm whitespace-pre-wrap max-h-96 overflow-y-auto",
            "{preview.content}"
        }
    )
}
