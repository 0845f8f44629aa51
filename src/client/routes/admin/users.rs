use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        backend::backend,
        components::{Badge, EmptyRow, ModalFrame, Page, PaginationBar, SortHeader, StatCard},
        routes::admin::user_modals::{DocumentPreviewBody, UserDetails, UserFormModal},
        state::use_ui,
        util::{filter_list, page_list, save_download, sort_list},
    },
    config::Config,
    data::UserRepository,
    listing::{Filters, ListController},
    model::{
        document::{DocumentPreview, UserDocument},
        user::{User, UserStats, UserStatus, UserType},
    },
    ui::{ConfirmOptions, ModalOptions, ModalState},
    util::{format::format_number, time::format_date},
};

#[derive(Debug, Clone, PartialEq)]
pub enum UserModal {
    /// Create when `None`, edit otherwise.
    Form(Option<User>),
    Details {
        user: User,
        documents: Vec<UserDocument>,
    },
    Document {
        user: User,
        preview: DocumentPreview,
    },
}

#[component]
pub fn Users() -> Element {
    let ui = use_ui();
    let page_size = use_context::<Config>().page_size;
    let mut users = use_signal(|| ListController::<User>::new(page_size));
    let mut modal = use_signal(ModalState::<UserModal>::new);

    use_future(move || async move {
        if let Some(loaded) = ui.run(backend().list_users()).await {
            users.write().replace_all(loaded);
        }
    });

    let close = move |_: ()| {
        modal.write().close_current();
    };

    let mut open_form = move |user: Option<User>| {
        let title = match &user {
            Some(user) => format!("Edit {}", user.name),
            None => "New user".to_string(),
        };
        modal
            .write()
            .show_modal(ModalOptions::new(title, UserModal::Form(user)));
    };

    let on_saved = move |saved: User| {
        let existed = users.read().find(saved.id).is_some();
        if existed {
            ui.success(format!("{} updated", saved.name));
            users.write().upsert(saved);
        } else {
            ui.success(format!("{} created", saved.name));
            users.write().insert_front(saved);
        }
        modal.write().close_current();
    };

    let open_details = move |user: User| {
        spawn(async move {
            let key = format!("user-documents:{}", user.id);
            if let Some(documents) = ui.run_once(&key, backend().user_documents(user.id)).await {
                let title = user.name.clone();
                modal.write().show_modal(ModalOptions::new(
                    title,
                    UserModal::Details { user, documents },
                ));
            }
        });
    };

    let preview_document = move |(user, document): (User, UserDocument)| {
        spawn(async move {
            let key = format!("preview-document:{}:{}", user.id, document.id);
            let backend = backend();
            let request = backend.preview_document(user.id, document.id);
            if let Some(preview) = ui.run_once(&key, request).await {
                let title = preview.document.name.clone();
                modal.write().show_modal(ModalOptions::new(
                    title,
                    UserModal::Document { user, preview },
                ));
            }
        });
    };

    let download_document = move |(user_id, document_id): (u64, u64)| {
        spawn(async move {
            let key = format!("download-document:{}:{}", user_id, document_id);
            let backend = backend();
            let request = backend.download_document(user_id, document_id);
            if let Some(download) = ui.run_once(&key, request).await {
                save_download(&download);
            }
        });
    };

    let delete = move |user: User| {
        spawn(async move {
            let deleted = ui
                .confirm_once(
                    &delete_key(user.id),
                    format!("{} will be removed permanently.", user.name),
                    ConfirmOptions::danger("Delete user?", "Delete"),
                    backend().delete_user(user.id),
                )
                .await;

            if deleted.is_some() {
                tracing::info!("Deleted user {}", user.id);
                users.write().remove(user.id);
                ui.success(format!("{} deleted", user.name));
            }
        });
    };

    let export = move |_: MouseEvent| {
        spawn(async move {
            let filters = users.read().filters().clone();
            if let Some(download) = ui.run_once("export-users", backend().export_users(&filters)).await {
                save_download(&download);
                ui.success("Users exported");
            }
        });
    };

    let view = users.read().render();
    let stats = UserStats::from_users(users.read().filtered());
    let sort = users.read().sort().cloned();
    let type_filter = users.read().filters().selected("type").to_string();
    let status_filter = users.read().filters().selected("status").to_string();

    let dialog = modal.read().current().cloned().map(|current| match current.content {
        UserModal::Form(user) => rsx!(
            ModalFrame { title: current.title, on_close: close,
                UserFormModal { user, on_saved, on_cancel: close }
            }
        ),
        UserModal::Details { user, documents } => rsx!(
            ModalFrame { title: current.title, on_close: close, wide: true,
                UserDetails {
                    user,
                    documents,
                    on_preview: preview_document,
                    on_download: download_document,
                }
            }
        ),
        UserModal::Document { user, preview } => {
            let user_id = user.id;
            let document_id = preview.document.id;
            rsx!(
                ModalFrame { title: current.title, on_close: close, wide: true,
                    DocumentPreviewBody { preview }
                    div { class: "modal-action",
                        button { class: "btn", onclick: move |_| open_details(user.clone()), "Back" }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| download_document((user_id, document_id)),
                            "Download"
                        }
                    }
                }
            )
        }
    });

    rsx!(
        Page {
            title: "Users",
            subtitle: "Students, companies and administrators".to_string(),
            actions: rsx!(
                button {
                    class: "btn btn-outline btn-sm",
                    disabled: ui.is_pending("export-users"),
                    onclick: export,
                    "Export CSV"
                }
                button { class: "btn btn-primary btn-sm", onclick: move |_| open_form(None), "New user" }
            ),
            div { class: "stats stats-vertical lg:stats-horizontal shadow",
                StatCard { title: "Total", value: format_number(stats.total) }
                StatCard { title: "Active", value: format_number(stats.active), class: "text-success" }
                StatCard { title: "Students", value: format_number(stats.students) }
                StatCard { title: "Companies", value: format_number(stats.companies) }
            }
            div { class: "flex flex-wrap gap-2",
                input {
                    class: "input input-bordered input-sm w-64",
                    r#type: "search",
                    placeholder: "Search by name or email",
                    oninput: move |event| filter_list(users, Filters::SEARCH, event.value()),
                }
                select {
                    class: "select select-bordered select-sm",
                    value: "{type_filter}",
                    onchange: move |event| filter_list(users, "type", event.value()),
                    option { value: "all", "All types" }
                    for user_type in UserType::ALL.iter().copied() {
                        option { key: "{user_type.as_str()}", value: user_type.as_str(), "{user_type.label()}" }
                    }
                }
                select {
                    class: "select select-bordered select-sm",
                    value: "{status_filter}",
                    onchange: move |event| filter_list(users, "status", event.value()),
                    option { value: "all", "All statuses" }
                    for status in UserStatus::ALL.iter().copied() {
                        option { key: "{status.as_str()}", value: status.as_str(), "{status.label()}" }
                    }
                }
            }
            div { class: "overflow-x-auto",
                table { class: "table table-zebra",
                    thead {
                        tr {
                            SortHeader { label: "Name", column: "name", sort: sort.clone(), on_sort: move |column| sort_list(users, column) }
                            SortHeader { label: "Email", column: "email", sort: sort.clone(), on_sort: move |column| sort_list(users, column) }
                            SortHeader { label: "Type", column: "type", sort: sort.clone(), on_sort: move |column| sort_list(users, column) }
                            SortHeader { label: "Status", column: "status", sort: sort.clone(), on_sort: move |column| sort_list(users, column) }
                            SortHeader { label: "Registered", column: "created_at", sort: sort.clone(), on_sort: move |column| sort_list(users, column) }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        if view.body.is_empty() {
                            EmptyRow { columns: 6, message: "No users match the filters" }
                        }
                        for user in view.body.rows().iter().cloned() {
                            UserRow {
                                key: "{user.id}",
                                deleting: ui.is_pending(&delete_key(user.id)),
                                user,
                                on_details: open_details,
                                on_edit: move |user| open_form(Some(user)),
                                on_delete: delete,
                            }
                        }
                    }
                }
            }
            PaginationBar { pagination: view.pagination, on_page: move |page| page_list(users, page) }
        }
        {dialog}
    )
}

#[component]
fn UserRow(
    user: User,
    deleting: bool,
    on_details: EventHandler<User>,
    on_edit: EventHandler<User>,
    on_delete: EventHandler<User>,
) -> Element {
    let details = user.clone();
    let edit = user.clone();
    let remove = user.clone();

    rsx!(
        tr {
            td { "{user.name}" }
            td { "{user.email}" }
            td { Badge { class: user.user_type.badge_class(), label: user.user_type.label().to_string() } }
            td { Badge { class: user.status.badge_class(), label: user.status.label().to_string() } }
            td { {format_date(&user.created_at)} }
            td { class: "flex gap-1",
                button { class: "btn btn-ghost btn-xs", onclick: move |_| on_details.call(details.clone()), "Details" }
                button { class: "btn btn-ghost btn-xs", onclick: move |_| on_edit.call(edit.clone()), "Edit" }
                button {
                    class: "btn btn-ghost btn-xs text-error",
                    disabled: deleting,
                    onclick: move |_| on_delete.call(remove.clone()),
                    "Delete"
                }
            }
        }
    )
}

fn delete_key(user_id: u64) -> String {
    format!("delete-user:{}", user_id)
}
