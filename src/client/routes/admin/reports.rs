use chrono::Utc;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        backend::backend,
        components::{EmptyRow, ModalFrame, Page, PaginationBar, SortHeader},
        state::use_ui,
        util::{filter_list, page_list, save_download, sort_list},
    },
    config::Config,
    data::ReportRepository,
    error::Error,
    listing::ListController,
    model::report::{Report, ReportFormat, ReportPreview, ReportRequest, ReportType},
    service::report::{quick_report, validate_report, ReportForm},
    ui::{ConfirmOptions, ModalOptions, ModalState},
    util::{format::format_file_size, time::format_datetime},
};

#[component]
pub fn Reports() -> Element {
    let ui = use_ui();
    let page_size = use_context::<Config>().page_size;
    let mut reports = use_signal(|| ListController::<Report>::new(page_size));
    let mut modal = use_signal(ModalState::<(Report, ReportPreview)>::new);

    use_future(move || async move {
        if let Some(loaded) = ui.run(backend().list_reports()).await {
            reports.write().replace_all(loaded);
        }
    });

    let close = move |_: ()| {
        modal.write().close_current();
    };

    let mut on_generated = move |report: Report| {
        tracing::info!("Generated report {}", report.id);
        ui.success(format!("{} generated", report.name));
        reports.write().insert_front(report);
    };

    let generate_quick = move |report_type: ReportType| {
        spawn(async move {
            let request = quick_report(report_type, Utc::now().date_naive());
            let key = format!("quick-report:{}", report_type.as_str());
            if let Some(report) = ui.run_once(&key, backend().generate_report(&request)).await {
                on_generated(report);
            }
        });
    };

    let preview = move |report: Report| {
        spawn(async move {
            let key = format!("preview-report:{}", report.id);
            if let Some(content) = ui.run_once(&key, backend().preview_report(report.id)).await {
                let title = report.name.clone();
                modal
                    .write()
                    .show_modal(ModalOptions::new(title, (report, content)));
            }
        });
    };

    let download = move |report: Report| {
        spawn(async move {
            let key = format!("download-report:{}", report.id);
            if let Some(file) = ui.run_once(&key, backend().download_report(report.id)).await {
                save_download(&file);
            }
        });
    };

    let delete = move |report: Report| {
        spawn(async move {
            let deleted = ui
                .confirm_once(
                    &delete_key(report.id),
                    format!("{} will be deleted.", report.name),
                    ConfirmOptions::danger("Delete report?", "Delete"),
                    backend().delete_report(report.id),
                )
                .await;

            if deleted.is_some() {
                reports.write().remove(report.id);
                ui.success("Report deleted");
            }
        });
    };

    let view = reports.read().render();
    let sort = reports.read().sort().cloned();
    let type_filter = reports.read().filters().selected("type").to_string();

    let dialog = modal.read().current().cloned().map(|current| {
        let (report, content) = current.content;
        rsx!(
            ModalFrame { title: current.title, on_close: close, wide: true,
                pre { class: "bg-base-200 rounded-box p-4 text-sm whitespace-pre-wrap max-h-96 overflow-y-auto",
                    "{content.content}"
                }
                div { class: "modal-action",
                    button { class: "btn btn-primary", onclick: move |_| download(report.clone()), "Download" }
                }
            }
        )
    });

    rsx!(
        Page { title: "Reports", subtitle: "Generate and download platform reports".to_string(),
            div { class: "grid gap-6 lg:grid-cols-3",
                div { class: "card bg-base-200 lg:col-span-2",
                    div { class: "card-body",
                        h2 { class: "card-title", "Generate report" }
                        ReportGenerator { on_generated: move |report| on_generated(report) }
                    }
                }
                div { class: "card bg-base-200",
                    div { class: "card-body",
                        h2 { class: "card-title", "Quick reports" }
                        p { class: "text-sm opacity-70", "PDF covering the previous month" }
                        div { class: "flex flex-col gap-2",
                            for report_type in ReportType::ALL.iter().copied() {
                                button {
                                    key: "{report_type.as_str()}",
                                    class: "btn btn-outline btn-sm",
                                    disabled: ui.is_pending(&format!("quick-report:{}", report_type.as_str())),
                                    onclick: move |_| generate_quick(report_type),
                                    "{report_type.label()}"
                                }
                            }
                        }
                    }
                }
            }
            div { class: "flex flex-wrap gap-2",
                select {
                    class: "select select-bordered select-sm",
                    value: "{type_filter}",
                    onchange: move |event| filter_list(reports, "type", event.value()),
                    option { value: "all", "All types" }
                    for report_type in ReportType::ALL.iter().copied() {
                        option { key: "{report_type.as_str()}", value: report_type.as_str(), "{report_type.label()}" }
                    }
                }
            }
            div { class: "overflow-x-auto",
                table { class: "table table-zebra",
                    thead {
                        tr {
                            SortHeader { label: "Name", column: "name", sort: sort.clone(), on_sort: move |column| sort_list(reports, column) }
                            th { "Format" }
                            SortHeader { label: "Generated", column: "created_at", sort: sort.clone(), on_sort: move |column| sort_list(reports, column) }
                            SortHeader { label: "Size", column: "size", sort: sort.clone(), on_sort: move |column| sort_list(reports, column) }
                            th {}
                        }
                    }
                    tbody {
                        if view.body.is_empty() {
                            EmptyRow { columns: 5, message: "No reports generated yet" }
                        }
                        for report in view.body.rows().iter().cloned() {
                            ReportRow {
                                key: "{report.id}",
                                deleting: ui.is_pending(&delete_key(report.id)),
                                report,
                                on_preview: preview,
                                on_download: download,
                                on_delete: delete,
                            }
                        }
                    }
                }
            }
            PaginationBar { pagination: view.pagination, on_page: move |page| page_list(reports, page) }
        }
        {dialog}
    )
}

#[component]
fn ReportRow(
    report: Report,
    deleting: bool,
    on_preview: EventHandler<Report>,
    on_download: EventHandler<Report>,
    on_delete: EventHandler<Report>,
) -> Element {
    let previewed = report.clone();
    let downloaded = report.clone();
    let deleted = report.clone();

    rsx!(
        tr {
            td { class: "font-medium", "{report.name}" }
            td { span { class: "badge badge-ghost", "{report.format.label()}" } }
            td { {format_datetime(&report.created_at)} }
            td { {format_file_size(report.size)} }
            td { class: "flex gap-1",
                button { class: "btn btn-ghost btn-xs", onclick: move |_| on_preview.call(previewed.clone()), "Preview" }
                button { class: "btn btn-ghost btn-xs", onclick: move |_| on_download.call(downloaded.clone()), "Download" }
                button {
                    class: "btn btn-ghost btn-xs text-error",
                    disabled: deleting,
                    onclick: move |_| on_delete.call(deleted.clone()),
                    "Delete"
                }
            }
        }
    )
}

fn delete_key(report_id: u64) -> String {
    format!("delete-report:{}", report_id)
}

#[component]
fn ReportGenerator(on_generated: EventHandler<Report>) -> Element {
    let ui = use_ui();
    let mut form = use_signal(|| ReportForm {
        report_type: ReportType::Activity.as_str().to_string(),
        format: ReportFormat::Pdf.as_str().to_string(),
        ..ReportForm::default()
    });

    let submit = move |event: FormEvent| {
        event.prevent_default();
        spawn(async move {
            if let Some(report) = ui.run_once("generate-report", generate(form())).await {
                on_generated.call(report);
            }
        });
    };

    rsx!(
        form { class: "grid gap-3 md:grid-cols-2", onsubmit: submit,
            label { class: "form-control",
                span { class: "label-text", "Type" }
                select {
                    class: "select select-bordered",
                    value: "{form.read().report_type}",
                    onchange: move |event| form.write().report_type = event.value(),
                    for report_type in ReportType::ALL.iter().copied() {
                        option { key: "{report_type.as_str()}", value: report_type.as_str(), "{report_type.label()}" }
                    }
                }
            }
            label { class: "form-control",
                span { class: "label-text", "Format" }
                select {
                    class: "select select-bordered",
                    value: "{form.read().format}",
                    onchange: move |event| form.write().format = event.value(),
                    for format in ReportFormat::ALL.iter().copied() {
                        option { key: "{format.as_str()}", value: format.as_str(), "{format.label()}" }
                    }
                }
            }
            label { class: "form-control",
                span { class: "label-text", "From" }
                input {
                    class: "input input-bordered",
                    r#type: "date",
                    value: "{form.read().start_date}",
                    oninput: move |event| form.write().start_date = event.value(),
                }
            }
            label { class: "form-control",
                span { class: "label-text", "To" }
                input {
                    class: "input input-bordered",
                    r#type: "date",
                    value: "{form.read().end_date}",
                    oninput: move |event| form.write().end_date = event.value(),
                }
            }
            div { class: "md:col-span-2 flex justify-end",
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: ui.is_pending("generate-report"),
                    "Generate"
                }
            }
        }
    )
}

async fn generate(form: ReportForm) -> Result<Report, Error> {
    let request: ReportRequest = validate_report(&form)?;

    backend().generate_report(&request).await
}
