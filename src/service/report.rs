use chrono::{Datelike, Months, NaiveDate};

use crate::{
    error::validation::ValidationError,
    model::report::{ReportFormat, ReportRequest, ReportType},
    util::time::parse_date,
};

/// Raw values of the report generation form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportForm {
    pub report_type: String,
    pub start_date: String,
    pub end_date: String,
    pub format: String,
}

pub fn validate_report(form: &ReportForm) -> Result<ReportRequest, ValidationError> {
    let report_type =
        ReportType::parse(form.report_type.trim()).ok_or(ValidationError::Required("report type"))?;

    if form.start_date.trim().is_empty() {
        return Err(ValidationError::Required("start date"));
    }
    let start_date = parse_date(&form.start_date).ok_or(ValidationError::InvalidDate("start"))?;

    if form.end_date.trim().is_empty() {
        return Err(ValidationError::Required("end date"));
    }
    let end_date = parse_date(&form.end_date).ok_or(ValidationError::InvalidDate("end"))?;

    if start_date > end_date {
        return Err(ValidationError::DateRange);
    }

    let format = ReportFormat::parse(form.format.trim()).unwrap_or(ReportFormat::Pdf);

    Ok(ReportRequest {
        report_type,
        start_date,
        end_date,
        format,
    })
}

/// PDF report covering the whole calendar month before `today`.
pub fn quick_report(report_type: ReportType, today: NaiveDate) -> ReportRequest {
    let this_month = today.with_day(1).unwrap_or(today);
    let start_date = this_month
        .checked_sub_months(Months::new(1))
        .unwrap_or(this_month);
    let end_date = this_month.pred_opt().unwrap_or(this_month);

    ReportRequest {
        report_type,
        start_date,
        end_date,
        format: ReportFormat::Pdf,
    }
}
