use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    listing::{Record, SortKey},
    model::string_enum,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Activity,
    Offers,
    Applications,
    Users,
    Companies,
}

string_enum!(ReportType {
    Activity => ("activity", "Activity"),
    Offers => ("offers", "Offers"),
    Applications => ("applications", "Applications"),
    Users => ("users", "Users"),
    Companies => ("companies", "Companies"),
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Pdf,
    Excel,
    Csv,
}

string_enum!(ReportFormat {
    Pdf => ("pdf", "PDF"),
    Excel => ("excel", "Excel"),
    Csv => ("csv", "CSV"),
});

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Excel => "xlsx",
            Self::Csv => "csv",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Excel => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Csv => "text/csv",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub format: ReportFormat,
    pub created_at: DateTime<Utc>,
    /// Bytes.
    pub size: u64,
}

impl Report {
    /// File name offered when downloading, e.g. `Users_Report_(2024-01-01_-_2024-01-31).pdf`.
    pub fn file_name(&self) -> String {
        let stem: Vec<&str> = self.name.split_whitespace().collect();

        format!("{}.{}", stem.join("_"), self.format.extension())
    }
}

impl Record for Report {
    fn id(&self) -> u64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name]
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "type" => Some(self.report_type.as_str().to_string()),
            "format" => Some(self.format.as_str().to_string()),
            _ => None,
        }
    }

    fn sort_key(&self, column: &str) -> Option<SortKey> {
        match column {
            "name" => Some(SortKey::text(&self.name)),
            "created_at" => Some(SortKey::Date(self.created_at)),
            "size" => Some(SortKey::Number(self.size as i64)),
            _ => None,
        }
    }
}

/// Body of `/reports/generate/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub format: ReportFormat,
}

impl ReportRequest {
    /// Name given to the generated report, e.g. `Users Report (2024-01-01 - 2024-01-31)`.
    pub fn report_name(&self) -> String {
        format!(
            "{} Report ({} - {})",
            self.report_type.label(),
            self.start_date,
            self.end_date
        )
    }
}

/// Text preview returned by `/reports/{id}/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPreview {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_wire_names() {
        let request = ReportRequest {
            report_type: ReportType::Users,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            format: ReportFormat::Pdf,
        };

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["type"], "users");
        assert_eq!(value["start_date"], "2024-01-01");
        assert_eq!(value["format"], "pdf");
        assert_eq!(request.report_name(), "Users Report (2024-01-01 - 2024-01-31)");
    }

    #[test]
    fn file_name_replaces_spaces() {
        let report = Report {
            id: 1,
            name: "Users Report (2024-01-01 - 2024-01-31)".to_string(),
            report_type: ReportType::Users,
            format: ReportFormat::Excel,
            created_at: Utc::now(),
            size: 1024,
        };

        assert_eq!(
            report.file_name(),
            "Users_Report_(2024-01-01_-_2024-01-31).xlsx"
        );
    }
}
