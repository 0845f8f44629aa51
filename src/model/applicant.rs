use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    export::csv::CsvRow,
    listing::{Record, SortKey},
    model::string_enum,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicantStatus {
    New,
    Reviewing,
    Accepted,
    Rejected,
}

string_enum!(ApplicantStatus {
    New => ("new", "New"),
    Reviewing => ("reviewing", "Reviewing"),
    Accepted => ("accepted", "Accepted"),
    Rejected => ("rejected", "Rejected"),
});

impl ApplicantStatus {
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::New => "badge-info",
            Self::Reviewing => "badge-warning",
            Self::Accepted => "badge-success",
            Self::Rejected => "badge-error",
        }
    }
}

/// A student's application to one of the company's offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub offer_id: u64,
    pub offer_title: String,
    pub program: String,
    pub semester: u8,
    pub status: ApplicantStatus,
    pub application_date: NaiveDate,
    #[serde(default)]
    pub cv: Option<String>,
    #[serde(default)]
    pub notes: String,
}

impl Applicant {
    /// `mailto:` link used by the contact action.
    pub fn mailto(&self) -> String {
        let subject = format!("About your application - {}", self.offer_title);
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("subject", &subject)
            .finish()
            // `mailto:` expects percent-encoded spaces rather than `+`
            .replace('+', "%20");

        format!("mailto:{}?{}", self.email, query)
    }
}

/// PATCH body for `/company/offers/{offer}/applicants/{id}/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApplicantUpdate {
    Status { status: ApplicantStatus },
    Notes { notes: String },
}

impl Record for Applicant {
    fn id(&self) -> u64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.offer_title, &self.program]
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "offer" => Some(self.offer_id.to_string()),
            "status" => Some(self.status.as_str().to_string()),
            _ => None,
        }
    }

    fn sort_key(&self, column: &str) -> Option<SortKey> {
        match column {
            "name" => Some(SortKey::text(&self.name)),
            "offer" => Some(SortKey::text(&self.offer_title)),
            "semester" => Some(SortKey::Number(self.semester as i64)),
            "application_date" => Some(SortKey::text(&self.application_date.to_string())),
            _ => None,
        }
    }

    fn stats_bucket(&self) -> Option<&'static str> {
        Some(self.status.as_str())
    }
}

impl CsvRow for Applicant {
    fn headers() -> &'static [&'static str] {
        &[
            "Name", "Email", "Phone", "Offer", "Program", "Semester", "Status", "Date",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.offer_title.clone(),
            self.program.clone(),
            self.semester.to_string(),
            self.status.label().to_string(),
            self.application_date.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_encodes_the_subject() {
        let applicant = Applicant {
            id: 1,
            name: "Juan Pérez".to_string(),
            email: "juan@example.com".to_string(),
            phone: "300-123-4567".to_string(),
            offer_id: 1,
            offer_title: "Web & Mobile".to_string(),
            program: "Systems Engineering".to_string(),
            semester: 8,
            status: ApplicantStatus::New,
            application_date: NaiveDate::from_ymd_opt(2025, 10, 5).unwrap(),
            cv: None,
            notes: String::new(),
        };

        assert_eq!(
            applicant.mailto(),
            "mailto:juan@example.com?subject=About%20your%20application%20-%20Web%20%26%20Mobile"
        );
    }

    #[test]
    fn updates_serialize_as_single_field_patches() {
        let status = serde_json::to_string(&ApplicantUpdate::Status {
            status: ApplicantStatus::Reviewing,
        })
        .unwrap();
        let notes = serde_json::to_string(&ApplicantUpdate::Notes {
            notes: "Strong portfolio".to_string(),
        })
        .unwrap();

        assert_eq!(status, r#"{"status":"reviewing"}"#);
        assert_eq!(notes, r#"{"notes":"Strong portfolio"}"#);
    }
}
