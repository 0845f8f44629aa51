use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    listing::{Record, SortKey},
    model::string_enum,
};

/// Review status of an offer as seen by the institution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    Pending,
    Approved,
    Rejected,
    Closed,
}

string_enum!(OfferStatus {
    Pending => ("pending", "Pending"),
    Approved => ("approved", "Approved"),
    Rejected => ("rejected", "Rejected"),
    Closed => ("closed", "Closed"),
});

impl OfferStatus {
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Pending => "badge-warning",
            Self::Approved => "badge-success",
            Self::Rejected => "badge-error",
            Self::Closed => "badge-ghost",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    OnSite,
    Remote,
    Hybrid,
}

string_enum!(Modality {
    OnSite => ("on_site", "On-site"),
    Remote => ("remote", "Remote"),
    Hybrid => ("hybrid", "Hybrid"),
});

/// Internship offer published by a company and reviewed by the institution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: u64,
    pub title: String,
    pub company: String,
    pub description: String,
    pub requirements: String,
    /// Monthly stipend.
    pub salary: u64,
    /// Months.
    pub duration: u32,
    pub modality: Modality,
    pub location: String,
    pub status: OfferStatus,
    pub applications: u32,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

/// Body of `/offers/{id}/reject/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectOffer {
    pub reason: String,
}

impl Record for Offer {
    fn id(&self) -> u64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.company]
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "status" => Some(self.status.as_str().to_string()),
            "company" => Some(self.company.clone()),
            "modality" => Some(self.modality.as_str().to_string()),
            _ => None,
        }
    }

    fn sort_key(&self, column: &str) -> Option<SortKey> {
        match column {
            "title" => Some(SortKey::text(&self.title)),
            "company" => Some(SortKey::text(&self.company)),
            "salary" => Some(SortKey::Number(self.salary as i64)),
            "applications" => Some(SortKey::Number(self.applications as i64)),
            "created_at" => Some(SortKey::Date(self.created_at)),
            _ => None,
        }
    }

    fn stats_bucket(&self) -> Option<&'static str> {
        Some(self.status.as_str())
    }
}

/// Distinct company names, sorted, for the company filter.
pub fn companies<'a>(offers: impl IntoIterator<Item = &'a Offer>) -> Vec<String> {
    let mut companies: Vec<String> = offers.into_iter().map(|o| o.company.clone()).collect();
    companies.sort();
    companies.dedup();

    companies
}
