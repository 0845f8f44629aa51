use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    listing::{Record, SortKey},
    model::{offer::Modality, string_enum},
};

/// Publication status of an offer as managed by the company.
///
/// This is a separate lifecycle from [`OfferStatus`](super::offer::OfferStatus) and the two
/// are never converted into each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanyOfferStatus {
    Active,
    Draft,
    Closed,
}

string_enum!(CompanyOfferStatus {
    Active => ("active", "Active"),
    Draft => ("draft", "Draft"),
    Closed => ("closed", "Closed"),
});

impl CompanyOfferStatus {
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Active => "badge-success",
            Self::Draft => "badge-warning",
            Self::Closed => "badge-ghost",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyOffer {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub area: String,
    pub requirements: String,
    pub status: CompanyOfferStatus,
    pub applicants: u32,
    pub vacancies: u32,
    /// Months.
    pub duration: u32,
    pub modality: Modality,
    pub published_date: Option<NaiveDate>,
    pub created_date: NaiveDate,
}

/// Fields edited by the offer form, sent on create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyOfferDraft {
    pub title: String,
    pub description: String,
    pub area: String,
    pub requirements: String,
    pub vacancies: u32,
    pub duration: u32,
    pub modality: Modality,
    pub status: CompanyOfferStatus,
}

impl CompanyOfferDraft {
    pub fn from_offer(offer: &CompanyOffer) -> Self {
        Self {
            title: offer.title.clone(),
            description: offer.description.clone(),
            area: offer.area.clone(),
            requirements: offer.requirements.clone(),
            vacancies: offer.vacancies,
            duration: offer.duration,
            modality: offer.modality,
            status: offer.status,
        }
    }
}

/// Body of the PATCH used to publish or close an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyOfferStatusUpdate {
    pub status: CompanyOfferStatus,
}

/// Counts shown above the company offers table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompanyOfferSummary {
    pub active: usize,
    pub drafts: usize,
    pub closed: usize,
    pub total_applicants: u64,
}

impl CompanyOfferSummary {
    pub fn from_offers<'a>(offers: impl IntoIterator<Item = &'a CompanyOffer>) -> Self {
        offers.into_iter().fold(Self::default(), |mut summary, offer| {
            match offer.status {
                CompanyOfferStatus::Active => summary.active += 1,
                CompanyOfferStatus::Draft => summary.drafts += 1,
                CompanyOfferStatus::Closed => summary.closed += 1,
            }
            summary.total_applicants += offer.applicants as u64;
            summary
        })
    }
}

impl Record for CompanyOffer {
    fn id(&self) -> u64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description, &self.area]
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "status" => Some(self.status.as_str().to_string()),
            "area" => Some(self.area.clone()),
            _ => None,
        }
    }

    fn sort_key(&self, column: &str) -> Option<SortKey> {
        match column {
            "title" => Some(SortKey::text(&self.title)),
            "applicants" => Some(SortKey::Number(self.applicants as i64)),
            "created_date" => Some(SortKey::text(&self.created_date.to_string())),
            _ => None,
        }
    }

    fn stats_bucket(&self) -> Option<&'static str> {
        Some(self.status.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(id: u64, status: CompanyOfferStatus, applicants: u32) -> CompanyOffer {
        CompanyOffer {
            id,
            title: format!("Offer {}", id),
            description: "Frontend developer with React experience".to_string(),
            area: "Technology".to_string(),
            requirements: "React".to_string(),
            status,
            applicants,
            vacancies: 1,
            duration: 6,
            modality: Modality::Hybrid,
            published_date: None,
            created_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
        }
    }

    #[test]
    fn summary_counts_statuses_and_applicants() {
        let offers = vec![
            offer(1, CompanyOfferStatus::Active, 5),
            offer(2, CompanyOfferStatus::Active, 3),
            offer(3, CompanyOfferStatus::Draft, 0),
            offer(4, CompanyOfferStatus::Closed, 4),
        ];

        let summary = CompanyOfferSummary::from_offers(&offers);

        assert_eq!(
            summary,
            CompanyOfferSummary {
                active: 2,
                drafts: 1,
                closed: 1,
                total_applicants: 12
            }
        );
    }

    #[test]
    fn search_covers_description_and_area() {
        let offer = offer(1, CompanyOfferStatus::Draft, 0);

        assert!(offer.search_fields().contains(&"Technology"));
        assert_eq!(offer.field("status").as_deref(), Some("draft"));
    }
}
