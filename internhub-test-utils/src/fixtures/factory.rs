//! Factory functions for dashboard records.
//!
//! Pure constructors with standard test values. Dates are fixed so that sorting and
//! formatting assertions stay stable.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use internhub::model::{
    applicant::{Applicant, ApplicantStatus},
    company_offer::{CompanyOffer, CompanyOfferStatus},
    offer::{Modality, Offer, OfferStatus},
    report::{Report, ReportFormat, ReportType},
    user::{User, UserStatus, UserType},
};

/// Timestamp every fixture is created at: 2025-09-01 08:00 UTC.
pub fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 1, 8, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn created_date() -> NaiveDate {
    created_at().date_naive()
}

/// Create a mock user.
///
/// # Arguments
/// - `id` - Record id, also used in the email address
/// - `name` - Display name
/// - `user_type` - Account type
/// - `status` - Account status
pub fn user(id: u64, name: &str, user_type: UserType, status: UserStatus) -> User {
    User {
        id,
        name: name.to_string(),
        email: format!("user{}@example.com", id),
        user_type,
        status,
        created_at: created_at(),
        last_login: None,
    }
}

/// Create a mock offer submitted by `company`.
pub fn offer(id: u64, company: &str, status: OfferStatus) -> Offer {
    Offer {
        id,
        title: format!("Offer {}", id),
        company: company.to_string(),
        description: "Six month internship in the data team".to_string(),
        requirements: "Python, SQL".to_string(),
        salary: 1_500_000,
        duration: 6,
        modality: Modality::Hybrid,
        location: "Medellín, Colombia".to_string(),
        status,
        applications: 0,
        created_at: created_at(),
        rejection_reason: match status {
            OfferStatus::Rejected => Some("Incomplete description".to_string()),
            _ => None,
        },
    }
}

/// `count` offers whose first `pending` entries are pending and the rest approved.
pub fn offers(count: u64, pending: u64) -> Vec<Offer> {
    (1..=count)
        .map(|id| {
            let status = if id <= pending {
                OfferStatus::Pending
            } else {
                OfferStatus::Approved
            };
            offer(id, "Data Corp", status)
        })
        .collect()
}

pub fn report(id: u64, report_type: ReportType, format: ReportFormat) -> Report {
    Report {
        id,
        name: format!("{} Report (2025-08-01 - 2025-08-31)", report_type.label()),
        report_type,
        format,
        created_at: created_at(),
        size: 2_048_000,
    }
}

pub fn company_offer(id: u64, status: CompanyOfferStatus) -> CompanyOffer {
    CompanyOffer {
        id,
        title: format!("Company offer {}", id),
        description: "Frontend developer with React experience".to_string(),
        area: "Technology".to_string(),
        requirements: "React, TypeScript".to_string(),
        status,
        applicants: 0,
        vacancies: 2,
        duration: 6,
        modality: Modality::Remote,
        published_date: match status {
            CompanyOfferStatus::Draft => None,
            _ => Some(created_date()),
        },
        created_date: created_date(),
    }
}

/// Create a mock applicant to offer `offer_id`.
pub fn applicant(id: u64, name: &str, offer_id: u64, status: ApplicantStatus) -> Applicant {
    Applicant {
        id,
        name: name.to_string(),
        email: format!("applicant{}@example.com", id),
        phone: "+57 300 000 0000".to_string(),
        offer_id,
        offer_title: format!("Company offer {}", offer_id),
        program: "Systems Engineering".to_string(),
        semester: 8,
        status,
        application_date: created_date(),
        cv: None,
        notes: String::new(),
    }
}
