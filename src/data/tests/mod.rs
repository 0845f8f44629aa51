use chrono::{DateTime, Utc};

use super::*;
use crate::model::{
    offer::{Modality, OfferStatus},
    user::{UserStatus, UserType},
};

mod company;

fn user(id: u64, name: &str, user_type: UserType, status: UserStatus) -> User {
    User {
        id,
        name: name.to_string(),
        email: format!("user{}@example.com", id),
        user_type,
        status,
        created_at: created(),
        last_login: None,
    }
}

fn offer(id: u64, status: OfferStatus) -> Offer {
    Offer {
        id,
        title: format!("Offer {}", id),
        company: "Data Corp".to_string(),
        description: "Internship".to_string(),
        requirements: "None".to_string(),
        salary: 1_500_000,
        duration: 6,
        modality: Modality::Remote,
        location: "Medellín, Colombia".to_string(),
        status,
        applications: 0,
        created_at: created(),
        rejection_reason: None,
    }
}

fn created() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-09-01T08:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}
