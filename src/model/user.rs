use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    export::csv::CsvRow,
    listing::{Record, SortKey},
    model::string_enum,
    util::time::{format_date, format_datetime},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Student,
    Company,
    Admin,
}

string_enum!(UserType {
    Student => ("student", "Student"),
    Company => ("company", "Company"),
    Admin => ("admin", "Administrator"),
});

impl UserType {
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Student => "badge-info",
            Self::Company => "badge-primary",
            Self::Admin => "badge-secondary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

string_enum!(UserStatus {
    Active => ("active", "Active"),
    Inactive => ("inactive", "Inactive"),
});

impl UserStatus {
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Active => "badge-success",
            Self::Inactive => "badge-ghost",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

/// Body of the user creation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub status: UserStatus,
    pub password: String,
}

/// Body of the user update request. The password is only sent when it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub status: UserStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Aggregate counts returned by `/users/stats/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub total: u64,
    pub active: u64,
    pub inactive: u64,
    pub students: u64,
    pub companies: u64,
    pub admins: u64,
}

impl UserStats {
    pub fn from_users<'a>(users: impl IntoIterator<Item = &'a User>) -> Self {
        let mut stats = Self::default();

        for user in users {
            stats.total += 1;
            match user.status {
                UserStatus::Active => stats.active += 1,
                UserStatus::Inactive => stats.inactive += 1,
            }
            match user.user_type {
                UserType::Student => stats.students += 1,
                UserType::Company => stats.companies += 1,
                UserType::Admin => stats.admins += 1,
            }
        }

        stats
    }
}

impl Record for User {
    fn id(&self) -> u64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "type" => Some(self.user_type.as_str().to_string()),
            "status" => Some(self.status.as_str().to_string()),
            _ => None,
        }
    }

    fn sort_key(&self, column: &str) -> Option<SortKey> {
        match column {
            "id" => Some(SortKey::Number(self.id as i64)),
            "name" => Some(SortKey::text(&self.name)),
            "email" => Some(SortKey::text(&self.email)),
            "type" => Some(SortKey::text(self.user_type.label())),
            "status" => Some(SortKey::text(self.status.label())),
            "created_at" => Some(SortKey::Date(self.created_at)),
            "last_login" => self.last_login.map(SortKey::Date),
            _ => None,
        }
    }

    fn stats_bucket(&self) -> Option<&'static str> {
        Some(self.status.as_str())
    }
}

impl CsvRow for User {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Email", "Type", "Status", "Registered", "Last login"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.user_type.label().to_string(),
            self.status.label().to_string(),
            format_date(&self.created_at),
            self.last_login
                .as_ref()
                .map(format_datetime)
                .unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn user() -> User {
        User {
            id: 7,
            name: "Laura Fernández".to_string(),
            email: "laura@example.com".to_string(),
            user_type: UserType::Student,
            status: UserStatus::Active,
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            last_login: None,
        }
    }

    #[test]
    fn serializes_type_under_its_wire_name() {
        let value = serde_json::to_value(user()).unwrap();

        assert_eq!(value["type"], "student");
        assert_eq!(value["status"], "active");
    }

    #[test]
    fn string_forms_round_trip() {
        for user_type in UserType::ALL {
            assert_eq!(UserType::parse(user_type.as_str()), Some(*user_type));
        }
        assert_eq!(UserStatus::parse("Active"), None);
    }

    #[test]
    fn filter_fields_use_wire_values() {
        let user = user();

        assert_eq!(user.field("type").as_deref(), Some("student"));
        assert_eq!(user.field("status").as_deref(), Some("active"));
        assert_eq!(user.field("company"), None);
    }

    #[test]
    fn stats_count_types_and_statuses() {
        let mut admin = user();
        admin.user_type = UserType::Admin;
        admin.status = UserStatus::Inactive;

        let stats = UserStats::from_users(&[user(), admin]);

        assert_eq!(stats.total, 2);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.admins, 1);
        assert_eq!(stats.students, 1);
    }
}
