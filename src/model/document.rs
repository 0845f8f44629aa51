use serde::{Deserialize, Serialize};

use crate::model::user::{User, UserType};

/// A file attached to a user account, such as a CV or a tax registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDocument {
    pub id: u64,
    pub name: String,
    pub kind: String,
    /// Bytes.
    pub size: u64,
}

/// Text rendition returned by `/users/{id}/documents/{doc}/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPreview {
    pub document: UserDocument,
    pub content: String,
}

/// Title of the documents section in the user details modal.
pub fn documents_title(user_type: UserType) -> &'static str {
    match user_type {
        UserType::Student => "Curriculum",
        UserType::Company => "Legal documents",
        UserType::Admin => "Documents",
    }
}

/// Documents every account of `user`'s type is expected to carry.
pub fn expected_documents(user: &User) -> Vec<UserDocument> {
    let owner: Vec<&str> = user.name.split_whitespace().collect();
    let owner = owner.join("_");

    let entries: Vec<(String, &str, u64)> = match user.user_type {
        UserType::Student => vec![
            (format!("CV_{}.pdf", owner), "CV", 245),
            ("Transcript.pdf".to_string(), "Transcript", 180),
        ],
        UserType::Company => vec![
            (format!("Tax_Registration_{}.pdf", owner), "Tax registration", 320),
            ("Chamber_of_Commerce.pdf".to_string(), "Chamber of commerce", 450),
            ("Bank_Certificate.pdf".to_string(), "Bank certificate", 210),
        ],
        UserType::Admin => vec![
            (format!("ID_{}.pdf", owner), "Identification", 190),
            ("Employment_Contract.pdf".to_string(), "Contract", 380),
        ],
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, (name, kind, kilobytes))| UserDocument {
            id: index as u64 + 1,
            name,
            kind: kind.to_string(),
            size: kilobytes * 1024,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::model::user::UserStatus;

    #[test]
    fn companies_carry_three_legal_documents() {
        let user = User {
            id: 3,
            name: "Data Corp 3".to_string(),
            email: "user3@example.com".to_string(),
            user_type: UserType::Company,
            status: UserStatus::Active,
            created_at: Utc::now(),
            last_login: None,
        };

        let documents = expected_documents(&user);

        assert_eq!(documents.len(), 3);
        assert_eq!(documents[0].name, "Tax_Registration_Data_Corp_3.pdf");
        assert_eq!(documents[2].id, 3);
    }
}
