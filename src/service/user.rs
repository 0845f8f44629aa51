use crate::{
    error::validation::ValidationError,
    model::user::{NewUser, User, UserStatus, UserType, UserUpdate},
};

/// Raw values of the user create/edit form.
#[derive(Debug, Clone, PartialEq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub user_type: UserType,
    pub status: UserStatus,
    pub password: String,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            user_type: UserType::Student,
            status: UserStatus::Active,
            password: String::new(),
        }
    }
}

impl UserForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            user_type: user.user_type,
            status: user.status,
            password: String::new(),
        }
    }
}

/// Loose address check: a non-empty local part and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.trim().split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

fn validate_common(form: &UserForm) -> Result<(String, String), ValidationError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(ValidationError::Required("name"));
    }

    let email = form.email.trim();
    if email.is_empty() {
        return Err(ValidationError::Required("email"));
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok((name.to_string(), email.to_string()))
}

pub fn validate_new_user(form: &UserForm) -> Result<NewUser, ValidationError> {
    let (name, email) = validate_common(form)?;

    if form.password.is_empty() {
        return Err(ValidationError::Required("password"));
    }

    Ok(NewUser {
        name,
        email,
        user_type: form.user_type,
        status: form.status,
        password: form.password.clone(),
    })
}

/// Validates an edit. A blank password keeps the current one.
pub fn validate_user_update(form: &UserForm) -> Result<UserUpdate, ValidationError> {
    let (name, email) = validate_common(form)?;

    Ok(UserUpdate {
        name,
        email,
        user_type: form.user_type,
        status: form.status,
        password: (!form.password.is_empty()).then(|| form.password.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> UserForm {
        UserForm {
            name: "  Ana Martínez ".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret".to_string(),
            ..UserForm::default()
        }
    }

    #[test]
    fn accepts_a_complete_form() {
        let user = validate_new_user(&form()).unwrap();

        assert_eq!(user.name, "Ana Martínez");
        assert_eq!(user.user_type, UserType::Student);
    }

    #[test]
    fn rejects_missing_fields() {
        let mut missing_name = form();
        missing_name.name = "   ".to_string();
        let mut missing_password = form();
        missing_password.password.clear();

        assert_eq!(
            validate_new_user(&missing_name),
            Err(ValidationError::Required("name"))
        );
        assert_eq!(
            validate_new_user(&missing_password),
            Err(ValidationError::Required("password"))
        );
        assert!(validate_user_update(&missing_password).is_ok());
    }

    #[test]
    fn checks_email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("plain"));

        let mut bad = form();
        bad.email = "ana.example.com".to_string();
        assert_eq!(validate_new_user(&bad), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn blank_password_is_not_sent_on_update() {
        let mut edit = form();
        edit.password.clear();

        assert_eq!(validate_user_update(&edit).unwrap().password, None);
    }
}
