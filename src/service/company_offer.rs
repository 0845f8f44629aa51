use crate::{
    error::validation::ValidationError,
    model::{
        company_offer::{CompanyOffer, CompanyOfferDraft, CompanyOfferStatus},
        offer::Modality,
    },
};

pub const MIN_TITLE_LEN: usize = 5;
pub const MIN_DESCRIPTION_LEN: usize = 20;

/// Raw values of the company offer form.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyOfferForm {
    pub title: String,
    pub description: String,
    pub area: String,
    pub requirements: String,
    pub vacancies: String,
    pub duration: String,
    pub modality: Modality,
}

impl Default for CompanyOfferForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            area: String::new(),
            requirements: String::new(),
            vacancies: "1".to_string(),
            duration: "6".to_string(),
            modality: Modality::OnSite,
        }
    }
}

impl CompanyOfferForm {
    pub fn from_offer(offer: &CompanyOffer) -> Self {
        Self {
            title: offer.title.clone(),
            description: offer.description.clone(),
            area: offer.area.clone(),
            requirements: offer.requirements.clone(),
            vacancies: offer.vacancies.to_string(),
            duration: offer.duration.to_string(),
            modality: offer.modality,
        }
    }
}

/// Validates the form and stamps it with `status` (draft or published).
pub fn validate_company_offer(
    form: &CompanyOfferForm,
    status: CompanyOfferStatus,
) -> Result<CompanyOfferDraft, ValidationError> {
    let title = form.title.trim();
    if title.chars().count() < MIN_TITLE_LEN {
        return Err(ValidationError::TooShort {
            field: "title",
            min: MIN_TITLE_LEN,
        });
    }

    let description = form.description.trim();
    if description.chars().count() < MIN_DESCRIPTION_LEN {
        return Err(ValidationError::TooShort {
            field: "description",
            min: MIN_DESCRIPTION_LEN,
        });
    }

    let area = form.area.trim();
    if area.is_empty() {
        return Err(ValidationError::Required("area"));
    }

    Ok(CompanyOfferDraft {
        title: title.to_string(),
        description: description.to_string(),
        area: area.to_string(),
        requirements: form.requirements.trim().to_string(),
        vacancies: parse_positive(&form.vacancies, "number of vacancies")?,
        duration: parse_positive(&form.duration, "duration")?,
        modality: form.modality,
        status,
    })
}

fn parse_positive(value: &str, field: &'static str) -> Result<u32, ValidationError> {
    match value.trim().parse::<u32>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(ValidationError::NotPositive(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> CompanyOfferForm {
        CompanyOfferForm {
            title: "Frontend Developer".to_string(),
            description: "Build the student portal with React".to_string(),
            area: "Technology".to_string(),
            requirements: "React, CSS".to_string(),
            ..CompanyOfferForm::default()
        }
    }

    #[test]
    fn accepts_a_valid_form_with_the_requested_status() {
        let draft = validate_company_offer(&form(), CompanyOfferStatus::Draft).unwrap();

        assert_eq!(draft.status, CompanyOfferStatus::Draft);
        assert_eq!(draft.vacancies, 1);
        assert_eq!(draft.duration, 6);
    }

    /// Expected: a 4 character title is too short, a 5 character one passes
    #[test]
    fn title_needs_five_characters_after_trimming() {
        let mut short = form();
        short.title = "  Dev1  ".to_string();
        assert_eq!(
            validate_company_offer(&short, CompanyOfferStatus::Active),
            Err(ValidationError::TooShort {
                field: "title",
                min: 5
            })
        );

        short.title = "Devop".to_string();
        assert!(validate_company_offer(&short, CompanyOfferStatus::Active).is_ok());
    }

    #[test]
    fn description_needs_twenty_characters() {
        let mut short = form();
        short.description = "Too short".to_string();

        assert_eq!(
            validate_company_offer(&short, CompanyOfferStatus::Active),
            Err(ValidationError::TooShort {
                field: "description",
                min: 20
            })
        );
    }

    #[test]
    fn counts_must_be_positive_integers() {
        let mut zero = form();
        zero.vacancies = "0".to_string();
        let mut text = form();
        text.duration = "six".to_string();

        assert_eq!(
            validate_company_offer(&zero, CompanyOfferStatus::Active),
            Err(ValidationError::NotPositive("number of vacancies"))
        );
        assert_eq!(
            validate_company_offer(&text, CompanyOfferStatus::Active),
            Err(ValidationError::NotPositive("duration"))
        );
    }
}
