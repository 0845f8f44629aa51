use super::*;
use crate::model::{applicant::ApplicantStatus, company_offer::CompanyOfferStatus};

fn draft(status: CompanyOfferStatus) -> CompanyOfferDraft {
    CompanyOfferDraft {
        title: "QA Automation Intern".to_string(),
        description: "Write end-to-end tests for the web platform".to_string(),
        area: "Technology".to_string(),
        requirements: "Basic programming".to_string(),
        vacancies: 2,
        duration: 6,
        modality: Modality::Remote,
        status,
    }
}

/// Expected: a draft has no published date, a published offer has one
#[tokio::test]
async fn create_sets_published_date_only_when_active() {
    let backend = MemoryBackend::seeded(1);

    let saved = backend
        .create_company_offer(&draft(CompanyOfferStatus::Draft))
        .await
        .unwrap();
    let published = backend
        .create_company_offer(&draft(CompanyOfferStatus::Active))
        .await
        .unwrap();

    assert_eq!(saved.id, 5);
    assert_eq!(saved.published_date, None);
    assert_eq!(published.id, 6);
    assert!(published.published_date.is_some());
    assert_eq!(published.applicants, 0);
}

/// Expected: publishing a draft fills in the published date
#[tokio::test]
async fn publishing_draft_sets_published_date() {
    let backend = MemoryBackend::seeded(1);

    let offer = backend
        .set_company_offer_status(3, CompanyOfferStatus::Active)
        .await
        .unwrap();

    assert_eq!(offer.status, CompanyOfferStatus::Active);
    assert!(offer.published_date.is_some());
}

/// Expected: closing keeps the original published date
#[tokio::test]
async fn closing_keeps_published_date() {
    let backend = MemoryBackend::seeded(1);
    let before = backend.get_company_offer(1).await.unwrap();

    let closed = backend
        .set_company_offer_status(1, CompanyOfferStatus::Closed)
        .await
        .unwrap();

    assert_eq!(closed.status, CompanyOfferStatus::Closed);
    assert_eq!(closed.published_date, before.published_date);
}

/// Expected: editing keeps the applicant count
#[tokio::test]
async fn update_keeps_applicant_count() {
    let backend = MemoryBackend::seeded(1);

    let updated = backend
        .update_company_offer(1, &draft(CompanyOfferStatus::Active))
        .await
        .unwrap();

    assert_eq!(updated.title, "QA Automation Intern");
    assert_eq!(updated.applicants, 5);
}

/// Expected: applicant status and notes are updated independently
#[tokio::test]
async fn updates_applicant_status_and_notes() {
    let backend = MemoryBackend::seeded(1);

    let reviewing = backend
        .update_applicant(
            1,
            1,
            &ApplicantUpdate::Status {
                status: ApplicantStatus::Reviewing,
            },
        )
        .await
        .unwrap();
    let noted = backend
        .update_applicant(
            1,
            1,
            &ApplicantUpdate::Notes {
                notes: "Strong portfolio".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(reviewing.status, ApplicantStatus::Reviewing);
    assert_eq!(noted.status, ApplicantStatus::Reviewing);
    assert_eq!(noted.notes, "Strong portfolio");
}

/// Expected: the applicant must belong to the given offer
#[tokio::test]
async fn applicant_of_other_offer_is_not_found() {
    let backend = MemoryBackend::seeded(1);

    let result = backend
        .update_applicant(
            2,
            1,
            &ApplicantUpdate::Status {
                status: ApplicantStatus::Accepted,
            },
        )
        .await;

    assert!(result.is_err());
}

/// Expected: the offer's applicants are removed with it, other offers keep theirs
#[tokio::test]
async fn deleting_offer_removes_its_applicants() {
    let backend = MemoryBackend::seeded(1);

    backend.delete_company_offer(1).await.unwrap();

    let applicants = backend.list_applicants().await.unwrap();
    assert_eq!(applicants.len(), 2);
    assert!(applicants.iter().all(|applicant| applicant.offer_id == 2));
    assert!(backend.get_company_offer(1).await.is_err());
}

/// Expected: deleting an unknown offer fails and leaves every applicant in place
#[tokio::test]
async fn deleting_unknown_offer_keeps_applicants() {
    let backend = MemoryBackend::seeded(1);

    assert!(backend.delete_company_offer(99).await.is_err());
    assert_eq!(backend.list_applicants().await.unwrap().len(), 5);
}
