use std::time::Duration;

use chrono::NaiveDate;
use internhub::{
    data::{ApplicantRepository, CompanyOfferRepository, MemoryBackend, OfferRepository},
    error::{api::ApiError, Error},
    listing::ListController,
    model::{
        applicant::{ApplicantStatus, ApplicantUpdate},
        company_offer::CompanyOfferStatus,
        offer::{Modality, Offer, OfferStatus},
    },
    service::company_offer::{validate_company_offer, CompanyOfferForm},
};

use super::*;

/// Tests the review flow an administrator goes through on the offers page.
///
/// Expected: approving a pending offer moves it between the stats buckets
#[tokio::test]
async fn approving_updates_the_listed_stats() -> Result<(), TestError> {
    let backend = MemoryBackend::empty(7).with_offers(factory::offers(12, 5));
    let mut list = ListController::<Offer>::new(10);
    list.replace_all(backend.list_offers().await?);

    let before = list.render().stats;
    let approved = backend.approve_offer(3).await?;
    list.upsert(approved);
    let after = list.render().stats;

    assert_eq!(before.count("pending"), 5);
    assert_eq!(after.count("pending"), 4);
    assert_eq!(after.count("approved"), before.count("approved") + 1);
    assert_eq!(after.total, 12);

    Ok(())
}

/// Tests that a scheduled failure reaches the caller once.
///
/// Expected: Err(Timeout) on the first call, Ok afterwards
#[tokio::test]
async fn scheduled_failure_is_reported_once() -> Result<(), TestError> {
    let backend = MemoryBackend::empty(1)
        .with_offers(factory::offers(2, 2))
        .with_latency(Duration::from_millis(5));
    backend.fail_next(ApiError::Timeout);

    let first = backend.close_offer(1).await;
    let second = backend.list_offers().await?;

    assert_eq!(first, Err(Error::Api(ApiError::Timeout)));
    assert_eq!(second.len(), 2);

    Ok(())
}

/// Tests the company flow from a saved draft to a published offer.
///
/// Expected: the draft has no published date until it is published
#[tokio::test]
async fn draft_then_publish() -> Result<(), TestError> {
    let backend = MemoryBackend::empty(3)
        .with_company_offers(vec![factory::company_offer(1, CompanyOfferStatus::Active)]);
    let form = CompanyOfferForm {
        title: "Backend intern".to_string(),
        description: "Build REST services for the payments team".to_string(),
        area: "Technology".to_string(),
        requirements: "Rust or Go".to_string(),
        vacancies: "2".to_string(),
        duration: "6".to_string(),
        modality: Modality::Hybrid,
    };

    let draft = validate_company_offer(&form, CompanyOfferStatus::Draft).map_err(Error::from)?;
    let saved = backend.create_company_offer(&draft).await?;
    assert_eq!(saved.id, 2);
    assert_eq!(saved.published_date, None);

    let published = backend
        .set_company_offer_status(saved.id, CompanyOfferStatus::Active)
        .await?;
    assert_eq!(published.status, CompanyOfferStatus::Active);
    assert!(published
        .published_date
        .is_some_and(|date| date >= NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()));

    Ok(())
}

/// Tests moving an applicant through the review statuses.
///
/// Expected: each update is visible in the next listing
#[tokio::test]
async fn applicant_review_flow() -> Result<(), TestError> {
    let backend = MemoryBackend::empty(5).with_applicants(vec![
        factory::applicant(1, "Laura Gómez", 1, ApplicantStatus::New),
        factory::applicant(2, "Juan Pérez", 1, ApplicantStatus::New),
    ]);

    backend
        .update_applicant(
            1,
            1,
            &ApplicantUpdate::Status {
                status: ApplicantStatus::Reviewing,
            },
        )
        .await?;
    backend
        .update_applicant(
            1,
            1,
            &ApplicantUpdate::Status {
                status: ApplicantStatus::Accepted,
            },
        )
        .await?;

    let applicants = backend.list_applicants().await?;
    assert_eq!(applicants[0].status, ApplicantStatus::Accepted);
    assert_eq!(applicants[1].status, ApplicantStatus::New);

    Ok(())
}
