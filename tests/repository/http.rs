use internhub::{
    data::{ApplicantRepository, CompanyOfferRepository, OfferRepository, UserRepository},
    listing::Filters,
    model::{
        applicant::{ApplicantStatus, ApplicantUpdate},
        company_offer::CompanyOfferStatus,
        offer::{OfferStatus, RejectOffer},
    },
};
use mockito::Matcher;
use serde_json::json;

use super::*;

/// Tests that paginated envelopes are unwrapped.
///
/// Expected: Ok with the `results` array
#[tokio::test]
async fn lists_offers_from_paginated_envelope() -> Result<(), TestError> {
    let offers = factory::offers(3, 1);
    let test = TestBuilder::new()
        .with_json_endpoint(
            "GET",
            "/offers/",
            200,
            &json!({"count": 3, "results": offers}),
            1,
        )?
        .build()
        .await?;

    let result = test.backend().list_offers().await?;

    assert_eq!(result, offers);
    test.assert_mocks();

    Ok(())
}

/// Tests that rejecting posts the reason and returns the updated offer.
///
/// Expected: Ok with status rejected and the reason kept
#[tokio::test]
async fn reject_posts_reason() -> Result<(), TestError> {
    let mut rejected = factory::offer(4, "Data Corp", OfferStatus::Rejected);
    rejected.rejection_reason = Some("Salary below the legal minimum".to_string());
    let body = serde_json::to_string(&rejected)?;
    let test = TestBuilder::new()
        .with_mock(move |server| {
            server
                .mock("POST", "/api/v1/offers/4/reject/")
                .match_body(Matcher::Json(json!({"reason": "Salary below the legal minimum"})))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body)
                .create()
        })
        .build()
        .await?;

    let rejection = RejectOffer {
        reason: "Salary below the legal minimum".to_string(),
    };
    let result = test.backend().reject_offer(4, &rejection).await?;

    assert_eq!(result.status, OfferStatus::Rejected);
    assert_eq!(result.rejection_reason, rejected.rejection_reason);
    test.assert_mocks();

    Ok(())
}

/// Tests that the users export forwards active filters and skips `all`.
///
/// Expected: Ok with the server's CSV and file name
#[tokio::test]
async fn export_forwards_filters() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock(|server| {
            server
                .mock("GET", "/api/v1/users/export/")
                .match_query(Matcher::Exact("search=ana&status=active".into()))
                .with_status(200)
                .with_header("content-type", "text/csv")
                .with_header("content-disposition", "attachment; filename=users.csv")
                .with_body("ID,Name\n1,Ana")
                .create()
        })
        .build()
        .await?;

    let mut filters = Filters::default();
    filters.set(Filters::SEARCH, "ana");
    filters.set("type", Filters::ALL);
    filters.set("status", "active");
    let download = test.backend().export_users(&filters).await?;

    assert_eq!(download.filename, "users.csv");
    assert_eq!(download.mime_type, "text/csv");
    test.assert_mocks();

    Ok(())
}

/// Tests that publishing patches only the status.
///
/// Expected: Ok with the offer now active
#[tokio::test]
async fn publishing_patches_status() -> Result<(), TestError> {
    let published = factory::company_offer(3, CompanyOfferStatus::Active);
    let body = serde_json::to_string(&published)?;
    let test = TestBuilder::new()
        .with_mock(move |server| {
            server
                .mock("PATCH", "/api/v1/company/offers/3/")
                .match_body(Matcher::Json(json!({"status": "active"})))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body)
                .create()
        })
        .build()
        .await?;

    let result = test
        .backend()
        .set_company_offer_status(3, CompanyOfferStatus::Active)
        .await?;

    assert_eq!(result.status, CompanyOfferStatus::Active);
    assert!(result.published_date.is_some());
    test.assert_mocks();

    Ok(())
}

/// Tests that applicant updates go to the nested offer endpoint.
///
/// Expected: Ok with the new notes
#[tokio::test]
async fn applicant_notes_use_nested_endpoint() -> Result<(), TestError> {
    let mut updated = factory::applicant(2, "Carlos Ruiz", 1, ApplicantStatus::Reviewing);
    updated.notes = "Strong portfolio".to_string();
    let body = serde_json::to_string(&updated)?;
    let test = TestBuilder::new()
        .with_mock(move |server| {
            server
                .mock("PATCH", "/api/v1/company/offers/1/applicants/2/")
                .match_body(Matcher::Json(json!({"notes": "Strong portfolio"})))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body)
                .create()
        })
        .build()
        .await?;

    let update = ApplicantUpdate::Notes {
        notes: "Strong portfolio".to_string(),
    };
    let result = test.backend().update_applicant(1, 2, &update).await?;

    assert_eq!(result.notes, "Strong portfolio");
    test.assert_mocks();

    Ok(())
}

/// Tests that a failing delete surfaces the gateway error.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn delete_missing_offer_fails() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint("DELETE", "/company/offers/99/", 404, &json!({}), 1)?
        .build()
        .await?;

    let result = test.backend().delete_company_offer(99).await;

    assert_eq!(
        result,
        Err(internhub::error::api::ApiError::NotFound.into())
    );

    Ok(())
}

/// Tests that a 401 from any repository call ends the session.
///
/// Expected: Err and the session is ended
#[tokio::test]
async fn unauthorized_list_ends_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_token("stale")
        .with_json_endpoint("GET", "/users/", 401, &json!({}), 1)?
        .build()
        .await?;

    let result = test.backend().list_users().await;

    assert!(result.is_err());
    assert!(test.session.ended());

    Ok(())
}
