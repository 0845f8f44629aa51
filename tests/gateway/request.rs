use internhub::model::user::User;
use mockito::Matcher;
use serde_json::json;

use super::*;

/// Tests that a stored token is sent as a bearer header.
///
/// Expected: Ok with the decoded list
#[tokio::test]
async fn sends_bearer_token_and_decodes_list() -> Result<(), TestError> {
    let users = vec![factory::user(
        1,
        "Ana López",
        internhub::model::user::UserType::Student,
        internhub::model::user::UserStatus::Active,
    )];
    let body = serde_json::to_string(&users)?;
    let test = TestBuilder::new()
        .with_token("token-123")
        .with_mock(move |server| {
            server
                .mock("GET", "/api/v1/users/")
                .match_header("authorization", "Bearer token-123")
                .match_header("accept", "application/json")
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body)
                .create()
        })
        .build()
        .await?;

    let result: Vec<User> = test.api().get("/users/", &[]).await.map_err(internhub::error::Error::from)?;

    assert_eq!(result, users);
    test.assert_mocks();

    Ok(())
}

/// Tests that query parameters are URL-encoded and unset ones are dropped.
///
/// Expected: Ok, the mock only matches the encoded parameters
#[tokio::test]
async fn encodes_query_parameters() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock(|server| {
            server
                .mock("GET", "/api/v1/offers/")
                .match_query(Matcher::AllOf(vec![
                    Matcher::UrlEncoded("search".into(), "data & ml".into()),
                    Matcher::UrlEncoded("status".into(), "pending".into()),
                ]))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body("[]")
                .create()
        })
        .build()
        .await?;

    let query = [
        ("search", Some("data & ml".to_string())),
        ("company", None),
        ("status", Some("pending".to_string())),
    ];
    let result: serde_json::Value = test
        .api()
        .get("/offers/", &query)
        .await
        .map_err(internhub::error::Error::from)?;

    assert_eq!(result, json!([]));
    test.assert_mocks();

    Ok(())
}

/// Tests that a JSON body is posted with the JSON content type.
///
/// Expected: Ok with the created record
#[tokio::test]
async fn posts_json_body() -> Result<(), TestError> {
    let request = json!({
        "type": "users",
        "start_date": "2025-08-01",
        "end_date": "2025-08-31",
        "format": "pdf",
    });
    let created = factory::report(
        9,
        internhub::model::report::ReportType::Users,
        internhub::model::report::ReportFormat::Pdf,
    );
    let body = serde_json::to_string(&created)?;
    let expected_body = request.clone();
    let test = TestBuilder::new()
        .with_mock(move |server| {
            server
                .mock("POST", "/api/v1/reports/generate/")
                .match_header("content-type", "application/json")
                .match_body(Matcher::Json(expected_body))
                .with_status(201)
                .with_header("content-type", "application/json")
                .with_body(body)
                .create()
        })
        .build()
        .await?;

    let result: internhub::model::report::Report = test
        .api()
        .post("/reports/generate/", &request)
        .await
        .map_err(internhub::error::Error::from)?;

    assert_eq!(result, created);
    test.assert_mocks();

    Ok(())
}

/// Tests that a 204 answer to a delete is a success.
///
/// Expected: Ok(())
#[tokio::test]
async fn delete_accepts_no_content() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock(|server| {
            server
                .mock("DELETE", "/api/v1/reports/3/")
                .with_status(204)
                .create()
        })
        .build()
        .await?;

    test.api()
        .delete("/reports/3/")
        .await
        .map_err(internhub::error::Error::from)?;

    test.assert_mocks();

    Ok(())
}
