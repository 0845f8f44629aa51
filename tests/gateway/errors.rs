use std::time::Duration;

use internhub::{
    api::{ApiClient, MemorySession},
    config::Config,
    error::api::ApiError,
};
use internhub_test_utils::ReqwestTransport;
use serde_json::{json, Value};

use super::*;

/// Tests that a 401 ends the session.
///
/// Expected: Err(Unauthorized) and the stored token is gone
#[tokio::test]
async fn unauthorized_ends_the_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_token("expired")
        .with_json_endpoint("GET", "/users/", 401, &json!({"detail": "expired"}), 1)?
        .build()
        .await?;

    let result = test.api().get::<Value>("/users/", &[]).await;

    assert_eq!(result, Err(ApiError::Unauthorized));
    assert!(test.session.ended());
    test.assert_mocks();

    Ok(())
}

/// Tests the dedicated status variants.
///
/// Expected: 403, 404 and 500 map to their own errors
#[tokio::test]
async fn maps_dedicated_statuses() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint("GET", "/offers/1/", 403, &json!({}), 1)?
        .with_json_endpoint("GET", "/offers/2/", 404, &json!({}), 1)?
        .with_json_endpoint("GET", "/offers/3/", 500, &json!({}), 1)?
        .build()
        .await?;
    let api = test.api();

    assert_eq!(api.get::<Value>("/offers/1/", &[]).await, Err(ApiError::Forbidden));
    assert_eq!(api.get::<Value>("/offers/2/", &[]).await, Err(ApiError::NotFound));
    assert_eq!(api.get::<Value>("/offers/3/", &[]).await, Err(ApiError::Server));
    test.assert_mocks();

    Ok(())
}

/// Tests that other statuses surface the backend's message.
///
/// Expected: Err(Http) carrying `message`, or `HTTP error <code>` without one
#[tokio::test]
async fn other_statuses_use_the_body_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "POST",
            "/offers/4/approve/",
            409,
            &json!({"message": "Offer already approved"}),
            1,
        )?
        .with_json_endpoint("POST", "/offers/5/approve/", 422, &json!({"errors": []}), 1)?
        .build()
        .await?;
    let api = test.api();

    let conflict = api.post_empty::<Value>("/offers/4/approve/").await;
    let unprocessable = api.post_empty::<Value>("/offers/5/approve/").await;

    assert_eq!(
        conflict,
        Err(ApiError::Http {
            status: 409,
            message: "Offer already approved".to_string()
        })
    );
    assert_eq!(
        unprocessable.map_err(|e| e.to_string()),
        Err("HTTP error 422".to_string())
    );

    Ok(())
}

/// Tests a refused connection.
///
/// Expected: Err(Network)
#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let config = Config {
        api_url: "http://127.0.0.1:9/api/v1".to_string(),
        api_timeout: Duration::from_secs(2),
        ..Config::default()
    };
    let api = ApiClient::new(&config, ReqwestTransport::new(), MemorySession::new(None));

    let result = api.get::<Value>("/users/", &[]).await;

    assert!(matches!(result, Err(ApiError::Network(_))));
}

/// Tests that a success body of the wrong shape is a decode error.
///
/// Expected: Err(Decode)
#[tokio::test]
async fn wrong_shape_is_a_decode_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint("GET", "/dashboard/stats/", 200, &json!(["not", "stats"]), 1)?
        .build()
        .await?;

    let result = test
        .api()
        .get::<internhub::model::dashboard::DashboardStats>("/dashboard/stats/", &[])
        .await;

    assert!(matches!(result, Err(ApiError::Decode(_))));

    Ok(())
}
