use std::time::Duration;

use serde::Deserialize;

use super::*;

#[derive(Debug, Deserialize, PartialEq)]
struct Item {
    id: u64,
}

/// Expected: the base URL is prefixed and the token is sent as a bearer header
#[tokio::test]
async fn sends_bearer_token_to_prefixed_url() {
    let api = client(ScriptedTransport::default().respond(200, r#"{"id": 3}"#), Some("tok"));

    let item: Item = api.get("/offers/3/", &[]).await.unwrap();

    assert_eq!(item, Item { id: 3 });
    let request = api.transport.last_request();
    assert_eq!(request.url, "http://backend.test/api/v1/offers/3/");
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.header("authorization"), Some("Bearer tok"));
    assert_eq!(request.header("content-type"), Some("application/json"));
}

/// Expected: no authorization header without a stored token
#[tokio::test]
async fn omits_authorization_without_token() {
    let api = client(ScriptedTransport::default().respond(200, "[]"), None);

    let _: Vec<Item> = api.get("/users/", &[]).await.unwrap();

    assert_eq!(api.transport.last_request().header("Authorization"), None);
}

/// Expected: `None` query values are dropped and the rest are url-encoded
#[tokio::test]
async fn encodes_query_and_skips_missing_values() {
    let api = client(ScriptedTransport::default().respond(200, "[]"), None);

    let _: Vec<Item> = api
        .get(
            "/users/",
            &[
                ("search", Some("ana lópez".to_string())),
                ("type", None),
                ("status", Some("active".to_string())),
            ],
        )
        .await
        .unwrap();

    assert_eq!(
        api.transport.last_request().url,
        "http://backend.test/api/v1/users/?search=ana+l%C3%B3pez&status=active"
    );
}

/// Expected: the JSON body is serialized for writes
#[tokio::test]
async fn serializes_json_body() {
    let api = client(ScriptedTransport::default().respond(200, r#"{"id": 9}"#), None);

    let item: Item = api
        .patch("/company/offers/9/", &serde_json::json!({ "status": "closed" }))
        .await
        .unwrap();

    assert_eq!(item.id, 9);
    let request = api.transport.last_request();
    assert_eq!(request.method, Method::Patch);
    assert_eq!(request.body.as_deref(), Some(r#"{"status":"closed"}"#));
}

/// Expected: an empty 204 body satisfies a delete
#[tokio::test]
async fn delete_accepts_empty_body() {
    let api = client(ScriptedTransport::default().respond(204, ""), None);

    assert_eq!(api.delete("/users/4/").await, Ok(()));
    assert_eq!(api.transport.last_request().method, Method::Delete);
}

/// Expected: a 401 ends the session and returns `Unauthorized`
#[tokio::test]
async fn unauthorized_ends_session() {
    let api = client(ScriptedTransport::default().respond(401, ""), Some("stale"));

    let result: Result<Vec<Item>, _> = api.get("/users/", &[]).await;

    assert_eq!(result, Err(ApiError::Unauthorized));
    assert!(api.session().ended());
    assert_eq!(api.session().token(), None);
}

/// Expected: other statuses map to their errors without touching the session
#[tokio::test]
async fn maps_error_statuses() {
    let api = client(
        ScriptedTransport::default()
            .respond(404, "")
            .respond(409, r#"{"message": "Offer already closed"}"#),
        Some("tok"),
    );

    let not_found: Result<Item, _> = api.get("/offers/1/", &[]).await;
    let conflict: Result<Item, _> = api.post_empty("/offers/1/close/").await;

    assert_eq!(not_found, Err(ApiError::NotFound));
    assert_eq!(conflict.unwrap_err().to_string(), "Offer already closed");
    assert!(!api.session().ended());
}

/// Expected: a slow backend yields `Timeout`, not a network error
#[tokio::test]
async fn slow_response_times_out() {
    let api = client(
        ScriptedTransport::default()
            .respond(200, "[]")
            .delayed(Duration::from_millis(500)),
        None,
    );

    let result: Result<Vec<Item>, _> = api.get("/users/", &[]).await;

    assert_eq!(result, Err(ApiError::Timeout));
}

/// Expected: transport failures surface as network errors
#[tokio::test]
async fn network_failure_is_reported() {
    let api = client(
        ScriptedTransport::default().fail(TransportError::Network("refused".to_string())),
        None,
    );

    let result: Result<Vec<Item>, _> = api.get("/users/", &[]).await;

    assert_eq!(result, Err(ApiError::Network("refused".to_string())));
}

/// Expected: a malformed success body is a decode error
#[tokio::test]
async fn malformed_body_is_decode_error() {
    let api = client(ScriptedTransport::default().respond(200, "<html>"), None);

    let result: Result<Item, _> = api.get("/offers/1/", &[]).await;

    assert!(matches!(result, Err(ApiError::Decode(_))));
}
