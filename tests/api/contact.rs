use std::sync::Arc;

use no1engineer::storage::Storage;
use serde_json::Value;

use crate::helper::{post_json, spawn_app, spawn_with_storage, UnavailableStorage};

#[tokio::test]
async fn contact_returns_201_and_the_stored_record() {
    let app = spawn_app().await;

    let body = r#"{"name": "Jo", "email": "jo@example.com", "subject": "Hi", "message": "Hello there, this is a test."}"#;
    let response = app.post_contact(body).await;

    assert_eq!(201, response.status().as_u16());
    let json: Value = response.json().await.unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["contact"]["id"], 1);
    assert_eq!(json["contact"]["name"], "Jo");
    assert_eq!(json["contact"]["email"], "jo@example.com");
    assert_eq!(json["contact"]["subject"], "Hi");
    assert_eq!(json["contact"]["message"], "Hello there, this is a test.");
    assert!(json["contact"]["createdAt"].is_string());

    let saved = app.storage.get_contacts().await.unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].name, "Jo");
}

#[tokio::test]
async fn contact_without_subject_stores_null() {
    let app = spawn_app().await;

    let body = r#"{"name": "Jo", "email": "jo@example.com", "message": "Hello there, this is a test."}"#;
    let response = app.post_contact(body).await;

    assert_eq!(201, response.status().as_u16());
    let json: Value = response.json().await.unwrap();
    assert!(json["contact"].as_object().unwrap().contains_key("subject"));
    assert!(json["contact"]["subject"].is_null());
    assert_eq!(app.storage.get_contacts().await.unwrap()[0].subject, None);
}

#[tokio::test]
async fn contact_ids_strictly_increase() {
    let app = spawn_app().await;
    let body = r#"{"name": "Jo", "email": "jo@example.com", "message": "Hello there, this is a test."}"#;

    let mut last = 0;
    for _ in 0..3 {
        let json: Value = app.post_contact(body).await.json().await.unwrap();
        let id = json["contact"]["id"].as_u64().unwrap();
        assert!(id > last, "{id} should be greater than {last}");
        last = id;
    }
}

#[tokio::test]
async fn contact_accepts_fields_at_their_lower_bounds() {
    let app = spawn_app().await;

    let body = r#"{"name": "Jo", "email": "jo@example.com", "message": "0123456789"}"#;
    let response = app.post_contact(body).await;

    assert_eq!(201, response.status().as_u16());
}

#[tokio::test]
async fn contact_returns_a_400_when_a_field_is_invalid() {
    let app = spawn_app().await;
    let test_cases = [
        (
            r#"{"name": "J", "email": "jo@example.com", "message": "Hello there, this is a test."}"#,
            "one character name",
        ),
        (
            r#"{"name": "Jo", "email": "not-an-email", "message": "Hello there, this is a test."}"#,
            "invalid email",
        ),
        (
            r#"{"name": "Jo", "email": "jo@example.com", "message": "012345678"}"#,
            "nine character message",
        ),
        (r#"{"email": "jo@example.com"}"#, "missing name and message"),
        ("{}", "empty payload"),
    ];

    for (body, description) in test_cases {
        let response = app.post_contact(body).await;
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request when the payload had {}.",
            description
        );
        let json: Value = response.json().await.unwrap();
        assert_eq!(json["success"], false, "{}", description);
        assert!(json["message"].is_string(), "{}", description);
    }

    assert!(app.storage.get_contacts().await.unwrap().is_empty());
}

#[tokio::test]
async fn contact_reports_every_failing_field() {
    let app = spawn_app().await;

    let body = r#"{"name": "J", "email": "nope", "message": "short"}"#;
    let json: Value = app.post_contact(body).await.json().await.unwrap();

    let message = json["message"].as_str().unwrap();
    assert!(message.contains(r#"at "name""#), "{message}");
    assert!(message.contains(r#"at "email""#), "{message}");
    assert!(message.contains(r#"at "message""#), "{message}");
}

#[tokio::test]
async fn contact_returns_a_400_for_malformed_json() {
    let app = spawn_app().await;

    let response = app.post_raw("/api/contact", "{not json").await;

    assert_eq!(400, response.status().as_u16());
    let json: Value = response.json().await.unwrap();
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn contact_reports_a_wrongly_typed_field_with_the_other_failures() {
    let app = spawn_app().await;

    let body = r#"{"name": 5, "email": "nope", "message": "x"}"#;
    let response = app.post_contact(body).await;

    assert_eq!(400, response.status().as_u16());
    let json: Value = response.json().await.unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(
        json["message"],
        "Validation error: Expected string, received number at \"name\"; \
         Please enter a valid email address at \"email\"; \
         Message must be at least 10 characters at \"message\""
    );
    assert!(app.storage.get_contacts().await.unwrap().is_empty());
}

#[tokio::test]
async fn contact_rejects_a_subject_that_is_not_a_string() {
    let app = spawn_app().await;

    let body = r#"{"name": "Jo", "email": "jo@example.com", "subject": 42, "message": "Hello there, this is a test."}"#;
    let response = app.post_contact(body).await;

    assert_eq!(400, response.status().as_u16());
    let json: Value = response.json().await.unwrap();
    assert!(json["message"].as_str().unwrap().contains(r#"at "subject""#));
}

#[tokio::test]
async fn contact_returns_a_400_without_a_json_content_type() {
    let app = spawn_app().await;

    let body = r#"{"name": "Jo", "email": "jo@example.com", "message": "Hello there, this is a test."}"#;
    let response = app.post_without_content_type("/api/contact", body).await;

    assert_eq!(400, response.status().as_u16());
    let json: Value = response.json().await.unwrap();
    assert_eq!(json["success"], false);
    assert!(app.storage.get_contacts().await.unwrap().is_empty());
}

#[tokio::test]
async fn contact_returns_a_500_when_storage_fails() {
    let addr = spawn_with_storage(Arc::new(UnavailableStorage)).await;

    let body = r#"{"name": "Jo", "email": "jo@example.com", "message": "Hello there, this is a test."}"#;
    let response = post_json(&format!("{}/api/contact", addr), body).await;

    assert_eq!(500, response.status().as_u16());
    let json: Value = response.json().await.unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Failed to submit contact form");
}
