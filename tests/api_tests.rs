//! API integration tests
//!
//! Runs the full router in-process over the in-memory store, so no
//! database or live server is needed.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot`

use biblio_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

fn test_app() -> Router {
    let repository = Repository::in_memory();
    let services = Services::new(repository);
    let state = AppState {
        config: Arc::new(AppConfig::default()),
        services: Arc::new(services),
    };
    api::create_router(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            builder.body(Body::from(json.to_string())).unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response body")
    };
    (status, value)
}

fn dune() -> Value {
    json!({
        "title": "Dune",
        "author": "Frank Herbert",
        "publication_year": 1965,
        "isbn": "978-0441172719"
    })
}

fn alice() -> Value {
    json!({
        "name": "Alice",
        "contact_information": "alice@example.org"
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_book_crud() {
    let app = test_app();

    // Create
    let (status, created) = send(&app, Method::POST, "/api/books", Some(dune())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["title"], "Dune");
    let id = created["id"].as_i64().expect("No book ID");

    // List
    let (status, list) = send(&app, Method::GET, "/api/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    // Get
    let (status, fetched) = send(&app, Method::GET, &format!("/api/books/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    // Full replacement
    let update = json!({
        "title": "Dune Messiah",
        "author": "Frank Herbert",
        "publication_year": 1969,
        "isbn": "978-0441172696"
    });
    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/books/{}", id),
        Some(update),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Dune Messiah");
    assert_eq!(updated["id"].as_i64(), Some(id));

    // Delete
    let (status, _) = send(&app, Method::DELETE, &format!("/api/books/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Delete again -> 404
    let (status, _) = send(&app, Method::DELETE, &format!("/api/books/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_nonexistent_book_is_404() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/api/books/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_create_book_with_empty_title_is_rejected() {
    let app = test_app();
    let invalid = json!({
        "title": "",
        "author": "Frank Herbert",
        "publication_year": 1965,
        "isbn": "978-0441172719"
    });
    let (status, body) = send(&app, Method::POST, "/api/books", Some(invalid)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Validation error(s): "));
    assert!(message.contains("title"));
}

#[tokio::test]
async fn test_patron_crud() {
    let app = test_app();

    let (status, created) = send(&app, Method::POST, "/api/patrons", Some(alice())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().expect("No patron ID");

    let update = json!({
        "name": "Alice Liddell",
        "contact_information": "alice@wonderland.org"
    });
    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/patrons/{}", id),
        Some(update),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Alice Liddell");

    let (status, _) = send(&app, Method::DELETE, &format!("/api/patrons/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, &format!("/api/patrons/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_borrow_and_return_scenario() {
    let app = test_app();

    let (_, book) = send(&app, Method::POST, "/api/books", Some(dune())).await;
    let book_id = book["id"].as_i64().unwrap();
    let (_, patron) = send(&app, Method::POST, "/api/patrons", Some(alice())).await;
    let patron_id = patron["id"].as_i64().unwrap();

    let borrow_uri = format!("/api/borrow/{}/patron/{}", book_id, patron_id);
    let return_uri = format!("/api/return/{}/patron/{}", book_id, patron_id);

    // Borrow -> 201 with an open record
    let (status, record) = send(&app, Method::POST, &borrow_uri, None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(record["book_id"].as_i64(), Some(book_id));
    assert_eq!(record["patron_id"].as_i64(), Some(patron_id));
    assert!(record["borrow_date"].is_string());
    assert!(record["return_date"].is_null());
    let record_id = record["id"].as_i64().unwrap();

    // Borrow again -> 400 already borrowed
    let (status, body) = send(&app, Method::POST, &borrow_uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Book is already borrowed");

    // Return -> 200 with the record identity
    let (status, body) = send(&app, Method::PUT, &return_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["record_id"].as_i64(), Some(record_id));
    assert_eq!(body["message"], "Book returned successfully");

    // Return again -> 404, no open record remains
    let (status, _) = send(&app, Method::PUT, &return_uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // A closed loan frees the pair for a new borrow
    let (status, record) = send(&app, Method::POST, &borrow_uri, None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(record["id"].as_i64().unwrap() > record_id);
}

#[tokio::test]
async fn test_borrow_with_missing_book_or_patron() {
    let app = test_app();

    let (_, patron) = send(&app, Method::POST, "/api/patrons", Some(alice())).await;
    let patron_id = patron["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/borrow/999/patron/{}", patron_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("Book"));

    let (_, book) = send(&app, Method::POST, "/api/books", Some(dune())).await;
    let book_id = book["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/borrow/{}/patron/999", book_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("Patron"));
}

#[tokio::test]
async fn test_return_with_missing_book_is_404() {
    let app = test_app();
    let (status, body) = send(&app, Method::PUT, "/api/return/999/patron/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("Book or patron"));
}

#[tokio::test]
async fn test_deleting_a_borrowed_book_is_not_protected() {
    let app = test_app();

    let (_, book) = send(&app, Method::POST, "/api/books", Some(dune())).await;
    let book_id = book["id"].as_i64().unwrap();
    let (_, patron) = send(&app, Method::POST, "/api/patrons", Some(alice())).await;
    let patron_id = patron["id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/borrow/{}/patron/{}", book_id, patron_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/books/{}", book_id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Biblio API");
    assert!(body["paths"]["/books"].is_object());
}
