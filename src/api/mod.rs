//! API handlers and router for the Biblio REST endpoints

pub mod books;
pub mod circulation;
pub mod health;
pub mod openapi;
pub mod patrons;

use std::time::Instant;

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Log method, path, status and latency for every request.
///
/// Explicit wrapping of each handler call in a timing+logging scope; kept
/// in addition to the tower-http trace layer so latency is reported at
/// info level in one line per request.
pub async fn track_timing(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        %method,
        path,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "request handled"
    );
    response
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route("/books", get(books::list_books))
        .route("/books", post(books::create_book))
        .route("/books/:id", get(books::get_book))
        .route("/books/:id", put(books::update_book))
        .route("/books/:id", delete(books::delete_book))
        // Patrons
        .route("/patrons", get(patrons::list_patrons))
        .route("/patrons", post(patrons::create_patron))
        .route("/patrons/:id", get(patrons::get_patron))
        .route("/patrons/:id", put(patrons::update_patron))
        .route("/patrons/:id", delete(patrons::delete_patron))
        // Circulation
        .route(
            "/borrow/:book_id/patron/:patron_id",
            post(circulation::borrow_book),
        )
        .route(
            "/return/:book_id/patron/:patron_id",
            put(circulation::return_book),
        )
        .with_state(state);

    // OpenAPI documentation
    let docs = openapi::create_openapi_router();

    Router::new()
        .nest("/api", api)
        .merge(docs)
        .layer(middleware::from_fn(track_timing))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
