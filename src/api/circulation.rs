//! Borrow and return endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::borrowing_record::BorrowingRecord};

/// Return confirmation with the closed record's identity
#[derive(Serialize, ToSchema)]
pub struct ReturnResponse {
    /// ID of the closed borrowing record
    pub record_id: i64,
    /// Status message
    pub message: String,
}

/// Borrow a book for a patron
#[utoipa::path(
    post,
    path = "/borrow/{book_id}/patron/{patron_id}",
    tag = "circulation",
    params(
        ("book_id" = i64, Path, description = "Book ID"),
        ("patron_id" = i64, Path, description = "Patron ID")
    ),
    responses(
        (status = 201, description = "Borrowing record created", body = BorrowingRecord),
        (status = 400, description = "Book is already borrowed", body = crate::error::ErrorResponse),
        (status = 404, description = "Book or patron not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn borrow_book(
    State(state): State<crate::AppState>,
    Path((book_id, patron_id)): Path<(i64, i64)>,
) -> AppResult<(StatusCode, Json<BorrowingRecord>)> {
    let record = state
        .services
        .circulation
        .borrow_book(book_id, patron_id)
        .await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Record the return of a borrowed book
#[utoipa::path(
    put,
    path = "/return/{book_id}/patron/{patron_id}",
    tag = "circulation",
    params(
        ("book_id" = i64, Path, description = "Book ID"),
        ("patron_id" = i64, Path, description = "Patron ID")
    ),
    responses(
        (status = 200, description = "Book returned", body = ReturnResponse),
        (status = 404, description = "Book, patron or open record not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    Path((book_id, patron_id)): Path<(i64, i64)>,
) -> AppResult<Json<ReturnResponse>> {
    let record = state
        .services
        .circulation
        .return_book(book_id, patron_id)
        .await?;

    Ok(Json(ReturnResponse {
        record_id: record.id,
        message: "Book returned successfully".to_string(),
    }))
}
