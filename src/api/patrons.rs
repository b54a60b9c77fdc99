//! Patron management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::patron::{Patron, PatronInput},
};

/// List all patrons
#[utoipa::path(
    get,
    path = "/patrons",
    tag = "patrons",
    responses(
        (status = 200, description = "List of patrons", body = Vec<Patron>)
    )
)]
pub async fn list_patrons(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Patron>>> {
    let patrons = state.services.patrons.list().await?;
    Ok(Json(patrons))
}

/// Get patron by ID
#[utoipa::path(
    get,
    path = "/patrons/{id}",
    tag = "patrons",
    params(("id" = i64, Path, description = "Patron ID")),
    responses(
        (status = 200, description = "Patron details", body = Patron),
        (status = 404, description = "Patron not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_patron(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Patron>> {
    let patron = state.services.patrons.get_by_id(id).await?;
    Ok(Json(patron))
}

/// Add a new patron
#[utoipa::path(
    post,
    path = "/patrons",
    tag = "patrons",
    request_body = PatronInput,
    responses(
        (status = 201, description = "Patron created", body = Patron),
        (status = 400, description = "Validation error", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_patron(
    State(state): State<crate::AppState>,
    Json(data): Json<PatronInput>,
) -> AppResult<(StatusCode, Json<Patron>)> {
    data.validate()?;
    let patron = state.services.patrons.create(&data).await?;
    Ok((StatusCode::CREATED, Json(patron)))
}

/// Replace a patron
#[utoipa::path(
    put,
    path = "/patrons/{id}",
    tag = "patrons",
    params(("id" = i64, Path, description = "Patron ID")),
    request_body = PatronInput,
    responses(
        (status = 200, description = "Patron updated", body = Patron),
        (status = 400, description = "Validation error", body = crate::error::ErrorResponse),
        (status = 404, description = "Patron not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_patron(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<PatronInput>,
) -> AppResult<Json<Patron>> {
    data.validate()?;
    let patron = state.services.patrons.update(id, &data).await?;
    Ok(Json(patron))
}

/// Delete a patron
#[utoipa::path(
    delete,
    path = "/patrons/{id}",
    tag = "patrons",
    params(("id" = i64, Path, description = "Patron ID")),
    responses(
        (status = 204, description = "Patron deleted"),
        (status = 404, description = "Patron not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_patron(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.patrons.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
