//! Handlers for `/doctors` endpoints.
//!
//! | Method   | Path           | Success | Failure |
//! |----------|----------------|---------|---------|
//! | `GET`    | `/doctors`      | 200 + list, 204 if empty | 500 |
//! | `GET`    | `/doctors/:id`  | 200 + doctor | 404, 500 |
//! | `POST`   | `/doctors`      | 201 + stored doctor | 400, 500 |
//! | `PUT`    | `/doctors/:id`  | 200 + stored doctor | 400, 404, 500 |
//! | `DELETE` | `/doctors/:id`  | 200, empty body | 404, 500 |
//!
//! Bodies are validated before the store is touched.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use clinic_core::{Doctor, DoctorInput, store::DoctorStore, validate};

use crate::error::ApiError;

type DoctorBody = Result<Json<DoctorInput>, JsonRejection>;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /doctors`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Response, ApiError>
where
  S: DoctorStore,
{
  let doctors = store
    .find_all()
    .await
    .map_err(|e| ApiError::store("list", None, e))?;

  if doctors.is_empty() {
    return Ok(StatusCode::NO_CONTENT.into_response());
  }
  Ok(Json(doctors).into_response())
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /doctors/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Doctor>, ApiError>
where
  S: DoctorStore,
{
  let doctor = store
    .find_by_id(id)
    .await
    .map_err(|e| ApiError::store("get", Some(id), e))?
    .ok_or(ApiError::NotFound)?;
  Ok(Json(doctor))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /doctors` — returns 201 + the stored doctor with its assigned id.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: DoctorBody,
) -> Result<impl IntoResponse, ApiError>
where
  S: DoctorStore,
{
  let Json(input) = body?;
  let doctor = validate(input)?;

  let saved = store
    .save(doctor)
    .await
    .map_err(|e| ApiError::store("create", None, e))?;

  tracing::info!(id = ?saved.id, "doctor created");
  Ok((StatusCode::CREATED, Json(saved)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /doctors/:id` — overwrites all four fields; the id never changes.
///
/// Responds with the record returned by the store, not the submitted body.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  body: DoctorBody,
) -> Result<Json<Doctor>, ApiError>
where
  S: DoctorStore,
{
  let Json(input) = body?;
  let submitted = validate(input)?;

  let mut doctor = store
    .find_by_id(id)
    .await
    .map_err(|e| ApiError::store("update", Some(id), e))?
    .ok_or(ApiError::NotFound)?;
  doctor.overwrite_with(submitted);

  let saved = store
    .save(doctor)
    .await
    .map_err(|e| ApiError::store("update", Some(id), e))?;
  Ok(Json(saved))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /doctors/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: DoctorStore,
{
  store
    .find_by_id(id)
    .await
    .map_err(|e| ApiError::store("delete", Some(id), e))?
    .ok_or(ApiError::NotFound)?;

  store
    .delete_by_id(id)
    .await
    .map_err(|e| ApiError::store("delete", Some(id), e))?;

  tracing::info!(id, "doctor deleted");
  Ok(StatusCode::OK)
}
