//! Handler for `POST /records` — the seeding/administration endpoint.
//!
//! The lookup flow itself never writes; this is how the directory gets
//! populated.

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use rodfa_core::directory::{PhoneDirectory, PhoneRecord};

use crate::{error::ApiError, lookup::MISSING_PHONE};

/// `POST /records` — body: [`PhoneRecord`]; returns 201 + the stored record.
pub async fn create<D>(
  State(directory): State<Arc<D>>,
  Json(record): Json<PhoneRecord>,
) -> Result<impl IntoResponse, ApiError>
where
  D: PhoneDirectory,
  D::Error: std::error::Error + Send + Sync + 'static,
{
  if record.phone.trim().is_empty() {
    return Err(ApiError::BadRequest(MISSING_PHONE.to_string()));
  }

  let stored = directory
    .add(record)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(stored)))
}
