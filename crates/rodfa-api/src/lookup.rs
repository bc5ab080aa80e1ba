//! Handler for `POST /lookup`.
//!
//! | outcome     | status | body |
//! |-------------|--------|------|
//! | match       | 200    | [`LookupRecord`] |
//! | no match    | 404    | `{"error":"Информация по данному номеру не найдена"}` |
//! | empty phone | 400    | `{"error":"Номер телефона не указан"}` |

use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::Utc;
use rodfa_core::{
  directory::PhoneDirectory,
  record::{LookupRecord, LookupRequest},
};

use crate::error::ApiError;

/// Message for a request body without a phone number.
pub const MISSING_PHONE: &str = "Номер телефона не указан";

/// Message when no directory record matches.
pub const NOT_FOUND: &str = "Информация по данному номеру не найдена";

/// `POST /lookup` — body: `{"phone":"..."}`.
pub async fn handler<D>(
  State(directory): State<Arc<D>>,
  Json(body): Json<LookupRequest>,
) -> Result<Json<LookupRecord>, ApiError>
where
  D: PhoneDirectory,
  D::Error: std::error::Error + Send + Sync + 'static,
{
  let phone = body.phone.trim();
  if phone.is_empty() {
    return Err(ApiError::BadRequest(MISSING_PHONE.to_string()));
  }

  let record = directory
    .find(phone)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_string()))?;

  tracing::debug!(phone, "lookup hit");
  Ok(Json(record.into_lookup_record(Utc::now())))
}
