//! Async HTTP client for the lookup service.

use anyhow::{Context, Result};
use reqwest::Client;
use rodfa_core::{
  error::{LookupError, NOT_FOUND_FALLBACK},
  record::{LookupRecord, LookupRequest},
};
use serde::Deserialize;

/// Connection settings for the lookup service.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// Shape of a non-success response body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
  error: Option<String>,
}

/// Async HTTP client for the lookup service.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct LookupClient {
  client: Client,
  config: ApiConfig,
}

impl LookupClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    // No explicit timeout; the transport defaults apply.
    let client = Client::builder()
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self) -> String {
    format!(
      "{}/api/lookup",
      self.config.base_url.trim_end_matches('/')
    )
  }

  /// `POST /api/lookup` — exactly one request, outcome mapped to the error
  /// taxonomy the search workflow displays.
  pub async fn lookup(&self, phone: &str) -> Result<LookupRecord, LookupError> {
    tracing::debug!(phone, "issuing lookup");

    let resp = self
      .client
      .post(self.url())
      .json(&LookupRequest { phone: phone.to_string() })
      .send()
      .await
      .map_err(|e| {
        tracing::debug!(error = %e, "lookup transport failure");
        LookupError::Transport
      })?;

    let status = resp.status();
    if !status.is_success() {
      let message = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| NOT_FOUND_FALLBACK.to_string());
      tracing::debug!(%status, %message, "lookup rejected");
      return Err(LookupError::Service { message });
    }

    resp.json::<LookupRecord>().await.map_err(|e| {
      tracing::debug!(error = %e, "lookup body did not match record shape");
      LookupError::Malformed
    })
  }
}
