//! JSON lookup API for RODFA.
//!
//! Exposes an axum [`Router`] backed by any
//! [`rodfa_core::directory::PhoneDirectory`]. TLS and transport concerns are
//! the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", rodfa_api::api_router(directory.clone()))
//! ```

pub mod error;
pub mod lookup;
pub mod records;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::post};
use rodfa_core::directory::PhoneDirectory;
use serde::Deserialize;

pub use error::ApiError;


// ─── Router ──────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `directory`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<D>(directory: Arc<D>) -> Router<()>
where
  D: PhoneDirectory + Clone + Send + Sync + 'static,
  D::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/lookup", post(lookup::handler::<D>))
    .route("/records", post(records::create::<D>))
    .with_state(directory)
}

// ─── Server configuration ────────────────────────────────────────────────────

/// Runtime configuration for the `rodfa-server` binary, deserialised from
/// `config.toml` and `RODFA_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       default_host(),
      port:       default_port(),
      store_path: default_store_path(),
    }
  }
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 8090 }

fn default_store_path() -> PathBuf { PathBuf::from("rodfa.db") }
