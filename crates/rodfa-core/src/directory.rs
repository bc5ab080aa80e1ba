//! The `PhoneDirectory` trait and stored-record type.
//!
//! The trait is implemented by storage backends (e.g. `rodfa-store-sqlite`).
//! The API crate depends on this abstraction, not on any concrete backend.

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{recency::recency_label, record::LookupRecord};

/// A directory row. `last_seen_at` is the raw activity timestamp; the
/// human-readable label served to clients is computed at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneRecord {
  pub phone:        String,
  pub name:         String,
  pub location:     String,
  pub region:       String,
  pub operator:     String,
  pub email:        String,
  #[serde(default)]
  pub last_seen_at: Option<DateTime<Utc>>,
  #[serde(default)]
  pub social:       Vec<String>,
  #[serde(default)]
  pub occupation:   Option<String>,
  #[serde(default)]
  pub age:          Option<u32>,
}

impl PhoneRecord {
  /// Project the stored row to the wire record served by the lookup API,
  /// attaching the recency label as of `now`.
  pub fn into_lookup_record(self, now: DateTime<Utc>) -> LookupRecord {
    LookupRecord {
      phone:      self.phone,
      name:       self.name,
      location:   self.location,
      region:     self.region,
      operator:   self.operator,
      email:      self.email,
      last_seen:  recency_label(self.last_seen_at, now),
      social:     self.social,
      occupation: self.occupation,
      age:        self.age,
    }
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a phone-records backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (tokio with `axum`).
pub trait PhoneDirectory: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Look up the record for `phone`.
  ///
  /// A record matches when its stored number equals `phone` verbatim, or
  /// contains `phone` with `+` stripped as a substring. Returns `None` when
  /// nothing matches.
  fn find<'a>(
    &'a self,
    phone: &'a str,
  ) -> impl Future<Output = Result<Option<PhoneRecord>, Self::Error>> + Send + 'a;

  /// Insert a record, replacing any existing row for the same number.
  fn add(
    &self,
    record: PhoneRecord,
  ) -> impl Future<Output = Result<PhoneRecord, Self::Error>> + Send + '_;
}
