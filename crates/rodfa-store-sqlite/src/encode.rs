//! Conversions between [`PhoneRecord`] and the plain-text column values
//! stored in SQLite. Timestamps are RFC 3339 strings; the social list is
//! compact JSON.

use chrono::{DateTime, Utc};
use rodfa_core::directory::PhoneRecord;

use crate::{Error, Result};

// ─── Scalars ─────────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::Decode(e.to_string()))
}

pub fn encode_social(social: &[String]) -> Result<String> {
  Ok(serde_json::to_string(social)?)
}

pub fn decode_social(s: &str) -> Result<Vec<String>> {
  Ok(serde_json::from_str(s)?)
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw values read directly from a `phone_records` row.
pub struct RawPhoneRecord {
  pub phone:        String,
  pub name:         String,
  pub location:     String,
  pub region:       String,
  pub operator:     String,
  pub email:        String,
  pub last_seen_at: Option<String>,
  pub social:       String,
  pub occupation:   Option<String>,
  pub age:          Option<i64>,
}

impl RawPhoneRecord {
  pub fn into_record(self) -> Result<PhoneRecord> {
    let last_seen_at = self.last_seen_at.as_deref().map(decode_dt).transpose()?;
    let social = decode_social(&self.social)?;
    let age = self
      .age
      .map(u32::try_from)
      .transpose()
      .map_err(|_| Error::Decode("age out of range".to_string()))?;

    Ok(PhoneRecord {
      phone: self.phone,
      name: self.name,
      location: self.location,
      region: self.region,
      operator: self.operator,
      email: self.email,
      last_seen_at,
      social,
      occupation: self.occupation,
      age,
    })
  }
}
