//! Wire types for the lookup service contract.

use serde::{Deserialize, Serialize};

/// JSON body of `POST /lookup`. Shared by the client and the API crate so
/// both ends agree on the request shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupRequest {
  pub phone: String,
}

/// The profile record returned by the lookup service.
///
/// Wire names are camelCase (`lastSeen`). Unknown fields are ignored on
/// deserialisation; a missing required field is a deserialisation error and
/// surfaces as a malformed-response failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRecord {
  /// Echo of the submitted number.
  pub phone:      String,
  pub name:       String,
  pub location:   String,
  pub region:     String,
  pub operator:   String,
  pub email:      String,
  /// Human-readable recency label, e.g. "2 дня назад".
  pub last_seen:  String,
  /// Social-network platform names; order is display order.
  pub social:     Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub occupation: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub age:        Option<u32>,
}
