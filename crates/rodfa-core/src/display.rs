//! Pure projection of a [`LookupRecord`] into display sections.
//!
//! Called only for a completed search; nothing here can fail.

use crate::record::LookupRecord;

/// Who the record is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentitySection {
  pub name:  String,
  pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationSection {
  pub location: String,
  pub region:   String,
  pub operator: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactsSection {
  pub email:     String,
  pub last_seen: String,
}

/// Personal-info badge; present only when the source field is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Badge {
  Occupation(String),
  Age(u32),
}

/// Everything the result screen renders, grouped by card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayModel {
  pub identity: IdentitySection,
  pub location: LocationSection,
  pub contacts: ContactsSection,
  /// Platform names in service order.
  pub social:   Vec<String>,
  pub badges:   Vec<Badge>,
}

impl DisplayModel {
  /// Group the record's fields into sections. No computation beyond presence
  /// checks on the optional fields.
  pub fn from_record(record: &LookupRecord) -> Self {
    let mut badges = Vec::new();
    if let Some(occupation) = &record.occupation {
      badges.push(Badge::Occupation(occupation.clone()));
    }
    if let Some(age) = record.age {
      badges.push(Badge::Age(age));
    }

    Self {
      identity: IdentitySection {
        name:  record.name.clone(),
        phone: record.phone.clone(),
      },
      location: LocationSection {
        location: record.location.clone(),
        region:   record.region.clone(),
        operator: record.operator.clone(),
      },
      contacts: ContactsSection {
        email:     record.email.clone(),
        last_seen: record.last_seen.clone(),
      },
      social: record.social.clone(),
      badges,
    }
  }
}
