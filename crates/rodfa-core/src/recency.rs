//! Human-readable recency labels for the `lastSeen` field.
//!
//! The plural forms are keyed on magnitude ranges, not general grammar; they
//! reproduce the wording used across the rest of the product.

use chrono::{DateTime, Utc};

/// Label for when the number was last seen active. `None` means the
/// directory has no activity timestamp for the record.
pub fn recency_label(
  last_seen_at: Option<DateTime<Utc>>,
  now: DateTime<Utc>,
) -> String {
  let Some(at) = last_seen_at else {
    return "Неизвестно".to_string();
  };

  let diff = now.signed_duration_since(at);
  let days = diff.num_days();

  if days > 0 {
    return match days {
      1 => "1 день назад".to_string(),
      2..=4 => format!("{days} дня назад"),
      5..=6 => format!("{days} дней назад"),
      _ => {
        let weeks = days / 7;
        if weeks == 1 {
          "1 неделю назад".to_string()
        } else {
          format!("{weeks} недели назад")
        }
      }
    };
  }

  let hours = diff.num_hours();
  if hours > 1 {
    return format!("{hours} часов назад");
  }
  if hours == 1 {
    return "1 час назад".to_string();
  }

  let minutes = diff.num_minutes();
  if minutes > 1 {
    format!("{minutes} минут назад")
  } else {
    "1 минуту назад".to_string()
  }
}
