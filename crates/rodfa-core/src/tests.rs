//! Unit tests for the search workflow, display projection, and wire types.

use chrono::{Duration, TimeZone, Utc};

use crate::{
  directory::PhoneRecord,
  display::{Badge, DisplayModel},
  error::{LookupError, MALFORMED_MESSAGE, TRANSPORT_MESSAGE},
  recency::recency_label,
  record::LookupRecord,
  search::{INVALID_PHONE_MESSAGE, SearchSession, SearchState, validate},
};

fn record() -> LookupRecord {
  LookupRecord {
    phone:      "+7 999 123 45 67".into(),
    name:       "Иванов Иван Иванович".into(),
    location:   "Москва, Россия".into(),
    region:     "Московская область".into(),
    operator:   "МТС".into(),
    email:      "ivan.ivanov@example.com".into(),
    last_seen:  "2 дня назад".into(),
    social:     vec!["VK".into(), "Instagram".into(), "Telegram".into()],
    occupation: None,
    age:        None,
  }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[test]
fn validate_rejects_short_numbers() {
  assert_eq!(validate("12345"), Err(INVALID_PHONE_MESSAGE));
  assert_eq!(validate(""), Err(INVALID_PHONE_MESSAGE));
  assert_eq!(validate("+7 (999) 123-45"), Err(INVALID_PHONE_MESSAGE));
}

#[test]
fn validate_counts_digits_only() {
  // 11 digits spread across formatting characters.
  assert_eq!(validate("+7 999 123 45 67"), Ok(()));
  // Exactly 10 digits.
  assert_eq!(validate("9991234567"), Ok(()));
  // Letters contribute nothing.
  assert_eq!(validate("abc123456789def0"), Ok(()));
}

// ─── Session transitions ─────────────────────────────────────────────────────

#[test]
fn new_session_is_idle_and_empty() {
  let session = SearchSession::new();
  assert_eq!(
    *session.state(),
    SearchState::Idle { input: String::new() }
  );
}

#[test]
fn update_input_replaces_and_clears_prior_state() {
  let mut session = SearchSession::new();
  session.update_input("12345");
  session.submit();
  assert!(matches!(session.state(), SearchState::Invalid { .. }));

  // Editing the input always resets the workflow to fresh input.
  session.update_input("123456");
  assert_eq!(
    *session.state(),
    SearchState::Idle { input: "123456".into() }
  );
}

#[test]
fn submit_with_short_input_goes_invalid_without_attempt() {
  let mut session = SearchSession::new();
  session.update_input("12345");

  let attempt = session.submit();
  assert!(attempt.is_none());
  assert_eq!(
    *session.state(),
    SearchState::Invalid {
      input:  "12345".into(),
      reason: INVALID_PHONE_MESSAGE.into(),
    }
  );
}

#[test]
fn submit_with_valid_input_goes_pending_with_exact_phone() {
  let mut session = SearchSession::new();
  session.update_input("+7 999 123 45 67");

  let attempt = session.submit().expect("attempt");
  assert_eq!(attempt.phone, "+7 999 123 45 67");
  assert_eq!(
    *session.state(),
    SearchState::Pending { input: "+7 999 123 45 67".into() }
  );
}

#[test]
fn submit_while_pending_is_not_issuable() {
  let mut session = SearchSession::new();
  session.update_input("+7 999 123 45 67");
  let first = session.submit().expect("attempt");

  assert!(session.submit().is_none());
  // The outstanding attempt is still the resolvable one.
  session.resolve(first.generation, Ok(record()));
  assert!(matches!(session.state(), SearchState::Found { .. }));
}

#[test]
fn resolve_success_goes_found() {
  let mut session = SearchSession::new();
  session.update_input("9991234567");
  let attempt = session.submit().unwrap();

  session.resolve(attempt.generation, Ok(record()));
  assert_eq!(*session.state(), SearchState::Found { record: record() });
}

#[test]
fn resolve_error_goes_failed_with_user_message() {
  let mut session = SearchSession::new();
  session.update_input("9991234567");
  let attempt = session.submit().unwrap();

  session.resolve(attempt.generation, Err(LookupError::Transport));
  assert_eq!(
    *session.state(),
    SearchState::Failed {
      input:  "9991234567".into(),
      reason: TRANSPORT_MESSAGE.into(),
    }
  );
}

#[test]
fn service_message_is_surfaced_verbatim() {
  let mut session = SearchSession::new();
  session.update_input("9991234567");
  let attempt = session.submit().unwrap();

  session.resolve(
    attempt.generation,
    Err(LookupError::Service { message: "Информация не найдена в базе".into() }),
  );
  assert_eq!(
    *session.state(),
    SearchState::Failed {
      input:  "9991234567".into(),
      reason: "Информация не найдена в базе".into(),
    }
  );
}

#[test]
fn transport_and_malformed_messages_are_distinct() {
  assert_ne!(TRANSPORT_MESSAGE, MALFORMED_MESSAGE);
  assert_eq!(LookupError::Transport.user_message(), TRANSPORT_MESSAGE);
  assert_eq!(LookupError::Malformed.user_message(), MALFORMED_MESSAGE);
}

// ─── Reset + late arrivals ───────────────────────────────────────────────────

#[test]
fn reset_from_any_state_yields_empty_idle() {
  let idle = SearchState::Idle { input: String::new() };

  let mut session = SearchSession::new();
  assert_eq!(*session.reset(), idle);

  session.update_input("12345");
  session.submit(); // Invalid
  assert_eq!(*session.reset(), idle);

  session.update_input("9991234567");
  session.submit(); // Pending
  assert_eq!(*session.reset(), idle);

  session.update_input("9991234567");
  let attempt = session.submit().unwrap();
  session.resolve(attempt.generation, Ok(record())); // Found
  assert_eq!(*session.reset(), idle);
}

#[test]
fn late_resolution_after_reset_is_discarded() {
  let mut session = SearchSession::new();
  session.update_input("9991234567");
  let attempt = session.submit().unwrap();

  session.reset();
  session.resolve(attempt.generation, Ok(record()));

  assert_eq!(
    *session.state(),
    SearchState::Idle { input: String::new() }
  );
}

#[test]
fn late_resolution_after_input_edit_is_discarded() {
  let mut session = SearchSession::new();
  session.update_input("9991234567");
  let attempt = session.submit().unwrap();

  session.update_input("9991234568");
  session.resolve(attempt.generation, Err(LookupError::Transport));

  assert_eq!(
    *session.state(),
    SearchState::Idle { input: "9991234568".into() }
  );
}

#[test]
fn late_resolution_after_newer_submit_is_discarded() {
  let mut session = SearchSession::new();
  session.update_input("9991234567");
  let stale = session.submit().unwrap();

  session.reset();
  session.update_input("9991234568");
  let current = session.submit().unwrap();
  assert_ne!(stale.generation, current.generation);

  // The stale outcome must not clobber the newer pending attempt.
  session.resolve(stale.generation, Err(LookupError::Transport));
  assert_eq!(
    *session.state(),
    SearchState::Pending { input: "9991234568".into() }
  );

  // The current one still resolves normally.
  session.resolve(current.generation, Ok(record()));
  assert!(matches!(session.state(), SearchState::Found { .. }));
}

// ─── Display projection ──────────────────────────────────────────────────────

#[test]
fn from_record_populates_all_sections() {
  let model = DisplayModel::from_record(&record());

  assert_eq!(model.identity.name, "Иванов Иван Иванович");
  assert_eq!(model.identity.phone, "+7 999 123 45 67");
  assert_eq!(model.location.location, "Москва, Россия");
  assert_eq!(model.location.region, "Московская область");
  assert_eq!(model.location.operator, "МТС");
  assert_eq!(model.contacts.email, "ivan.ivanov@example.com");
  assert_eq!(model.contacts.last_seen, "2 дня назад");
}

#[test]
fn social_order_and_count_are_preserved() {
  let model = DisplayModel::from_record(&record());
  assert_eq!(model.social, vec!["VK", "Instagram", "Telegram"]);
}

#[test]
fn badges_follow_field_presence() {
  let mut rec = record();
  rec.occupation = None;
  rec.age = Some(34);

  let model = DisplayModel::from_record(&rec);
  assert_eq!(model.badges, vec![Badge::Age(34)]);

  rec.occupation = Some("Инженер".into());
  let model = DisplayModel::from_record(&rec);
  assert_eq!(
    model.badges,
    vec![Badge::Occupation("Инженер".into()), Badge::Age(34)]
  );

  rec.occupation = None;
  rec.age = None;
  assert!(DisplayModel::from_record(&rec).badges.is_empty());
}

// ─── Wire format ─────────────────────────────────────────────────────────────

#[test]
fn record_deserialises_from_camel_case_json() {
  let json = r#"{
    "phone": "+79991234567",
    "name": "Иванов Иван Иванович",
    "location": "Москва, Россия",
    "region": "Московская область",
    "operator": "МТС",
    "email": "ivan.ivanov@example.com",
    "lastSeen": "2 дня назад",
    "social": ["VK", "Instagram", "Telegram"],
    "age": 34,
    "unknownField": true
  }"#;

  let rec: LookupRecord = serde_json::from_str(json).unwrap();
  assert_eq!(rec.last_seen, "2 дня назад");
  assert_eq!(rec.social, vec!["VK", "Instagram", "Telegram"]);
  assert_eq!(rec.age, Some(34));
  assert_eq!(rec.occupation, None);
}

#[test]
fn record_with_missing_required_field_fails() {
  // No "name".
  let json = r#"{
    "phone": "+79991234567",
    "location": "Москва, Россия",
    "region": "Московская область",
    "operator": "МТС",
    "email": "ivan.ivanov@example.com",
    "lastSeen": "2 дня назад",
    "social": []
  }"#;

  assert!(serde_json::from_str::<LookupRecord>(json).is_err());
}

#[test]
fn record_serialises_last_seen_as_camel_case() {
  let value = serde_json::to_value(record()).unwrap();
  assert!(value.get("lastSeen").is_some());
  assert!(value.get("last_seen").is_none());
  // Absent optionals are omitted, not null.
  assert!(value.get("occupation").is_none());
}

// ─── Recency labels ──────────────────────────────────────────────────────────

#[test]
fn recency_labels_match_magnitude_ranges() {
  let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
  let ago = |d: Duration| Some(now - d);

  assert_eq!(recency_label(None, now), "Неизвестно");
  assert_eq!(recency_label(ago(Duration::minutes(1)), now), "1 минуту назад");
  assert_eq!(recency_label(ago(Duration::minutes(5)), now), "5 минут назад");
  assert_eq!(recency_label(ago(Duration::hours(1)), now), "1 час назад");
  assert_eq!(recency_label(ago(Duration::hours(7)), now), "7 часов назад");
  assert_eq!(recency_label(ago(Duration::days(1)), now), "1 день назад");
  assert_eq!(recency_label(ago(Duration::days(2)), now), "2 дня назад");
  assert_eq!(recency_label(ago(Duration::days(6)), now), "6 дней назад");
  assert_eq!(recency_label(ago(Duration::days(7)), now), "1 неделю назад");
  assert_eq!(recency_label(ago(Duration::days(21)), now), "3 недели назад");
}

// ─── Stored-record projection ────────────────────────────────────────────────

#[test]
fn stored_record_projects_to_wire_record() {
  let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
  let stored = PhoneRecord {
    phone:        "+79991234567".into(),
    name:         "Иванов Иван Иванович".into(),
    location:     "Москва, Россия".into(),
    region:       "Московская область".into(),
    operator:     "МТС".into(),
    email:        "ivan.ivanov@example.com".into(),
    last_seen_at: Some(now - Duration::days(2)),
    social:       vec!["VK".into(), "Telegram".into()],
    occupation:   Some("Инженер".into()),
    age:          Some(34),
  };

  let wire = stored.into_lookup_record(now);
  assert_eq!(wire.last_seen, "2 дня назад");
  assert_eq!(wire.social, vec!["VK", "Telegram"]);
  assert_eq!(wire.occupation.as_deref(), Some("Инженер"));
  assert_eq!(wire.age, Some(34));
}
