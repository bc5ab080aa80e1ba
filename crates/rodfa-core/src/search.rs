//! The search workflow state machine.
//!
//! One [`SearchSession`] per interactive session. Every user action produces
//! a new [`SearchState`]; the previous one is discarded entirely — no
//! history, no undo. A generation counter tags each in-flight lookup so a
//! response arriving after a reset or a newer submission is discarded rather
//! than applied to the wrong state.

use crate::{error::LookupError, record::LookupRecord};

/// Minimum digit count for a submittable phone number.
pub const MIN_DIGITS: usize = 10;

/// Fixed message for inputs that fail the digit-count rule.
pub const INVALID_PHONE_MESSAGE: &str = "Введите корректный номер телефона";

// ─── State ────────────────────────────────────────────────────────────────────

/// The workflow state. Exactly one variant is active at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
  /// Fresh input; no request outstanding.
  Idle { input: String },
  /// Input failed local validation. `reason` is non-empty and user-facing.
  Invalid { input: String, reason: String },
  /// A request is in flight.
  Pending { input: String },
  /// Terminal success for this attempt.
  Found { record: LookupRecord },
  /// Terminal error for this attempt. `reason` is non-empty and user-facing.
  Failed { input: String, reason: String },
}

impl SearchState {
  /// The editable input carried by the state. `Found` carries none.
  pub fn input(&self) -> &str {
    match self {
      Self::Idle { input }
      | Self::Invalid { input, .. }
      | Self::Pending { input }
      | Self::Failed { input, .. } => input,
      Self::Found { .. } => "",
    }
  }

  pub fn is_pending(&self) -> bool { matches!(self, Self::Pending { .. }) }
}

// ─── Validation ───────────────────────────────────────────────────────────────

/// A number is submittable iff it contains at least [`MIN_DIGITS`] digits,
/// ignoring formatting characters. Pure and synchronous; runs before any
/// network activity.
pub fn validate(input: &str) -> Result<(), &'static str> {
  if input.chars().filter(|c| c.is_ascii_digit()).count() >= MIN_DIGITS {
    Ok(())
  } else {
    Err(INVALID_PHONE_MESSAGE)
  }
}

// ─── Session ──────────────────────────────────────────────────────────────────

/// Token for one issued lookup. The caller performs the request and hands the
/// outcome back to [`SearchSession::resolve`] together with the generation it
/// was issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
  pub generation: u64,
  /// The raw input, submitted verbatim as the phone value.
  pub phone:      String,
}

/// Owns the current [`SearchState`] and the generation counter guarding
/// against stale resolutions.
#[derive(Debug)]
pub struct SearchSession {
  state:      SearchState,
  generation: u64,
}

impl Default for SearchSession {
  fn default() -> Self { Self::new() }
}

impl SearchSession {
  pub fn new() -> Self {
    Self {
      state:      SearchState::Idle { input: String::new() },
      generation: 0,
    }
  }

  pub fn state(&self) -> &SearchState { &self.state }

  pub fn generation(&self) -> u64 { self.generation }

  /// Replace the input, returning to `Idle`. Clears any prior
  /// `Invalid`/`Failed`/`Found` state, and invalidates an in-flight lookup:
  /// its resolution will no longer match the current generation.
  pub fn update_input(&mut self, raw: impl Into<String>) -> &SearchState {
    self.generation += 1;
    self.state = SearchState::Idle { input: raw.into() };
    &self.state
  }

  /// Validate the current input and, if it passes, move to `Pending`.
  ///
  /// Returns the [`Attempt`] the caller performs as exactly one request, or
  /// `None` when no request may be issued: validation failed (fail-fast, no
  /// side effects), or a lookup is already in flight.
  pub fn submit(&mut self) -> Option<Attempt> {
    if self.state.is_pending() {
      return None;
    }
    let input = self.state.input().to_string();
    if let Err(reason) = validate(&input) {
      self.state = SearchState::Invalid { input, reason: reason.to_string() };
      return None;
    }
    self.generation += 1;
    self.state = SearchState::Pending { input: input.clone() };
    Some(Attempt { generation: self.generation, phone: input })
  }

  /// Apply the outcome of a finished lookup.
  ///
  /// The outcome is discarded unless `generation` still matches and the
  /// session is still `Pending` — a reset, an input edit, or a newer
  /// submission in the meantime makes the result stale.
  pub fn resolve(
    &mut self,
    generation: u64,
    outcome: Result<LookupRecord, LookupError>,
  ) -> &SearchState {
    if generation != self.generation || !self.state.is_pending() {
      return &self.state;
    }
    self.state = match outcome {
      Ok(record) => SearchState::Found { record },
      Err(err) => SearchState::Failed {
        input:  self.state.input().to_string(),
        reason: err.user_message(),
      },
    };
    &self.state
  }

  /// Return to a fresh `Idle` state, invalidating any in-flight lookup.
  pub fn reset(&mut self) -> &SearchState {
    self.generation += 1;
    self.state = SearchState::Idle { input: String::new() };
    &self.state
  }
}
