//! Application state and event dispatcher for the search workflow.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rodfa_core::{
  error::LookupError,
  record::LookupRecord,
  search::{SearchSession, SearchState},
};
use tokio::sync::mpsc;

use crate::client::LookupClient;

/// Outcome of one finished lookup, tagged with the generation it was issued
/// under.
pub type LookupResolution = (u64, Result<LookupRecord, LookupError>);

/// Top-level application state.
pub struct App {
  /// The search workflow; owns the current [`SearchState`].
  pub session: SearchSession,

  /// Shared HTTP client.
  pub client: Arc<LookupClient>,

  /// Receives finished lookups from spawned request tasks.
  rx: mpsc::UnboundedReceiver<LookupResolution>,
  tx: mpsc::UnboundedSender<LookupResolution>,
}

impl App {
  pub fn new(client: LookupClient) -> Self {
    let (tx, rx) = mpsc::unbounded_channel();
    Self {
      session: SearchSession::new(),
      client: Arc::new(client),
      rx,
      tx,
    }
  }

  /// The current workflow state.
  pub fn state(&self) -> &SearchState { self.session.state() }

  // ── Lookup plumbing ───────────────────────────────────────────────────────

  /// Validate the current input and, if valid, spawn the lookup request.
  /// A no-op while a request is already in flight.
  pub fn submit(&mut self) {
    let Some(attempt) = self.session.submit() else {
      return;
    };
    let client = Arc::clone(&self.client);
    let tx = self.tx.clone();
    tokio::spawn(async move {
      let outcome = client.lookup(&attempt.phone).await;
      // The receiver is dropped on shutdown; a failed send is fine.
      let _ = tx.send((attempt.generation, outcome));
    });
  }

  /// Apply any finished lookups. Stale resolutions are discarded by the
  /// session's generation check.
  pub fn drain_resolutions(&mut self) {
    while let Ok((generation, outcome)) = self.rx.try_recv() {
      self.session.resolve(generation, outcome);
    }
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL)
      && key.code == KeyCode::Char('c')
    {
      return false;
    }

    match self.state() {
      SearchState::Found { .. } => self.handle_result_key(key),
      _ => self.handle_search_key(key),
    }
  }

  fn handle_search_key(&mut self, key: KeyEvent) -> bool {
    // While a request is in flight the input and submit are locked; Esc
    // still resets, and the late response is then discarded by the
    // generation check.
    if self.state().is_pending() {
      if key.code == KeyCode::Esc {
        self.session.reset();
      }
      return true;
    }

    match key.code {
      KeyCode::Enter => self.submit(),
      KeyCode::Esc => {
        self.session.reset();
      }
      KeyCode::Backspace => {
        let mut input = self.state().input().to_string();
        input.pop();
        self.session.update_input(input);
      }
      KeyCode::Char(c) => {
        let mut input = self.state().input().to_string();
        input.push(c);
        self.session.update_input(input);
      }
      _ => {}
    }
    true
  }

  fn handle_result_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      // New search.
      KeyCode::Enter | KeyCode::Esc | KeyCode::Char('n') => {
        self.session.reset();
      }
      _ => {}
    }
    true
  }
}
