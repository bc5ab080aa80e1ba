//! TUI rendering — picks the screen for the current workflow state.

pub mod result;
pub mod search;

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};
use rodfa_core::search::SearchState;

use crate::app::App;

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0]);

  match app.state() {
    SearchState::Found { record } => result::draw(f, rows[1], record),
    state => search::draw(f, rows[1], state),
  }

  draw_status(f, rows[2], app);
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect) {
  let left = Span::styled(
    " rodfa  поиск по номеру телефона",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(Line::from(left)), inner);
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = match app.state() {
    SearchState::Pending { .. } => ("SEARCH", "Поиск данных…  Esc — отмена"),
    SearchState::Found { .. } => ("RESULT", "Enter — новый поиск  Ctrl-C — выход"),
    _ => ("INPUT", "Enter — найти  Esc — сброс  Ctrl-C — выход"),
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(
    format!("  {hints}"),
    Style::default().fg(Color::DarkGray),
  );

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}

// ─── Layout helper ────────────────────────────────────────────────────────────

/// A horizontally centred column of `width` cells (clamped to `area`).
pub(crate) fn centered_column(area: Rect, width: u16) -> Rect {
  let width = width.min(area.width);
  let x = area.x + (area.width - width) / 2;
  Rect { x, width, ..area }
}
