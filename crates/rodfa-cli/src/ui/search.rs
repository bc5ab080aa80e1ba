//! Search screen — input box, reason line, pending indicator.

use ratatui::{
  Frame,
  layout::{Alignment, Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};
use rodfa_core::search::SearchState;

use super::centered_column;

const PLACEHOLDER: &str = "+7 (___) ___-__-__";

/// Render the search screen into `area`.
pub fn draw(f: &mut Frame, area: Rect, state: &SearchState) {
  let column = centered_column(area, 46);

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Min(1),    // top padding
      Constraint::Length(1), // title
      Constraint::Length(1), // subtitle
      Constraint::Length(1),
      Constraint::Length(3), // input box
      Constraint::Length(1), // reason / pending line
      Constraint::Length(1),
      Constraint::Length(1), // footnote
      Constraint::Min(1),    // bottom padding
    ])
    .split(column);

  let title = Paragraph::new(Line::from(Span::styled(
    "RODFA",
    Style::default()
      .fg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  )))
  .alignment(Alignment::Center);
  f.render_widget(title, rows[1]);

  let subtitle = Paragraph::new("Поиск информации по номеру телефона")
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
  f.render_widget(subtitle, rows[2]);

  draw_input(f, rows[4], state);
  draw_message(f, rows[5], state);

  let footnote =
    Paragraph::new("Поиск производится по открытым источникам и базам данных")
      .style(Style::default().fg(Color::DarkGray))
      .alignment(Alignment::Center);
  f.render_widget(footnote, rows[7]);
}

fn draw_input(f: &mut Frame, area: Rect, state: &SearchState) {
  let block = Block::default()
    .title(" Номер телефона ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let input = state.input();
  let content = if input.is_empty() {
    Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))
  } else {
    Span::raw(input.to_string())
  };
  f.render_widget(Paragraph::new(Line::from(content)), inner);
}

fn draw_message(f: &mut Frame, area: Rect, state: &SearchState) {
  let line = match state {
    SearchState::Invalid { reason, .. } | SearchState::Failed { reason, .. } => {
      Line::from(Span::styled(
        reason.clone(),
        Style::default().fg(Color::Red),
      ))
    }
    SearchState::Pending { .. } => Line::from(Span::styled(
      "Поиск данных…",
      Style::default().fg(Color::Yellow),
    )),
    _ => Line::from(""),
  };
  f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
