//! Result screen — one card per display section.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};
use rodfa_core::{
  display::{Badge, DisplayModel},
  record::LookupRecord,
};

use super::centered_column;

/// Render the result screen into `area`.
pub fn draw(f: &mut Frame, area: Rect, record: &LookupRecord) {
  let model = DisplayModel::from_record(record);
  let column = centered_column(area, 60);

  let mut constraints = vec![
    Constraint::Length(4), // identity
    Constraint::Length(5), // location
    Constraint::Length(4), // contacts
    Constraint::Length(3), // social
  ];
  if !model.badges.is_empty() {
    constraints.push(Constraint::Length(3));
  }
  constraints.push(Constraint::Min(0));

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints(constraints)
    .split(column);

  draw_identity(f, rows[0], &model);
  draw_location(f, rows[1], &model);
  draw_contacts(f, rows[2], &model);
  draw_social(f, rows[3], &model);
  if !model.badges.is_empty() {
    draw_badges(f, rows[4], &model);
  }
}

// ─── Cards ────────────────────────────────────────────────────────────────────

fn card(f: &mut Frame, area: Rect, title: &str) -> Rect {
  let block = Block::default()
    .title(format!(" {title} "))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  inner
}

fn field(label: &str, value: &str) -> Line<'static> {
  Line::from(vec![
    Span::styled(
      format!("{label}: "),
      Style::default().fg(Color::DarkGray),
    ),
    Span::raw(value.to_string()),
  ])
}

fn draw_identity(f: &mut Frame, area: Rect, model: &DisplayModel) {
  let inner = card(f, area, "Результат");
  let lines = vec![
    Line::from(Span::styled(
      model.identity.name.clone(),
      Style::default().add_modifier(Modifier::BOLD),
    )),
    Line::from(Span::styled(
      model.identity.phone.clone(),
      Style::default().fg(Color::Cyan),
    )),
  ];
  f.render_widget(Paragraph::new(lines), inner);
}

fn draw_location(f: &mut Frame, area: Rect, model: &DisplayModel) {
  let inner = card(f, area, "Местоположение");
  let lines = vec![
    field("Город", &model.location.location),
    field("Регион", &model.location.region),
    field("Оператор", &model.location.operator),
  ];
  f.render_widget(Paragraph::new(lines), inner);
}

fn draw_contacts(f: &mut Frame, area: Rect, model: &DisplayModel) {
  let inner = card(f, area, "Контакты");
  let lines = vec![
    field("Email", &model.contacts.email),
    field("Последняя активность", &model.contacts.last_seen),
  ];
  f.render_widget(Paragraph::new(lines), inner);
}

fn draw_social(f: &mut Frame, area: Rect, model: &DisplayModel) {
  let inner = card(f, area, "Социальные сети");

  // Platform chips in service order.
  let mut spans = Vec::new();
  for (i, platform) in model.social.iter().enumerate() {
    if i > 0 {
      spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(
      format!(" {platform} "),
      Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));
  }
  if spans.is_empty() {
    spans.push(Span::styled(
      "Не найдены",
      Style::default().fg(Color::DarkGray),
    ));
  }
  f.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn draw_badges(f: &mut Frame, area: Rect, model: &DisplayModel) {
  let inner = card(f, area, "Дополнительно");

  let mut spans = Vec::new();
  for (i, badge) in model.badges.iter().enumerate() {
    if i > 0 {
      spans.push(Span::raw("  "));
    }
    let text = match badge {
      Badge::Occupation(occupation) => format!("Род занятий: {occupation}"),
      Badge::Age(age) => format!("Возраст: {age}"),
    };
    spans.push(Span::styled(text, Style::default().fg(Color::Yellow)));
  }
  f.render_widget(Paragraph::new(Line::from(spans)), inner);
}
