//! Contact tab: the three-field form with inline validation errors.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::i18n::t;
use crate::state::{AppState, ContactField};
use crate::theme::theme;
use crate::ui::helpers::pane_block;

/// What: Render the Contact tab.
pub fn draw(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(area);

    draw_field(f, app, rows[0], ContactField::Name, &app.contact.name.clone());
    draw_field(f, app, rows[1], ContactField::Email, &app.contact.email.clone());
    draw_field(f, app, rows[2], ContactField::Message, &app.contact.message.clone());

    let hint = if app.contact.submitting {
        Span::styled(t(app, "contact.sending"), Style::default().fg(th.yellow))
    } else {
        Span::styled(t(app, "contact.hint"), Style::default().fg(th.overlay))
    };
    f.render_widget(Paragraph::new(Line::from(hint)), rows[3]);
}

/// What: Render one labeled field with its validation error, if any.
fn draw_field(f: &mut Frame, app: &AppState, area: Rect, field: ContactField, value: &str) {
    let th = theme();
    let label_key = match field {
        ContactField::Name => "contact.name",
        ContactField::Email => "contact.email",
        ContactField::Message => "contact.message",
    };
    let mut title = t(app, label_key);
    if let Some(error_key) = app.contact.error_for(field) {
        title.push_str(" — ");
        title.push_str(&t(app, error_key));
    }
    let focused = app.contact.focus == field;
    let mut block = pane_block(title, focused);
    if app.contact.error_for(field).is_some() {
        block = block.border_style(Style::default().fg(th.red));
    }
    let placeholder_key = match field {
        ContactField::Name => "contact.name_placeholder",
        ContactField::Email => "contact.email_placeholder",
        ContactField::Message => "contact.message_placeholder",
    };
    let content = if value.is_empty() && !focused {
        Span::styled(t(app, placeholder_key), Style::default().fg(th.overlay))
    } else {
        Span::styled(value.to_string(), Style::default().fg(th.text))
    };
    f.render_widget(Paragraph::new(content).block(block), area);
}
