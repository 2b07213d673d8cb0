//! Modal rendering: help, thank-you, and alert dialogs.

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::i18n::t;
use crate::state::{AppState, Modal};
use crate::theme::theme;
use crate::ui::helpers::{centered_rect, pane_block};

/// What: Render the active modal, if any, over the current tab.
pub fn draw(f: &mut Frame, app: &AppState) {
    match &app.modal {
        Modal::None => {}
        Modal::Help => draw_help(f, app),
        Modal::ThankYou => draw_message(
            f,
            t(app, "contact.thank_you"),
            t(app, "contact.appreciate"),
            theme().green,
        ),
        Modal::Alert(message) => {
            draw_message(f, t(app, "alert.title"), message.clone(), theme().red);
        }
    }
}

/// What: Render the keybinding overview.
fn draw_help(f: &mut Frame, app: &AppState) {
    let th = theme();
    let area = centered_rect(60, 60, f.area());
    f.render_widget(Clear, area);
    let bindings = [
        ("F2 / F3 / F4", "help.tabs"),
        ("Tab", "help.focus"),
        ("Enter", "help.expand"),
        ("← / →", "help.letter"),
        ("Ctrl+L", "help.language"),
        ("Ctrl+U", "help.clear_filters"),
        ("Ctrl+S", "help.submit"),
        ("q / Ctrl+C", "help.quit"),
    ];
    let lines: Vec<Line> = bindings
        .iter()
        .map(|(keys, key)| {
            Line::from(vec![
                Span::styled(
                    format!("{keys:<14}"),
                    Style::default().fg(th.yellow).add_modifier(Modifier::BOLD),
                ),
                Span::styled(t(app, key), Style::default().fg(th.text)),
            ])
        })
        .collect();
    let para = Paragraph::new(lines)
        .block(pane_block(t(app, "help.title"), true))
        .wrap(Wrap { trim: false });
    f.render_widget(para, area);
}

/// What: Render a one-paragraph message dialog.
fn draw_message(f: &mut Frame, title: String, body: String, color: ratatui::style::Color) {
    let area = centered_rect(50, 30, f.area());
    f.render_widget(Clear, area);
    let para = Paragraph::new(body)
        .block(
            pane_block(title, true)
                .border_style(Style::default().fg(color)),
        )
        .wrap(Wrap { trim: true })
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(para, area);
}
