pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, Focus};
use theme::Theme;

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    let theme = Theme::default();

    // Main layout: info bar, form, list, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Length(5), // Entry form
            Constraint::Min(0),    // Ledger list
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    screens::form::render(frame, layout[1], state);
    screens::ledger::render(frame, layout[2], state);
    render_bottom_bar(frame, layout[3], state, &theme);

    components::dialog::render_confirm(frame, area, state.confirm.as_ref());
    components::dialog::render_alert(frame, area, state.alert.as_ref());
    components::toast::render(frame, area, state.toast.as_ref());
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let session = &state.session;
    let mode = if session.editing().is_some() {
        Span::styled("EDITING", Style::default().fg(theme.editing))
    } else {
        Span::styled("NEW", Style::default().fg(theme.amount))
    };

    let line = Line::from(vec![
        Span::styled("Earnings", Style::default().fg(theme.accent)),
        Span::raw("  "),
        Span::styled("Entries", Style::default().fg(theme.muted)),
        Span::raw(format!(": {}  ", session.ledger().len())),
        Span::styled("Mode", Style::default().fg(theme.muted)),
        Span::raw(": "),
        mode,
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = components::hints::hints_to_spans(&context_hints(state), theme);

    parts.push(components::hints::hint_separator(theme));
    parts.extend(components::hints::hints_to_spans(
        &components::hints::common::global_shortcuts(state.focus),
        theme,
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

/// Hints for whatever currently receives keys.
fn context_hints(state: &AppState) -> Vec<components::hints::KeyHint> {
    use components::hints::{KeyHint, common};

    if state.alert.is_some() {
        return vec![KeyHint::new("Enter", "ok")];
    }
    if state.confirm.is_some() {
        return common::confirm();
    }
    match state.focus {
        Focus::Form => {
            let mut hints = common::form_editing();
            if state.session.editing().is_some() {
                hints.push(KeyHint::new("Esc", "cancel edit"));
            }
            hints
        }
        Focus::List => {
            let mut hints = common::list_navigation();
            hints.extend(common::list_actions());
            hints
        }
    }
}
