use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use engine::FormField;

use crate::{
    app::{AppState, Focus},
    ui::theme::Theme,
};

const FIELDS: [FormField; 3] = [FormField::Amount, FormField::Date, FormField::Note];

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let form = state.session.form();
    let focused = state.focus == Focus::Form;

    let lines = FIELDS
        .iter()
        .map(|&field| {
            let active = focused && form.focus == field;
            let label_style = if active {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.muted)
            };
            let mut spans = vec![
                Span::styled(format!("{:<7}", field.label()), label_style),
                Span::raw(": "),
                Span::styled(form.field(field).to_string(), Style::default().fg(theme.text)),
            ];
            if active {
                spans.push(Span::styled("▏", Style::default().fg(theme.accent)));
            }
            if field == FormField::Date {
                spans.push(Span::styled("  YYYY-MM-DD", Style::default().fg(theme.muted)));
            }
            Line::from(spans)
        })
        .collect::<Vec<_>>();

    let title = if form.is_editing() {
        " Edit earning "
    } else {
        " New earning "
    };
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(theme.accent)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.frame_style(focused));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
