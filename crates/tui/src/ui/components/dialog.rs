use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{
    app::{AlertState, ConfirmState},
    ui::{components::centered_rect, theme::Theme},
};

/// Two-choice prompt shown before a delete.
pub fn render_confirm(frame: &mut Frame<'_>, area: Rect, confirm: Option<&ConfirmState>) {
    let Some(confirm) = confirm else {
        return;
    };
    let theme = Theme::default();
    let popup = centered_rect(50, 6, area);

    let lines = vec![
        Line::from(confirm.summary.as_str()),
        Line::from(""),
        Line::from(vec![
            Span::styled("n", Style::default().fg(theme.accent)),
            Span::raw(" cancel    "),
            Span::styled(
                "y",
                Style::default().fg(theme.alert).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" delete", Style::default().fg(theme.alert)),
        ]),
    ];

    let block = Block::default()
        .title(" Delete earning? ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.alert));
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        popup,
    );
}

pub fn render_alert(frame: &mut Frame<'_>, area: Rect, alert: Option<&AlertState>) {
    let Some(alert) = alert else {
        return;
    };
    let theme = Theme::default();
    let popup = centered_rect(50, 5, area);

    let lines = vec![
        Line::from(alert.message.as_str()),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" ok"),
        ]),
    ];

    let block = Block::default()
        .title(format!(" {} ", alert.title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.editing));
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        popup,
    );
}
