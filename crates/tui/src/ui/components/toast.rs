use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{
    app::{ToastLevel, ToastState},
    ui::theme::Theme,
};

const HEIGHT: u16 = 3;

/// Bottom-right notice, kept clear of the hints bar.
pub fn render(frame: &mut Frame<'_>, area: Rect, toast: Option<&ToastState>) {
    let Some(toast) = toast else {
        return;
    };
    let theme = Theme::default();
    let (marker, color) = match toast.level {
        ToastLevel::Info => ("•", theme.text),
        ToastLevel::Success => ("✓", theme.amount),
    };

    let text_width = toast.message.chars().count() + marker.chars().count() + 1;
    let width = u16::try_from(text_width + 4)
        .unwrap_or(u16::MAX)
        .min(area.width);
    let rect = Rect {
        x: area.right().saturating_sub(width),
        y: area.bottom().saturating_sub(HEIGHT + 1),
        width,
        height: HEIGHT,
    }
    .intersection(area);

    let line = Line::from(vec![
        Span::styled(marker, Style::default().fg(color)),
        Span::raw(" "),
        Span::styled(toast.message.clone(), Style::default().fg(theme.text)),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color));

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(line).block(block), rect);
}
