use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use engine::{Earning, SortKey};

use crate::{
    app::{AppState, Focus},
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let session = &state.session;
    let view = session.view();
    let sort = view.sort();

    let mut title = vec![Span::styled(" Earnings ", Style::default().fg(theme.accent))];
    for key in [SortKey::Date, SortKey::Amount] {
        title.push(Span::raw(" "));
        if key == sort.key {
            title.push(Span::styled(
                format!("[{} {}]", key.label(), sort.dir.arrow()),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            title.push(Span::styled(key.label(), Style::default().fg(theme.muted)));
        }
    }
    title.push(Span::styled(
        format!("  {}/page ", view.page_size().get()),
        Style::default().fg(theme.muted),
    ));

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.frame_style(state.focus == Focus::List));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let page = session.page();
    if page.items.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No earnings yet. Add one above.",
                Style::default().fg(theme.muted),
            )))
            .alignment(Alignment::Center),
            layout[0],
        );
    } else {
        let editing_id = session.editing().map(|e| e.id);
        let items = page
            .items
            .iter()
            .map(|earning| row(earning, editing_id == Some(earning.id), &theme))
            .collect::<Vec<_>>();

        let mut list_state = ListState::default();
        if state.focus == Focus::List {
            list_state.select(Some(state.selected));
        }

        let list = List::new(items)
            .highlight_style(theme.selected_style())
            .highlight_symbol("» ");
        frame.render_stateful_widget(list, layout[0], &mut list_state);
    }

    let footer = Line::from(vec![
        Span::styled("Total", Style::default().fg(theme.muted)),
        Span::styled(
            format!(": {}", session.total()),
            Style::default()
                .fg(theme.amount)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Page {}/{}", page.page, page.total_pages),
            Style::default().fg(theme.text),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{} items", page.total_items),
            Style::default().fg(theme.muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(footer), layout[1]);
}

fn row(earning: &Earning, editing: bool, theme: &Theme) -> ListItem<'static> {
    let mut spans = vec![
        Span::styled(earning.date.clone(), Style::default().fg(theme.text)),
        Span::raw("  "),
        Span::styled(
            format!("{:>12}", earning.amount.to_string()),
            Style::default().fg(theme.amount),
        ),
        Span::raw("  "),
        Span::styled(
            earning.note().unwrap_or("-").to_string(),
            Style::default().fg(theme.muted),
        ),
    ];
    if editing {
        spans.push(Span::styled(
            "  (editing)",
            Style::default().fg(theme.editing),
        ));
    }
    ListItem::new(Line::from(spans))
}
