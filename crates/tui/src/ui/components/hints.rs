use ratatui::{style::Style, text::Span};

use crate::ui::theme::Theme;

/// A keyboard hint consisting of a key and its action.
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: String,
    pub action: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Converts a list of key hints into styled spans for rendering.
pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            hint.key.clone(),
            Style::default().fg(theme.accent),
        ));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }

    spans
}

/// Creates a separator span for dividing hint groups.
pub fn hint_separator(theme: &Theme) -> Span<'static> {
    Span::styled("  │  ", Style::default().fg(theme.frame))
}

/// Common hint groups for reuse across panes.
pub mod common {
    use super::KeyHint;
    use crate::app::Focus;

    pub fn list_navigation() -> Vec<KeyHint> {
        vec![KeyHint::new("↑↓", "select"), KeyHint::new("←→", "page")]
    }

    pub fn list_actions() -> Vec<KeyHint> {
        vec![
            KeyHint::new("e", "edit"),
            KeyHint::new("d", "delete"),
            KeyHint::new("s", "by date"),
            KeyHint::new("a", "by amount"),
            KeyHint::new("z", "page size"),
        ]
    }

    pub fn form_editing() -> Vec<KeyHint> {
        vec![KeyHint::new("↑↓", "field"), KeyHint::new("Enter", "save")]
    }

    pub fn confirm() -> Vec<KeyHint> {
        vec![KeyHint::new("y", "delete"), KeyHint::new("n", "cancel")]
    }

    /// `q` is plain text while the form has focus.
    pub fn global_shortcuts(focus: Focus) -> Vec<KeyHint> {
        let target = match focus {
            Focus::Form => "list",
            Focus::List => "form",
        };
        let quit = match focus {
            Focus::Form => KeyHint::new("Ctrl+C", "quit"),
            Focus::List => KeyHint::new("q", "quit"),
        };
        vec![KeyHint::new("Tab", target), quit]
    }
}
