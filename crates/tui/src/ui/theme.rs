use ratatui::style::{Color, Modifier, Style};

/// Colour roles used by the ledger screens.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub frame: Color,
    pub frame_focused: Color,
    /// Amounts, totals and successful notices.
    pub amount: Color,
    /// Edit mode markers.
    pub editing: Color,
    /// Destructive prompts and rejected input.
    pub alert: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Color::Rgb(225, 222, 210),
            muted: Color::Rgb(135, 135, 125),
            accent: Color::Rgb(95, 170, 150),
            frame: Color::Rgb(75, 80, 80),
            frame_focused: Color::Rgb(95, 170, 150),
            amount: Color::Rgb(130, 195, 105),
            editing: Color::Rgb(225, 175, 75),
            alert: Color::Rgb(210, 85, 75),
        }
    }
}

impl Theme {
    pub fn frame_style(&self, focused: bool) -> Style {
        let color = if focused {
            self.frame_focused
        } else {
            self.frame
        };
        Style::default().fg(color)
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}
