use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use engine::{EarningId, EngineError, Reconciled, Session, SortKey};

use crate::{
    error::{AppError, Result},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

/// Pane receiving the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
}

/// Short notice shown until the next key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
}

/// Blocking message; every key except Enter/Esc is swallowed while it is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertState {
    pub title: String,
    pub message: String,
}

/// Pending delete waiting for the user's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmState {
    pub id: EarningId,
    pub summary: String,
}

#[derive(Debug)]
pub struct AppState {
    pub session: Session,
    pub focus: Focus,
    /// Index of the highlighted row within the current page.
    pub selected: usize,
    pub confirm: Option<ConfirmState>,
    pub alert: Option<AlertState>,
    pub toast: Option<ToastState>,
}

impl AppState {
    /// Id of the highlighted row, if the page has any.
    pub fn selected_id(&self) -> Option<EarningId> {
        self.session
            .page()
            .items
            .get(self.selected)
            .map(|earning| earning.id)
    }

    fn clamp_selection(&mut self) {
        let len = self.session.page().items.len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

pub struct App {
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(session: Session) -> Self {
        let state = AppState {
            session,
            focus: Focus::Form,
            selected: 0,
            confirm: None,
            alert: None,
            toast: None,
        };

        Self {
            state,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit() {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        tracing::info!("quit requested");
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = map_key(key);
        self.state.toast = None;

        if action == AppAction::Quit {
            self.should_quit = true;
            return;
        }
        if self.state.alert.is_some() {
            if matches!(action, AppAction::Submit | AppAction::Cancel) {
                self.state.alert = None;
            }
            return;
        }
        if self.state.confirm.is_some() {
            self.handle_confirm_key(action);
            return;
        }

        match self.state.focus {
            Focus::Form => self.handle_form_key(action),
            Focus::List => self.handle_list_key(action),
        }
        self.state.clamp_selection();
    }

    fn handle_confirm_key(&mut self, action: AppAction) {
        match action {
            AppAction::Submit | AppAction::Input('y' | 'Y') => {
                if let Some(confirm) = self.state.confirm.take() {
                    self.delete(confirm.id);
                }
            }
            AppAction::Cancel | AppAction::Input('n' | 'N') => {
                self.state.confirm = None;
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, action: AppAction) {
        match action {
            AppAction::SwitchFocus => self.state.focus = Focus::List,
            AppAction::Submit => self.submit(),
            AppAction::Cancel => {
                if self.state.session.editing().is_some() {
                    self.state.session.cancel_edit();
                    self.toast(ToastLevel::Info, "Edit cancelled");
                }
            }
            AppAction::Backspace => self.state.session.form_mut().pop_char(),
            AppAction::Up => {
                let form = self.state.session.form_mut();
                form.focus = form.focus.prev();
            }
            AppAction::Down => {
                let form = self.state.session.form_mut();
                form.focus = form.focus.next();
            }
            AppAction::Input(ch) => self.state.session.form_mut().push_char(ch),
            AppAction::Left | AppAction::Right | AppAction::Quit | AppAction::None => {}
        }
    }

    fn handle_list_key(&mut self, action: AppAction) {
        match action {
            AppAction::SwitchFocus => self.state.focus = Focus::Form,
            AppAction::Cancel => self.state.session.cancel_edit(),
            AppAction::Up | AppAction::Input('k') => {
                self.state.selected = self.state.selected.saturating_sub(1);
            }
            AppAction::Down | AppAction::Input('j') => {
                self.state.selected += 1;
            }
            AppAction::Left | AppAction::Input('p') => {
                self.state.session.prev_page();
                self.state.selected = 0;
            }
            AppAction::Right | AppAction::Input('n') => {
                self.state.session.next_page();
                self.state.selected = 0;
            }
            AppAction::Submit | AppAction::Input('e') => self.begin_edit(),
            AppAction::Input('d') => self.request_delete(),
            AppAction::Input('s') => self.sort_by(SortKey::Date),
            AppAction::Input('a') => self.sort_by(SortKey::Amount),
            AppAction::Input('z') => {
                self.state.session.cycle_page_size();
                self.state.selected = 0;
            }
            AppAction::Input('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn submit(&mut self) {
        match self.state.session.submit() {
            Ok(Reconciled::Inserted) => {
                self.state.selected = 0;
                self.toast(ToastLevel::Success, "Earning added");
            }
            Ok(Reconciled::Updated) => self.toast(ToastLevel::Success, "Earning saved"),
            Err(EngineError::InvalidAmount(_)) => {
                self.alert("Invalid amount", "Please enter a positive number.");
            }
            Err(EngineError::TotalOverflow(_)) => {
                self.alert("Amount too large", "The running total cannot hold this amount.");
            }
            Err(err) => self.alert("Error", &err.to_string()),
        }
    }

    fn begin_edit(&mut self) {
        let Some(id) = self.state.selected_id() else {
            return;
        };
        match self.state.session.begin_edit(id) {
            Ok(()) => self.state.focus = Focus::Form,
            Err(err) => self.alert("Error", &err.to_string()),
        }
    }

    fn request_delete(&mut self) {
        let page = self.state.session.page();
        let Some(earning) = page.items.get(self.state.selected) else {
            return;
        };
        let summary = format!("{}  {}", earning.date, earning.amount);
        let id = earning.id;
        self.state.confirm = Some(ConfirmState { id, summary });
    }

    fn delete(&mut self, id: EarningId) {
        match self.state.session.delete(id) {
            Ok(_) => self.toast(ToastLevel::Success, "Earning deleted"),
            Err(err) => {
                tracing::warn!(%id, "delete failed: {err}");
                self.alert("Error", &err.to_string());
            }
        }
    }

    fn sort_by(&mut self, key: SortKey) {
        self.state.session.toggle_sort(key);
        self.state.selected = 0;
    }

    fn toast(&mut self, level: ToastLevel, message: &str) {
        self.state.toast = Some(ToastState {
            message: message.to_string(),
            level,
        });
    }

    fn alert(&mut self, title: &str, message: &str) {
        self.state.alert = Some(AlertState {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}
