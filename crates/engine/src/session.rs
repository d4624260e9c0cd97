//! Owner of the ledger and of the edit mode.
//!
//! A [`Session`] is what a front end drives: it keeps the entry form, the
//! ledger and the view state together and applies the insert-or-replace rule
//! when the form is submitted.

use chrono_tz::Tz;

use crate::{
    Clock, Earning, EarningId, EngineError, EntryForm, IdGenerator, Ledger, MoneyCents,
    Reconciled, ResultEngine, SystemClock, UuidIds,
    view::{Page, PageSize, SortKey, SortState, ViewState},
};

/// Whether a record is currently loaded in the form for editing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    /// The record stays in the ledger until the form is saved.
    Editing(Earning),
}

#[derive(Debug)]
pub struct Session {
    ledger: Ledger,
    form: EntryForm,
    edit: EditState,
    view: ViewState,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
}

impl Session {
    /// Return a builder for `Session`.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EntryForm {
        &mut self.form
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    pub fn editing(&self) -> Option<&Earning> {
        match &self.edit {
            EditState::Idle => None,
            EditState::Editing(earning) => Some(earning),
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Total over the whole ledger, not only the visible page.
    pub fn total(&self) -> MoneyCents {
        self.ledger.total()
    }

    /// The page currently shown.
    pub fn page(&self) -> Page<'_> {
        self.ledger.list(&self.view.query())
    }

    /// Loads the record with `id` in the form.
    pub fn begin_edit(&mut self, id: EarningId) -> ResultEngine<()> {
        let earning = self
            .ledger
            .get(id)
            .cloned()
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))?;
        tracing::debug!(%id, "editing earning");
        self.form.load(Some(&earning), self.clock.today_iso());
        self.edit = EditState::Editing(earning);
        Ok(())
    }

    /// Leaves edit mode and clears the form. Does nothing when idle.
    pub fn cancel_edit(&mut self) {
        if let EditState::Editing(earning) = &self.edit {
            tracing::debug!(id = %earning.id, "edit cancelled");
            self.form.reset(self.clock.today_iso());
            self.edit = EditState::Idle;
        }
    }

    /// Submits the form and reconciles the result into the ledger.
    ///
    /// On an invalid amount, or when the ledger cannot take the record,
    /// nothing changes: the ledger, the form inputs and the edit mode are
    /// left as they were.
    pub fn submit(&mut self) -> ResultEngine<Reconciled> {
        let reconciled = self
            .form
            .submit(self.ids.as_mut())
            .and_then(|earning| self.ledger.upsert(earning))
            .inspect_err(|err| tracing::warn!("rejected entry: {err}"))?;
        self.form.reset(self.clock.today_iso());
        self.edit = EditState::Idle;
        self.view.sync(self.ledger.len());
        Ok(reconciled)
    }

    /// Removes a record. Deleting the record being edited also leaves edit
    /// mode.
    pub fn delete(&mut self, id: EarningId) -> ResultEngine<Earning> {
        let removed = self.ledger.delete(id)?;
        if self.editing().is_some_and(|e| e.id == id) {
            self.form.reset(self.clock.today_iso());
            self.edit = EditState::Idle;
        }
        self.view.sync(self.ledger.len());
        Ok(removed)
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        self.view.toggle_sort(key);
        tracing::debug!(sort = ?self.view.sort(), "sort changed");
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.view.set_page_size(page_size);
        tracing::debug!(page_size = page_size.get(), "page size changed");
    }

    pub fn cycle_page_size(&mut self) {
        self.set_page_size(self.view.page_size().next());
    }

    pub fn next_page(&mut self) {
        self.view.next_page(self.ledger.len());
    }

    pub fn prev_page(&mut self) {
        self.view.prev_page();
    }
}

/// Builder for [`Session`]. Unset parts fall back to the UTC wall clock,
/// random ids and the default view.
#[derive(Debug, Default)]
pub struct SessionBuilder {
    clock: Option<Box<dyn Clock>>,
    ids: Option<Box<dyn IdGenerator>>,
    sort: SortState,
    page_size: PageSize,
}

impl SessionBuilder {
    pub fn clock(mut self, clock: impl Clock + 'static) -> SessionBuilder {
        self.clock = Some(Box::new(clock));
        self
    }

    pub fn ids(mut self, ids: impl IdGenerator + 'static) -> SessionBuilder {
        self.ids = Some(Box::new(ids));
        self
    }

    pub fn sort(mut self, sort: SortState) -> SessionBuilder {
        self.sort = sort;
        self
    }

    pub fn page_size(mut self, page_size: PageSize) -> SessionBuilder {
        self.page_size = page_size;
        self
    }

    /// Construct `Session` with an empty ledger.
    pub fn build(self) -> Session {
        let clock = self
            .clock
            .unwrap_or_else(|| Box::new(SystemClock::new(Tz::UTC)));
        let ids = self.ids.unwrap_or_else(|| Box::new(UuidIds));
        let form = EntryForm::new(clock.today_iso());

        Session {
            ledger: Ledger::new(),
            form,
            edit: EditState::Idle,
            view: ViewState::new(self.sort, self.page_size),
            clock,
            ids,
        }
    }
}
