use crate::{Earning, EarningId, IdGenerator, MoneyCents, ResultEngine};

/// Input field of the entry form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Amount,
    Date,
    Note,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Amount => "Amount",
            Self::Date => "Date",
            Self::Note => "Note",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Amount => Self::Date,
            Self::Date => Self::Note,
            Self::Note => Self::Amount,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Amount => Self::Note,
            Self::Date => Self::Amount,
            Self::Note => Self::Date,
        }
    }
}

/// Raw text of the amount/date/note inputs.
///
/// When `editing` is set the next submit keeps that id, which is what turns it
/// into an update once the record reaches the ledger.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryForm {
    pub amount: String,
    pub date: String,
    pub note: String,
    pub focus: FormField,
    editing: Option<EarningId>,
}

impl EntryForm {
    #[must_use]
    pub fn new(today: String) -> Self {
        Self {
            date: today,
            ..Self::default()
        }
    }

    pub fn editing(&self) -> Option<EarningId> {
        self.editing
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Fills the inputs from `editing`, or clears them when `None`.
    pub fn load(&mut self, editing: Option<&Earning>, today: String) {
        match editing {
            Some(earning) => {
                self.amount = earning.amount.to_string();
                self.date = earning.date.clone();
                self.note = earning.note.clone();
                self.editing = Some(earning.id);
            }
            None => {
                self.amount.clear();
                self.date = today;
                self.note.clear();
                self.editing = None;
            }
        }
        self.focus = FormField::Amount;
    }

    /// Clears the inputs and leaves edit mode.
    pub fn reset(&mut self, today: String) {
        self.load(None, today);
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Amount => &self.amount,
            FormField::Date => &self.date,
            FormField::Note => &self.note,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Amount => &mut self.amount,
            FormField::Date => &mut self.date,
            FormField::Note => &mut self.note,
        }
    }

    pub fn push_char(&mut self, ch: char) {
        self.field_mut(self.focus).push(ch);
    }

    pub fn pop_char(&mut self) {
        self.field_mut(self.focus).pop();
    }

    /// Builds the record described by the inputs.
    ///
    /// Only the amount is validated. The inputs are never touched here; the
    /// owner resets the form once the record has been stored.
    pub fn submit(&self, ids: &mut dyn IdGenerator) -> ResultEngine<Earning> {
        let amount = MoneyCents::parse_positive(&self.amount)?;
        let earning = Earning {
            id: self.editing.unwrap_or_else(|| ids.next_id()),
            amount,
            date: self.date.clone(),
            note: self.note.trim().to_string(),
        };
        Ok(earning)
    }
}
