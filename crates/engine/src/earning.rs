use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::MoneyCents;

/// Stable identifier of an [`Earning`], unique within a ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EarningId(Uuid);

impl EarningId {
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for EarningId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single cash earning.
///
/// `date` is kept as the `YYYY-MM-DD` text the user typed. Ordering by date is
/// a plain string comparison, which is only meaningful while the text keeps
/// the fixed-width, zero-padded format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Earning {
    pub id: EarningId,
    pub amount: MoneyCents,
    pub date: String,
    pub note: String,
}

impl Earning {
    /// Returns the note, or `None` when it is empty.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        if self.note.is_empty() {
            None
        } else {
            Some(self.note.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_note_reads_as_none() {
        let mut earning = Earning {
            id: EarningId::from_uuid(Uuid::nil()),
            amount: MoneyCents::new(100),
            date: "2024-01-05".to_string(),
            note: String::new(),
        };
        assert_eq!(earning.note(), None);

        earning.note = "tips".to_string();
        assert_eq!(earning.note(), Some("tips"));
    }

    fn assert_serde<T: Serialize + for<'de> Deserialize<'de>>() {}

    #[test]
    fn records_are_serde_types() {
        assert_serde::<MoneyCents>();
        assert_serde::<EarningId>();
        assert_serde::<Earning>();
    }
}
