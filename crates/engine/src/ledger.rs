use crate::{
    Earning, EarningId, EngineError, MoneyCents, ResultEngine,
    view::{self, ListQuery, Page},
};

/// Outcome of [`Ledger::upsert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reconciled {
    /// The id was new: the earning was prepended.
    Inserted,
    /// The id existed: the earning replaced the old record in place.
    Updated,
}

/// In-memory list of earnings for the session.
///
/// The canonical order is the insertion order (newest insert first); display
/// ordering is derived through [`Ledger::list`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: Vec<Earning>,
}

impl Ledger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in canonical order.
    pub fn entries(&self) -> &[Earning] {
        &self.entries
    }

    pub fn get(&self, id: EarningId) -> Option<&Earning> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn position(&self, id: EarningId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Sum of every amount in the ledger.
    ///
    /// Every mutation keeps this sum within `i64` cents.
    pub fn total(&self) -> MoneyCents {
        let cents = sum_cents(self.entries.iter().map(|e| e.amount));
        MoneyCents::new(cents.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
    }

    fn prepend(&mut self, earning: Earning) -> ResultEngine<()> {
        let amounts = self.entries.iter().map(|e| e.amount);
        ensure_total_fits(sum_cents(amounts) + i128::from(earning.amount.cents()))?;
        tracing::info!(id = %earning.id, amount = %earning.amount, "earning added");
        self.entries.insert(0, earning);
        Ok(())
    }

    fn replace_at(&mut self, index: usize, earning: Earning) -> ResultEngine<()> {
        let amounts = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| if i == index { earning.amount } else { e.amount });
        ensure_total_fits(sum_cents(amounts))?;
        tracing::info!(id = %earning.id, amount = %earning.amount, "earning updated");
        self.entries[index] = earning;
        Ok(())
    }

    /// Prepends a new earning. Fails if the id is already present.
    pub fn insert(&mut self, earning: Earning) -> ResultEngine<()> {
        if self.position(earning.id).is_some() {
            return Err(EngineError::ExistingKey(earning.id.to_string()));
        }
        self.prepend(earning)
    }

    /// Replaces the earning with the same id, keeping its position.
    pub fn update(&mut self, earning: Earning) -> ResultEngine<()> {
        let index = self
            .position(earning.id)
            .ok_or_else(|| EngineError::KeyNotFound(earning.id.to_string()))?;
        self.replace_at(index, earning)
    }

    /// Replace-by-id if present, prepend otherwise.
    ///
    /// The ledger is left untouched when the new total would not fit.
    pub fn upsert(&mut self, earning: Earning) -> ResultEngine<Reconciled> {
        match self.position(earning.id) {
            Some(index) => {
                self.replace_at(index, earning)?;
                Ok(Reconciled::Updated)
            }
            None => {
                self.prepend(earning)?;
                Ok(Reconciled::Inserted)
            }
        }
    }

    pub fn delete(&mut self, id: EarningId) -> ResultEngine<Earning> {
        let index = self
            .position(id)
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))?;
        let remaining = self
            .entries
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, e)| e.amount);
        ensure_total_fits(sum_cents(remaining))?;
        tracing::info!(%id, "earning deleted");
        Ok(self.entries.remove(index))
    }

    /// Sorted, paginated view of the ledger.
    pub fn list(&self, query: &ListQuery) -> Page<'_> {
        view::paginate(&self.entries, query)
    }
}

fn sum_cents(amounts: impl Iterator<Item = MoneyCents>) -> i128 {
    amounts.map(|amount| i128::from(amount.cents())).sum()
}

fn ensure_total_fits(cents: i128) -> ResultEngine<()> {
    if i64::try_from(cents).is_err() {
        return Err(EngineError::TotalOverflow(format!(
            "{cents} cents exceeds the ledger limit"
        )));
    }
    Ok(())
}
