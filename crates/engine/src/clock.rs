//! Sources of "now" and of fresh ids.
//!
//! Both are passed in explicitly so tests can pin the date and predict ids.

use std::fmt::Debug;

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use uuid::Uuid;

use crate::EarningId;

/// ISO format used for earning dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Provides the current calendar day.
pub trait Clock: Debug {
    fn today(&self) -> NaiveDate;

    /// Today's date formatted as `YYYY-MM-DD`.
    fn today_iso(&self) -> String {
        self.today().format(DATE_FORMAT).to_string()
    }
}

/// Wall clock evaluated in a fixed time zone.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }
}

/// Clock frozen on a given day.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Hands out ids for new earnings.
pub trait IdGenerator: Debug {
    fn next_id(&mut self) -> EarningId;
}

/// Random (v4) UUIDs.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> EarningId {
        EarningId::from_uuid(Uuid::new_v4())
    }
}

/// Deterministic ids `00000000-0000-0000-0000-000000000001`, `...02`, ...
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialIds {
    last: u128,
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> EarningId {
        self.last += 1;
        EarningId::from_uuid(Uuid::from_u128(self.last))
    }
}
