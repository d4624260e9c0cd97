//! In-memory ledger of daily cash earnings.
//!
//! The crate holds everything a front end needs besides drawing:
//!
//! - [`Ledger`]: the canonical list with insert-or-replace-by-id
//!   reconciliation and the running total;
//! - [`EntryForm`]: amount/date/note inputs and their validation;
//! - [`view`]: stable sorting and clamped pagination;
//! - [`Session`]: the owner tying them together with the edit mode.
//!
//! "Now" and id generation are injected through [`Clock`] and
//! [`IdGenerator`].

pub use clock::{Clock, DATE_FORMAT, FixedClock, IdGenerator, SequentialIds, SystemClock, UuidIds};
pub use earning::{Earning, EarningId};
pub use error::EngineError;
pub use form::{EntryForm, FormField};
pub use ledger::{Ledger, Reconciled};
pub use money::MoneyCents;
pub use session::{EditState, Session, SessionBuilder};
pub use view::{ListQuery, Page, PageSize, SortDir, SortKey, SortState, ViewState};

mod clock;
mod earning;
mod error;
mod form;
mod ledger;
mod money;
mod session;
pub mod view;

type ResultEngine<T> = Result<T, EngineError>;
