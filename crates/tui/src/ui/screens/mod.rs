pub mod form;
pub mod ledger;
