//! Merge-eligibility engine
//!
//! The decision core of the bot, split the same way as fetch/act code is
//! everywhere else in this crate: everything in here is pure. No I/O
//! happens in this module - raw review and check lists are passed in,
//! making every function table-testable without network mocking.

mod checks;
mod evaluate;
mod reviews;

pub use checks::aggregate_checks;
pub use evaluate::can_merge;
pub use reviews::aggregate_reviews;
