//! finwise-domain
//!
//! Pure domain models (budgets, line items, savings goals, daily entries, catalogs).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod budget;
pub mod catalog;
pub mod common;
pub mod goal;

pub use budget::*;
pub use catalog::*;
pub use common::*;
pub use goal::*;
