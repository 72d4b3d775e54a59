//! finwise-core
//!
//! Calculators and services for Finwise.
//! Depends on finwise-domain. No CLI, no terminal I/O, no storage.

pub mod budget_service;
pub mod budget_summary;
pub mod error;
pub mod goal_progress;
pub mod goal_service;
pub mod maturity;
pub mod time;

pub use budget_service::*;
pub use budget_summary::*;
pub use error::CoreError;
pub use goal_progress::*;
pub use goal_service::*;
pub use maturity::*;
pub use time::*;
