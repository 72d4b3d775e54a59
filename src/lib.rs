#![doc(test(attr(deny(warnings))))]

//! Finwise bundles the financial-literacy calculators (FD, RD, SIP), savings-goal
//! tracking, and the budget splitter behind a small terminal shell.
//!
//! The calculation core lives in [`finwise_core`] over the plain data of
//! [`finwise_domain`]; this crate adds presentation and the binary.

pub mod cli;
pub mod currency;
pub mod errors;
pub mod utils;

pub use finwise_config;
pub use finwise_core;
pub use finwise_domain;

use std::sync::Once;

static STARTUP: Once = Once::new();

/// Installs the tracing subscriber and logs the build once per process.
pub fn init() {
    STARTUP.call_once(|| {
        utils::init_tracing();
        tracing::info!(build = %utils::build_info::current(), "finwise starting");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
    }
}
