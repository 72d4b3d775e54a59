//! Amount aliases and enums shared across the domain.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rupee amount. Fractional values are allowed and only rounded for display.
pub type MonetaryAmount = f64;

/// Annual interest or return rate in percent (`6.5` means 6.5%).
pub type RatePercent = f64;

/// Whole months, the time unit shared by the deposit calculators.
pub type DurationMonths = u32;

/// Product tag selecting one of the maturity calculators.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Fd,
    Rd,
    Sip,
}

impl ProductKind {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fd" | "fixed" | "fixed-deposit" => Some(ProductKind::Fd),
            "rd" | "recurring" | "recurring-deposit" => Some(ProductKind::Rd),
            "sip" => Some(ProductKind::Sip),
            _ => None,
        }
    }

    /// Label of the duration argument the calculator expects.
    pub fn duration_unit(self) -> &'static str {
        match self {
            ProductKind::Fd | ProductKind::Rd => "months",
            ProductKind::Sip => "years",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProductKind::Fd => "Fixed Deposit",
            ProductKind::Rd => "Recurring Deposit",
            ProductKind::Sip => "SIP",
        };
        f.write_str(label)
    }
}
