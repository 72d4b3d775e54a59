//! Read-only reference data shown alongside the calculators.

use serde::Serialize;

use crate::common::ProductKind;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum RiskLevel {
    VeryLow,
    Low,
    Medium,
    High,
}

/// A banking product described in the learning material.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BankingProduct {
    pub name: &'static str,
    pub interest_rate: &'static str,
    pub min_amount: &'static str,
    pub risk: RiskLevel,
    /// Calculator that models this product, if any.
    pub calculator: Option<ProductKind>,
}

/// A SIP or insurance option described in the learning material.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InvestmentOption {
    pub name: &'static str,
    pub expected_return: &'static str,
    pub min_amount: &'static str,
    pub risk: RiskLevel,
    pub is_insurance: bool,
}

pub const BANKING_PRODUCTS: &[BankingProduct] = &[
    BankingProduct {
        name: "Basic Savings Bank Deposit Account (BSBDA)",
        interest_rate: "3.5-4.0% per annum",
        min_amount: "Zero balance",
        risk: RiskLevel::VeryLow,
        calculator: None,
    },
    BankingProduct {
        name: "Fixed Deposit (FD)",
        interest_rate: "6.5-7.5% per annum",
        min_amount: "1,000",
        risk: RiskLevel::VeryLow,
        calculator: Some(ProductKind::Fd),
    },
    BankingProduct {
        name: "Recurring Deposit (RD)",
        interest_rate: "6.0-7.0% per annum",
        min_amount: "100 per month",
        risk: RiskLevel::VeryLow,
        calculator: Some(ProductKind::Rd),
    },
    BankingProduct {
        name: "Kisan Credit Card (KCC)",
        interest_rate: "7% per annum (with subsidy)",
        min_amount: "Based on crop/farming activities",
        risk: RiskLevel::Low,
        calculator: None,
    },
    BankingProduct {
        name: "Crop Insurance Scheme",
        interest_rate: "Premium: 1.5-5% of sum insured",
        min_amount: "Based on crop value",
        risk: RiskLevel::Low,
        calculator: None,
    },
];

pub const INVESTMENT_OPTIONS: &[InvestmentOption] = &[
    InvestmentOption {
        name: "Equity Diversified Fund SIP",
        expected_return: "10-15% annually",
        min_amount: "500 per month",
        risk: RiskLevel::Medium,
        is_insurance: false,
    },
    InvestmentOption {
        name: "Debt Fund SIP",
        expected_return: "6-9% annually",
        min_amount: "1000 per month",
        risk: RiskLevel::Low,
        is_insurance: false,
    },
    InvestmentOption {
        name: "Term Life Insurance",
        expected_return: "Protection only",
        min_amount: "300 per month",
        risk: RiskLevel::Low,
        is_insurance: true,
    },
    InvestmentOption {
        name: "Health Insurance",
        expected_return: "Medical coverage",
        min_amount: "800 per month",
        risk: RiskLevel::Low,
        is_insurance: true,
    },
    InvestmentOption {
        name: "Unit Linked Insurance Plan (ULIP)",
        expected_return: "8-12% annually",
        min_amount: "1500 per month",
        risk: RiskLevel::Medium,
        is_insurance: true,
    },
];

/// Banking products that one of the calculators can project.
pub fn calculable_products() -> impl Iterator<Item = &'static BankingProduct> {
    BANKING_PRODUCTS
        .iter()
        .filter(|product| product.calculator.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fd_and_rd_are_calculable() {
        let kinds: Vec<_> = calculable_products()
            .filter_map(|product| product.calculator)
            .collect();
        assert_eq!(kinds, vec![ProductKind::Fd, ProductKind::Rd]);
    }

    #[test]
    fn catalog_splits_sip_and_insurance() {
        let insurance = INVESTMENT_OPTIONS.iter().filter(|o| o.is_insurance).count();
        assert_eq!(insurance, 3);
        assert_eq!(INVESTMENT_OPTIONS.len() - insurance, 2);
    }
}
