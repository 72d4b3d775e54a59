//! Aggregation of budget line items into totals, badges, and advisory suggestions.

use std::fmt;

use serde::Serialize;
use tracing::trace;

use finwise_domain::{Budget, BudgetLineItem, MonetaryAmount};

use crate::error::{ensure_finite, CoreError};

const SAVED_BADGE_THRESHOLD: MonetaryAmount = 500.0;
const BUDGET_PRO_ITEM_COUNT: usize = 5;
const SMART_SAVER_ESSENTIAL_SHARE: f64 = 0.7;
const CHALLENGE_NON_ESSENTIAL_SHARE: f64 = 0.3;
const STRONG_SAVINGS_SHARE: f64 = 0.1;
const NON_ESSENTIAL_CUT_SHARE: f64 = 0.2;
const SURPLUS_INVEST_SHARE: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Badge {
    FirstBudgetCreated,
    Saved500,
    BudgetPro,
    SmartSaver,
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Badge::FirstBudgetCreated => "First Budget Created",
            Badge::Saved500 => "Saved \u{20b9}500+",
            Badge::BudgetPro => "Budget Pro",
            Badge::SmartSaver => "Smart Saver",
        };
        f.write_str(label)
    }
}

/// Advice derived from the aggregates. Amounts are whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Suggestion {
    /// Non-essential spending exceeds essential spending.
    ReduceNonEssential { suggested_cut: MonetaryAmount },
    OverBudget { overspend: MonetaryAmount },
    /// Savings exceed a tenth of the total budget.
    InvestSurplus { suggested_investment: MonetaryAmount },
}

impl Suggestion {
    /// Advice text with amounts rendered by `amount`.
    pub fn message(&self, amount: impl Fn(MonetaryAmount) -> String) -> String {
        match self {
            Suggestion::ReduceNonEssential { suggested_cut } => format!(
                "You're spending more on non-essentials. Consider reducing by {} to boost savings.",
                amount(*suggested_cut)
            ),
            Suggestion::OverBudget { .. } => {
                "You're over budget! Focus on essential items and look for alternatives.".to_string()
            }
            Suggestion::InvestSurplus {
                suggested_investment,
            } => format!(
                "Great job! You're saving well. Consider investing the extra {}.",
                amount(*suggested_investment)
            ),
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message(|value| format!("{value:.0}")))
    }
}

/// Roll-up of a budget's line items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub item_count: usize,
    pub total_budget: MonetaryAmount,
    pub total_planned: MonetaryAmount,
    pub total_actual: MonetaryAmount,
    /// Planned minus actual; negative when over budget.
    pub total_savings: MonetaryAmount,
    pub essential_spending: MonetaryAmount,
    pub non_essential_spending: MonetaryAmount,
    pub badges: Vec<Badge>,
    pub challenge_completed: bool,
    pub suggestions: Vec<Suggestion>,
}

impl BudgetSummary {
    pub fn is_over_budget(&self) -> bool {
        self.total_savings < 0.0
    }

    /// Share of actual spending on essentials in percent, 0 when nothing was spent.
    pub fn essential_share_percent(&self) -> f64 {
        share_percent(self.essential_spending, self.total_actual)
    }

    pub fn non_essential_share_percent(&self) -> f64 {
        share_percent(self.non_essential_spending, self.total_actual)
    }

    /// Progress toward `target` in percent, capped at 100 and floored at 0.
    pub fn savings_target_progress(&self, target: MonetaryAmount) -> f64 {
        if target <= 0.0 {
            return 0.0;
        }
        (self.total_savings / target * 100.0).clamp(0.0, 100.0)
    }

    /// Savings counted toward the target; overspend counts as nothing saved.
    pub fn saved_toward_target(&self) -> MonetaryAmount {
        self.total_savings.max(0.0)
    }

    pub fn has_badge(&self, badge: Badge) -> bool {
        self.badges.contains(&badge)
    }
}

fn share_percent(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// Recomputes every aggregate for `items` against the overall `total_budget`.
pub fn compute_budget_summary(
    items: &[BudgetLineItem],
    total_budget: MonetaryAmount,
) -> Result<BudgetSummary, CoreError> {
    let total_budget = ensure_finite("total budget", total_budget)?;

    let mut total_planned = 0.0;
    let mut essential_spending = 0.0;
    let mut non_essential_spending = 0.0;
    for item in items {
        total_planned += ensure_finite("planned amount", item.planned)?;
        let actual = ensure_finite("actual amount", item.actual)?;
        if item.is_essential {
            essential_spending += actual;
        } else {
            non_essential_spending += actual;
        }
    }
    let total_actual = essential_spending + non_essential_spending;
    let total_savings = total_planned - total_actual;

    let summary = BudgetSummary {
        item_count: items.len(),
        total_budget,
        total_planned,
        total_actual,
        total_savings,
        essential_spending,
        non_essential_spending,
        badges: earned_badges(items.len(), total_savings, total_actual, essential_spending),
        challenge_completed: total_actual > 0.0
            && non_essential_spending / total_actual < CHALLENGE_NON_ESSENTIAL_SHARE,
        suggestions: suggestions(
            total_budget,
            total_savings,
            essential_spending,
            non_essential_spending,
        ),
    };
    trace!(
        items = summary.item_count,
        total_planned,
        total_actual,
        "budget summary computed"
    );
    Ok(summary)
}

/// Convenience wrapper over [`compute_budget_summary`] for a whole budget.
pub fn summarize_budget(budget: &Budget) -> Result<BudgetSummary, CoreError> {
    compute_budget_summary(&budget.items, budget.total_budget)
}

fn earned_badges(
    item_count: usize,
    total_savings: f64,
    total_actual: f64,
    essential_spending: f64,
) -> Vec<Badge> {
    let mut badges = Vec::new();
    if item_count > 0 {
        badges.push(Badge::FirstBudgetCreated);
    }
    if total_savings >= SAVED_BADGE_THRESHOLD {
        badges.push(Badge::Saved500);
    }
    if item_count >= BUDGET_PRO_ITEM_COUNT {
        badges.push(Badge::BudgetPro);
    }
    if total_actual > 0.0 && essential_spending / total_actual > SMART_SAVER_ESSENTIAL_SHARE {
        badges.push(Badge::SmartSaver);
    }
    badges
}

fn suggestions(
    total_budget: f64,
    total_savings: f64,
    essential_spending: f64,
    non_essential_spending: f64,
) -> Vec<Suggestion> {
    let mut out = Vec::new();
    if non_essential_spending > essential_spending {
        out.push(Suggestion::ReduceNonEssential {
            suggested_cut: (non_essential_spending * NON_ESSENTIAL_CUT_SHARE).round(),
        });
    }
    if total_savings < 0.0 {
        out.push(Suggestion::OverBudget {
            overspend: -total_savings,
        });
    }
    if total_savings > total_budget * STRONG_SAVINGS_SHARE {
        out.push(Suggestion::InvestSurplus {
            suggested_investment: (total_savings * SURPLUS_INVEST_SHARE).round(),
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(planned: f64, actual: f64, essential: bool) -> BudgetLineItem {
        let mut item = BudgetLineItem::new("Item", planned, essential);
        item.actual = actual;
        item
    }

    #[test]
    fn mixed_budget_totals() {
        let items = vec![item(5_000.0, 4_000.0, true), item(2_000.0, 3_000.0, false)];
        let summary = compute_budget_summary(&items, 0.0).unwrap();
        assert_eq!(summary.total_planned, 7_000.0);
        assert_eq!(summary.total_actual, 7_000.0);
        assert_eq!(summary.total_savings, 0.0);
        assert_eq!(summary.essential_spending, 4_000.0);
        assert_eq!(summary.non_essential_spending, 3_000.0);
        assert!(!summary.challenge_completed);
        assert_eq!(summary.badges, vec![Badge::FirstBudgetCreated]);
        assert!(summary.suggestions.is_empty());
    }

    #[test]
    fn empty_budget_has_no_badges() {
        let summary = compute_budget_summary(&[], 5_000.0).unwrap();
        assert!(summary.badges.is_empty());
        assert!(!summary.challenge_completed);
        assert_eq!(summary.essential_share_percent(), 0.0);
    }

    #[test]
    fn frugal_budget_earns_every_badge() {
        let items = vec![
            item(3_000.0, 2_000.0, true),
            item(1_000.0, 900.0, true),
            item(800.0, 600.0, true),
            item(500.0, 400.0, true),
            item(400.0, 100.0, false),
        ];
        let summary = compute_budget_summary(&items, 6_000.0).unwrap();
        assert_eq!(summary.total_savings, 1_700.0);
        assert_eq!(
            summary.badges,
            vec![
                Badge::FirstBudgetCreated,
                Badge::Saved500,
                Badge::BudgetPro,
                Badge::SmartSaver
            ]
        );
        assert!(summary.challenge_completed);
        assert_eq!(
            summary.suggestions,
            vec![Suggestion::InvestSurplus {
                suggested_investment: 1_360.0
            }]
        );
        assert_eq!(summary.savings_target_progress(1_000.0), 100.0);
    }

    #[test]
    fn overspending_on_non_essentials_triggers_warnings() {
        let items = vec![item(1_000.0, 800.0, true), item(500.0, 1_500.0, false)];
        let summary = compute_budget_summary(&items, 2_000.0).unwrap();
        assert_eq!(summary.total_savings, -800.0);
        assert!(summary.is_over_budget());
        assert_eq!(
            summary.suggestions,
            vec![
                Suggestion::ReduceNonEssential {
                    suggested_cut: 300.0
                },
                Suggestion::OverBudget { overspend: 800.0 },
            ]
        );
        assert_eq!(summary.saved_toward_target(), 0.0);
        assert_eq!(summary.savings_target_progress(1_000.0), 0.0);
    }

    #[test]
    fn saved_badge_requires_five_hundred() {
        let summary = compute_budget_summary(&[item(999.0, 500.0, true)], 0.0).unwrap();
        assert!(!summary.has_badge(Badge::Saved500));
        let summary = compute_budget_summary(&[item(1_000.0, 500.0, true)], 0.0).unwrap();
        assert!(summary.has_badge(Badge::Saved500));
    }

    #[test]
    fn negative_amounts_are_aggregated() {
        let summary = compute_budget_summary(&[item(-100.0, 50.0, true)], 0.0).unwrap();
        assert_eq!(summary.total_planned, -100.0);
        assert_eq!(summary.total_savings, -150.0);
    }

    #[test]
    fn nan_amount_is_rejected() {
        let err = compute_budget_summary(&[item(f64::NAN, 0.0, true)], 0.0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn suggestion_text_formats_amounts_through_caller() {
        let cut = Suggestion::ReduceNonEssential {
            suggested_cut: 1_250.4,
        };
        assert_eq!(
            cut.to_string(),
            "You're spending more on non-essentials. Consider reducing by 1250 to boost savings."
        );
        assert!(cut
            .message(|value| format!("Rs {value}"))
            .contains("by Rs 1250.4 to"));
    }
}
