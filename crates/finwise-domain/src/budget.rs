//! Budget splitter models: line items, budget kinds, and their default categories.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A single planned-versus-actual row of a budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetLineItem {
    pub id: Uuid,
    pub category: String,
    pub planned: MonetaryAmount,
    pub actual: MonetaryAmount,
    pub is_essential: bool,
}

impl BudgetLineItem {
    pub fn new(category: impl Into<String>, planned: MonetaryAmount, is_essential: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            category: category.into(),
            planned,
            actual: 0.0,
            is_essential,
        }
    }

    /// Compares the actual spend against the plan.
    pub fn variance(&self) -> LineItemVariance {
        if self.actual > self.planned {
            LineItemVariance::Over(self.actual - self.planned)
        } else if self.actual < self.planned {
            LineItemVariance::Under(self.planned - self.actual)
        } else {
            LineItemVariance::OnTrack
        }
    }
}

/// Difference between the actual and planned amount of a line item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineItemVariance {
    Over(MonetaryAmount),
    Under(MonetaryAmount),
    OnTrack,
}

impl fmt::Display for LineItemVariance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineItemVariance::Over(amount) => write!(f, "+{}", amount),
            LineItemVariance::Under(amount) => write!(f, "-{}", amount),
            LineItemVariance::OnTrack => f.write_str("On track"),
        }
    }
}

/// The occasion a budget is planned for. Each kind offers its own quick-add categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetKind {
    #[default]
    Household,
    Event,
    Festival,
}

/// Category suggested by quick-add, with its default essential flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultCategory {
    pub name: &'static str,
    pub essential: bool,
}

const fn category(name: &'static str, essential: bool) -> DefaultCategory {
    DefaultCategory { name, essential }
}

const HOUSEHOLD_CATEGORIES: [DefaultCategory; 8] = [
    category("Groceries", true),
    category("Utilities", true),
    category("Education", true),
    category("Healthcare", true),
    category("Transportation", true),
    category("Entertainment", false),
    category("Clothing", false),
    category("Dining Out", false),
];

const EVENT_CATEGORIES: [DefaultCategory; 8] = [
    category("Venue", true),
    category("Food & Catering", true),
    category("Decorations", false),
    category("Entertainment", false),
    category("Photography", false),
    category("Transportation", true),
    category("Gifts", false),
    category("Miscellaneous", false),
];

const FESTIVAL_CATEGORIES: [DefaultCategory; 8] = [
    category("Food Items", true),
    category("Religious Items", true),
    category("Gifts", false),
    category("New Clothes", false),
    category("Decorations", false),
    category("Travel", false),
    category("Sweets & Treats", false),
    category("Donations", false),
];

impl BudgetKind {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "household" | "home" => Some(BudgetKind::Household),
            "event" => Some(BudgetKind::Event),
            "festival" => Some(BudgetKind::Festival),
            _ => None,
        }
    }

    pub fn default_categories(self) -> &'static [DefaultCategory] {
        match self {
            BudgetKind::Household => &HOUSEHOLD_CATEGORIES,
            BudgetKind::Event => &EVENT_CATEGORIES,
            BudgetKind::Festival => &FESTIVAL_CATEGORIES,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BudgetKind::Household => "Manage family expenses and identify savings opportunities",
            BudgetKind::Event => "Plan and track community or family event expenses",
            BudgetKind::Festival => "Smart budgeting for festive celebrations and traditions",
        }
    }
}

impl fmt::Display for BudgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetKind::Household => "Household Budget",
            BudgetKind::Event => "Event Budget",
            BudgetKind::Festival => "Festival Budget",
        };
        f.write_str(label)
    }
}

/// A named budget with its overall allowance and line items in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Budget {
    pub name: String,
    pub kind: BudgetKind,
    pub total_budget: MonetaryAmount,
    #[serde(default)]
    pub items: Vec<BudgetLineItem>,
}

impl Budget {
    pub fn new(name: impl Into<String>, kind: BudgetKind, total_budget: MonetaryAmount) -> Self {
        Self {
            name: name.into(),
            kind,
            total_budget,
            items: Vec::new(),
        }
    }

    pub fn item_mut(&mut self, id: Uuid) -> Option<&mut BudgetLineItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Returns `true` when a line item already uses `category` (exact match).
    pub fn has_category(&self, category: &str) -> bool {
        self.items.iter().any(|item| item.category == category)
    }

    /// Default categories of this budget's kind that are not used yet.
    pub fn available_quick_categories(&self) -> Vec<DefaultCategory> {
        self.kind
            .default_categories()
            .iter()
            .filter(|candidate| !self.has_category(candidate.name))
            .copied()
            .collect()
    }
}
