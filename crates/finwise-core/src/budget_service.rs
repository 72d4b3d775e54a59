use tracing::{debug, warn};
use uuid::Uuid;

use finwise_domain::{Budget, BudgetKind, BudgetLineItem, MonetaryAmount};

use crate::CoreError;

/// Which side of a line item an edit touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineItemField {
    Planned,
    Actual,
}

/// Mutations of a [`Budget`]'s line items.
pub struct BudgetService;

impl BudgetService {
    /// Starts an empty budget; a blank name falls back to "My <kind>".
    pub fn create(name: &str, kind: BudgetKind, total_budget: MonetaryAmount) -> Budget {
        let trimmed = name.trim();
        let name = if trimmed.is_empty() {
            format!("My {kind}")
        } else {
            trimmed.to_string()
        };
        debug!(%name, ?kind, total_budget, "budget created");
        Budget::new(name, kind, total_budget)
    }

    pub fn set_total(budget: &mut Budget, total_budget: MonetaryAmount) {
        budget.total_budget = total_budget;
    }

    /// Adds a custom category. Requires a name and a positive planned amount.
    pub fn add_item(
        budget: &mut Budget,
        category: &str,
        planned: MonetaryAmount,
        is_essential: bool,
    ) -> Result<Uuid, CoreError> {
        let category = category.trim();
        if category.is_empty() {
            warn!("rejected budget item without a category");
            return Err(CoreError::Validation("category name is required".into()));
        }
        if planned.is_nan() || planned <= 0.0 {
            warn!(category, planned, "rejected budget item without a planned amount");
            return Err(CoreError::Validation(
                "planned amount must be greater than zero".into(),
            ));
        }
        Ok(Self::push(budget, BudgetLineItem::new(category, planned, is_essential)))
    }

    /// Adds one of the kind's default categories with zero planned and actual amounts.
    pub fn add_quick_category(budget: &mut Budget, category: &str) -> Result<Uuid, CoreError> {
        let default = budget
            .available_quick_categories()
            .into_iter()
            .find(|candidate| candidate.name.eq_ignore_ascii_case(category.trim()))
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "`{}` is not an unused {} category",
                    category.trim(),
                    budget.kind
                ))
            })?;
        Ok(Self::push(
            budget,
            BudgetLineItem::new(default.name, 0.0, default.essential),
        ))
    }

    /// Overwrites the planned or actual amount of an item. Any finite value is accepted.
    pub fn update_item(
        budget: &mut Budget,
        id: Uuid,
        field: LineItemField,
        value: MonetaryAmount,
    ) -> Result<(), CoreError> {
        let item = budget
            .item_mut(id)
            .ok_or(CoreError::LineItemNotFound(id))?;
        match field {
            LineItemField::Planned => item.planned = value,
            LineItemField::Actual => item.actual = value,
        }
        debug!(%id, ?field, value, "budget item updated");
        Ok(())
    }

    pub fn remove_item(budget: &mut Budget, id: Uuid) -> Result<BudgetLineItem, CoreError> {
        let index = budget
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(CoreError::LineItemNotFound(id))?;
        let removed = budget.items.remove(index);
        debug!(%id, category = %removed.category, "budget item removed");
        Ok(removed)
    }

    fn push(budget: &mut Budget, item: BudgetLineItem) -> Uuid {
        let id = item.id;
        debug!(%id, category = %item.category, essential = item.is_essential, "budget item added");
        budget.items.push(item);
        id
    }
}
