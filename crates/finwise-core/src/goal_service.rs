use chrono::NaiveDate;
use tracing::{debug, warn};
use uuid::Uuid;

use finwise_domain::{DailyEntry, GoalBook, GoalPriority, MonetaryAmount, SavingsGoal};

use crate::CoreError;

/// Mutations of a [`GoalBook`]: goals, selection, and the daily log.
pub struct GoalService;

impl GoalService {
    /// Adds a goal with zero savings. The first goal added becomes the selection.
    pub fn add_goal(
        book: &mut GoalBook,
        name: &str,
        target_amount: MonetaryAmount,
        target_date: NaiveDate,
        priority: GoalPriority,
    ) -> Result<Uuid, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("goal name is required".into()));
        }
        if target_amount.is_nan() || target_amount <= 0.0 {
            warn!(name, target_amount, "rejected goal without a positive target");
            return Err(CoreError::Validation(
                "target amount must be greater than zero".into(),
            ));
        }
        let goal = SavingsGoal::new(name, target_amount, target_date, priority);
        Ok(Self::insert(book, goal))
    }

    /// Inserts a pre-built goal as-is.
    pub fn insert(book: &mut GoalBook, goal: SavingsGoal) -> Uuid {
        let id = goal.id;
        debug!(%id, name = %goal.name, "goal added");
        book.goals.push(goal);
        if book.selected_goal.is_none() {
            book.selected_goal = Some(id);
        }
        id
    }

    pub fn select(book: &mut GoalBook, id: Uuid) -> Result<(), CoreError> {
        if book.goal(id).is_none() {
            return Err(CoreError::GoalNotFound(id));
        }
        book.selected_goal = Some(id);
        Ok(())
    }

    /// Removes a goal; when it was selected, the first remaining goal takes over.
    pub fn delete_goal(book: &mut GoalBook, id: Uuid) -> Result<SavingsGoal, CoreError> {
        let index = book
            .goals
            .iter()
            .position(|goal| goal.id == id)
            .ok_or(CoreError::GoalNotFound(id))?;
        let removed = book.goals.remove(index);
        if book.selected_goal == Some(id) {
            book.selected_goal = book.goals.first().map(|goal| goal.id);
        }
        debug!(%id, name = %removed.name, "goal deleted");
        Ok(removed)
    }

    /// Appends an entry to the log and credits its savings to the selected goal.
    ///
    /// Entries need some expenses or some savings.
    pub fn record_entry(book: &mut GoalBook, mut entry: DailyEntry) -> Result<(), CoreError> {
        if !(entry.expenses > 0.0 || entry.savings > 0.0) {
            return Err(CoreError::Validation(
                "an entry needs expenses or savings greater than zero".into(),
            ));
        }
        if entry.savings > 0.0 {
            if let Some(id) = book.selected_goal {
                if let Some(goal) = book.goal_mut(id) {
                    goal.current_savings += entry.savings;
                    entry.goal_id = Some(id);
                    debug!(%id, credited = entry.savings, total = goal.current_savings, "goal credited");
                }
            }
        }
        book.entries.push(entry);
        Ok(())
    }
}
