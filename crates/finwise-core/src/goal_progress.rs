//! Progress metrics for savings goals and weekly activity over the daily log.

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use tracing::trace;

use finwise_domain::{DailyEntry, MonetaryAmount, SavingsGoal};

use crate::error::{ensure_finite, CoreError};

/// Days counted as "this week" when summarising the daily log.
pub const WEEK_WINDOW_DAYS: i64 = 7;

/// Actionable metrics for a single goal on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProgress {
    /// Completion in percent, capped at 100.
    pub percentage: f64,
    /// Signed day count until the deadline; zero or negative once it has passed.
    pub days_remaining: i64,
    pub required_daily_savings: MonetaryAmount,
    pub remaining_amount: MonetaryAmount,
    pub overdue: bool,
}

/// `min(100, current / target * 100)`; a non-positive target yields 0.
pub fn progress_percentage(goal: &SavingsGoal) -> f64 {
    if goal.target_amount <= 0.0 {
        return 0.0;
    }
    (goal.current_savings / goal.target_amount * 100.0).min(100.0)
}

pub fn days_remaining(goal: &SavingsGoal, today: NaiveDate) -> i64 {
    (goal.target_date - today).num_days()
}

/// Whole rupees per day needed to close the gap, or 0 once the deadline has passed.
pub fn required_daily_savings(goal: &SavingsGoal, today: NaiveDate) -> MonetaryAmount {
    let days = days_remaining(goal, today);
    if days <= 0 {
        return 0.0;
    }
    (goal.remaining_amount() / days as f64).ceil()
}

pub fn compute_goal_progress(
    goal: &SavingsGoal,
    today: NaiveDate,
) -> Result<GoalProgress, CoreError> {
    ensure_finite("target amount", goal.target_amount)?;
    ensure_finite("current savings", goal.current_savings)?;

    let days = days_remaining(goal, today);
    let progress = GoalProgress {
        percentage: progress_percentage(goal),
        days_remaining: days,
        required_daily_savings: required_daily_savings(goal, today),
        remaining_amount: goal.remaining_amount(),
        overdue: days <= 0,
    };
    trace!(goal = %goal.name, ?progress, "goal progress computed");
    Ok(progress)
}

/// Totals of the daily log over the trailing week.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct WeeklyActivity {
    pub expenses: MonetaryAmount,
    pub savings: MonetaryAmount,
    pub entry_count: usize,
}

impl WeeklyActivity {
    /// Savings minus expenses, floored at zero.
    pub fn net_savings(&self) -> MonetaryAmount {
        (self.savings - self.expenses).max(0.0)
    }
}

/// Sums entries from the seven calendar days ending on `today`.
pub fn compute_weekly_activity(entries: &[DailyEntry], today: NaiveDate) -> WeeklyActivity {
    let cutoff = today - Duration::days(WEEK_WINDOW_DAYS - 1);
    entries
        .iter()
        .filter(|entry| entry.date >= cutoff)
        .fold(WeeklyActivity::default(), |mut acc, entry| {
            acc.expenses += entry.expenses;
            acc.savings += entry.savings;
            acc.entry_count += 1;
            acc
        })
}
