//! Savings goals and the daily expense/savings log that feeds them.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// How urgent a goal is to its owner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl GoalPriority {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "high" => Some(GoalPriority::High),
            "medium" => Some(GoalPriority::Medium),
            "low" => Some(GoalPriority::Low),
            _ => None,
        }
    }
}

impl fmt::Display for GoalPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GoalPriority::High => "high",
            GoalPriority::Medium => "medium",
            GoalPriority::Low => "low",
        };
        f.write_str(label)
    }
}

/// Picture shown next to a goal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalIcon {
    Laptop,
    Smartphone,
    Book,
    Car,
    Gamepad,
    #[default]
    Target,
}

impl GoalIcon {
    pub const ALL: [GoalIcon; 6] = [
        GoalIcon::Laptop,
        GoalIcon::Smartphone,
        GoalIcon::Book,
        GoalIcon::Car,
        GoalIcon::Gamepad,
        GoalIcon::Target,
    ];

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "laptop" => Some(GoalIcon::Laptop),
            "smartphone" | "phone" => Some(GoalIcon::Smartphone),
            "book" => Some(GoalIcon::Book),
            "car" => Some(GoalIcon::Car),
            "gamepad" | "game" => Some(GoalIcon::Gamepad),
            "target" => Some(GoalIcon::Target),
            _ => None,
        }
    }

    /// Glyph shown when the iconic theme is active.
    pub fn glyph(self) -> &'static str {
        match self {
            GoalIcon::Laptop => "\u{1f4bb}",
            GoalIcon::Smartphone => "\u{1f4f1}",
            GoalIcon::Book => "\u{1f4da}",
            GoalIcon::Car => "\u{1f697}",
            GoalIcon::Gamepad => "\u{1f3ae}",
            GoalIcon::Target => "\u{1f3af}",
        }
    }
}

impl fmt::Display for GoalIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GoalIcon::Laptop => "laptop",
            GoalIcon::Smartphone => "smartphone",
            GoalIcon::Book => "book",
            GoalIcon::Car => "car",
            GoalIcon::Gamepad => "gamepad",
            GoalIcon::Target => "target",
        };
        f.write_str(label)
    }
}

/// Something the user is saving toward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingsGoal {
    pub id: Uuid,
    pub name: String,
    pub target_amount: MonetaryAmount,
    pub current_savings: MonetaryAmount,
    pub target_date: NaiveDate,
    pub priority: GoalPriority,
    #[serde(default)]
    pub icon: GoalIcon,
}

impl SavingsGoal {
    pub fn new(
        name: impl Into<String>,
        target_amount: MonetaryAmount,
        target_date: NaiveDate,
        priority: GoalPriority,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target_amount,
            current_savings: 0.0,
            target_date,
            priority,
            icon: GoalIcon::default(),
        }
    }

    /// Amount still missing, never below zero.
    pub fn remaining_amount(&self) -> MonetaryAmount {
        (self.target_amount - self.current_savings).max(0.0)
    }
}

/// One day's expenses and savings, optionally credited to a goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyEntry {
    pub date: NaiveDate,
    pub expenses: MonetaryAmount,
    pub savings: MonetaryAmount,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<Uuid>,
}

impl DailyEntry {
    pub fn new(
        date: NaiveDate,
        expenses: MonetaryAmount,
        savings: MonetaryAmount,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            expenses,
            savings,
            description: description.into(),
            goal_id: None,
        }
    }
}

/// Goals, the entry log, and the goal new savings are credited to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GoalBook {
    #[serde(default)]
    pub goals: Vec<SavingsGoal>,
    #[serde(default)]
    pub entries: Vec<DailyEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_goal: Option<Uuid>,
}

impl GoalBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn goal(&self, id: Uuid) -> Option<&SavingsGoal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    pub fn goal_mut(&mut self, id: Uuid) -> Option<&mut SavingsGoal> {
        self.goals.iter_mut().find(|goal| goal.id == id)
    }

    pub fn selected(&self) -> Option<&SavingsGoal> {
        self.selected_goal.and_then(|id| self.goal(id))
    }

    /// Most recent entries first, up to `limit`.
    pub fn recent_entries(&self, limit: usize) -> impl Iterator<Item = &DailyEntry> {
        self.entries.iter().rev().take(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_goal_starts_empty() {
        let goal = SavingsGoal::new("Laptop", 65_000.0, date(2025, 6, 15), GoalPriority::High);
        assert_eq!(goal.current_savings, 0.0);
        assert_eq!(goal.remaining_amount(), 65_000.0);
        assert_eq!(goal.icon, GoalIcon::Target);
    }

    #[test]
    fn remaining_amount_is_clamped() {
        let mut goal = SavingsGoal::new("Phone", 100.0, date(2025, 3, 20), GoalPriority::Low);
        goal.current_savings = 150.0;
        assert_eq!(goal.remaining_amount(), 0.0);
    }

    #[test]
    fn recent_entries_are_newest_first() {
        let mut book = GoalBook::new();
        book.entries.push(DailyEntry::new(date(2025, 1, 4), 200.0, 150.0, "Movie"));
        book.entries.push(DailyEntry::new(date(2025, 1, 5), 80.0, 250.0, "Bus fare"));
        let recent: Vec<_> = book.recent_entries(7).map(|entry| entry.date).collect();
        assert_eq!(recent, vec![date(2025, 1, 5), date(2025, 1, 4)]);
    }

    #[test]
    fn icon_names_round_trip_through_display() {
        for icon in GoalIcon::ALL {
            assert_eq!(GoalIcon::from_str(&icon.to_string()), Some(icon));
        }
        assert_eq!(GoalIcon::from_str("Phone"), Some(GoalIcon::Smartphone));
        assert_eq!(GoalIcon::from_str("boat"), None);
    }

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!(GoalPriority::from_str("HIGH"), Some(GoalPriority::High));
        assert_eq!(GoalPriority::from_str("urgent"), None);
    }
}
