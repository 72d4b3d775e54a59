use chrono::NaiveDate;

use finwise::currency::CurrencyFormat;
use finwise::finwise_core::{
    compute_budget_summary, compute_fd_maturity, compute_goal_progress, compute_rd_maturity,
    compute_sip_future_value, summarize_budget, Badge, BudgetService, GoalService, LineItemField,
    Suggestion,
};
use finwise::finwise_domain::{BudgetKind, DailyEntry, GoalBook, GoalPriority};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn deposits_never_lose_money_at_positive_rates() {
    for months in [1, 6, 12, 60] {
        let fd = compute_fd_maturity(25_000.0, 7.1, months).unwrap();
        assert!(fd.maturity_amount > 25_000.0);

        let rd = compute_rd_maturity(1_500.0, 7.1, months).unwrap();
        assert!(rd.maturity_amount > rd.total_deposited);
    }
}

#[test]
fn higher_rates_grow_faster() {
    let low = compute_sip_future_value(3_000.0, 8.0, 15).unwrap();
    let high = compute_sip_future_value(3_000.0, 14.0, 15).unwrap();
    assert_eq!(low.total_invested, high.total_invested);
    assert!(high.future_value > low.future_value);
    assert!(high.returns_percentage > low.returns_percentage);
}

#[test]
fn household_budget_walkthrough() {
    let mut budget = BudgetService::create("", BudgetKind::Household, 20_000.0);
    assert_eq!(budget.name, "My Household Budget");

    let rent = BudgetService::add_item(&mut budget, "Rent", 9_000.0, true).unwrap();
    let groceries = BudgetService::add_quick_category(&mut budget, "groceries").unwrap();
    BudgetService::update_item(&mut budget, groceries, LineItemField::Planned, 4_000.0).unwrap();
    BudgetService::update_item(&mut budget, rent, LineItemField::Actual, 9_000.0).unwrap();
    BudgetService::update_item(&mut budget, groceries, LineItemField::Actual, 3_000.0).unwrap();
    let outings = BudgetService::add_item(&mut budget, "Outings", 2_000.0, false).unwrap();
    BudgetService::update_item(&mut budget, outings, LineItemField::Actual, 500.0).unwrap();

    let summary = summarize_budget(&budget).unwrap();
    assert_eq!(summary.total_planned, 15_000.0);
    assert_eq!(summary.total_actual, 12_500.0);
    assert_eq!(summary.total_savings, 2_500.0);
    assert!(summary.has_badge(Badge::Saved500));
    assert!(summary.has_badge(Badge::SmartSaver));
    assert!(summary.challenge_completed);
    assert_eq!(
        summary.suggestions,
        vec![Suggestion::InvestSurplus {
            suggested_investment: 2_000.0
        }]
    );

    BudgetService::remove_item(&mut budget, outings).unwrap();
    let summary = compute_budget_summary(&budget.items, budget.total_budget).unwrap();
    assert_eq!(summary.item_count, 2);
    assert_eq!(summary.non_essential_spending, 0.0);
}

#[test]
fn goal_book_walkthrough() {
    let today = date(2025, 1, 15);
    let mut book = GoalBook::new();
    let laptop =
        GoalService::add_goal(&mut book, "Laptop", 60_000.0, date(2025, 7, 14), GoalPriority::High)
            .unwrap();
    GoalService::record_entry(
        &mut book,
        DailyEntry::new(date(2025, 1, 14), 150.0, 12_000.0, "stipend"),
    )
    .unwrap();

    let goal = book.goal(laptop).unwrap();
    let progress = compute_goal_progress(goal, today).unwrap();
    assert_eq!(progress.percentage, 20.0);
    assert_eq!(progress.days_remaining, 180);
    assert_eq!(progress.required_daily_savings, 267.0);
    assert_eq!(book.entries[0].goal_id, Some(laptop));

    let money = CurrencyFormat::default();
    assert_eq!(money.format(progress.remaining_amount), "\u{20b9}48,000");
}
