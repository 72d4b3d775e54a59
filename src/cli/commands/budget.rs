use finwise_core::{summarize_budget, BudgetService, BudgetSummary, LineItemField};
use finwise_domain::{BudgetKind, LineItemVariance};

use crate::cli::commands::subcommand;
use crate::cli::context::{
    parse_amount, parse_flag, parse_index, CommandError, CommandResult, ShellContext,
};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::currency::{format_percent, CurrencyFormat};

const USAGE: &str = "budget new <household|event|festival> [total] [name] | total <amount> | \
quick [category] | add <category> <planned> [essential|optional] | planned <#> <amount> | \
actual <#> <amount> | remove <#> | show | summary [json]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "budget",
        "Plan a budget and compare planned against actual spending",
        USAGE,
        cmd_budget,
    )]
}

fn cmd_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (action, rest) = subcommand(args);
    match action.as_deref() {
        Some("new") => new_budget(context, rest),
        Some("total") => set_total(context, rest),
        Some("quick") => quick_add(context, rest),
        Some("add") => add_item(context, rest),
        Some("planned") => update_item(context, rest, LineItemField::Planned),
        Some("actual") => update_item(context, rest, LineItemField::Actual),
        Some("remove") | Some("rm") => remove_item(context, rest),
        Some("show") | None => show(context),
        Some("summary") => summary(context, rest),
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "unknown budget action `{}`. Usage: {}",
            other, USAGE
        ))),
    }
}

fn new_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let kind = match args.first() {
        Some(raw) => BudgetKind::from_str(raw).ok_or_else(|| {
            CommandError::InvalidArguments(format!(
                "unknown budget kind `{}` (household, event, festival)",
                raw
            ))
        })?,
        None => BudgetKind::from_str(&context.config.default_budget_kind).unwrap_or_default(),
    };
    let total = match args.get(1) {
        Some(raw) => parse_amount("total budget", raw)?,
        None => 0.0,
    };
    let name = args.get(2..).map(|words| words.join(" ")).unwrap_or_default();

    let budget = BudgetService::create(&name, kind, total);
    output::success(format!("Started `{}`. {}", budget.name, kind.description()));
    let quick: Vec<&str> = kind.default_categories().iter().map(|c| c.name).collect();
    output::info(format!("Quick categories: {}", quick.join(", ")));
    context.budget = Some(budget);
    Ok(())
}

fn set_total(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = args
        .first()
        .ok_or_else(|| CommandError::InvalidArguments("usage: budget total <amount>".into()))?;
    let total = parse_amount("total budget", raw)?;
    let money = context.money();
    BudgetService::set_total(context.budget_mut()?, total);
    output::success(format!("Total budget set to {}.", money.format(total)));
    Ok(())
}

fn quick_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let budget = context.budget_mut()?;
    if args.is_empty() {
        let available = budget.available_quick_categories();
        if available.is_empty() {
            output::info("Every quick category is already in this budget.");
            return Ok(());
        }
        output::section(format!("Quick categories for {}", budget.kind));
        for category in available {
            let tag = if category.essential {
                "essential"
            } else {
                "optional"
            };
            output::info(format!("  {:<18} {}", category.name, tag));
        }
        return Ok(());
    }
    let name = args.join(" ");
    BudgetService::add_quick_category(budget, &name)?;
    output::success(format!("Added `{}`. Set amounts with `budget planned`.", name));
    Ok(())
}

fn add_item(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (category, planned, essential) = match args {
        [category, planned] => (*category, *planned, None),
        [category, planned, flag] => (*category, *planned, Some(*flag)),
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: budget add <category> <planned> [essential|optional] (default optional)".into(),
            ))
        }
    };
    let planned = parse_amount("planned amount", planned)?;
    let is_essential = match essential {
        Some(flag) => parse_flag(flag).ok_or_else(|| {
            CommandError::InvalidArguments(format!(
                "expected `essential` or `optional`, got `{}`",
                flag
            ))
        })?,
        None => false,
    };
    let money = context.money();
    BudgetService::add_item(context.budget_mut()?, category, planned, is_essential)?;
    output::success(format!(
        "Added `{}` with {} planned.",
        category.trim(),
        money.format(planned)
    ));
    Ok(())
}

fn update_item(context: &mut ShellContext, args: &[&str], field: LineItemField) -> CommandResult {
    let [position, amount] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: budget planned|actual <#> <amount>".into(),
        ));
    };
    let value = parse_amount("amount", amount)?;
    let budget = context.budget_mut()?;
    let index = parse_index(position, budget.items.len())?;
    let id = budget.items[index].id;
    BudgetService::update_item(budget, id, field, value)?;
    show(context)
}

fn remove_item(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let position = args
        .first()
        .ok_or_else(|| CommandError::InvalidArguments("usage: budget remove <#>".into()))?;
    let budget = context.budget_mut()?;
    let index = parse_index(position, budget.items.len())?;
    let id = budget.items[index].id;
    let removed = BudgetService::remove_item(budget, id)?;
    output::success(format!("Removed `{}`.", removed.category));
    Ok(())
}

fn show(context: &mut ShellContext) -> CommandResult {
    let money = context.money();
    let budget = context.budget_ref()?;
    output::section(format!("{} ({})", budget.name, budget.kind));
    output::field("Total budget", money.format(budget.total_budget));
    if budget.items.is_empty() {
        output::info("No categories yet. Try `budget quick` or `budget add`.");
        return Ok(());
    }
    println!(
        "  {:>2}  {:<18} {:>12} {:>12}  {:<10} Status",
        "#", "Category", "Planned", "Actual", "Type"
    );
    for (index, item) in budget.items.iter().enumerate() {
        let status = match item.variance() {
            LineItemVariance::Over(by) => format!("Over by {}", money.format(by)),
            LineItemVariance::Under(by) => format!("Under by {}", money.format(by)),
            LineItemVariance::OnTrack => "On track".to_string(),
        };
        println!(
            "  {:>2}  {:<18} {:>12} {:>12}  {:<10} {}",
            index + 1,
            item.category,
            money.format(item.planned),
            money.format(item.actual),
            if item.is_essential { "essential" } else { "optional" },
            status
        );
    }
    Ok(())
}

fn summary(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let budget = context.budget_ref()?;
    let summary = summarize_budget(budget)?;
    if args.first().is_some_and(|flag| flag.eq_ignore_ascii_case("json")) {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }
    print_summary(&summary, &context.money(), context.config.savings_target);
    Ok(())
}

fn print_summary(summary: &BudgetSummary, money: &CurrencyFormat, savings_target: f64) {
    output::section("Budget Summary");
    output::field("Total budget", money.format(summary.total_budget));
    output::field("Planned", money.format(summary.total_planned));
    output::field("Actual", money.format(summary.total_actual));
    output::field("Savings", money.format(summary.total_savings));
    output::field(
        "Essential spending",
        format!(
            "{} ({})",
            money.format(summary.essential_spending),
            format_percent(summary.essential_share_percent())
        ),
    );
    output::field(
        "Non-essential",
        format!(
            "{} ({})",
            money.format(summary.non_essential_spending),
            format_percent(summary.non_essential_share_percent())
        ),
    );

    let progress = summary.savings_target_progress(savings_target);
    output::field(
        "Savings target",
        format!(
            "{} {} of {}",
            output::progress_bar(progress, 20),
            money.format(summary.saved_toward_target()),
            money.format(savings_target)
        ),
    );
    output::field(
        "Weekly challenge",
        if summary.challenge_completed {
            "completed (non-essentials under 30%)"
        } else {
            "keep non-essentials under 30%"
        },
    );

    if !summary.badges.is_empty() {
        let badges: Vec<String> = summary.badges.iter().map(ToString::to_string).collect();
        output::field("Badges", badges.join(", "));
    }
    if summary.is_over_budget() {
        output::warning(format!(
            "Over budget by {}.",
            money.format(-summary.total_savings)
        ));
    }
    for suggestion in &summary.suggestions {
        output::info(suggestion.message(|value| money.format(value)));
    }
}
