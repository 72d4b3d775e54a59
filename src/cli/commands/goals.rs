use finwise_core::{
    compute_goal_progress, compute_weekly_activity, progress_percentage, GoalService,
};
use finwise_domain::{DailyEntry, GoalIcon, GoalPriority, SavingsGoal};

use crate::cli::commands::subcommand;
use crate::cli::context::{
    parse_amount, parse_date, parse_index, CommandError, CommandResult, ShellContext,
};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::currency::format_percent;

const RECENT_ENTRY_LIMIT: usize = 10;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "goal",
            "Manage savings goals and see what is needed per day",
            "goal add <name> <target> <YYYY-MM-DD> [high|medium|low] [icon] | list | select <#> | remove <#> | show",
            cmd_goal,
        ),
        CommandEntry::new(
            "entry",
            "Log daily expenses and savings",
            "entry add <expenses> <savings> [description] [YYYY-MM-DD] | list",
            cmd_entry,
        ),
        CommandEntry::new(
            "week",
            "Summarize the last seven days of entries",
            "week",
            cmd_week,
        ),
    ]
}

fn cmd_goal(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (action, rest) = subcommand(args);
    match action.as_deref() {
        Some("add") => add_goal(context, rest),
        Some("list") | None => list_goals(context),
        Some("select") => select_goal(context, rest),
        Some("remove") | Some("rm") => remove_goal(context, rest),
        Some("show") => show_goal(context),
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "unknown goal action `{}`",
            other
        ))),
    }
}

fn add_goal(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (name, target, date, priority, icon) = match args {
        [name, target, date] => (*name, *target, *date, None, None),
        [name, target, date, priority] => (*name, *target, *date, Some(*priority), None),
        [name, target, date, priority, icon] => {
            (*name, *target, *date, Some(*priority), Some(*icon))
        }
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: goal add <name> <target> <YYYY-MM-DD> [high|medium|low] [icon]".into(),
            ))
        }
    };
    let target = parse_amount("target amount", target)?;
    let date = parse_date(date)?;
    let priority = match priority {
        Some(raw) => GoalPriority::from_str(raw).ok_or_else(|| {
            CommandError::InvalidArguments(format!("unknown priority `{}`", raw))
        })?,
        None => GoalPriority::default(),
    };
    let icon = match icon {
        Some(raw) => GoalIcon::from_str(raw).ok_or_else(|| {
            let known: Vec<String> = GoalIcon::ALL.iter().map(ToString::to_string).collect();
            CommandError::InvalidArguments(format!(
                "unknown icon `{}` ({})",
                raw,
                known.join(", ")
            ))
        })?,
        None => GoalIcon::default(),
    };
    let id = GoalService::add_goal(&mut context.goals, name, target, date, priority)?;
    if let Some(goal) = context.goals.goal_mut(id) {
        goal.icon = icon;
    }
    output::success(format!(
        "Goal `{}` added: {} by {}.",
        name.trim(),
        context.money().format(target),
        date
    ));
    Ok(())
}

fn list_goals(context: &mut ShellContext) -> CommandResult {
    if context.goals.goals.is_empty() {
        output::info("No goals yet. Add one with `goal add`.");
        return Ok(());
    }
    let money = context.money();
    output::section("Savings Goals");
    for (index, goal) in context.goals.goals.iter().enumerate() {
        let marker = if context.goals.selected_goal == Some(goal.id) {
            "*"
        } else {
            " "
        };
        let percent = progress_percentage(goal);
        println!(
            "{} {:>2}. {:<20} {} {} / {} ({}) due {} [{}]",
            marker,
            index + 1,
            goal.name,
            output::progress_bar(percent, 10),
            money.format(goal.current_savings),
            money.format(goal.target_amount),
            format_percent(percent),
            goal.target_date,
            goal.priority
        );
    }
    Ok(())
}

fn goal_at(context: &ShellContext, args: &[&str], usage: &str) -> Result<SavingsGoal, CommandError> {
    let position = args
        .first()
        .ok_or_else(|| CommandError::InvalidArguments(format!("usage: {}", usage)))?;
    let index = parse_index(position, context.goals.goals.len())?;
    Ok(context.goals.goals[index].clone())
}

fn select_goal(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let goal = goal_at(context, args, "goal select <#>")?;
    GoalService::select(&mut context.goals, goal.id)?;
    output::success(format!("New savings will count toward `{}`.", goal.name));
    Ok(())
}

fn remove_goal(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let goal = goal_at(context, args, "goal remove <#>")?;
    let removed = GoalService::delete_goal(&mut context.goals, goal.id)?;
    output::success(format!("Removed goal `{}`.", removed.name));
    if let Some(selected) = context.goals.selected() {
        output::info(format!("Selected goal is now `{}`.", selected.name));
    }
    Ok(())
}

fn show_goal(context: &mut ShellContext) -> CommandResult {
    let goal = context
        .goals
        .selected()
        .ok_or_else(|| CommandError::InvalidArguments("no goal selected".into()))?;
    let progress = compute_goal_progress(goal, context.today())?;
    let money = context.money();

    output::section(format!("Goal: {}", goal.name));
    output::field("Icon", format!("{} {}", goal.icon.glyph(), goal.icon));
    output::field(
        "Progress",
        format!(
            "{} {}",
            output::progress_bar(progress.percentage, 20),
            format_percent(progress.percentage)
        ),
    );
    output::field("Saved", money.format(goal.current_savings));
    output::field("Target", money.format(goal.target_amount));
    output::field("Remaining", money.format(progress.remaining_amount));
    output::field("Target date", goal.target_date);
    if progress.overdue {
        output::warning("The target date has passed.");
    } else {
        output::field("Days remaining", progress.days_remaining);
        output::field(
            "Save per day",
            money.format(progress.required_daily_savings),
        );
    }
    Ok(())
}

fn cmd_entry(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (action, rest) = subcommand(args);
    match action.as_deref() {
        Some("add") => add_entry(context, rest),
        Some("list") | None => list_entries(context),
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "unknown entry action `{}`",
            other
        ))),
    }
}

fn add_entry(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !(2..=4).contains(&args.len()) {
        return Err(CommandError::InvalidArguments(
            "usage: entry add <expenses> <savings> [description] [YYYY-MM-DD]".into(),
        ));
    }
    let expenses = parse_amount("expenses", args[0])?;
    let savings = parse_amount("savings", args[1])?;
    let description = args.get(2).copied().unwrap_or_default();
    let date = match args.get(3) {
        Some(raw) => parse_date(raw)?,
        None => context.today(),
    };

    GoalService::record_entry(
        &mut context.goals,
        DailyEntry::new(date, expenses, savings, description),
    )?;
    let money = context.money();
    output::success(format!(
        "Logged {} spent and {} saved on {}.",
        money.format(expenses),
        money.format(savings),
        date
    ));
    if savings > 0.0 {
        if let Some(goal) = context.goals.selected() {
            output::info(format!(
                "`{}` now has {} of {}.",
                goal.name,
                money.format(goal.current_savings),
                money.format(goal.target_amount)
            ));
        }
    }
    Ok(())
}

fn list_entries(context: &mut ShellContext) -> CommandResult {
    if context.goals.entries.is_empty() {
        output::info("No entries yet. Log one with `entry add`.");
        return Ok(());
    }
    let money = context.money();
    output::section("Recent Entries");
    for entry in context.goals.recent_entries(RECENT_ENTRY_LIMIT) {
        println!(
            "  {}  spent {:>10}  saved {:>10}  {}",
            entry.date,
            money.format(entry.expenses),
            money.format(entry.savings),
            entry.description
        );
    }
    Ok(())
}

fn cmd_week(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let activity = compute_weekly_activity(&context.goals.entries, context.today());
    let money = context.money();
    output::section("This Week");
    output::field("Entries", activity.entry_count);
    output::field("Expenses", money.format(activity.expenses));
    output::field("Savings", money.format(activity.savings));
    output::field("Net savings", money.format(activity.net_savings()));
    Ok(())
}
