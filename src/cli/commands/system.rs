use finwise_config::Config;
use finwise_domain::{ProductKind, RiskLevel, BANKING_PRODUCTS, INVESTMENT_OPTIONS};

use crate::cli::commands::subcommand;
use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("help", "Show available commands", "help [command]", cmd_help),
        CommandEntry::new(
            "products",
            "Browse banking products and investment options",
            "products [banking|investments]",
            cmd_products,
        ),
        CommandEntry::new(
            "config",
            "Show or change preferences",
            "config show | config set <key> <value>",
            cmd_config,
        ),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first() {
        Some(name) => match context.registry.get(&name.to_lowercase()) {
            Some(entry) => {
                output::section(format!("Help: {}", entry.name));
                output::field("Description", entry.description);
                output::field("Usage", entry.usage);
            }
            None => context.suggest_command(name),
        },
        None => print_overview(&context.registry),
    }
    Ok(())
}

fn print_overview(registry: &CommandRegistry) {
    output::section("Available commands");
    for entry in registry.list() {
        println!("  {:<10} {}", entry.name, entry.description);
    }
    output::info("Use `help <command>` for details.");
}

fn cmd_products(_context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (filter, _) = subcommand(args);
    let (banking, investments) = match filter.as_deref() {
        None => (true, true),
        Some("banking") | Some("bank") => (true, false),
        Some("investments") | Some("investment") | Some("sip") => (false, true),
        Some(other) => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown catalog `{}` (banking, investments)",
                other
            )))
        }
    };

    if banking {
        output::section("Banking Products");
        for product in BANKING_PRODUCTS {
            println!("  {}", product.name);
            output::field("Interest", product.interest_rate);
            output::field("Minimum", product.min_amount);
            output::field("Risk", risk_label(product.risk));
            if let Some(kind) = product.calculator {
                output::field("Calculator", format!("`{}`", kind_command(kind)));
            }
        }
    }
    if investments {
        output::section("SIP & Insurance");
        for option in INVESTMENT_OPTIONS {
            let tag = if option.is_insurance { "insurance" } else { "SIP" };
            println!("  {} ({})", option.name, tag);
            output::field("Expected return", option.expected_return);
            output::field("Minimum", option.min_amount);
            output::field("Risk", risk_label(option.risk));
        }
    }
    Ok(())
}

fn kind_command(kind: ProductKind) -> &'static str {
    match kind {
        ProductKind::Fd => "fd",
        ProductKind::Rd => "rd",
        ProductKind::Sip => "sip",
    }
}

fn risk_label(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::VeryLow => "Very Low",
        RiskLevel::Low => "Low",
        RiskLevel::Medium => "Medium",
        RiskLevel::High => "High",
    }
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (action, rest) = subcommand(args);
    match action.as_deref() {
        Some("show") | None => {
            show_config(context);
            Ok(())
        }
        Some("set") => {
            let [key, value @ ..] = rest else {
                return Err(CommandError::InvalidArguments(format!(
                    "usage: config set <key> <value> (keys: {})",
                    Config::KEYS.join(", ")
                )));
            };
            if value.is_empty() {
                return Err(CommandError::InvalidArguments(format!(
                    "missing value for `{}`",
                    key
                )));
            }
            context
                .config
                .set(&key.to_ascii_lowercase(), &value.join(" "))?;
            context.save_config()?;
            output::success(format!("Updated `{}`.", key));
            Ok(())
        }
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{}`",
            other
        ))),
    }
}

fn show_config(context: &ShellContext) {
    let config = &context.config;
    let calc = &config.calculator;
    output::section("Configuration");
    output::field("File", context.config_path());
    output::field("locale", &config.locale);
    output::field("currency", &config.currency);
    output::field("theme", config.theme);
    output::field("color", if config.ui_color_enabled { "on" } else { "off" });
    output::field("savings_target", context.money().format(config.savings_target));
    output::field("budget_kind", &config.default_budget_kind);
    output::field(
        "fd defaults",
        format!("{} at {}% for {} months", calc.fd_amount, calc.fd_rate, calc.fd_months),
    );
    output::field(
        "rd defaults",
        format!("{} at {}% for {} months", calc.rd_amount, calc.rd_rate, calc.rd_months),
    );
    output::field(
        "sip defaults",
        format!("{} at {}% for {} years", calc.sip_amount, calc.sip_return, calc.sip_years),
    );
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(meta);
    output::field("Build hash", format!("{} ({})", meta.git_hash, meta.git_status));
    output::field("Built at", meta.timestamp);
    output::field("Target", meta.target);
    output::field("Profile", meta.profile);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
