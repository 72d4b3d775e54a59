pub mod budget;
pub mod calculators;
pub mod goals;
pub mod system;

use crate::cli::registry::{CommandEntry, CommandRegistry};

fn all_definitions() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(system::definitions());
    commands.extend(calculators::definitions());
    commands.extend(budget::definitions());
    commands.extend(goals::definitions());
    commands
}

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for entry in all_definitions() {
        registry.register(entry);
    }
    registry.alias("quit", "exit");
    registry.alias("?", "help");
    registry.alias("entries", "entry");
    registry.alias("goals", "goal");
}

/// Splits `args` into the subcommand (lowercased) and its remaining arguments.
pub(crate) fn subcommand<'a>(args: &'a [&'a str]) -> (Option<String>, &'a [&'a str]) {
    match args.split_first() {
        Some((first, rest)) => (Some(first.to_ascii_lowercase()), rest),
        None => (None, args),
    }
}
