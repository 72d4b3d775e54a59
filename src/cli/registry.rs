use std::collections::HashMap;

use strsim::levenshtein;

use crate::cli::context::{CommandResult, ShellContext};

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// Largest edit distance still offered as a "did you mean" suggestion.
const SUGGESTION_DISTANCE: usize = 3;

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

/// Commands in registration order. Aliases resolve to a primary name and are
/// never listed or completed.
#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
    lookup: HashMap<&'static str, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `entry`, replacing an earlier command with the same name in place.
    pub fn register(&mut self, entry: CommandEntry) {
        match self.lookup.get(entry.name) {
            Some(&index) => self.entries[index] = entry,
            None => {
                self.lookup.insert(entry.name, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Points `alias` at an already registered command; unknown targets are ignored.
    pub fn alias(&mut self, alias: &'static str, target: &str) {
        if let Some(&index) = self.lookup.get(target) {
            self.lookup.entry(alias).or_insert(index);
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.lookup.get(name).map(|&index| &self.entries[index])
    }

    pub fn list(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.get(name).map(|entry| entry.handler)
    }

    /// Primary command name closest to `input`, if any is close enough.
    pub fn closest(&self, input: &str) -> Option<&'static str> {
        let input = input.to_lowercase();
        self.names()
            .map(|name| (levenshtein(name, &input), name))
            .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, name)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
        Ok(())
    }

    fn registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        registry.register(CommandEntry::new("budget", "Budgets", "budget", noop));
        registry.register(CommandEntry::new("goal", "Goals", "goal", noop));
        registry.alias("goals", "goal");
        registry.alias("missing", "nothing");
        registry
    }

    #[test]
    fn aliases_resolve_but_are_not_listed() {
        let registry = registry();
        assert_eq!(registry.get("goals").map(|entry| entry.name), Some("goal"));
        assert!(registry.get("missing").is_none());
        assert_eq!(registry.names().collect::<Vec<_>>(), ["budget", "goal"]);
    }

    #[test]
    fn closest_only_suggests_near_misses() {
        let registry = registry();
        assert_eq!(registry.closest("BUDGTE"), Some("budget"));
        assert_eq!(registry.closest("gaol"), Some("goal"));
        assert_eq!(registry.closest("transactions"), None);
    }
}
