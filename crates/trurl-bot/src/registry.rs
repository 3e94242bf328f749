//! The command registry.

use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::dispatch::Context;
use crate::error::CommandResult;

/// Minimum similarity for suggesting a command name (0.0-1.0).
const SUGGEST_THRESHOLD: f64 = 0.8;

/// A command handler.
pub type Handler = fn(&mut Context<'_>) -> CommandResult<()>;

/// A registered command.
#[derive(Debug, Clone, Copy)]
pub struct Command {
    /// The command name, lower case.
    pub name: &'static str,
    /// Runs the command.
    pub handler: Handler,
    /// Lines shown by `help <name>`.
    pub help: &'static [&'static str],
}

impl Command {
    /// Create a command.
    pub const fn new(name: &'static str, handler: Handler, help: &'static [&'static str]) -> Self {
        Self {
            name,
            handler,
            help,
        }
    }
}

/// Commands keyed case-insensitively, in registration order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    commands: Vec<Command>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Build a registry. A later command with an already registered name is skipped.
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        let mut registry = Self::default();
        for command in commands {
            let key = command.name.to_lowercase();
            if registry.index.contains_key(&key) {
                tracing::warn!(name = command.name, "duplicate command ignored");
                continue;
            }
            registry.index.insert(key, registry.commands.len());
            registry.commands.push(command);
        }
        registry
    }

    /// Look up a command by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.index
            .get(&name.to_lowercase())
            .and_then(|&i| self.commands.get(i))
    }

    /// All commands in registration order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// The registered name closest to `name`, if any is close enough.
    pub fn suggest(&self, name: &str) -> Option<&'static str> {
        let name = name.to_lowercase();
        self.commands
            .iter()
            .map(|c| (c.name, jaro_winkler(&name, c.name)))
            .filter(|(_, score)| *score >= SUGGEST_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(name, _)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &mut Context<'_>) -> CommandResult<()> {
        Ok(())
    }

    fn registry() -> Registry {
        Registry::new([
            Command::new("help", noop, &["help"]),
            Command::new("wod", noop, &["wod <count>"]),
            Command::new("scion", noop, &["scion <count>"]),
        ])
    }

    #[test]
    fn lookup_ignores_case() {
        let r = registry();
        assert_eq!(r.get("WOD").map(|c| c.name), Some("wod"));
        assert_eq!(r.get("Scion").map(|c| c.name), Some("scion"));
        assert!(r.get("chance").is_none());
    }

    #[test]
    fn keeps_registration_order() {
        let names: Vec<_> = registry().commands().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["help", "wod", "scion"]);
    }

    #[test]
    fn duplicates_keep_the_first() {
        let r = Registry::new([
            Command::new("wod", noop, &["first"]),
            Command::new("WOD", noop, &["second"]),
        ]);
        assert_eq!(r.commands().len(), 1);
        assert_eq!(r.get("wod").map(|c| c.help), Some(&["first"][..]));
    }

    #[test]
    fn suggests_close_names() {
        let r = registry();
        assert_eq!(r.suggest("scoin"), Some("scion"));
        assert_eq!(r.suggest("xyzzy"), None);
    }
}
