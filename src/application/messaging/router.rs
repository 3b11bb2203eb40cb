//! Router - binds commands to triggers and matches inbound text

use crate::domain::entities::{CommandDescriptor, CommandRegistry};

/// Name of the built-in help trigger
pub const HELP_COMMAND: &str = "help";

/// What a trigger routes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Index into the command registry
    Command(usize),
    Help,
}

/// Literal trigger: optional global prefix, then the command name as the
/// first whitespace-delimited token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    prefix: Option<String>,
    name: String,
    target: Target,
}

impl Trigger {
    pub fn new(target: Target, name: impl Into<String>, prefix: Option<&str>) -> Self {
        Self {
            prefix: prefix.map(str::to_string),
            name: name.into(),
            target,
        }
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// Match `text`, returning the raw argument string after the name
    pub fn matches<'a>(&self, text: &'a str) -> Option<&'a str> {
        let rest = match &self.prefix {
            Some(prefix) => text.strip_prefix(prefix.as_str())?,
            None => text,
        };

        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        (rest[..end] == self.name).then(|| &rest[end..])
    }
}

/// A matched message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub target: Target,
    pub args: Vec<String>,
    /// Argument string with surrounding whitespace trimmed
    pub raw_args: String,
}

/// Ordered trigger table. The first trigger that matches wins.
#[derive(Debug, Clone)]
pub struct Router {
    prefix: String,
    triggers: Vec<Trigger>,
}

impl Router {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            triggers: Vec::new(),
        }
    }

    /// Bind every registry command in order, then the help trigger
    pub fn from_registry(registry: &CommandRegistry, prefix: impl Into<String>) -> Self {
        let mut router = Self::new(prefix);
        for (index, descriptor) in registry.all().enumerate() {
            let trigger = Self::build_pattern(index, descriptor, &router.prefix);
            router.triggers.push(trigger);
        }
        router.triggers.push(Trigger::new(Target::Help, HELP_COMMAND, Some(&router.prefix)));
        router
    }

    /// Trigger for one command, honoring its prefix policy
    pub fn build_pattern(index: usize, descriptor: &CommandDescriptor, prefix: &str) -> Trigger {
        let prefix = descriptor.use_prefix.then_some(prefix);
        Trigger::new(Target::Command(index), descriptor.name.clone(), prefix)
    }

    pub fn push(&mut self, trigger: Trigger) {
        self.triggers.push(trigger);
    }

    /// Find the first trigger matching `text`
    pub fn route(&self, text: &str) -> Option<Route> {
        self.triggers.iter().find_map(|trigger| {
            trigger.matches(text).map(|raw| Route {
                target: trigger.target(),
                args: split_args(raw),
                raw_args: raw.trim().to_string(),
            })
        })
    }
}

/// Split an argument string on runs of whitespace. Blank input yields no
/// arguments.
pub fn split_args(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}
