use std::fmt;
use std::sync::Arc;

use crate::plugins::Plugin;

/// Category assigned to commands that do not declare one
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Privilege level gating command execution.
///
/// Level 0 is public and level 1 is owner-only. Any other level is kept as
/// loaded and treated as public.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Role(pub u8);

impl Role {
    pub const EVERYONE: Role = Role(0);
    pub const OWNER: Role = Role(1);

    pub fn is_owner_only(self) -> bool {
        self == Role::OWNER
    }

    pub fn level(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated command, immutable once loaded
#[derive(Clone)]
pub struct CommandDescriptor {
    pub name: String,
    pub use_prefix: bool,
    pub role: Role,
    pub category: String,
    pub author: Option<String>,
    pub description: Option<String>,
    pub usage: Option<String>,
    pub handler: Arc<dyn Plugin>,
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("use_prefix", &self.use_prefix)
            .field("role", &self.role)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// Ordered set of commands, in discovery order. Names are unique.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandDescriptor>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command. Hands the descriptor back if the name is taken.
    pub fn register(&mut self, command: CommandDescriptor) -> Result<(), CommandDescriptor> {
        if self.get(&command.name).is_some() {
            return Err(command);
        }
        self.commands.push(command);
        Ok(())
    }

    /// Exact, case-sensitive lookup
    pub fn get(&self, name: &str) -> Option<&CommandDescriptor> {
        self.commands.iter().find(|c| c.name == name)
    }

    pub fn all(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.commands.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
