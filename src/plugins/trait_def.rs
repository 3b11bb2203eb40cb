//! Plugin trait definitions

use async_trait::async_trait;

use crate::application::errors::CommandError;
use crate::application::messaging::DispatchContext;

/// Outcome a handler reports back to the executor
pub type HandlerResult = Result<(), CommandError>;

/// Contract every command plugin implements.
///
/// A plugin exposes its configuration and an entry point. The entry point owns
/// any reply it wants to send; the executor only looks at whether it faulted.
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Static configuration: name, trigger policy, role and help metadata
    fn config(&self) -> PluginConfig;

    /// Handle one matched message
    async fn on_start(&self, ctx: DispatchContext) -> HandlerResult;
}

/// Configuration object a plugin declares
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginConfig {
    pub name: String,
    pub use_prefix: bool,
    pub role: Option<u8>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub usage: Option<String>,
}

impl PluginConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Require the global prefix before the name
    pub fn prefixed(mut self) -> Self {
        self.use_prefix = true;
        self
    }

    pub fn with_role(mut self, role: u8) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }
}
