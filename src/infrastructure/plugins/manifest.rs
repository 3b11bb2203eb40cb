//! Plugin manifest definition

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::application::errors::LoadError;
use crate::plugins::PluginConfig;

/// YAML manifest binding a configuration to a compiled-in handler.
///
/// ```yaml
/// name: hi
/// handler: say
/// use-prefix: false
/// category: Fun
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PluginManifest {
    /// Command name (required)
    pub name: Option<String>,

    /// Id of the compiled-in handler to invoke (required)
    pub handler: Option<String>,

    /// Whether the global prefix must precede the name
    #[serde(default)]
    pub use_prefix: bool,

    /// 0 = everyone, 1 = owner-only
    pub role: Option<u8>,

    pub category: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub usage: Option<String>,
}

impl PluginManifest {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, LoadError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Split into the command configuration and the handler id
    pub fn into_config(self) -> Result<(PluginConfig, String), LoadError> {
        let name = self.name.ok_or(LoadError::MissingField("name"))?;
        let handler = self.handler.ok_or(LoadError::MissingField("handler"))?;

        let config = PluginConfig {
            name,
            use_prefix: self.use_prefix,
            role: self.role,
            category: self.category,
            author: self.author,
            description: self.description,
            usage: self.usage,
        };
        Ok((config, handler))
    }
}
