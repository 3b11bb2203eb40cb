//! Plugin loader - Builds the command registry from plugin sources

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::errors::LoadError;
use crate::domain::entities::{CommandDescriptor, CommandRegistry, Role, DEFAULT_CATEGORY};
use crate::plugins::{Plugin, PluginCatalogue, PluginConfig};
use super::manifest::PluginManifest;

/// One plugin definition as discovered, before validation
pub struct PluginCandidate {
    /// Where the candidate came from, for log lines
    pub origin: String,
    pub definition: Result<(PluginConfig, Arc<dyn Plugin>), LoadError>,
}

/// Something that enumerates plugin candidates in a stable order
pub trait PluginSource {
    fn candidates(&self) -> Vec<PluginCandidate>;
}

impl PluginSource for PluginCatalogue {
    fn candidates(&self) -> Vec<PluginCandidate> {
        self.iter()
            .map(|plugin| {
                let config = plugin.config();
                PluginCandidate {
                    origin: format!("builtin:{}", config.name),
                    definition: Ok((config, Arc::clone(plugin))),
                }
            })
            .collect()
    }
}

/// Directory of `*.yaml` / `*.yml` manifests binding names to catalogue
/// handlers. Files are read in sorted path order.
pub struct ManifestDirectory<'a> {
    dir: PathBuf,
    handlers: &'a PluginCatalogue,
}

impl<'a> ManifestDirectory<'a> {
    pub fn new(dir: impl Into<PathBuf>, handlers: &'a PluginCatalogue) -> Self {
        Self {
            dir: dir.into(),
            handlers,
        }
    }

    fn manifest_paths(&self) -> Vec<PathBuf> {
        if !self.dir.exists() {
            tracing::warn!("Plugin directory does not exist: {}", self.dir.display());
            return Vec::new();
        }

        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Failed to read plugin directory {}: {}", self.dir.display(), e);
                return Vec::new();
            }
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| match entry {
                Ok(e) => Some(e.path()),
                Err(e) => {
                    tracing::warn!("Failed to read directory entry: {}", e);
                    None
                }
            })
            .filter(|path| path.is_file() && is_manifest(path))
            .collect();
        paths.sort();
        paths
    }

    fn resolve(&self, path: &Path) -> Result<(PluginConfig, Arc<dyn Plugin>), LoadError> {
        let (config, handler_id) = PluginManifest::from_file(path)?.into_config()?;
        let handler = self
            .handlers
            .get(&handler_id)
            .ok_or(LoadError::UnknownHandler(handler_id))?;
        Ok((config, handler))
    }
}

impl PluginSource for ManifestDirectory<'_> {
    fn candidates(&self) -> Vec<PluginCandidate> {
        self.manifest_paths()
            .into_iter()
            .map(|path| PluginCandidate {
                origin: path.display().to_string(),
                definition: self.resolve(&path),
            })
            .collect()
    }
}

fn is_manifest(path: &Path) -> bool {
    // Skip hidden files
    if path.file_name().and_then(|n| n.to_str()).is_some_and(|n| n.starts_with('.')) {
        return false;
    }
    matches!(path.extension().and_then(|e| e.to_str()), Some("yaml" | "yml"))
}

/// Validate a configuration into an immutable descriptor
pub fn resolve_descriptor(config: PluginConfig, handler: Arc<dyn Plugin>) -> Result<CommandDescriptor, LoadError> {
    if config.name.is_empty() || config.name.chars().any(char::is_whitespace) {
        return Err(LoadError::InvalidName(config.name));
    }

    Ok(CommandDescriptor {
        name: config.name,
        use_prefix: config.use_prefix,
        role: config.role.map(Role).unwrap_or(Role::EVERYONE),
        category: config.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        author: config.author,
        description: config.description,
        usage: config.usage,
        handler,
    })
}

/// Plugin loader.
///
/// A candidate that fails validation is logged and skipped; loading never
/// aborts because of one bad plugin.
#[derive(Debug, Default)]
pub struct PluginLoader;

impl PluginLoader {
    pub fn new() -> Self {
        Self
    }

    /// Validate and register a single candidate
    pub fn load_plugin(&self, registry: &mut CommandRegistry, candidate: PluginCandidate) -> Result<(), LoadError> {
        let (config, handler) = candidate.definition?;
        let descriptor = resolve_descriptor(config, handler)?;
        let name = descriptor.name.clone();
        let role = descriptor.role;

        registry
            .register(descriptor)
            .map_err(|rejected| LoadError::Duplicate(rejected.name))?;

        tracing::info!("Loaded command: {} (role {}) from {}", name, role, candidate.origin);
        Ok(())
    }

    /// Load every source in order into a fresh registry
    pub fn load(&self, sources: &[&dyn PluginSource]) -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        let mut skipped = 0usize;

        for source in sources {
            for candidate in source.candidates() {
                let origin = candidate.origin.clone();
                if let Err(e) = self.load_plugin(&mut registry, candidate) {
                    tracing::warn!("Error loading command from {}: {}", origin, e);
                    skipped += 1;
                }
            }
        }

        tracing::info!("Loaded {} commands ({} skipped)", registry.len(), skipped);
        registry
    }
}
