//! Compiled-in plugin registration list

use std::sync::Arc;
use tracing::{debug, warn};

use super::builtin;
use super::trait_def::Plugin;

/// Handlers compiled into the binary, keyed by their configured name.
///
/// The catalogue is both a plugin source of its own and the set of handler
/// ids that directory manifests may bind to.
#[derive(Default)]
pub struct PluginCatalogue {
    plugins: Vec<Arc<dyn Plugin>>,
}

impl PluginCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalogue holding every built-in plugin
    pub fn builtin() -> Self {
        let mut catalogue = Self::new();
        builtin::register_all(&mut catalogue);
        catalogue
    }

    /// Register a plugin under its configured name
    pub fn register<P: Plugin + 'static>(&mut self, plugin: P) -> Result<(), String> {
        self.register_arc(Arc::new(plugin))
    }

    pub fn register_arc(&mut self, plugin: Arc<dyn Plugin>) -> Result<(), String> {
        let name = plugin.config().name;
        if self.get(&name).is_some() {
            warn!("Handler '{}' already registered", name);
            return Err(format!("Handler '{}' already registered", name));
        }

        debug!("Registered handler: {}", name);
        self.plugins.push(plugin);
        Ok(())
    }

    /// Look up a handler by id
    pub fn get(&self, id: &str) -> Option<Arc<dyn Plugin>> {
        self.plugins.iter().find(|p| p.config().name == id).cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Plugin>> {
        self.plugins.iter()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}
