//! Plugin discovery for xar-bot
//!
//! Commands come from the compiled-in catalogue and from a directory of YAML
//! manifests that rebind catalogue handlers. Each candidate is validated on its
//! own; a bad one is skipped without aborting startup.

pub mod loader;
pub mod manifest;

pub use loader::{resolve_descriptor, ManifestDirectory, PluginCandidate, PluginLoader, PluginSource};
pub use manifest::PluginManifest;
