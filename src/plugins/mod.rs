//! Plugin system for xar-bot
//!
//! Commands are plugins implementing [`Plugin`]. Built-in plugins are
//! compiled in and collected in a [`PluginCatalogue`]; operators can rebind
//! them under other names through YAML manifests (see
//! `infrastructure::plugins`).

pub mod builtin;
pub mod catalogue;
pub mod trait_def;

pub use catalogue::PluginCatalogue;
pub use trait_def::{HandlerResult, Plugin, PluginConfig};
