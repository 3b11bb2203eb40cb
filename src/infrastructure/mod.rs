//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Plugins: Plugin discovery and validation
//! - Adapters: Platform integrations (Telegram, console)

pub mod config;
pub mod plugins;
pub mod adapters;
