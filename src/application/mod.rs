//! Application layer - Routing, authorization and help
//!
//! This layer contains:
//! - Messaging: router, authorization gate, executor and dispatcher
//! - Services: the help view over the command registry
//! - Errors: error types shared across layers

pub mod errors;
pub mod services;
pub mod messaging;
