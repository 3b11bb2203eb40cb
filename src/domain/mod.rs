//! Domain layer - Core types with no transport or plugin-loading concerns
//!
//! This layer contains:
//! - Entities: User, Message, CommandDescriptor and the ordered CommandRegistry
//! - Traits: the messaging channel abstraction (Bot)

pub mod entities;
pub mod traits;
