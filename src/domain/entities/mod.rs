//! Domain entities

pub mod user;
pub mod message;
pub mod command;

pub use user::User;
pub use message::Message;
pub use command::{CommandDescriptor, CommandRegistry, Role, DEFAULT_CATEGORY};
