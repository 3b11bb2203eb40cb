//! xar-bot - a chat bot command dispatcher
//!
//! Commands are plugins bound to a trigger (global prefix plus name) and a
//! role. Each inbound message is routed to at most one command, checked by
//! the authorization gate, and executed on its own task so a faulting plugin
//! only costs a generic error reply.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod plugins;
