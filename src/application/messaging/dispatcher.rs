//! Message dispatcher - Routes messages through the gate to the executor

use std::sync::Arc;

use crate::application::services::HelpService;
use crate::domain::entities::{CommandRegistry, Message, User};
use crate::domain::traits::Bot;
use super::executor::{Execution, Executor};
use super::gate::{AuthorizationGate, Decision, DenyReason, GlobalMode};
use super::router::{Router, Target};

/// What happened to one inbound message
pub enum Dispatch {
    /// No trigger matched
    Ignored,
    /// The gate refused; the denial was sent to the chat
    Denied(DenyReason),
    /// A help reply was sent
    Help,
    /// The handler is running
    Executed(Execution),
}

impl Dispatch {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Dispatch::Ignored)
    }
}

/// Routes each message to at most one command
pub struct MessageDispatcher {
    registry: Arc<CommandRegistry>,
    router: Router,
    gate: AuthorizationGate,
    executor: Executor,
    help: HelpService,
    bot: Arc<dyn Bot>,
}

impl MessageDispatcher {
    pub fn new(
        registry: Arc<CommandRegistry>,
        bot: Arc<dyn Bot>,
        prefix: impl Into<String>,
        owner_id: impl Into<String>,
    ) -> Self {
        let owner_id = owner_id.into();
        let mode = GlobalMode::new();

        Self {
            router: Router::from_registry(&registry, prefix),
            gate: AuthorizationGate::new(owner_id.clone(), mode.clone()),
            executor: Executor::new(Arc::clone(&bot), owner_id, mode.switch()),
            help: HelpService::new(Arc::clone(&registry)),
            registry,
            bot,
        }
    }

    pub fn global_mode(&self) -> &GlobalMode {
        self.gate.mode()
    }

    /// Match, authorize, then hand off to the executor.
    ///
    /// Returns once the handler has been invoked; await the returned
    /// [`Execution`] to wait for it to finish. Help bypasses the gate.
    pub async fn dispatch(&self, message: Message) -> Dispatch {
        let Some(route) = self.router.route(&message.text) else {
            return Dispatch::Ignored;
        };

        let descriptor = match route.target {
            Target::Command(index) => self.registry.all().nth(index),
            Target::Help => {
                let name = (!route.raw_args.is_empty()).then_some(route.raw_args.as_str());
                let text = self.help.get_help(name);
                self.reply(&message.chat_id, &text).await;
                return Dispatch::Help;
            }
        };
        let Some(descriptor) = descriptor else {
            return Dispatch::Ignored;
        };

        if let Decision::Deny(reason) = self.gate.authorize(descriptor.role, message.sender_id()) {
            tracing::debug!(
                "[{}] Denied {} for {:?}: {}",
                message.chat_id,
                descriptor.name,
                message.sender_id(),
                reason
            );
            self.reply(&message.chat_id, reason.message()).await;
            return Dispatch::Denied(reason);
        }

        let sender = message.sender.as_ref().map(User::to_string).unwrap_or_else(|| "<unknown>".to_string());
        tracing::info!(
            "[{}] {} ran {} {:?} ({} message {})",
            message.chat_id,
            sender,
            descriptor.name,
            route.args,
            message.platform,
            message.id
        );
        Dispatch::Executed(self.executor.execute(descriptor, message, route.args).await)
    }

    async fn reply(&self, chat_id: &str, text: &str) {
        if let Err(e) = self.bot.send_message(chat_id, text).await {
            tracing::error!("Failed to send message to {}: {}", chat_id, e);
        }
    }
}
