//! Per-message context handed to a command handler

use std::sync::Arc;

use crate::application::errors::{BotError, CommandError};
use crate::domain::entities::{Message, User};
use crate::domain::traits::Bot;
use super::gate::MaintenanceSwitch;

/// Everything a handler gets for one matched message.
///
/// Built by the executor, passed to exactly one `on_start` call, then dropped.
#[derive(Clone)]
pub struct DispatchContext {
    pub chat_id: String,
    pub user_id: String,
    pub username: Option<String>,
    pub first_name: String,
    /// Empty when the sender has no last name
    pub last_name: String,
    pub args: Vec<String>,
    /// Sender of the replied-to message, when this message is a reply
    pub reply_target: Option<User>,
    pub message: Message,
    pub owner_id: String,
    pub bot: Arc<dyn Bot>,
    pub maintenance: MaintenanceSwitch,
}

impl DispatchContext {
    /// Normalize an inbound message into a handler context.
    ///
    /// Fails when the message carries no sender identity.
    pub fn build(
        message: Message,
        args: Vec<String>,
        owner_id: impl Into<String>,
        bot: Arc<dyn Bot>,
        maintenance: MaintenanceSwitch,
    ) -> Result<Self, CommandError> {
        let sender = message.sender.clone().ok_or(CommandError::MissingSender)?;

        Ok(Self {
            chat_id: message.chat_id.clone(),
            user_id: sender.id,
            username: sender.username,
            first_name: sender.first_name.unwrap_or_default(),
            last_name: sender.last_name.unwrap_or_default(),
            args,
            reply_target: message.reply_target().cloned(),
            message,
            owner_id: owner_id.into(),
            bot,
            maintenance,
        })
    }

    /// Send a reply to the originating chat
    pub async fn reply(&self, text: &str) -> Result<String, BotError> {
        self.bot.send_message(&self.chat_id, text).await
    }

    pub fn is_owner(&self) -> bool {
        self.user_id == self.owner_id
    }

    /// Arguments joined back with single spaces
    pub fn args_text(&self) -> String {
        self.args.join(" ")
    }

    pub fn reply_target_id(&self) -> Option<&str> {
        self.reply_target.as_ref().map(|u| u.id.as_str())
    }

    pub fn reply_target_username(&self) -> Option<&str> {
        self.reply_target.as_ref().and_then(|u| u.username.as_deref())
    }
}
