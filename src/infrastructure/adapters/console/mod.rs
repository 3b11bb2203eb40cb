//! Console adapter for development/testing

use async_trait::async_trait;
use crate::domain::entities::{Message, User};
use crate::domain::traits::{Bot, BotInfo};
use crate::application::errors::BotError;

/// Chat id used for every console message
pub const CONSOLE_CHAT: &str = "console";

/// Console bot adapter for local development.
///
/// Each stdin line becomes a message from one fixed user.
pub struct ConsoleAdapter {
    info: BotInfo,
    user: User,
}

impl ConsoleAdapter {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            info: BotInfo {
                id: "console".to_string(),
                name: "xar-bot".to_string(),
                username: "console".to_string(),
            },
            user: User::new(user_id).with_username("console"),
        }
    }

    /// Wrap one input line as an inbound message
    pub fn to_message(&self, line: &str) -> Message {
        Message::new(CONSOLE_CHAT, line)
            .with_sender(self.user.clone())
            .with_platform("console")
    }
}

impl Default for ConsoleAdapter {
    fn default() -> Self {
        Self::new("console")
    }
}

#[async_trait]
impl Bot for ConsoleAdapter {
    async fn start(&self) -> Result<(), BotError> {
        tracing::info!("Starting console bot (dev mode) as user {}", self.user.id);
        Ok(())
    }

    async fn send_message(&self, _chat_id: &str, text: &str) -> Result<String, BotError> {
        println!("[BOT] {}", text);
        Ok("console_msg".to_string())
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}
