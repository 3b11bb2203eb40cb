use async_trait::async_trait;
use crate::application::errors::BotError;

/// Bot trait - the messaging channel the dispatcher replies through
#[async_trait]
pub trait Bot: Send + Sync {
    /// Prepare the channel before messages are received
    async fn start(&self) -> Result<(), BotError>;

    /// Send a text reply to a chat, returning the platform message id
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<String, BotError>;

    /// Get bot info
    fn bot_info(&self) -> BotInfo;
}

/// Bot information
#[derive(Debug, Clone)]
pub struct BotInfo {
    pub id: String,
    pub name: String,
    pub username: String,
}
