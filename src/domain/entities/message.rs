use super::User;
use chrono::{DateTime, Utc};

/// An inbound chat message, normalized from whichever adapter received it
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub chat_id: String,
    pub sender: Option<User>,
    pub text: String,
    pub reply_to: Option<Box<Message>>,
    /// When the message was received
    pub timestamp: DateTime<Utc>,
    /// Adapter that delivered it
    pub platform: String,
}

impl Message {
    pub fn new(chat_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            chat_id: chat_id.into(),
            sender: None,
            text: text.into(),
            reply_to: None,
            timestamp: Utc::now(),
            platform: "unknown".to_string(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_sender(mut self, user: User) -> Self {
        self.sender = Some(user);
        self
    }

    pub fn with_reply_to(mut self, message: Message) -> Self {
        self.reply_to = Some(Box::new(message));
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    /// Sender of the message this one replies to, if any
    pub fn reply_target(&self) -> Option<&User> {
        self.reply_to.as_ref().and_then(|m| m.sender.as_ref())
    }

    pub fn sender_id(&self) -> Option<&str> {
        self.sender.as_ref().map(|u| u.id.as_str())
    }
}
