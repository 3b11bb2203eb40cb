//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use xar_bot::application::errors::{BotError, CommandError};
use xar_bot::application::messaging::DispatchContext;
use xar_bot::domain::entities::{CommandDescriptor, CommandRegistry, Message, User};
use xar_bot::domain::traits::{Bot, BotInfo};
use xar_bot::infrastructure::plugins::resolve_descriptor;
use xar_bot::plugins::{HandlerResult, Plugin, PluginConfig};

pub const OWNER: &str = "1000";
pub const GUEST: &str = "42";
pub const CHAT: &str = "-500";

static INIT: Once = Once::new();

pub fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Messaging channel that records every reply
#[derive(Default)]
pub struct RecordingBot {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingBot {
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent().into_iter().map(|(_, text)| text).collect()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn start(&self) -> Result<(), BotError> {
        Ok(())
    }

    async fn send_message(&self, chat_id: &str, text: &str) -> Result<String, BotError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push((chat_id.to_string(), text.to_string()));
        Ok(sent.len().to_string())
    }

    fn bot_info(&self) -> BotInfo {
        BotInfo {
            id: "0".to_string(),
            name: "test".to_string(),
            username: "test_bot".to_string(),
        }
    }
}

/// Replies with its arguments joined by `|`
pub struct Echo {
    pub config: PluginConfig,
}

impl Echo {
    pub fn named(name: &str) -> Self {
        Self {
            config: PluginConfig::new(name).prefixed(),
        }
    }
}

#[async_trait]
impl Plugin for Echo {
    fn config(&self) -> PluginConfig {
        self.config.clone()
    }

    async fn on_start(&self, ctx: DispatchContext) -> HandlerResult {
        let text = if ctx.args.is_empty() {
            format!("{}: <none>", self.config.name)
        } else {
            format!("{}: {}", self.config.name, ctx.args.join("|"))
        };
        ctx.reply(&text).await?;
        Ok(())
    }
}

/// Always reports a fault
pub struct Faulty;

#[async_trait]
impl Plugin for Faulty {
    fn config(&self) -> PluginConfig {
        PluginConfig::new("boom").prefixed()
    }

    async fn on_start(&self, _ctx: DispatchContext) -> HandlerResult {
        Err(CommandError::ExecutionFailed("kaboom".to_string()))
    }
}

/// Panics inside the handler body
pub struct Panicky;

#[async_trait]
impl Plugin for Panicky {
    fn config(&self) -> PluginConfig {
        PluginConfig::new("panic").prefixed()
    }

    async fn on_start(&self, _ctx: DispatchContext) -> HandlerResult {
        panic!("handler blew up");
    }
}

/// Captures the context it was handed
#[derive(Default)]
pub struct Capture {
    pub seen: Arc<Mutex<Option<DispatchContext>>>,
}

#[async_trait]
impl Plugin for Capture {
    fn config(&self) -> PluginConfig {
        PluginConfig::new("capture").prefixed()
    }

    async fn on_start(&self, ctx: DispatchContext) -> HandlerResult {
        *self.seen.lock().unwrap() = Some(ctx);
        Ok(())
    }
}

pub fn descriptor(plugin: Arc<dyn Plugin>) -> CommandDescriptor {
    resolve_descriptor(plugin.config(), plugin).unwrap()
}

pub fn registry(plugins: Vec<Arc<dyn Plugin>>) -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    for plugin in plugins {
        registry.register(descriptor(plugin)).unwrap();
    }
    registry
}

pub fn message_from(sender: &str, text: &str) -> Message {
    Message::new(CHAT, text)
        .with_sender(User::new(sender).with_username(format!("user{}", sender)).with_name("Test", None::<String>))
}
