use async_trait::async_trait;

use crate::application::messaging::DispatchContext;
use crate::plugins::{HandlerResult, Plugin, PluginConfig};

pub struct Ping;

#[async_trait]
impl Plugin for Ping {
    fn config(&self) -> PluginConfig {
        PluginConfig::new("ping")
            .prefixed()
            .with_category("System")
            .with_author(super::AUTHOR)
            .with_description("Check that the bot is alive")
    }

    async fn on_start(&self, ctx: DispatchContext) -> HandlerResult {
        ctx.reply("Pong!").await?;
        Ok(())
    }
}
