use async_trait::async_trait;

use crate::application::messaging::DispatchContext;
use crate::plugins::{HandlerResult, Plugin, PluginConfig};

/// Repeats its arguments back to the chat
pub struct Say;

#[async_trait]
impl Plugin for Say {
    fn config(&self) -> PluginConfig {
        PluginConfig::new("say")
            .prefixed()
            .with_category("Fun")
            .with_author(super::AUTHOR)
            .with_description("Make the bot say something")
            .with_usage("say <text>")
    }

    async fn on_start(&self, ctx: DispatchContext) -> HandlerResult {
        if ctx.args.is_empty() {
            ctx.reply("Usage: say <text>").await?;
            return Ok(());
        }

        ctx.reply(&ctx.args_text()).await?;
        Ok(())
    }
}
