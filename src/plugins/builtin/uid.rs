use async_trait::async_trait;

use crate::application::messaging::DispatchContext;
use crate::plugins::{HandlerResult, Plugin, PluginConfig};

/// Reports the sender's id, or the replied-to user's id when used as a reply
pub struct Uid;

#[async_trait]
impl Plugin for Uid {
    fn config(&self) -> PluginConfig {
        PluginConfig::new("uid")
            .prefixed()
            .with_category("Info")
            .with_author(super::AUTHOR)
            .with_description("Show your user id, or the id of the user you reply to")
            .with_usage("uid (optionally as a reply)")
    }

    async fn on_start(&self, ctx: DispatchContext) -> HandlerResult {
        let text = match (ctx.reply_target_id(), ctx.reply_target_username()) {
            (Some(id), Some(username)) => format!("@{}: {}", username, id),
            (Some(id), None) => id.to_string(),
            (None, _) => {
                let name = format!("{} {}", ctx.first_name, ctx.last_name);
                format!("{}: {}", name.trim(), ctx.user_id)
            }
        };

        ctx.reply(&text).await?;
        Ok(())
    }
}
