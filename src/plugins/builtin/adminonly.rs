use async_trait::async_trait;

use crate::application::errors::CommandError;
use crate::application::messaging::DispatchContext;
use crate::domain::entities::Role;
use crate::plugins::{HandlerResult, Plugin, PluginConfig};

/// Owner-only switch for admin-only (maintenance) mode
pub struct AdminOnly;

#[async_trait]
impl Plugin for AdminOnly {
    fn config(&self) -> PluginConfig {
        PluginConfig::new("adminonly")
            .prefixed()
            .with_role(Role::OWNER.level())
            .with_category("Admin")
            .with_author(super::AUTHOR)
            .with_description("Restrict all commands to the bot admin")
            .with_usage("adminonly [on|off]")
    }

    async fn on_start(&self, ctx: DispatchContext) -> HandlerResult {
        let enabled = match ctx.args.first().map(String::as_str) {
            None => ctx.maintenance.toggle(),
            Some("on") => {
                ctx.maintenance.set(true);
                true
            }
            Some("off") => {
                ctx.maintenance.set(false);
                false
            }
            Some(other) => {
                return Err(CommandError::InvalidArgs(format!("expected on or off, got {:?}", other)));
            }
        };

        let text = if enabled {
            "Admin-only mode is now ON. Only the bot admin can use commands."
        } else {
            "Admin-only mode is now OFF. Everyone can use commands."
        };
        ctx.reply(text).await?;
        Ok(())
    }
}
