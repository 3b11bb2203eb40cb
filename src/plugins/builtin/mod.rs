//! Plugins compiled into the binary

mod adminonly;
mod news;
mod ping;
mod say;
mod uid;

pub use adminonly::AdminOnly;
pub use news::News;
pub use ping::Ping;
pub use say::Say;
pub use uid::Uid;

use super::PluginCatalogue;

/// Author credited on the built-in plugins
pub const AUTHOR: &str = "xar-bot";

/// Add every built-in plugin to `catalogue`, in help order
pub fn register_all(catalogue: &mut PluginCatalogue) {
    let results = [
        catalogue.register(Ping),
        catalogue.register(Say),
        catalogue.register(Uid),
        catalogue.register(News::new()),
        catalogue.register(AdminOnly),
    ];

    for result in results {
        if let Err(e) = result {
            tracing::warn!("Skipping built-in plugin: {}", e);
        }
    }
}
