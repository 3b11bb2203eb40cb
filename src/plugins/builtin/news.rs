use async_trait::async_trait;
use std::time::Duration;

use crate::application::errors::CommandError;
use crate::application::messaging::DispatchContext;
use crate::plugins::{HandlerResult, Plugin, PluginConfig};

/// RSS feed presets
const FEEDS: &[(&str, &str, &str)] = &[
    ("yahoo", "Yahoo News", "https://news.yahoo.com/rss/topstories"),
    ("google", "Google News", "https://news.google.com/rss"),
    ("bbc", "BBC News", "http://feeds.bbci.co.uk/news/rss.xml"),
    ("techcrunch", "TechCrunch", "https://techcrunch.com/feed/"),
    ("hn", "Hacker News", "https://hnrss.org/newest"),
];

const MAX_ITEMS: usize = 5;

/// Fetches an RSS feed and replies with the latest headlines
pub struct News {
    /// `None` when the HTTP client could not be built
    client: Option<reqwest::Client>,
}

impl News {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent("XarBot/1.0")
            .build();

        match client {
            Ok(client) => Self { client: Some(client) },
            Err(e) => {
                tracing::error!("Failed to build HTTP client for news: {}", e);
                Self { client: None }
            }
        }
    }

    fn client(&self) -> Result<&reqwest::Client, CommandError> {
        self.client
            .as_ref()
            .ok_or_else(|| CommandError::ExecutionFailed("HTTP client unavailable".to_string()))
    }

    async fn fetch(&self, url: &str) -> Result<String, CommandError> {
        let bytes = self.client()?
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| CommandError::ExecutionFailed(format!("fetch {}: {}", url, e)))?
            .bytes()
            .await
            .map_err(|e| CommandError::ExecutionFailed(format!("read {}: {}", url, e)))?;

        let channel = rss::Channel::read_from(&bytes[..])
            .map_err(|e| CommandError::ExecutionFailed(format!("parse {}: {}", url, e)))?;

        Ok(render_channel(&channel))
    }
}

impl Default for News {
    fn default() -> Self {
        Self::new()
    }
}

/// Preset URL for a query, or the query itself when it names no preset
fn resolve_feed(query: &str) -> String {
    let lower = query.to_lowercase();
    FEEDS.iter()
        .find(|(key, name, _)| *key == lower || name.to_lowercase().contains(&lower))
        .map(|(_, _, url)| url.to_string())
        .unwrap_or_else(|| query.to_string())
}

fn feed_list() -> String {
    let list: Vec<String> = FEEDS.iter()
        .map(|(key, name, _)| format!("• {} - {}", name, key))
        .collect();
    format!("Available feeds:\n\n{}\n\nUsage: news <name|URL>", list.join("\n"))
}

fn render_channel(channel: &rss::Channel) -> String {
    let items: Vec<String> = channel.items().iter()
        .take(MAX_ITEMS)
        .map(|item| {
            let title = item.title().unwrap_or("No title");
            let link = item.link().unwrap_or("");
            format!("📰 {}\n🔗 {}", title, link)
        })
        .collect();

    if items.is_empty() {
        return format!("{}\n\nNo items.", channel.title());
    }
    format!("📡 {}\n\n{}", channel.title(), items.join("\n\n"))
}

#[async_trait]
impl Plugin for News {
    fn config(&self) -> PluginConfig {
        PluginConfig::new("news")
            .prefixed()
            .with_category("Info")
            .with_author(super::AUTHOR)
            .with_description("Latest headlines from an RSS feed")
            .with_usage("news [list|feed name|URL]")
    }

    async fn on_start(&self, ctx: DispatchContext) -> HandlerResult {
        let query = ctx.args_text();
        if query == "list" {
            ctx.reply(&feed_list()).await?;
            return Ok(());
        }

        let url = if query.is_empty() { FEEDS[0].2.to_string() } else { resolve_feed(&query) };
        let text = self.fetch(&url).await?;
        ctx.reply(&text).await?;
        Ok(())
    }
}
