use clap::{Parser, Subcommand};
use std::path::Path;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use xar_bot::application::errors::{BotError, ConfigError};
use xar_bot::application::messaging::{Dispatch, MessageDispatcher};
use xar_bot::application::services::HelpService;
use xar_bot::domain::entities::CommandRegistry;
use xar_bot::domain::traits::Bot;
use xar_bot::infrastructure::adapters::{ConsoleAdapter, TelegramAdapter};
use xar_bot::infrastructure::config::Config;
use xar_bot::infrastructure::plugins::{ManifestDirectory, PluginLoader, PluginSource};
use xar_bot::plugins::PluginCatalogue;

/// Long-poll timeout for getUpdates
const POLL_TIMEOUT_SECS: i64 = 30;
/// Back-off after a failed poll
const POLL_RETRY_SECS: u64 = 5;

#[derive(Parser)]
#[command(name = "xar-bot")]
#[command(about = "Chat bot command dispatcher", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Telegram bot token (overrides config)
    #[arg(short, long)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
    /// Load plugins and print the command listing
    Commands,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run => run_bot(&cli.config, cli.token),
        Commands::Version => {
            println!("xar-bot v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(),
        Commands::Commands => list_commands(&cli.config),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn load_config(config_path: &str, token_override: Option<String>) -> Result<Config, ConfigError> {
    let mut config = if Path::new(config_path).exists() {
        match Config::load(config_path) {
            Ok(mut config) => {
                config.apply_env();
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config: {}, using defaults", e);
                Config::load_env()
            }
        }
    } else {
        Config::load_env()
    };

    if let Some(token) = token_override {
        config.set_token(token);
    }

    config.validate()?;
    Ok(config)
}

/// Run plugin discovery to completion
fn load_registry(config: &Config) -> CommandRegistry {
    let catalogue = PluginCatalogue::builtin();
    let loader = PluginLoader::new();

    if config.plugins.auto_load {
        let manifests = ManifestDirectory::new(&config.plugins.directory, &catalogue);
        let sources: [&dyn PluginSource; 2] = [&catalogue, &manifests];
        loader.load(&sources)
    } else {
        loader.load(&[&catalogue as &dyn PluginSource])
    }
}

fn run_bot(config_path: &str, token_override: Option<String>) -> Result<(), BotError> {
    let config = load_config(config_path, token_override)?;
    tracing::info!("Starting xar-bot: {}", config.bot.name);

    let registry = Arc::new(load_registry(&config));

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| BotError::Internal(format!("Failed to start runtime: {}", e)))?;

    match config.telegram_token() {
        Some(token) => rt.block_on(run_telegram_bot(token.to_string(), registry, &config)),
        None => rt.block_on(run_console_bot(registry, &config)),
    }
}

async fn run_telegram_bot(token: String, registry: Arc<CommandRegistry>, config: &Config) -> Result<(), BotError> {
    let mut adapter = TelegramAdapter::new(token);
    adapter.fetch_bot_info().await?;
    adapter.start().await?;

    let info = adapter.bot_info();
    tracing::info!("Bot started: @{}", info.username);

    // Telegram's command menu only understands "/" commands
    if config.bot.prefix == "/" {
        let menu: Vec<(String, String)> = registry
            .all()
            .filter(|c| c.use_prefix)
            .map(|c| (c.name.clone(), c.description.clone().unwrap_or_default()))
            .collect();
        if let Err(e) = adapter.register_commands(&menu).await {
            tracing::warn!("Failed to register commands: {}", e);
        }
    }

    let adapter = Arc::new(adapter);
    let channel: Arc<dyn Bot> = adapter.clone();
    let dispatcher = MessageDispatcher::new(registry, channel, &config.bot.prefix, &config.bot.owner_id);

    let mut offset: i64 = 0;
    tracing::info!("Bot polling started");

    loop {
        match adapter.get_updates(offset, POLL_TIMEOUT_SECS).await {
            Ok(updates) => {
                if !updates.is_empty() {
                    tracing::debug!("Received {} updates", updates.len());
                }
                for update in &updates {
                    if let Some(msg) = &update.message {
                        // Handlers keep running on their own task
                        dispatcher.dispatch(msg.to_domain()).await;
                    }
                }
                offset = TelegramAdapter::get_next_offset(&updates, offset);
            }
            Err(e) => {
                tracing::error!("Polling error: {}", e);
                tokio::time::sleep(tokio::time::Duration::from_secs(POLL_RETRY_SECS)).await;
            }
        }
    }
}

async fn run_console_bot(registry: Arc<CommandRegistry>, config: &Config) -> Result<(), BotError> {
    let adapter = Arc::new(ConsoleAdapter::new(config.console_user()));
    adapter.start().await?;

    let channel: Arc<dyn Bot> = adapter.clone();
    let dispatcher = MessageDispatcher::new(registry, channel, &config.bot.prefix, &config.bot.owner_id);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| BotError::Internal(format!("Failed to read stdin: {}", e)))?
    {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Wait for the handler so replies print before the next prompt
        if let Dispatch::Executed(execution) = dispatcher.dispatch(adapter.to_message(line)).await {
            execution.outcome().await;
        }
    }

    Ok(())
}

fn list_commands(config_path: &str) -> Result<(), BotError> {
    let config = load_config(config_path, None)?;
    let registry = Arc::new(load_registry(&config));
    println!("{}", HelpService::new(registry).get_help(None));
    Ok(())
}

fn init_config() -> Result<(), BotError> {
    let yaml = serde_yaml::to_string(&Config::default())
        .map_err(|e| BotError::Internal(format!("Failed to serialize config: {}", e)))?;
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
    Ok(())
}
