mod api;
mod assets;
mod commands;
mod gateway;
mod i18n;
mod render;

use banwatch_channels::DiscordChannel;
use banwatch_core::locale::Locale;
use banwatch_core::traits::{BanLookup, Channel};
use banwatch_core::{config, record};
use banwatch_lookup::BanApiClient;
use banwatch_state::{ChannelRegistry, FixedWindow, LocaleStore, CHECK_COOLDOWN_WINDOW};
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "banwatch",
    version,
    about = "Banwatch — Discord anti-cheat ban lookup bot"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the TOML config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot.
    Start,
    /// Check configuration and channel readiness.
    Status,
    /// Run a one-shot ban lookup from the terminal.
    Check {
        /// The player account ID to look up.
        account_id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match cli.command {
        Commands::Start => {
            let cfg = config::load(&cli.config)?;

            if cfg.lookup.base_url.is_empty() {
                anyhow::bail!("No lookup service configured. Set [lookup].base_url in config.toml.");
            }
            let lookup = Arc::new(BanApiClient::from_config(&cfg.lookup)?);

            // Wire up channels.
            let mut channels: HashMap<String, Arc<dyn Channel>> = HashMap::new();

            if cfg.discord.enabled {
                let token = match cfg.discord.token() {
                    Some(t) => t,
                    None => anyhow::bail!(
                        "Discord is enabled but bot_token is empty. \
                         Set it in config.toml or DISCORD_TOKEN env var."
                    ),
                };
                let channel = DiscordChannel::new(token);
                channels.insert("discord".to_string(), Arc::new(channel));
            }

            if channels.is_empty() {
                anyhow::bail!("No channels enabled. Turn on [discord] in config.toml.");
            }

            let assets = assets::Assets::load(&cfg.bot.assets_dir);

            // Assemble and run the gateway.
            println!("Banwatch — Starting bot...");
            let gw = gateway::Gateway::new(
                channels,
                Arc::new(LocaleStore::new()),
                Arc::new(ChannelRegistry::new()),
                Arc::new(FixedWindow::new(CHECK_COOLDOWN_WINDOW)),
                lookup,
                assets,
                cfg.bot.clone(),
                cfg.api.clone(),
            );
            Arc::new(gw).run().await?;
        }
        Commands::Status => {
            let cfg = config::load(&cli.config)?;
            println!("Banwatch — Status Check\n");
            println!("Config file: {}", cli.config);
            println!();

            println!(
                "  discord: {}",
                if cfg.discord.enabled && cfg.discord.token().is_some() {
                    "ready"
                } else if cfg.discord.enabled {
                    "enabled, bot_token missing"
                } else {
                    "disabled"
                }
            );
            if cfg.discord.enabled && !cfg.discord.application_id.is_empty() {
                // View Channels, Send Messages, Embed Links, Attach Files,
                // Read Message History.
                println!(
                    "  invite: https://discord.com/api/oauth2/authorize?client_id={}&permissions=117760&scope=bot",
                    cfg.discord.application_id
                );
            }
            println!(
                "  lookup: {}",
                if cfg.lookup.base_url.is_empty() {
                    "not configured"
                } else {
                    &cfg.lookup.base_url
                }
            );
            println!(
                "  api: {}",
                if cfg.api.enabled {
                    format!("{}:{}", cfg.api.host, cfg.api.port)
                } else {
                    "disabled".to_string()
                }
            );
        }
        Commands::Check { account_id } => {
            if account_id.is_empty() || !account_id.chars().all(|c| c.is_ascii_digit()) {
                anyhow::bail!("account ID must be digits. Usage: banwatch check <account-id>");
            }

            let cfg = config::load(&cli.config)?;
            if cfg.lookup.base_url.is_empty() {
                anyhow::bail!("No lookup service configured. Set [lookup].base_url in config.toml.");
            }

            let client = BanApiClient::from_config(&cfg.lookup)?;
            match client.lookup(&account_id).await? {
                Some(record) => print_record(&record, &account_id),
                None => println!("No information for account {account_id}."),
            }
        }
    }

    Ok(())
}

/// Print a lookup result to the terminal, one field per line.
fn print_record(record: &record::BanStatusRecord, account_id: &str) {
    let notification = render::render(record, Locale::default(), account_id);
    println!("{}", notification.embed.title);
    for field in &notification.embed.fields {
        println!("  {}: {}", field.name, field.value);
    }
}
