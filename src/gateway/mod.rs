//! Gateway — the main event loop connecting channels to the command handlers.
//!
//! Includes: per-message task spawning, the liveness HTTP server, and
//! graceful shutdown.

mod pipeline;

use banwatch_core::config::{ApiConfig, BotConfig};
use banwatch_core::message::{IncomingMessage, OutgoingMessage};
use banwatch_core::traits::{BanLookup, Channel};
use banwatch_state::{ChannelRegistry, CooldownGate, LocaleStore};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::assets::Assets;

/// The central gateway that routes messages between channels and commands.
pub struct Gateway {
    pub(super) channels: HashMap<String, Arc<dyn Channel>>,
    pub(super) locales: Arc<LocaleStore>,
    pub(super) registry: Arc<ChannelRegistry>,
    pub(super) cooldown: Arc<dyn CooldownGate>,
    pub(super) lookup: Arc<dyn BanLookup>,
    pub(super) assets: Assets,
    pub(super) bot_config: BotConfig,
    pub(super) api_config: ApiConfig,
    pub(super) uptime: Instant,
}

impl Gateway {
    /// Build a gateway over the given channels and shared state.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        channels: HashMap<String, Arc<dyn Channel>>,
        locales: Arc<LocaleStore>,
        registry: Arc<ChannelRegistry>,
        cooldown: Arc<dyn CooldownGate>,
        lookup: Arc<dyn BanLookup>,
        assets: Assets,
        bot_config: BotConfig,
        api_config: ApiConfig,
    ) -> Self {
        Self {
            channels,
            locales,
            registry,
            cooldown,
            lookup,
            assets,
            bot_config,
            api_config,
            uptime: Instant::now(),
        }
    }

    /// Start every channel and route messages until shutdown.
    pub async fn run(self: Arc<Self>) -> anyhow::Result<()> {
        info!(
            "Banwatch gateway running | lookup: {} | channels: {}",
            self.lookup.name(),
            self.channels.keys().cloned().collect::<Vec<_>>().join(", "),
        );

        let (tx, mut rx) = mpsc::channel::<IncomingMessage>(256);

        for (name, channel) in &self.channels {
            let mut channel_rx = channel
                .start()
                .await
                .map_err(|e| anyhow::anyhow!("channel {name} failed to start: {e}"))?;
            let tx = tx.clone();
            let channel_name = name.clone();

            tokio::spawn(async move {
                while let Some(msg) = channel_rx.recv().await {
                    if tx.send(msg).await.is_err() {
                        info!("gateway inbox closed, stopping {channel_name} forwarder");
                        break;
                    }
                }
            });

            info!("Channel online: {name}");
        }

        drop(tx);

        // Liveness endpoint, mostly for uptime pingers.
        let api_handle = if self.api_config.enabled {
            let api_cfg = self.api_config.clone();
            let api_channels = self.channels.clone();
            let api_name = self.bot_config.name.clone();
            let api_uptime = self.uptime;
            Some(tokio::spawn(async move {
                crate::api::serve(api_cfg, api_channels, api_name, api_uptime).await;
            }))
        } else {
            None
        };

        // Route messages until Ctrl-C.
        loop {
            tokio::select! {
                Some(incoming) = rx.recv() => {
                    let gw = self.clone();
                    tokio::spawn(async move {
                        gw.handle_message(incoming).await;
                    });
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown signal received");
                    break;
                }
            }
        }

        self.shutdown(&api_handle).await;
        Ok(())
    }

    /// Graceful shutdown: stop the API server and all channels.
    async fn shutdown(&self, api_handle: &Option<tokio::task::JoinHandle<()>>) {
        info!("Gateway stopping...");

        if let Some(h) = api_handle {
            h.abort();
        }

        for (name, channel) in &self.channels {
            if let Err(e) = channel.stop().await {
                warn!("channel {name} did not stop cleanly: {e}");
            }
        }

        info!("Gateway stopped.");
    }

    /// Send a reply back to the channel the message came from.
    async fn send_outgoing(&self, incoming: &IncomingMessage, msg: OutgoingMessage) {
        if let Some(channel) = self.channels.get(&incoming.channel) {
            if let Err(e) = channel.send(msg).await {
                error!("failed to deliver reply: {e}");
            }
        }
    }
}
