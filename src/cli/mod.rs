use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use crate::application::LedgerService;
use crate::config::AppConfig;
use crate::{api, observability};

/// Cashbook - customer account ledger
#[derive(Parser)]
#[command(name = "cashbook")]
#[command(about = "A minimal account ledger that records statements and balances over HTTP")]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to listen on (overrides the configuration)
        #[arg(long)]
        bind: Option<String>,

        /// Snapshot file restored at startup and written at shutdown
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },

    /// Print the effective configuration and exit
    CheckConfig,
}

impl Cli {
    /// Load the configuration and apply command-line overrides on top of it.
    pub fn effective_config(&self) -> Result<AppConfig> {
        let mut config =
            AppConfig::load(self.config.as_deref()).context("Failed to load configuration")?;

        if let Commands::Serve { bind, snapshot } = &self.command {
            if let Some(bind) = bind {
                config.server.bind = bind.clone();
            }
            if let Some(snapshot) = snapshot {
                config.storage.snapshot = Some(snapshot.clone());
            }
        }

        Ok(config)
    }

    pub async fn run(self) -> Result<()> {
        let config = self.effective_config()?;

        match self.command {
            Commands::Serve { .. } => serve(config).await,
            Commands::CheckConfig => {
                println!("{}", serde_json::to_string_pretty(&config)?);
                Ok(())
            }
        }
    }
}

async fn serve(config: AppConfig) -> Result<()> {
    observability::init(&config.logging);

    let service = match &config.storage.snapshot {
        Some(path) => LedgerService::restore(path)
            .await
            .context("Failed to restore ledger snapshot")?,
        None => LedgerService::new(),
    };
    let service = Arc::new(service);

    let listener = TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    api::serve(listener, service.clone(), shutdown_signal())
        .await
        .context("HTTP server failed")?;

    if let Some(path) = &config.storage.snapshot {
        service
            .save_snapshot(path)
            .await
            .context("Failed to save ledger snapshot")?;
    }

    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
