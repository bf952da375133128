// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Calibration service server.
//!
//! Exposes the error budget engine over a REST (axum) facade for
//! orchestration layers that prefer JSON over linking the crate.
//!
//! # Usage
//!
//! ```ignore
//! use qubit_os_calibration::{config::Config, server, store::ConfigStore};
//!
//! let config = Config::load(None)?;
//! let store = Arc::new(ConfigStore::from_presets(&config.presets)?);
//! server::run_server(&config.server, store, config.validation.strict).await?;
//! ```

pub mod rest;

pub use rest::RestServer;

use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::Result;
use crate::store::ConfigStore;

/// Shared state for request handlers.
pub struct ServerState {
    /// Saved hardware configurations
    pub store: Arc<ConfigStore>,

    /// Default validation mode for requests that don't specify one
    pub strict: bool,

    /// Shutdown signal sender
    shutdown_tx: watch::Sender<bool>,

    /// Shutdown signal receiver
    shutdown_rx: watch::Receiver<bool>,
}

impl ServerState {
    /// Create new server state.
    pub fn new(store: Arc<ConfigStore>, strict: bool) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        Self {
            store,
            strict,
            shutdown_tx,
            shutdown_rx,
        }
    }

    /// Get a shutdown receiver.
    pub fn shutdown_receiver(&self) -> watch::Receiver<bool> {
        self.shutdown_rx.clone()
    }

    /// Signal shutdown.
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }
}

/// Run the REST server until Ctrl-C.
pub async fn run_server(
    config: &ServerConfig,
    store: Arc<ConfigStore>,
    strict: bool,
) -> Result<()> {
    let state = Arc::new(ServerState::new(store, strict));
    let rest_server = RestServer::new(state.clone());

    // Set up signal handler for graceful shutdown
    let state_for_signal = state.clone();
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            info!("Received shutdown signal, initiating graceful shutdown");
            state_for_signal.shutdown();
        }
    });

    rest_server.serve(config).await
}
