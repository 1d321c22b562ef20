//! Gesture Hook - mouse gestures mapped to keyboard shortcuts.
//!
//! Hold the right mouse button, draw a straight stroke, release: the
//! stroke's compass direction is looked up in an action table and sent to
//! the focused application as a key tap.

pub mod action;
pub mod capture;
pub mod config;
pub mod processing;
pub mod session;

use anyhow::Context;
use capture::platform::{PlatformHook, PlatformSynthesizer};
use config::GestureConfig;
use session::GestureSession;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gesture_hook=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Session using this platform's hook and key synthesizer
pub fn platform_session(config: GestureConfig) -> GestureSession<PlatformHook> {
    GestureSession::with_synthesizer(
        PlatformHook::default(),
        config,
        PlatformSynthesizer::default(),
    )
}

/// Run gesture capture until Ctrl-C
pub async fn run(config_path: Option<&Path>) -> anyhow::Result<()> {
    tracing::info!("Starting Gesture Hook v{}", env!("CARGO_PKG_VERSION"));

    let config = match config_path {
        Some(path) => GestureConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GestureConfig::default(),
    };

    let session = platform_session(config);
    session.start().context("Failed to start gesture capture")?;

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl-C")?;

    tracing::info!("Shutting down");
    session.stop();
    Ok(())
}
