//! Subcommand implementations.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

use crate::chat::ConversationSession;
use crate::config::ConfigManager;

/// One-shot question command handler.
pub mod ask;

/// Chat mode command handler.
pub mod chat;

/// Keyword response management command handler.
pub mod responses;

/// Loads the config and builds a fresh session from it.
pub(crate) fn load_session(config_path: Option<&Path>) -> Result<ConversationSession> {
    let manager = ConfigManager::resolve(config_path)?;
    let config = manager.load_or_default()?;
    let table = config.response_table().with_context(|| {
        format!(
            "Invalid responses in config file: {}",
            manager.config_path().display()
        )
    })?;

    tracing::debug!(
        entries = table.entries().len(),
        config = %manager.config_path().display(),
        "response table loaded"
    );

    Ok(ConversationSession::with_greeting(
        Arc::new(table),
        config.greeting(),
    ))
}
