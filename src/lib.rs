//! # devmate - Development Assistant Chat
//!
//! `devmate` is a terminal chat assistant for developers. Each question is
//! answered from a keyword table: built-in replies for a few topics plus any
//! custom replies configured by the user.
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive chat
//! devmate
//!
//! # One-shot question
//! devmate ask "Should I use FastAPI?"
//!
//! # Add a custom reply
//! devmate responses add --keyword rust --response "Rust is a great fit!"
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/devmate/config.toml`:
//!
//! ```toml
//! [devmate]
//! greeting = "Hi! What are we building today?"
//! default_response = "I can help with Python, JavaScript, testing, and more!"
//!
//! [[responses]]
//! keyword = "rust"
//! response = "Rust is a great fit for systems work!"
//! ```
//!
//! ## Library use
//!
//! ```
//! use devmate::chat::ConversationSession;
//!
//! let mut session = ConversationSession::default();
//! let reply = session.submit("Any tips for React?").map(|t| t.content().to_string());
//! assert_eq!(reply.as_deref(), Some("React is perfect for interactive UIs!"));
//! assert_eq!(session.transcript().len(), 3);
//! ```

/// Conversation sessions and the interactive chat front end.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// File system utilities.
pub mod fs;

/// Input reading from files and stdin.
pub mod input;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Keyword response table.
pub mod responses;

/// Terminal UI components (styles, prompt helpers).
pub mod ui;
