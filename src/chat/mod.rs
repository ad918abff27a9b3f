//! Conversation sessions and the interactive chat front end.
//!
//! [`ConversationSession`] is the core: an append-only transcript answered
//! from a [`ResponseTable`](crate::responses::ResponseTable). The REPL,
//! renderer and slash commands are host pieces built around it.

/// Slash command parsing and autocomplete.
pub mod command;
/// Transcript JSON export.
pub mod export;
mod render;
mod repl;
mod session;
mod turn;
pub(crate) mod ui;

pub use render::{TerminalRenderer, TranscriptObserver, format_turn};
pub use repl::{ChatRepl, Flow};
pub use session::{ConversationSession, GREETING, SessionState};
pub use turn::{Role, Turn};
