use std::sync::Arc;

use super::turn::Turn;
use crate::responses::ResponseTable;

/// Greeting seeded as the first turn of every session.
pub const GREETING: &str = "Hi! How can I help with your development?";

/// Observable state of a session.
///
/// Response selection never suspends, so a session is only ever seen
/// waiting for the next user turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingUserInput,
}

/// One conversation: an append-only transcript plus the table used to answer.
///
/// The transcript always starts with a single assistant greeting, and every
/// user turn is immediately followed by one assistant turn. A session is not
/// internally synchronized; the host owns it and passes it by `&mut`.
#[derive(Debug, Clone)]
pub struct ConversationSession {
    transcript: Vec<Turn>,
    table: Arc<ResponseTable>,
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new(Arc::new(ResponseTable::default()))
    }
}

impl ConversationSession {
    /// Starts a session seeded with [`GREETING`].
    pub fn new(table: Arc<ResponseTable>) -> Self {
        Self::with_greeting(table, GREETING)
    }

    /// Starts a session seeded with a custom greeting.
    pub fn with_greeting(table: Arc<ResponseTable>, greeting: impl Into<String>) -> Self {
        Self {
            transcript: vec![Turn::assistant(greeting)],
            table,
        }
    }

    /// Records a user turn and its reply.
    ///
    /// Blank input (empty after trimming) is ignored and returns `None`.
    /// Otherwise the text is stored as given and the appended assistant
    /// turn is returned.
    pub fn submit(&mut self, text: &str) -> Option<&Turn> {
        if text.trim().is_empty() {
            tracing::trace!("ignoring blank input");
            return None;
        }

        let reply = self.select_response(text).to_string();
        self.transcript.push(Turn::user(text));
        self.transcript.push(Turn::assistant(reply));

        tracing::debug!(turns = self.transcript.len(), "exchange appended");
        self.transcript.last()
    }

    /// Picks the reply for `text` without touching the transcript.
    pub fn select_response(&self, text: &str) -> &str {
        self.table.find_match(text).map_or_else(
            || {
                tracing::debug!("no keyword matched, using default");
                self.table.default_response()
            },
            |entry| {
                tracing::debug!(keyword = entry.keyword(), "keyword matched");
                entry.response()
            },
        )
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn table(&self) -> &ResponseTable {
        &self.table
    }

    /// Number of completed user/assistant exchanges.
    pub const fn exchange_count(&self) -> usize {
        (self.transcript.len() - 1) / 2
    }

    pub const fn state(&self) -> SessionState {
        SessionState::AwaitingUserInput
    }
}
