use std::io::{self, Write};

use super::turn::{Role, Turn};
use crate::ui::Style;

/// Receives the full transcript whenever it changes.
pub trait TranscriptObserver {
    fn transcript_changed(&mut self, transcript: &[Turn]);
}

/// Writes newly appended turns to a terminal stream.
///
/// The observer is handed the whole transcript each time and remembers how
/// many turns it has already written. User turns can be skipped when the
/// prompt has already echoed them.
pub struct TerminalRenderer<W: Write> {
    out: W,
    rendered: usize,
    echo_user: bool,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout(echo_user: bool) -> Self {
        Self::new(io::stdout(), echo_user)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub const fn new(out: W, echo_user: bool) -> Self {
        Self {
            out,
            rendered: 0,
            echo_user,
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TranscriptObserver for TerminalRenderer<W> {
    fn transcript_changed(&mut self, transcript: &[Turn]) {
        let start = self.rendered.min(transcript.len());
        for turn in &transcript[start..] {
            if turn.role() == Role::User && !self.echo_user {
                continue;
            }
            // Terminal write failures are not recoverable here.
            let _ = writeln!(self.out, "{}\n", format_turn(turn));
        }
        let _ = self.out.flush();
        self.rendered = transcript.len();
    }
}

/// Formats a turn as `name: content` with a colored name.
pub fn format_turn(turn: &Turn) -> String {
    let name = match turn.role() {
        Role::User => Style::user("you"),
        Role::Assistant => Style::assistant("devmate"),
    };
    format!("{name}: {}", turn.content())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::chat::ConversationSession;

    fn rendered(renderer: TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_renders_only_new_turns() {
        let mut session = ConversationSession::default();
        let mut renderer = TerminalRenderer::new(Vec::new(), true);

        renderer.transcript_changed(session.transcript());
        session.submit("react").unwrap();
        renderer.transcript_changed(session.transcript());

        let text = rendered(renderer);
        assert_eq!(text.matches("How can I help").count(), 1);
        assert!(text.contains("react"));
        assert!(text.contains("React is perfect for interactive UIs!"));
    }

    #[test]
    fn test_skips_user_turns_without_echo() {
        let mut session = ConversationSession::default();
        let mut renderer = TerminalRenderer::new(Vec::new(), false);

        session.submit("unique question about fastapi").unwrap();
        renderer.transcript_changed(session.transcript());

        let text = rendered(renderer);
        assert!(!text.contains("unique question"));
        assert!(text.contains("FastAPI is great"));
    }

    #[test]
    fn test_repeated_notification_renders_nothing_new() {
        let session = ConversationSession::default();
        let mut renderer = TerminalRenderer::new(Vec::new(), true);

        renderer.transcript_changed(session.transcript());
        renderer.transcript_changed(session.transcript());

        assert_eq!(rendered(renderer).matches("How can I help").count(), 1);
    }
}
