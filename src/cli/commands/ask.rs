use anyhow::Result;
use std::path::PathBuf;

use super::load_session;
use crate::chat::{ConversationSession, export};
use crate::input::InputReader;

pub struct AskOptions {
    pub text: Vec<String>,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub config: Option<PathBuf>,
}

pub fn run_ask(options: &AskOptions) -> Result<()> {
    let question = if options.text.is_empty() {
        InputReader::read(options.file.as_deref())?
    } else {
        options.text.join(" ")
    };

    let mut session = load_session(options.config.as_deref())?;
    print!("{}", render_answer(&mut session, &question, options.json)?);
    Ok(())
}

/// Submits `question` and renders the output for stdout.
///
/// Blank questions produce no reply; in JSON mode the greeting-only
/// transcript is still printed.
fn render_answer(session: &mut ConversationSession, question: &str, json: bool) -> Result<String> {
    let reply = session.submit(question).map(|t| t.content().to_string());

    if json {
        return Ok(format!("{}\n", export::to_json(session.transcript())?));
    }

    Ok(reply.map(|r| format!("{r}\n")).unwrap_or_default())
}
