use anyhow::Result;
use std::path::PathBuf;

use super::load_session;
use crate::chat::ChatRepl;

pub struct ChatOptions {
    pub config: Option<PathBuf>,
}

pub fn run_chat(options: &ChatOptions) -> Result<()> {
    let session = load_session(options.config.as_deref())?;
    let mut repl = ChatRepl::new(session);
    repl.run()
}
