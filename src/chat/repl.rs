use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::path::Path;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::export::export_transcript;
use super::render::{TerminalRenderer, TranscriptObserver};
use super::session::ConversationSession;
use super::ui;
use crate::status;
use crate::ui::{Style, is_prompt_cancelled};

/// What the loop should do after handling one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive front end for a [`ConversationSession`].
///
/// Owns the session for the lifetime of one terminal run and notifies its
/// observer after every submit that changed the transcript.
pub struct ChatRepl<O: TranscriptObserver> {
    session: ConversationSession,
    observer: O,
}

impl ChatRepl<TerminalRenderer<std::io::Stdout>> {
    /// Creates a REPL that renders assistant turns to stdout.
    ///
    /// User turns are not echoed because the prompt already shows them.
    pub fn new(session: ConversationSession) -> Self {
        Self::with_observer(session, TerminalRenderer::stdout(false))
    }
}

impl<O: TranscriptObserver> ChatRepl<O> {
    pub const fn with_observer(session: ConversationSession, observer: O) -> Self {
        Self { session, observer }
    }

    pub const fn session(&self) -> &ConversationSession {
        &self.session
    }

    pub fn run(&mut self) -> Result<()> {
        ui::print_header();
        self.observer.transcript_changed(self.session.transcript());

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Ask a question, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => {
                    if self.handle_line(&line) == Flow::Quit {
                        break;
                    }
                }
                Err(e) if is_prompt_cancelled(&e) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        tracing::debug!(
            exchanges = self.session.exchange_count(),
            "chat session ended"
        );
        ui::print_goodbye();
        Ok(())
    }

    /// Handles one line of input: a slash command or chat text.
    pub fn handle_line(&mut self, line: &str) -> Flow {
        match parse_input(line) {
            Input::Empty => Flow::Continue,
            Input::Command(cmd) => self.handle_command(cmd),
            Input::Text(text) => {
                if self.session.submit(&text).is_some() {
                    self.observer.transcript_changed(self.session.transcript());
                }
                Flow::Continue
            }
        }
    }

    fn handle_command(&self, cmd: SlashCommand) -> Flow {
        match cmd {
            SlashCommand::Export(path) => {
                self.export(path.as_deref());
                Flow::Continue
            }
            SlashCommand::Help => {
                ui::print_help();
                Flow::Continue
            }
            SlashCommand::History => {
                ui::print_history(self.session.transcript());
                Flow::Continue
            }
            SlashCommand::Responses => {
                ui::print_responses(self.session.table());
                Flow::Continue
            }
            SlashCommand::Quit => Flow::Quit,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
                Flow::Continue
            }
        }
    }

    fn export(&self, path: Option<&str>) {
        let Some(path) = path else {
            ui::print_error("Usage: /export <path>");
            return;
        };

        match export_transcript(Path::new(path), self.session.transcript()) {
            Ok(()) => {
                status!(
                    "{} Transcript saved to {}\n",
                    Style::success("✓"),
                    Style::secondary(path)
                );
            }
            Err(e) => ui::print_error(&format!("{e:#}")),
        }
    }
}
