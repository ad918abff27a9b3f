//! Chat mode UI components.

use super::command::SLASH_COMMANDS;
use super::render::format_turn;
use super::turn::Turn;
use crate::responses::{EntrySource, ResponseTable};
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Development Assistant",
        Style::header("devmate"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    for (cmd, desc) in SLASH_COMMANDS {
        println!(
            "  {}  {}",
            Style::command(format!("{cmd:11}")),
            Style::secondary(desc)
        );
    }
    println!();
}

pub fn print_history(transcript: &[Turn]) {
    println!("{}", Style::header("Conversation"));
    for turn in transcript {
        println!("{}", format_turn(turn));
    }
    println!();
}

/// Prints the keyword table in match order.
pub fn print_responses(table: &ResponseTable) {
    println!("{}", Style::header("Keyword responses"));
    for entry in table.entries() {
        let marker = match entry.source() {
            EntrySource::Builtin => format!(" {}", Style::builtin_marker()),
            EntrySource::Custom => String::new(),
        };
        println!(
            "  {}  {}{marker}",
            Style::value(format!("{:12}", entry.keyword())),
            Style::secondary(entry.response())
        );
    }
    println!(
        "  {}  {}",
        Style::label(format!("{:12}", "(default)")),
        Style::secondary(table.default_response())
    );
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
