use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "devmate")]
#[command(about = "AI-powered development assistant chat")]
#[command(version)]
pub struct Args {
    /// Config file to use instead of ~/.config/devmate/config.toml
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Suppress status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging (`RUST_LOG` takes precedence)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive chat mode (default)
    Chat,
    /// Ask a single question and print the reply
    Ask {
        /// Question text (reads --file or stdin if omitted)
        text: Vec<String>,

        /// Read the question from a file
        #[arg(short = 'f', long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Print the whole transcript as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage keyword responses
    Responses {
        #[command(subcommand)]
        command: Option<ResponsesCommand>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ResponsesCommand {
    /// List all keyword responses in match order
    List,
    /// Show the response for a keyword
    Show {
        /// Keyword to show
        keyword: String,
    },
    /// Add a custom keyword response
    Add {
        /// Trigger keyword (prompted if omitted)
        #[arg(short = 'k', long)]
        keyword: Option<String>,

        /// Reply text (prompted if omitted)
        #[arg(short = 'r', long)]
        response: Option<String>,
    },
    /// Remove a custom keyword response
    Remove {
        /// Keyword to remove
        keyword: String,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}
