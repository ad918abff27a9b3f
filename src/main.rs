use anyhow::Result;
use clap::Parser;

use devmate::cli::commands::{ask, chat, responses};
use devmate::cli::{Args, Command, ResponsesCommand};
use devmate::{logging, output};

fn main() -> Result<()> {
    let args = Args::parse();

    output::init(output::OutputConfig::from_flags(args.quiet, args.no_color));
    logging::init_tracing(args.verbose);

    let config = args.config;

    match args.command {
        None | Some(Command::Chat) => {
            chat::run_chat(&chat::ChatOptions { config })?;
        }
        Some(Command::Ask { text, file, json }) => {
            ask::run_ask(&ask::AskOptions {
                text,
                file,
                json,
                config,
            })?;
        }
        Some(Command::Responses { command }) => {
            let config = config.as_deref();
            match command {
                None | Some(ResponsesCommand::List) => responses::list_responses(config)?,
                Some(ResponsesCommand::Show { keyword }) => {
                    responses::show_response(config, &keyword)?;
                }
                Some(ResponsesCommand::Add { keyword, response }) => {
                    responses::add_response(config, keyword, response)?;
                }
                Some(ResponsesCommand::Remove { keyword, yes }) => {
                    responses::remove_response(config, &keyword, yes)?;
                }
            }
        }
    }

    Ok(())
}
