//! Responses command handler for managing keyword responses.

use anyhow::{Context, Result, bail};
use inquire::{Confirm, Text};
use std::path::Path;

use crate::chat::ui::print_responses;
use crate::config::{ConfigFile, ConfigManager, CustomResponse};
use crate::responses::{
    EntrySource, ResponseEntry, is_builtin, normalize_keyword, validate_custom_keyword,
};
use crate::ui::{Style, handle_prompt_cancellation};
use crate::{status, warning};

fn load(config_path: Option<&Path>) -> Result<(ConfigManager, ConfigFile)> {
    let manager = ConfigManager::resolve(config_path)?;
    let config = manager.load_or_default()?;
    Ok((manager, config))
}

/// Lists all keyword responses (built-in and custom) in match order.
pub fn list_responses(config_path: Option<&Path>) -> Result<()> {
    let (manager, config) = load(config_path)?;
    let table = config.response_table().with_context(|| {
        format!(
            "Invalid responses in config file: {}",
            manager.config_path().display()
        )
    })?;

    print_responses(&table);
    Ok(())
}

/// Shows the response for one keyword.
pub fn show_response(config_path: Option<&Path>, keyword: &str) -> Result<()> {
    let (_, config) = load(config_path)?;
    let table = config.response_table()?;

    let entry = table
        .get(keyword)
        .ok_or_else(|| anyhow::anyhow!("Keyword '{}' not found", normalize_keyword(keyword)))?;

    let kind = match entry.source() {
        EntrySource::Builtin => "Built-in response",
        EntrySource::Custom => "Custom response",
    };
    println!("{}", Style::header(kind));
    println!();
    println!(
        "  {}  {}",
        Style::label("Keyword:"),
        Style::value(entry.keyword())
    );
    println!("  {}  {}", Style::label("Reply:"), entry.response());

    Ok(())
}

/// Adds a custom keyword response, prompting for anything not given.
pub fn add_response(
    config_path: Option<&Path>,
    keyword: Option<String>,
    response: Option<String>,
) -> Result<()> {
    handle_prompt_cancellation(|| add_response_inner(config_path, keyword, response))
}

fn add_response_inner(
    config_path: Option<&Path>,
    keyword: Option<String>,
    response: Option<String>,
) -> Result<()> {
    let (manager, mut config) = load(config_path)?;

    let keyword = match keyword {
        Some(k) => k,
        None => Text::new("Keyword:")
            .with_help_message("Matched case-insensitively anywhere in the question")
            .prompt()?,
    };
    let keyword = validate_custom_keyword(&keyword, &config.responses)?;

    let response = match response {
        Some(r) => r,
        None => Text::new("Reply:").prompt()?,
    };
    let response = response.trim().to_string();
    if response.is_empty() {
        bail!("Reply cannot be empty");
    }

    if let Some(shadow) = shadowing_keyword(&config, &keyword) {
        warning!(
            "{} Keyword '{keyword}' contains '{shadow}', which is matched first. \
             This response will never be used.",
            Style::warning("Warning:")
        );
    }

    config.responses.push(CustomResponse {
        keyword: keyword.clone(),
        response,
    });
    manager.save(&config)?;

    status!(
        "{} Response for '{}' added",
        Style::success("✓"),
        Style::value(&keyword)
    );

    Ok(())
}

/// Returns an earlier keyword that always matches before `keyword` could.
fn shadowing_keyword(config: &ConfigFile, keyword: &str) -> Option<String> {
    let table = config.response_table().ok()?;
    table
        .entries()
        .iter()
        .map(ResponseEntry::keyword)
        .find(|earlier| keyword.contains(earlier))
        .map(str::to_string)
}

/// Removes a custom keyword response.
pub fn remove_response(config_path: Option<&Path>, keyword: &str, yes: bool) -> Result<()> {
    handle_prompt_cancellation(|| remove_response_inner(config_path, keyword, yes))
}

fn remove_response_inner(config_path: Option<&Path>, keyword: &str, yes: bool) -> Result<()> {
    let keyword = normalize_keyword(keyword);
    if is_builtin(&keyword) {
        bail!("Cannot remove built-in response '{keyword}'");
    }

    let (manager, mut config) = load(config_path)?;

    let Some(index) = config
        .responses
        .iter()
        .position(|c| normalize_keyword(&c.keyword) == keyword)
    else {
        bail!("Keyword '{keyword}' not found");
    };

    if !yes {
        let confirm = Confirm::new(&format!("Remove response for '{keyword}'?"))
            .with_default(false)
            .prompt()?;

        if !confirm {
            println!("Cancelled");
            return Ok(());
        }
    }

    config.responses.remove(index);
    manager.save(&config)?;

    status!(
        "{} Response for '{}' removed",
        Style::success("✓"),
        Style::value(&keyword)
    );

    Ok(())
}
