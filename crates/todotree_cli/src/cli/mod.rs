use clap::{Parser, Subcommand};
use std::collections::HashMap;
use todotree_core::config::ConfigOverrides;
use todotree_core::error::AppError;

#[derive(Parser, Debug)]
#[command(name = "todotree", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Override configuration values (format KEY=VALUE)
    #[arg(long = "config-override", value_name = "KEY=VALUE", global = true)]
    pub config_override: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new task
    ///
    /// Example: todotree add "Read chapter 3" --due 2025-06-04 --category study
    Add {
        title: Option<String>,
        /// Due date (yyyy-MM-dd)
        #[arg(long, value_name = "YYYY-MM-DD")]
        due: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Delete a pending task by its position in `list`
    ///
    /// Example: todotree delete 2
    Delete { position: usize },
    /// Mark a pending task as done
    ///
    /// Example: todotree done 1
    Done { position: usize },
    /// Suggest a task for a category
    ///
    /// Example: todotree suggest --category "skin care"
    Suggest {
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List pending and completed tasks
    List,
    /// Show the task due soonest
    Top,
    /// Draw the tree grown from completed tasks
    Tree,
    /// List categories that have suggestions
    Categories,
}

/// Flag name used to identify config override arguments by the runtime.
pub const CONFIG_OVERRIDE_FLAG: &str = "--config-override";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOverrideTarget {
    Theme,
    Alias(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedConfigOverride {
    pub target: ConfigOverrideTarget,
    pub value: String,
}

/// Parse a raw `KEY=VALUE` override string into a structured target.
pub fn parse_config_override(raw: &str) -> Result<ParsedConfigOverride, String> {
    let (key_raw, value_raw) = raw
        .trim()
        .split_once('=')
        .ok_or_else(|| "override must be in KEY=VALUE format".to_string())?;

    let value = value_raw.trim().to_string();
    let (field, remainder) = match key_raw.split_once('.') {
        Some((field, rest)) => (field.trim(), Some(rest.trim())),
        None => (key_raw.trim(), None),
    };

    match field.to_ascii_lowercase().as_str() {
        "" => Err("override key cannot be empty".to_string()),
        "theme" if remainder.is_some() => Err("theme override cannot have subfields".to_string()),
        "theme" => Ok(ParsedConfigOverride {
            target: ConfigOverrideTarget::Theme,
            value,
        }),
        "aliases" | "alias" => {
            let alias_name = remainder
                .filter(|segment| !segment.is_empty())
                .ok_or_else(|| "aliases override requires an alias name".to_string())?;
            Ok(ParsedConfigOverride {
                target: ConfigOverrideTarget::Alias(alias_name.to_string()),
                value,
            })
        }
        other => Err(format!("unknown config field '{other}'")),
    }
}

pub fn collect_overrides(raw: &[String]) -> Result<ConfigOverrides, AppError> {
    let mut overrides = ConfigOverrides::default();
    for entry in raw {
        let parsed = parse_config_override(entry)
            .map_err(|message| AppError::invalid_input(format!("{CONFIG_OVERRIDE_FLAG}: {message}")))?;
        match parsed.target {
            ConfigOverrideTarget::Theme => overrides.theme = Some(parsed.value),
            ConfigOverrideTarget::Alias(name) => {
                overrides.aliases.insert(name, parsed.value);
            }
        }
    }
    Ok(overrides)
}

/// Splits an interactive line into arguments. Double quotes group words and
/// `\"` escapes a quote inside them.
pub fn split_command_line(line: &str) -> Result<Vec<String>, AppError> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut escape = false;

    for ch in line.chars() {
        if escape {
            if ch != '"' && ch != '\\' {
                current.push('\\');
            }
            current.push(ch);
            escape = false;
            continue;
        }

        match ch {
            '\\' if in_quotes => escape = true,
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
            }
            ch if ch.is_whitespace() && !in_quotes => {
                if !current.is_empty() || quoted {
                    args.push(std::mem::take(&mut current));
                }
                quoted = false;
            }
            ch => current.push(ch),
        }
    }

    if in_quotes {
        return Err(AppError::invalid_input("unterminated quote in command"));
    }

    if !current.is_empty() || quoted {
        args.push(current);
    }

    Ok(args)
}

/// Replaces a leading alias with its configured command line.
pub fn expand_alias(
    args: Vec<String>,
    aliases: &HashMap<String, String>,
) -> Result<Vec<String>, AppError> {
    let Some(expansion) = args.first().and_then(|first| aliases.get(first)) else {
        return Ok(args);
    };

    let mut expanded = split_command_line(expansion)?;
    expanded.extend(args.into_iter().skip(1));
    Ok(expanded)
}
