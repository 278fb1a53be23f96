//! CLI command definitions and handlers

use clap::Subcommand;
use serde_json::Value;
use tracing::{debug, info};

use crate::core::action::TranslateAction;
use crate::core::config::TranslatorConfig;
use crate::processors::languages::LANGUAGES;
use crate::processors::render::{self, TransArgument};

/// Commands the launcher invokes
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate the launcher argument (entry point)
    #[command(disable_help_flag = true)]
    Run {
        /// Text to translate; multiple words are joined with spaces
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        argument: Vec<String>,
    },

    /// Translate into a language chosen from the menu
    Trans {
        /// Text to translate
        #[arg(long, required_unless_present = "json")]
        text: Option<String>,

        /// Target language code
        #[arg(long, required_unless_present = "json")]
        to: Option<String>,

        /// Action argument as sent by the launcher: {"text": ..., "to": ...}
        #[arg(long, conflicts_with_all = ["text", "to"])]
        json: Option<String>,

        /// Remember the language as the default target
        #[arg(short, long)]
        remember: bool,
    },

    /// Expand a group: print the items of a listItems argument
    ListItems {
        /// Action argument as sent by the launcher: {"items": [...]}
        argument: String,
    },

    /// Print the supported target languages
    Languages,
}

fn print_json(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

/// Handle the entry point
pub async fn handle_run(config: TranslatorConfig, argument: Vec<String>) -> anyhow::Result<()> {
    let argument = argument.join(" ");
    let action = TranslateAction::from_config(config)?;

    match action.run(&argument).await {
        Some(items) => print_json(&render::render_items(&items)?),
        None => {
            debug!("Nothing to show");
            Ok(())
        }
    }
}

/// Handle the language menu action
pub async fn handle_trans(
    config: TranslatorConfig,
    text: Option<String>,
    to: Option<String>,
    json: Option<String>,
    remember: bool,
) -> anyhow::Result<()> {
    let argument = match (json, text, to) {
        (Some(json), _, _) => serde_json::from_str::<TransArgument>(&json)?,
        (None, Some(text), Some(to)) => TransArgument { text, to },
        _ => anyhow::bail!("either --json or both --text and --to are required"),
    };

    info!("Translating to {} (remember: {})", argument.to, remember);

    let action = TranslateAction::from_config(config)?;
    let items = action.trans(&argument.text, &argument.to, remember).await;
    print_json(&render::render_items(&items)?)
}

/// Handle lazy group expansion
pub fn handle_list_items(argument: String) -> anyhow::Result<()> {
    print_json(&render::list_items(&argument)?)
}

/// Handle the language listing
pub fn handle_languages() -> anyhow::Result<()> {
    for entry in LANGUAGES {
        println!("{} {:<6} {}", entry.flag, entry.code, entry.name);
    }
    Ok(())
}
