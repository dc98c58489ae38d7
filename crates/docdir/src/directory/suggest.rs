use crate::prelude::{println, *};
use colored::Colorize;
use docdir_core::directory::{suggest, Practitioner, SUGGESTION_LIMIT};

use super::fetch_practitioners;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct SuggestOptions {
    /// Partial practitioner name
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: SuggestOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Fetching practitioners from {}...", global.api_url);
    }

    let client = reqwest::Client::new();
    let records = fetch_practitioners(&client, &global.api_url).await?;

    let suggestions = suggest(&records, &options.term);

    if options.json {
        let json = format_suggestions_json(&suggestions)?;
        println!("{}", json);
    } else {
        print!("{}", format_suggestions_text(&options.term, &suggestions));
    }

    Ok(())
}

/// Convert suggestions to JSON string
fn format_suggestions_json(suggestions: &[Practitioner]) -> Result<String> {
    serde_json::to_string_pretty(suggestions)
        .map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert suggestions to formatted text with colors
fn format_suggestions_text(term: &str, suggestions: &[Practitioner]) -> String {
    let mut result = String::new();

    if suggestions.is_empty() {
        result.push_str(&format!(
            "{}\n",
            format!("No name matches for \"{term}\".").yellow()
        ));
        return result;
    }

    result.push_str(&format!(
        "{}\n",
        format!(
            "Top {} name matches for \"{}\" (of at most {}):",
            suggestions.len(),
            term,
            SUGGESTION_LIMIT
        )
        .bright_cyan()
        .bold()
    ));

    for practitioner in suggestions {
        result.push_str(&format!(
            "  {} {}\n",
            practitioner.name.white().bold(),
            format!("({})", practitioner.specialty).bright_black()
        ));
    }

    result.push_str(&format!(
        "\n{}: {}\n",
        "To search with a suggestion".bright_white().bold(),
        "docdir list --search \"<name>\"".cyan()
    ));

    result
}
