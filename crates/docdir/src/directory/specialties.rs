use crate::prelude::{println, *};
use colored::Colorize;
use docdir_core::directory::SPECIALTIES;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct SpecialtiesOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: SpecialtiesOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("{} known specialties", SPECIALTIES.len());
    }

    if options.json {
        let json = serde_json::to_string_pretty(SPECIALTIES)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
    } else {
        print!("{}", format_specialties_text());
    }

    Ok(())
}

fn format_specialties_text() -> String {
    let mut result = String::new();

    result.push_str(&format!("{}\n", "SPECIALTIES".bright_cyan().bold()));
    for specialty in SPECIALTIES {
        result.push_str(&format!("  {}\n", specialty.bright_white()));
    }

    result.push_str(&format!(
        "\n{}: {}\n",
        "To filter by one".bright_white().bold(),
        "docdir list --specialty <NAME>".cyan()
    ));

    result
}
