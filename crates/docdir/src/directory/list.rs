use crate::prelude::{println, *};
use colored::Colorize;
use docdir_core::directory::{
    ConsultationMode, ConsultationType, DirectorySession, FilterState, Practitioner, SortKey,
};

use super::{extract_query, fetch_practitioners};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListOptions {
    /// Search term matched against practitioner names and specialties
    #[arg(short, long)]
    pub search: Option<String>,

    /// Consultation mode: video, clinic, all
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Restrict to a specialty; repeat the flag to select several
    #[arg(long = "specialty", value_name = "NAME")]
    pub specialties: Vec<String>,

    /// Sort order: fees, experience, rating
    #[arg(long)]
    pub sort: Option<String>,

    /// Seed filters from a shared address or bare query string
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Reset mode, specialties and sort order before applying other flags
    #[arg(long)]
    pub clear_filters: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Complete list output: the visible subset plus its filter context
#[derive(Debug, serde::Serialize, Clone)]
pub struct ListOutput {
    pub total_records: usize,
    pub matched: usize,
    pub state: FilterState,
    pub query_string: String,
    pub items: Vec<Practitioner>,
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Fetching practitioners from {}...", global.api_url);
    }

    let client = reqwest::Client::new();
    let records = fetch_practitioners(&client, &global.api_url).await?;

    let session = build_session(records, &options)?;
    let output = list_output(&session);

    if options.json {
        output_json(&output)?;
    } else {
        output_formatted(&output)?;
    }

    Ok(())
}

/// Build the browsing session for one invocation: seed state from a shared
/// address if given, apply the clear-filters reset, then let explicit flags
/// override individual fields.
fn build_session(records: Vec<Practitioner>, options: &ListOptions) -> Result<DirectorySession> {
    let mut session = match &options.url {
        Some(url) => DirectorySession::from_query(records, &extract_query(url)),
        None => DirectorySession::new(records),
    };

    if options.clear_filters {
        session.clear_filters();
    }

    if let Some(search) = &options.search {
        session.set_search(search.clone());
    }
    if let Some(mode) = &options.mode {
        let consultation_type = ConsultationType::parse(mode)
            .ok_or_else(|| eyre!("Invalid mode: {}. Valid modes: video, clinic, all", mode))?;
        session.set_consultation_type(consultation_type);
    }
    if !options.specialties.is_empty() {
        session.set_specialties(options.specialties.clone());
    }
    if let Some(sort) = &options.sort {
        let sort_key = SortKey::parse(sort).ok_or_else(|| {
            eyre!(
                "Invalid sort order: {}. Valid orders: fees, experience, rating",
                sort
            )
        })?;
        session.set_sort_key(sort_key);
    }

    Ok(session)
}

fn list_output(session: &DirectorySession) -> ListOutput {
    ListOutput {
        total_records: session.len(),
        matched: session.visible().len(),
        state: session.state().clone(),
        query_string: session.query_string().to_string(),
        items: session.visible().to_vec(),
    }
}

/// Convert list output to JSON string
fn format_list_json(output: &ListOutput) -> Result<String> {
    serde_json::to_string_pretty(output).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert list output to formatted text with colors
fn format_list_text(output: &ListOutput) -> String {
    let mut result = String::new();

    // Header
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!(
            "HEALTHCONNECT PRACTITIONERS ({} of {} match)",
            output.matched, output.total_records
        )
        .bright_cyan()
        .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if output.items.is_empty() {
        result.push_str(&format!(
            "\n{}\n",
            "No practitioners match the current filters.".yellow()
        ));
    } else {
        for (idx, practitioner) in output.items.iter().enumerate() {
            result.push_str(&format_card(idx + 1, practitioner));
        }
    }

    // Filter context section
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&format!("{}\n", "FILTERS".bright_yellow().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_yellow()));

    let search = if output.state.search.is_empty() {
        "(none)".to_string()
    } else {
        output.state.search.clone()
    };
    let specialties = if output.state.specialties.is_empty() {
        "(all)".to_string()
    } else {
        output.state.specialties.join(", ")
    };

    result.push_str(&format!(
        "\n{}: {} | {}: {}\n",
        "Search".green(),
        search.bright_white(),
        "Mode".green(),
        output.state.consultation_type.as_str().bright_white()
    ));
    result.push_str(&format!(
        "{}: {} | {}: {}\n",
        "Specialties".green(),
        specialties.bright_white(),
        "Sort".green(),
        output.state.sort_key.as_str().bright_white()
    ));

    result.push_str(&format!(
        "\n{}: {}\n",
        "Shareable query".bright_white().bold(),
        if output.query_string.is_empty() {
            "(defaults)".to_string().bright_black().to_string()
        } else {
            output.query_string.cyan().to_string()
        }
    ));

    result.push_str(&format!("\n{}:\n", "To narrow the list".bright_white().bold()));
    result.push_str(&format!(
        "  {}\n",
        "docdir list --search <term> --mode <video|clinic> --specialty <NAME>".cyan()
    ));
    result.push_str(&format!("\n{}:\n", "To reopen a shared view".bright_white().bold()));
    result.push_str(&format!("  {}\n", "docdir list --url \"<address>\"".cyan()));
    result.push_str(&format!("\n{}:\n", "To get JSON output".bright_white().bold()));
    result.push_str(&format!("  {}\n", "docdir list --json".cyan()));

    result.push('\n');
    result
}

/// Render one practitioner card
fn format_card(position: usize, practitioner: &Practitioner) -> String {
    let mut result = String::new();

    result.push_str(&format!(
        "\n{} {} {}\n",
        format!("[{position}]").yellow().bold(),
        practitioner.name.white().bold(),
        format!("({})", practitioner.specialty).bright_blue()
    ));

    if let Some(rating) = practitioner.rating {
        let mut line = format!(
            "    {}: {}",
            "Rating".green(),
            format!("{rating:.1}").bright_yellow()
        );
        if let Some(reviews) = practitioner.reviews {
            line.push_str(&format!(" {}", format!("({reviews} reviews)").bright_black()));
        }
        result.push_str(&line);
        result.push('\n');
    }

    result.push_str(&format!(
        "    {}: {} years | {}: {}\n",
        "Experience".green(),
        practitioner.experience.to_string().bright_white(),
        "Fee".green(),
        format!("₹{}", practitioner.fee).bright_yellow()
    ));

    if let Some(location) = &practitioner.location {
        result.push_str(&format!(
            "    {}: {}\n",
            "Location".green(),
            location.bright_white()
        ));
    }

    if let Some(languages) = &practitioner.languages {
        result.push_str(&format!(
            "    {}: {}\n",
            "Languages".green(),
            languages.join(", ").bright_white()
        ));
    }

    if let Some(education) = &practitioner.education {
        result.push_str(&format!(
            "    {}: {}\n",
            "Education".green(),
            education.bright_white()
        ));
    }

    let mut modes: Vec<&str> = Vec::new();
    if practitioner
        .consultation_mode
        .contains(&ConsultationMode::Video)
    {
        modes.push("Video Consult");
    }
    if practitioner
        .consultation_mode
        .contains(&ConsultationMode::Clinic)
    {
        modes.push("In Clinic");
    }
    if !modes.is_empty() {
        result.push_str(&format!(
            "    {}: {}\n",
            "Modes".green(),
            modes.join(" | ").bright_magenta()
        ));
    }

    if practitioner.available {
        result.push_str(&format!(
            "    {}\n",
            "Available Today".bright_green().bold()
        ));
    } else {
        let next = practitioner.next_available.as_deref().unwrap_or("Tomorrow");
        result.push_str(&format!(
            "    {}: {}\n",
            "Next".green(),
            next.bright_white()
        ));
    }

    result
}

fn output_json(output: &ListOutput) -> Result<()> {
    let json = format_list_json(output)?;
    println!("{}", json);
    Ok(())
}

fn output_formatted(output: &ListOutput) -> Result<()> {
    let formatted = format_list_text(output);
    print!("{}", formatted);
    Ok(())
}
