#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod directory;
mod error;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Browse, search and filter the HealthConnect practitioner directory"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Practitioner directory endpoint
    #[clap(
        long,
        env = "DOCDIR_API_URL",
        global = true,
        default_value = directory::API_URL
    )]
    api_url: String,

    /// Whether to display additional information.
    #[clap(long, env = "DOCDIR_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Browse the practitioner directory
    List(directory::list::ListOptions),

    /// Suggest practitioner names for a partial search term
    Suggest(directory::suggest::SuggestOptions),

    /// Print the specialty catalog
    Specialties(directory::specialties::SpecialtiesOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::List(options) => directory::list::run(options, app.global).await,
        SubCommands::Suggest(options) => directory::suggest::run(options, app.global).await,
        SubCommands::Specialties(options) => directory::specialties::run(options, app.global),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
