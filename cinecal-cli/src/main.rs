mod client;
mod commands;
mod render;
mod save;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use chrono::Datelike;
use cinecal_core::ReleaseType;
use cinecal_core::config::CinecalConfig;
use cinecal_core::protocol::{MovieQuery, normalize_country};
use cinecal_core::sort::{SortColumn, SortDirection, SortKey};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "cinecal")]
#[command(about = "Fetch upcoming movie releases and export them as an .ics calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch matching releases and print them
    List {
        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        sort: SortArgs,
    },
    /// Fetch, select and export releases to an .ics file
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        sort: SortArgs,

        /// Export every fetched release without prompting
        #[arg(long)]
        all: bool,

        /// Output file (defaults to movies_<COUNTRY>_<year>_release_calendar.ics)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Country to list releases for (2-letter ISO code)
    #[arg(short, long)]
    country: Option<String>,

    /// Release year (defaults to the current year)
    #[arg(short, long)]
    year: Option<i32>,

    /// Release types to include, by name or code
    /// (e.g. "theatrical,digital" or "3,4")
    #[arg(short, long, value_delimiter = ',', default_value = "theatrical")]
    types: Vec<ReleaseType>,
}

#[derive(Args)]
struct SortArgs {
    /// Column to sort the table by
    #[arg(long, value_enum, default_value = "date")]
    sort: SortColumnArg,

    /// Sort descending instead of ascending
    #[arg(long)]
    desc: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortColumnArg {
    Title,
    Date,
}

impl SortArgs {
    fn key(&self) -> SortKey {
        let column = match self.sort {
            SortColumnArg::Title => SortColumn::Title,
            SortColumnArg::Date => SortColumn::ReleaseDate,
        };
        let direction = if self.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        SortKey::new(column, direction)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CinecalConfig::load()?;

    match cli.command {
        Commands::List { filters, sort } => {
            let query = resolve_query(&config, filters)?;
            commands::list::run(&config, query, sort.key()).await
        }
        Commands::Export {
            filters,
            sort,
            all,
            out,
        } => {
            let query = resolve_query(&config, filters)?;
            commands::export::run(&config, query, sort.key(), all, out).await
        }
    }
}

/// Turn CLI filter args into a validated backend query. Everything here
/// fails before any network traffic happens.
fn resolve_query(config: &CinecalConfig, filters: FilterArgs) -> Result<MovieQuery> {
    let country = filters
        .country
        .or_else(|| config.default_country.clone())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "No country given.\n\n\
                Pass one with:\n  \
                cinecal list --country IE\n\n\
                Or set default_country in the config."
            )
        })?;
    let country = normalize_country(&country)?;

    let year = filters.year.unwrap_or_else(|| chrono::Utc::now().year());
    let codes: Vec<u8> = filters.types.iter().map(|t| t.code()).collect();

    Ok(MovieQuery::new(&country, &codes, year))
}
