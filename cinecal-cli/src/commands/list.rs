use anyhow::Result;
use cinecal_core::config::CinecalConfig;
use cinecal_core::protocol::MovieQuery;
use cinecal_core::sort::SortKey;
use owo_colors::OwoColorize;

use crate::render::{self, Render};

pub async fn run(config: &CinecalConfig, query: MovieQuery, sort_key: SortKey) -> Result<()> {
    let session = super::fetch_session(config, &query, sort_key).await?;

    if session.store().is_empty() {
        println!("{}", "No releases found for these filters".dimmed());
        return Ok(());
    }

    println!("{}", render::header());
    for movie in session.sorted_view() {
        println!("{}", movie.render());
    }

    println!();
    println!(
        "{}",
        format!("{} releases", session.store().len()).dimmed()
    );

    Ok(())
}
