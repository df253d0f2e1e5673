use std::path::PathBuf;

use anyhow::Result;
use cinecal_core::config::CinecalConfig;
use cinecal_core::ics;
use cinecal_core::movie::{Movie, MovieId};
use cinecal_core::protocol::MovieQuery;
use cinecal_core::session::Session;
use cinecal_core::sort::SortKey;
use dialoguer::MultiSelect;
use owo_colors::OwoColorize;

use crate::render;
use crate::save;

pub async fn run(
    config: &CinecalConfig,
    query: MovieQuery,
    sort_key: SortKey,
    all: bool,
    out: Option<PathBuf>,
) -> Result<()> {
    let mut session = super::fetch_session(config, &query, sort_key).await?;

    if session.store().is_empty() {
        println!("{}", "No releases found for these filters".dimmed());
        return Ok(());
    }

    // A fetched list starts fully selected; --all keeps it that way
    if !all {
        select_interactively(&mut session)?;
    }

    if session.store().selected_count() == 0 {
        anyhow::bail!("Nothing selected; no calendar was written.");
    }

    // Generation follows the display order at export time
    let view: Vec<Movie> = session.sorted_view().into_iter().cloned().collect();
    let doc = ics::generate(&view, session.store().selected_ids())?;

    for skipped in &doc.skipped {
        println!(
            "{}",
            format!("   Skipped '{}': {}", skipped.title, skipped.reason).yellow()
        );
    }

    let path = out.unwrap_or_else(|| {
        PathBuf::from(save::suggested_filename(&query.country_code, query.year))
    });
    save::write_atomic(&path, &doc.content)?;

    let events = session.store().selected_count() - doc.skipped.len();
    println!(
        "{}",
        format!("Wrote {} events to {}", events, path.display()).green()
    );

    Ok(())
}

/// Multi-select prompt over the sorted table, everything pre-selected.
fn select_interactively(session: &mut Session) -> Result<()> {
    let (items, defaults, ids) = {
        let view = session.sorted_view();
        let items: Vec<String> = view.iter().map(|m| render::row_label(m)).collect();
        let defaults: Vec<bool> = view.iter().map(|m| session.is_selected(m.movie_id)).collect();
        let ids: Vec<MovieId> = view.iter().map(|m| m.movie_id).collect();
        (items, defaults, ids)
    };

    let picked = MultiSelect::new()
        .with_prompt("Select releases to export (space toggles, enter confirms)")
        .items(&items)
        .defaults(&defaults)
        .interact()?;

    session
        .store_mut()
        .retain_selected(picked.into_iter().map(|i| ids[i]));

    Ok(())
}
