pub mod export;
pub mod list;

use anyhow::Result;
use cinecal_core::config::CinecalConfig;
use cinecal_core::protocol::MovieQuery;
use cinecal_core::session::Session;
use cinecal_core::sort::SortKey;
use owo_colors::OwoColorize;

use crate::client::Client;
use crate::utils::tui::create_spinner;

/// Run one fetch into a fresh session.
///
/// Backend failure is surfaced on stderr and leaves the session empty
/// (the caller shows a "no results" affordance); it is not retried.
pub(crate) async fn fetch_session(
    config: &CinecalConfig,
    query: &MovieQuery,
    sort_key: SortKey,
) -> Result<Session> {
    let client = Client::new(&config.api_base_url)?;

    let mut session = Session::new();
    session.set_sort_key(sort_key);

    let token = session.begin_fetch();
    let spinner = create_spinner(format!(
        "Fetching {} releases for {}",
        query.year, query.country_code
    ));
    let result = client.fetch_releases(query).await;
    spinner.finish_and_clear();

    match result {
        Ok(movies) => {
            session.complete_fetch(token, movies);
        }
        Err(e) => {
            eprintln!("   {}", e.to_string().red());
        }
    }

    Ok(session)
}
