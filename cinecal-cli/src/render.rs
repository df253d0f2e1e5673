//! Terminal rendering for the release table.
//!
//! Colored rows for direct output, plain rows for the interactive
//! selection prompt (dialoguer draws its own highlight).

use cinecal_core::Movie;
use owo_colors::OwoColorize;

const DATE_WIDTH: usize = 12;
const TYPE_WIDTH: usize = 10;
const TITLE_WIDTH: usize = 58;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Movie {
    fn render(&self) -> String {
        let type_cell = format!("{:<TYPE_WIDTH$}", self.release_type_label());
        let type_cell = match self.release_type_label() {
            "Premiere" => type_cell.magenta().to_string(),
            "Theatrical" => type_cell.green().to_string(),
            "Digital" => type_cell.cyan().to_string(),
            "Physical" => type_cell.blue().to_string(),
            "TV" => type_cell.yellow().to_string(),
            _ => type_cell.dimmed().to_string(),
        };

        format!(
            "  {:<DATE_WIDTH$}  {}  {:<TITLE_WIDTH$}  {}",
            date_cell(self),
            type_cell,
            truncate(&self.title, TITLE_WIDTH),
            self.country_code.dimmed(),
        )
    }
}

/// Table header matching the row layout.
pub fn header() -> String {
    format!(
        "  {:<DATE_WIDTH$}  {:<TYPE_WIDTH$}  {:<TITLE_WIDTH$}  {}",
        "DATE", "TYPE", "TITLE", "COUNTRY"
    )
    .dimmed()
    .to_string()
}

/// Plain one-line label for interactive selection items.
pub fn row_label(movie: &Movie) -> String {
    format!(
        "{:<DATE_WIDTH$}  {:<TYPE_WIDTH$}  {}",
        date_cell(movie),
        movie.release_type_label(),
        truncate(&movie.title, TITLE_WIDTH),
    )
}

fn date_cell(movie: &Movie) -> String {
    movie
        .release_date
        .clone()
        .unwrap_or_else(|| "TBA".to_string())
}

/// Truncate to `max` characters, ending in an ellipsis when cut.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, date: Option<&str>) -> Movie {
        Movie {
            movie_id: 1,
            tmdb_id: 1,
            title: title.to_string(),
            description: None,
            poster_url: None,
            country_code: "IE".to_string(),
            release_type: 3,
            release_date: date.map(String::from),
        }
    }

    #[test]
    fn row_label_contains_date_type_and_title() {
        let label = row_label(&movie("Dune: Part Three", Some("2026-11-20")));
        assert!(label.contains("2026-11-20"));
        assert!(label.contains("Theatrical"));
        assert!(label.contains("Dune: Part Three"));
    }

    #[test]
    fn missing_date_renders_tba() {
        let label = row_label(&movie("Mystery", None));
        assert!(label.contains("TBA"));
    }

    #[test]
    fn long_titles_are_truncated_with_ellipsis() {
        let long = "t".repeat(200);
        let label = row_label(&movie(&long, Some("2026-01-01")));
        assert!(label.chars().count() < 200);
        assert!(label.ends_with('…'));
    }

    #[test]
    fn short_titles_are_untouched() {
        assert_eq!(truncate("short", 58), "short");
    }
}
