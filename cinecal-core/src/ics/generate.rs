//! Calendar document generation.
//!
//! The document is emitted line by line instead of going through a
//! builder: property order inside each VEVENT stays fixed, which keeps
//! generated output byte-for-byte comparable across runs.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::CinecalResult;
use crate::movie::{Movie, MovieId};

/// MIME type of the produced artifact.
pub const CALENDAR_MIME_TYPE: &str = "text/calendar";

/// PRODID stamped into every generated document.
const PRODID: &str = "-//cinecal//movie release calendar//EN";

/// DESCRIPTION fallback for records without one.
const NO_DESCRIPTION: &str = "No description available";

/// Maximum content line length in octets before folding (RFC 5545 3.1).
const FOLD_AT: usize = 75;

/// A generated calendar document plus the records that could not be
/// turned into events.
#[derive(Debug, Clone)]
pub struct IcsDocument {
    pub content: String,
    pub skipped: Vec<SkippedRelease>,
}

/// A selected record that was left out of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRelease {
    pub movie_id: MovieId,
    pub title: String,
    pub reason: String,
}

/// Generate a calendar document for the selected subset of `movies`,
/// stamped with the current time.
pub fn generate(movies: &[Movie], selected: &HashSet<MovieId>) -> CinecalResult<IcsDocument> {
    generate_at(movies, selected, Utc::now())
}

/// Generate with an explicit DTSTAMP instant.
///
/// Events are emitted in the order the caller passes `movies`; an empty
/// selection produces a valid document with zero events. A record whose
/// release date is missing or unparseable is skipped and reported in
/// `skipped` rather than aborting the document for the valid records.
pub fn generate_at(
    movies: &[Movie],
    selected: &HashSet<MovieId>,
    now: DateTime<Utc>,
) -> CinecalResult<IcsDocument> {
    let mut lines: Vec<String> = Vec::new();
    let mut skipped = Vec::new();

    lines.push("BEGIN:VCALENDAR".into());
    lines.push("VERSION:2.0".into());
    lines.push(format!("PRODID:{PRODID}"));
    push_utc_timezone(&mut lines);

    let dtstamp = now.format("%Y%m%dT%H%M%SZ").to_string();

    for movie in movies.iter().filter(|m| selected.contains(&m.movie_id)) {
        match release_date_digits(movie) {
            Ok(digits) => push_event(&mut lines, movie, &digits, &dtstamp),
            Err(reason) => skipped.push(SkippedRelease {
                movie_id: movie.movie_id,
                title: movie.title.clone(),
                reason,
            }),
        }
    }

    lines.push("END:VCALENDAR".into());

    let mut content = String::with_capacity(lines.iter().map(|l| l.len() + 2).sum());
    for line in &lines {
        content.push_str(&fold_line(line));
        content.push_str("\r\n");
    }

    Ok(IcsDocument { content, skipped })
}

/// The fixed zero-offset timezone definition every document carries.
fn push_utc_timezone(lines: &mut Vec<String>) {
    lines.push("BEGIN:VTIMEZONE".into());
    lines.push("TZID:UTC".into());
    lines.push("BEGIN:STANDARD".into());
    lines.push("DTSTART:19700101T000000".into());
    lines.push("TZOFFSETFROM:+0000".into());
    lines.push("TZOFFSETTO:+0000".into());
    lines.push("TZNAME:UTC".into());
    lines.push("END:STANDARD".into());
    lines.push("END:VTIMEZONE".into());
}

/// One VEVENT per release. The source data carries no time of day, so
/// every event gets a synthetic 12:00-13:00 slot on the release date.
fn push_event(lines: &mut Vec<String>, movie: &Movie, date_digits: &str, dtstamp: &str) {
    lines.push("BEGIN:VEVENT".into());
    lines.push(format!("SUMMARY:{}", escape_text(&movie.title)));
    lines.push(format!(
        "DESCRIPTION:{}",
        escape_text(&event_description(movie))
    ));
    lines.push(format!("DTSTAMP:{dtstamp}"));
    lines.push(format!("UID:{}-{}@cinecal", date_digits, movie.movie_id));
    lines.push(format!("DTSTART;TZID=UTC:{date_digits}T120000"));
    lines.push(format!("DTEND;TZID=UTC:{date_digits}T130000"));
    lines.push("END:VEVENT".into());
}

/// Description body: the record's own text or the placeholder, followed
/// by the TMDB detail link.
fn event_description(movie: &Movie) -> String {
    let body = movie
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(NO_DESCRIPTION);
    format!("{}\n\nMore info: {}", body, movie.tmdb_url())
}

/// Validate the record's release date and return it as bare digits
/// (YYYYMMDD) for the UID/DTSTART/DTEND values.
fn release_date_digits(movie: &Movie) -> Result<String, String> {
    let Some(date) = movie.release_date.as_deref() else {
        return Err("missing release date".to_string());
    };
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => Ok(parsed.format("%Y%m%d").to_string()),
        Err(_) => Err(format!("unparseable release date '{date}'")),
    }
}

/// Escape a TEXT value per RFC 5545 3.3.11: backslash, semicolon, comma
/// and newline. Colons are valid inside values and stay as-is.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

/// Fold a content line at 75 octets, each continuation starting with a
/// single space (RFC 5545 3.1). Splits on char boundaries so multi-byte
/// text never tears.
fn fold_line(line: &str) -> String {
    if line.len() <= FOLD_AT {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + 8);
    let mut octets = 0;
    for c in line.chars() {
        let len = c.len_utf8();
        if octets + len > FOLD_AT {
            out.push_str("\r\n ");
            octets = 1; // the leading space counts toward the next line
        }
        out.push(c);
        octets += len;
    }
    out
}
