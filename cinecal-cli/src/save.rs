//! Saving generated calendars to disk.

use std::path::Path;

use anyhow::{Context, Result};

/// Default output filename for an export.
pub fn suggested_filename(country_code: &str, year: i32) -> String {
    format!("movies_{country_code}_{year}_release_calendar.ics")
}

/// Write `content` to `path` atomically: temp file in the target
/// directory, then rename over the destination.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Could not create directory {}", parent.display()))?;
    }

    let temp = path.with_extension("ics.tmp");
    std::fs::write(&temp, content)
        .with_context(|| format!("Could not write {}", temp.display()))?;
    std::fs::rename(&temp, path)
        .with_context(|| format!("Could not move calendar into place at {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_matches_backend_convention() {
        assert_eq!(
            suggested_filename("IE", 2026),
            "movies_IE_2026_release_calendar.ics"
        );
    }

    #[test]
    fn write_atomic_creates_file_and_removes_temp() {
        let dir = std::env::temp_dir().join(format!("cinecal-save-test-{}", std::process::id()));
        let path = dir.join("out.ics");

        write_atomic(&path, "BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n").unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("BEGIN:VCALENDAR"));
        assert!(!path.with_extension("ics.tmp").exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
