//! Stable sorting for the movie table view.

use crate::movie::Movie;

/// Column the table view can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Title,
    ReleaseDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Current sort choice for the table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey {
            column: SortColumn::ReleaseDate,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortKey {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        SortKey { column, direction }
    }

    /// Re-sorting by the current column flips direction; picking a new
    /// column starts over ascending.
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column == column {
            self.direction = match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            self.column = column;
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Produce a sorted view of `movies` without touching their order.
///
/// Equal-key elements keep their relative input order in both
/// directions: the column comparison is reversed for descending requests
/// but ties always fall back to the original index, ascending, so tie
/// groups are never re-reversed.
pub fn sorted_view<'a>(movies: &'a [Movie], key: SortKey) -> Vec<&'a Movie> {
    let mut tagged: Vec<(usize, &Movie)> = movies.iter().enumerate().collect();

    tagged.sort_by(|(ia, a), (ib, b)| {
        let by_column = match key.column {
            SortColumn::Title => a.title.cmp(&b.title),
            // YYYY-MM-DD strings order the same lexically as by calendar
            // date; missing dates sort before all present ones.
            SortColumn::ReleaseDate => a.release_date.cmp(&b.release_date),
        };
        let by_column = match key.direction {
            SortDirection::Ascending => by_column,
            SortDirection::Descending => by_column.reverse(),
        };
        by_column.then(ia.cmp(ib))
    });

    tagged.into_iter().map(|(_, m)| m).collect()
}
