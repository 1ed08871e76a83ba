use chrono::{Datelike, Weekday};

use crate::models::MovieRecord;

/// Result of counting releases matching a date predicate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReleaseTally {
    pub count: usize,
    /// Movies without a usable release date
    pub skipped: usize,
}

fn tally<F>(movies: &[MovieRecord], matches: F) -> ReleaseTally
where
    F: Fn(chrono::NaiveDate) -> bool,
{
    let mut result = ReleaseTally::default();
    for movie in movies {
        match movie.release_date {
            Some(date) if matches(date) => result.count += 1,
            Some(_) => {}
            None => result.skipped += 1,
        }
    }
    if result.skipped > 0 {
        tracing::debug!(skipped = result.skipped, "Skipped movies without release date");
    }
    result
}

/// Counts movies released in the given month (1-12), any year
pub fn count_releases_in_month(movies: &[MovieRecord], month: u32) -> ReleaseTally {
    tally(movies, |date| date.month() == month)
}

/// Counts movies released on the given weekday
pub fn count_releases_on_weekday(movies: &[MovieRecord], weekday: Weekday) -> ReleaseTally {
    tally(movies, |date| date.weekday() == weekday)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::movie::parse_release_date;

    fn released(dates: &[&str]) -> Vec<MovieRecord> {
        dates
            .iter()
            .map(|d| MovieRecord {
                release_date: parse_release_date(d),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_count_by_month_across_years() {
        let movies = released(&["1995-10-30", "2001-10-01", "2001-11-01", "bad"]);
        let tally = count_releases_in_month(&movies, 10);
        assert_eq!(tally, ReleaseTally { count: 2, skipped: 1 });
        assert_eq!(count_releases_in_month(&movies, 1).count, 0);
    }

    #[test]
    fn test_count_by_weekday() {
        // 1995-10-30 was a Monday, 2024-01-06 a Saturday
        let movies = released(&["1995-10-30", "2024-01-06", "2024-01-08", ""]);
        assert_eq!(count_releases_on_weekday(&movies, Weekday::Mon).count, 2);
        assert_eq!(count_releases_on_weekday(&movies, Weekday::Sat).count, 1);
        assert_eq!(count_releases_on_weekday(&movies, Weekday::Sun).skipped, 1);
    }
}
