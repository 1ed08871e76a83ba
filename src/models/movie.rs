use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Date layout used by the release_date column
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// A single film from the movies table
///
/// Immutable once loaded. The title keeps its original casing for display;
/// indexing and lookups go through [`normalize_title`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MovieRecord {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub popularity: f64,
    pub vote_count: u64,
    pub vote_average: f64,
    pub budget: Option<f64>,
    pub revenue: Option<f64>,
    /// Revenue over budget, as precomputed in the dataset
    pub return_ratio: Option<f64>,
}

impl MovieRecord {
    /// Title as shown to clients; a missing title is the empty string
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Title in the form used by the text index
    pub fn normalized_title(&self) -> String {
        normalize_title(self.display_title())
    }

    pub fn release_year(&self) -> Option<i32> {
        self.release_date.map(|d| d.year())
    }
}

/// Lowercases a title for indexing and lookup
pub fn normalize_title(title: &str) -> String {
    title.to_lowercase()
}

/// Parses a release date, yielding `None` for blank or malformed values
pub fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), RELEASE_DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_title_displays_as_empty() {
        let movie = MovieRecord::default();
        assert_eq!(movie.display_title(), "");
        assert_eq!(movie.normalized_title(), "");
    }

    #[test]
    fn test_normalized_title_is_lowercase() {
        let movie = MovieRecord {
            title: Some("Toy Story".to_string()),
            ..Default::default()
        };
        assert_eq!(movie.display_title(), "Toy Story");
        assert_eq!(movie.normalized_title(), "toy story");
    }

    #[test]
    fn test_parse_release_date() {
        assert_eq!(
            parse_release_date("1995-10-30"),
            NaiveDate::from_ymd_opt(1995, 10, 30)
        );
        assert_eq!(parse_release_date("1995/10/30"), None);
        assert_eq!(parse_release_date(""), None);
    }

    #[test]
    fn test_release_year() {
        let movie = MovieRecord {
            release_date: parse_release_date("2003-05-30"),
            ..Default::default()
        };
        assert_eq!(movie.release_year(), Some(2003));
        assert_eq!(MovieRecord::default().release_year(), None);
    }
}
