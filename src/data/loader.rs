use std::{io, path::Path};

use serde::{Deserialize, Deserializer};

use crate::{
    error::AppResult,
    models::{movie::parse_release_date, CastCredit, CrewCredit, MovieRecord},
};

/// Counters collected while reading a table
///
/// Malformed rows and dates are skipped rather than failing the load; the
/// counts are only logged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub rows: usize,
    pub skipped_rows: usize,
    pub unparseable_dates: usize,
}

/// Raw movies row as written by the data-preparation notebook
#[derive(Debug, Deserialize)]
struct MovieRow {
    #[serde(default, deserialize_with = "lenient_id")]
    id: Option<i64>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    popularity: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    vote_count: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    vote_average: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    budget: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    revenue: Option<f64>,
    #[serde(rename = "return", default, deserialize_with = "csv::invalid_option")]
    return_ratio: Option<f64>,
}

impl MovieRow {
    fn into_record(self, report: &mut LoadReport) -> MovieRecord {
        let release_date = match self.release_date.as_deref() {
            Some(raw) if !raw.trim().is_empty() => {
                let parsed = parse_release_date(raw);
                if parsed.is_none() {
                    report.unparseable_dates += 1;
                }
                parsed
            }
            _ => None,
        };

        MovieRecord {
            id: self.id,
            title: self.title,
            release_date,
            popularity: finite(self.popularity).unwrap_or(0.0),
            vote_count: finite(self.vote_count).map(|v| v.max(0.0) as u64).unwrap_or(0),
            vote_average: finite(self.vote_average).unwrap_or(0.0),
            budget: finite(self.budget),
            revenue: finite(self.revenue),
            return_ratio: finite(self.return_ratio),
        }
    }
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Accepts ids written either as integers ("862") or as floats ("862.0")
pub(crate) fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        let s = s.trim();
        s.parse::<i64>().ok().or_else(|| {
            s.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && v.fract() == 0.0)
                .map(|v| v as i64)
        })
    }))
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.flexible(true).trim(csv::Trim::Headers);
    builder
}

/// Reads every row of type `T`, skipping rows that fail to deserialize
fn read_rows<T, R>(reader: R, table: &'static str) -> AppResult<(Vec<T>, LoadReport)>
where
    T: for<'de> Deserialize<'de>,
    R: io::Read,
{
    let mut reader = reader_builder().from_reader(reader);
    // Fail early on an unreadable header line
    reader.headers()?;

    let mut rows = Vec::new();
    let mut report = LoadReport::default();

    for (line, result) in reader.deserialize::<T>().enumerate() {
        match result {
            Ok(row) => {
                rows.push(row);
                report.rows += 1;
            }
            Err(e) => {
                tracing::debug!(table, line = line + 2, error = %e, "Skipping malformed row");
                report.skipped_rows += 1;
            }
        }
    }

    Ok((rows, report))
}

/// Loads the movies table from any CSV source
pub fn load_movies_from_reader<R: io::Read>(reader: R) -> AppResult<(Vec<MovieRecord>, LoadReport)> {
    let (rows, mut report) = read_rows::<MovieRow, _>(reader, "movies")?;
    let movies = rows
        .into_iter()
        .map(|row| row.into_record(&mut report))
        .collect();
    Ok((movies, report))
}

/// Loads the movies table from a CSV file
pub fn load_movies(path: impl AsRef<Path>) -> AppResult<(Vec<MovieRecord>, LoadReport)> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(csv::Error::from)?;
    let (movies, report) = load_movies_from_reader(file)?;
    log_report(path, "movies", &report);
    Ok((movies, report))
}

/// Loads the cast table from a CSV file
pub fn load_cast(path: impl AsRef<Path>) -> AppResult<(Vec<CastCredit>, LoadReport)> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(csv::Error::from)?;
    let (cast, report) = read_rows::<CastCredit, _>(file, "cast")?;
    log_report(path, "cast", &report);
    Ok((cast, report))
}

/// Loads the crew table from a CSV file
pub fn load_crew(path: impl AsRef<Path>) -> AppResult<(Vec<CrewCredit>, LoadReport)> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(csv::Error::from)?;
    let (crew, report) = read_rows::<CrewCredit, _>(file, "crew")?;
    log_report(path, "crew", &report);
    Ok((crew, report))
}

fn log_report(path: &Path, table: &'static str, report: &LoadReport) {
    tracing::info!(
        table,
        path = %path.display(),
        rows = report.rows,
        skipped_rows = report.skipped_rows,
        unparseable_dates = report.unparseable_dates,
        "Loaded table"
    );
}
