//! Dataset loading: reads the movies, credits and keywords tables, cleans the
//! rows and joins everything into a single `RecordSet`.

use super::literal::parse_literal_as;
use super::{DataError, MovieRecord, RecordSet, MAX_YEAR, MIN_YEAR};
use chrono::{Datelike, NaiveDate};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

pub const DEFAULT_MOVIES_FILE: &str = "movies_metadata.csv";
pub const DEFAULT_CREDITS_FILE: &str = "credits.csv";
pub const DEFAULT_KEYWORDS_FILE: &str = "keywords.csv";

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Anything able to produce the unified record set for a batch run.
pub trait DatasetSource: Send + Sync {
    fn load(&self) -> Result<RecordSet, DataError>;
}

#[derive(Clone, Debug)]
pub struct DatasetFiles {
    pub movies: PathBuf,
    pub credits: PathBuf,
    pub keywords: PathBuf,
}

impl DatasetFiles {
    pub fn in_dir(dir: &Path) -> DatasetFiles {
        DatasetFiles {
            movies: dir.join(DEFAULT_MOVIES_FILE),
            credits: dir.join(DEFAULT_CREDITS_FILE),
            keywords: dir.join(DEFAULT_KEYWORDS_FILE),
        }
    }
}

/// Counters describing what happened to the raw rows of a load.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LoadSummary {
    pub movie_rows: usize,
    pub undecodable_rows: usize,
    pub dropped_bad_date: usize,
    pub dropped_out_of_range: usize,
    pub dropped_bad_id: usize,
    pub credits_rows: usize,
    pub keywords_rows: usize,
    pub kept: usize,
    pub with_credits: usize,
    pub with_keywords: usize,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct MovieRow {
    id: Option<String>,
    title: Option<String>,
    release_date: Option<String>,
    revenue: Option<String>,
    vote_average: Option<String>,
    genres: Option<String>,
    production_countries: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct CreditsRow {
    id: Option<String>,
    cast: Option<String>,
    crew: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct KeywordsRow {
    id: Option<String>,
    keywords: Option<String>,
}

#[derive(Deserialize)]
struct NamedEntry {
    name: Option<String>,
}

#[derive(Deserialize)]
struct CrewEntry {
    name: Option<String>,
    job: Option<String>,
}

#[derive(Default)]
struct Credits {
    top_actor: Option<String>,
    director: Option<String>,
}

pub struct CsvDatasetSource {
    files: DatasetFiles,
}

impl CsvDatasetSource {
    pub fn new(files: DatasetFiles) -> CsvDatasetSource {
        CsvDatasetSource { files }
    }

    pub fn files(&self) -> &DatasetFiles {
        &self.files
    }

    pub fn load_with_summary(&self) -> Result<(RecordSet, LoadSummary), DataError> {
        let mut summary = LoadSummary::default();

        let (movie_rows, skipped) = read_table::<MovieRow>("movies", &self.files.movies)?;
        summary.movie_rows = movie_rows.len() + skipped;
        summary.undecodable_rows += skipped;

        let (credits_rows, skipped) = read_table::<CreditsRow>("credits", &self.files.credits)?;
        summary.credits_rows = credits_rows.len() + skipped;
        summary.undecodable_rows += skipped;

        let (keywords_rows, skipped) =
            read_table::<KeywordsRow>("keywords", &self.files.keywords)?;
        summary.keywords_rows = keywords_rows.len() + skipped;
        summary.undecodable_rows += skipped;

        let credits = index_credits(credits_rows);
        let keywords = index_keywords(keywords_rows);

        let mut records = Vec::with_capacity(movie_rows.len());
        for row in movie_rows {
            let year = match row.release_date.as_deref().and_then(parse_year) {
                Some(year) => year,
                None => {
                    summary.dropped_bad_date += 1;
                    continue;
                }
            };
            if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
                summary.dropped_out_of_range += 1;
                continue;
            }
            let id = match row.id.as_deref().and_then(parse_id) {
                Some(id) => id,
                None => {
                    summary.dropped_bad_id += 1;
                    continue;
                }
            };

            // A movie id can show up more than once in the metadata table, so
            // the joined values are cloned rather than moved out of the index.
            let movie_credits = credits.get(&id);
            if movie_credits.is_some() {
                summary.with_credits += 1;
            }
            let movie_keywords = keywords.get(&id).cloned();
            if movie_keywords.is_some() {
                summary.with_keywords += 1;
            }

            records.push(MovieRecord {
                id,
                title: row.title.unwrap_or_default(),
                year,
                revenue: row.revenue.as_deref().and_then(parse_number),
                vote_average: row.vote_average.as_deref().and_then(parse_number),
                genres: entry_names(row.genres.as_deref()),
                keywords: movie_keywords.unwrap_or_default(),
                countries: entry_names(row.production_countries.as_deref()),
                top_actor: movie_credits.and_then(|c| c.top_actor.clone()),
                director: movie_credits.and_then(|c| c.director.clone()),
            });
        }

        summary.kept = records.len();
        Ok((RecordSet::new(records), summary))
    }
}

impl DatasetSource for CsvDatasetSource {
    fn load(&self) -> Result<RecordSet, DataError> {
        info!("Loading movie datasets...");
        let (records, summary) = self.load_with_summary()?;
        info!(
            "Read {} movie rows, {} credits rows, {} keywords rows ({} undecodable rows skipped)",
            summary.movie_rows, summary.credits_rows, summary.keywords_rows, summary.undecodable_rows
        );
        info!(
            "Dropped {} rows without a valid date, {} outside {}-{}, {} without a valid id",
            summary.dropped_bad_date,
            summary.dropped_out_of_range,
            MIN_YEAR,
            MAX_YEAR,
            summary.dropped_bad_id
        );
        info!(
            "Record set has {} movies ({} with credits, {} with keywords)",
            summary.kept, summary.with_credits, summary.with_keywords
        );
        Ok(records)
    }
}

/// Reads every decodable row of a table. Returns the rows along with the
/// number of rows that could not be decoded.
fn read_table<T: DeserializeOwned>(
    table: &'static str,
    path: &Path,
) -> Result<(Vec<T>, usize), DataError> {
    if !path.is_file() {
        return Err(DataError::MissingTable {
            table,
            path: path.to_owned(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| DataError::UnreadableTable { table, source })?;
    reader
        .headers()
        .map_err(|source| DataError::UnreadableTable { table, source })?;

    let mut rows = Vec::new();
    let mut skipped = 0;
    for result in reader.deserialize::<T>() {
        match result {
            Ok(row) => rows.push(row),
            Err(err) if err.is_io_error() => {
                return Err(DataError::UnreadableTable { table, source: err })
            }
            Err(err) => {
                debug!("Skipping undecodable {} row: {}", table, err);
                skipped += 1;
            }
        }
    }

    if rows.is_empty() {
        return Err(DataError::EmptyTable { table });
    }
    Ok((rows, skipped))
}

fn index_credits(rows: Vec<CreditsRow>) -> HashMap<i64, Credits> {
    let mut out = HashMap::with_capacity(rows.len());
    for row in rows {
        let Some(id) = row.id.as_deref().and_then(parse_id) else {
            continue;
        };
        out.entry(id).or_insert_with(|| Credits {
            top_actor: top_actor(row.cast.as_deref()),
            director: director(row.crew.as_deref()),
        });
    }
    out
}

fn index_keywords(rows: Vec<KeywordsRow>) -> HashMap<i64, Vec<String>> {
    let mut out = HashMap::with_capacity(rows.len());
    for row in rows {
        let Some(id) = row.id.as_deref().and_then(parse_id) else {
            continue;
        };
        out.entry(id)
            .or_insert_with(|| entry_names(row.keywords.as_deref()));
    }
    out
}

/// Parses an identifier. Float renderings of integers (`"862.0"`) are accepted.
pub(crate) fn parse_id(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(id) = raw.parse::<i64>() {
        return Some(id);
    }
    let value = raw.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

pub(crate) fn parse_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .map(|date| date.year())
}

pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn entry_names(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return vec![];
    };
    match parse_literal_as::<Vec<NamedEntry>>(raw) {
        Ok(entries) => entries.into_iter().filter_map(|e| e.name).collect(),
        Err(err) => {
            trace!("Unparseable list field {:?}: {}", raw, err);
            vec![]
        }
    }
}

fn top_actor(raw: Option<&str>) -> Option<String> {
    parse_literal_as::<Vec<NamedEntry>>(raw?)
        .ok()?
        .into_iter()
        .next()?
        .name
}

fn director(raw: Option<&str>) -> Option<String> {
    parse_literal_as::<Vec<CrewEntry>>(raw?)
        .ok()?
        .into_iter()
        .find(|entry| entry.job.as_deref() == Some("Director"))?
        .name
}
