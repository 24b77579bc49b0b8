use serde::Serialize;
use std::collections::BTreeSet;

pub const MIN_YEAR: i32 = 1960;
pub const MAX_YEAR: i32 = 2023;

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct MovieRecord {
    pub id: i64,
    pub title: String,
    pub year: i32,
    pub revenue: Option<f64>,
    pub vote_average: Option<f64>,
    pub genres: Vec<String>,
    pub keywords: Vec<String>,
    pub countries: Vec<String>,
    pub top_actor: Option<String>,
    pub director: Option<String>,
}

/// The unified, read-only set of movies a batch run works on.
#[derive(Clone, Debug, Default)]
pub struct RecordSet {
    records: Vec<MovieRecord>,
}

impl RecordSet {
    pub fn new(records: Vec<MovieRecord>) -> RecordSet {
        RecordSet { records }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every distinct genre in the set, sorted by name.
    pub fn distinct_genres(&self) -> Vec<String> {
        self.records
            .iter()
            .flat_map(|r| r.genres.iter())
            .cloned()
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a MovieRecord;
    type IntoIter = std::slice::Iter<'a, MovieRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
