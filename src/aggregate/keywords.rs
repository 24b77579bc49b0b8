use super::counter::OrderedCounter;
use crate::dataset::RecordSet;
use serde::Serialize;

pub const TOP_KEYWORDS: usize = 50;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

/// Keywords ranked by count, highest first.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct KeywordRanking {
    pub entries: Vec<KeywordCount>,
}

impl KeywordRanking {
    pub(crate) fn from_counter(counter: OrderedCounter, limit: usize) -> KeywordRanking {
        let entries = counter
            .into_top(limit)
            .into_iter()
            .map(|(keyword, count)| KeywordCount { keyword, count })
            .collect();
        KeywordRanking { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }
}

/// Counts every (genre, keyword) pair of every record and ranks keywords by
/// the number of pairs they take part in.
pub fn genre_keyword_counts(records: &RecordSet) -> KeywordRanking {
    let mut counter = OrderedCounter::default();
    for record in records {
        for _genre in &record.genres {
            for keyword in &record.keywords {
                counter.add(keyword);
            }
        }
    }
    KeywordRanking::from_counter(counter, TOP_KEYWORDS)
}
