//! Per-genre variants of the keyword, actor and revenue aggregates, used when
//! the dashboard is filtered down to a single genre.

use super::counter::OrderedCounter;
use super::{GenreActors, KeywordRanking, RevenueSeries, YearlyRevenue};
use crate::dataset::RecordSet;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

pub const TOP_GENRE_KEYWORDS: usize = 25;
pub const TOP_GENRE_ACTORS: usize = 30;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GenreBreakdown {
    pub genre: String,
    pub keywords: KeywordRanking,
    pub actors: GenreActors,
    pub revenue: RevenueSeries,
}

/// One breakdown per distinct genre, sorted by genre name. Every genre has an
/// entry even when some of its aggregates come out empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GenrePartition {
    pub genres: Vec<GenreBreakdown>,
}

impl GenrePartition {
    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }

    pub fn genre(&self, genre: &str) -> Option<&GenreBreakdown> {
        self.genres.iter().find(|g| g.genre == genre)
    }
}

#[derive(Default)]
struct GenreAccumulator {
    keywords: OrderedCounter,
    actors: OrderedCounter,
    // year -> (summed revenue, any revenue present)
    revenue: BTreeMap<i32, (f64, bool)>,
}

pub fn partition_by_genre(records: &RecordSet) -> GenrePartition {
    let mut accumulators: HashMap<&str, GenreAccumulator> = HashMap::new();

    for record in records {
        for genre in &record.genres {
            let accumulator = accumulators.entry(genre.as_str()).or_default();
            for keyword in &record.keywords {
                accumulator.keywords.add(keyword);
            }
            if let Some(actor) = record.top_actor.as_deref() {
                accumulator.actors.add(actor);
            }
            let year = accumulator.revenue.entry(record.year).or_insert((0.0, false));
            if let Some(revenue) = record.revenue {
                year.0 += revenue;
                year.1 = true;
            }
        }
    }

    let genres = records
        .distinct_genres()
        .into_iter()
        .map(|genre| {
            let accumulator = accumulators.remove(genre.as_str()).unwrap_or_default();
            breakdown(genre, accumulator)
        })
        .collect();
    GenrePartition { genres }
}

fn breakdown(genre: String, accumulator: GenreAccumulator) -> GenreBreakdown {
    let keywords = KeywordRanking::from_counter(accumulator.keywords, TOP_GENRE_KEYWORDS);
    let actors = GenreActors::new(&genre, accumulator.actors.into_top(TOP_GENRE_ACTORS));

    let has_revenue = accumulator.revenue.values().any(|(_, present)| *present);
    let points = if has_revenue {
        accumulator
            .revenue
            .into_iter()
            .map(|(year, (revenue, _))| YearlyRevenue { year, revenue })
            .collect()
    } else {
        vec![]
    };

    GenreBreakdown {
        revenue: RevenueSeries {
            genre: genre.clone(),
            points,
        },
        genre,
        keywords,
        actors,
    }
}
