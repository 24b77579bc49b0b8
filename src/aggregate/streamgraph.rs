use crate::dataset::RecordSet;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct YearlyRevenue {
    pub year: i32,
    pub revenue: f64,
}

/// Summed revenue of one genre, ordered by year ascending.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RevenueSeries {
    pub genre: String,
    pub points: Vec<YearlyRevenue>,
}

impl RevenueSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.points.iter().map(|p| p.revenue).sum()
    }

    pub fn revenue_in(&self, year: i32) -> Option<f64> {
        self.points
            .iter()
            .find(|p| p.year == year)
            .map(|p| p.revenue)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RevenueStreams {
    pub series: Vec<RevenueSeries>,
}

impl RevenueStreams {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn genre(&self, genre: &str) -> Option<&RevenueSeries> {
        self.series.iter().find(|s| s.genre == genre)
    }
}

/// Sums revenue per (year, genre). Missing revenue counts as zero, so a genre
/// without any revenue data still gets a (flat) series.
///
/// Series are ordered by their earliest (year, genre) key.
pub fn genre_revenue_streams(records: &RecordSet) -> RevenueStreams {
    let mut sums: BTreeMap<(i32, &str), f64> = BTreeMap::new();
    for record in records {
        for genre in &record.genres {
            *sums.entry((record.year, genre.as_str())).or_insert(0.0) +=
                record.revenue.unwrap_or(0.0);
        }
    }

    let mut order: Vec<&str> = Vec::new();
    let mut points: HashMap<&str, Vec<YearlyRevenue>> = HashMap::new();
    for ((year, genre), revenue) in sums {
        points
            .entry(genre)
            .or_insert_with(|| {
                order.push(genre);
                Vec::new()
            })
            .push(YearlyRevenue { year, revenue });
    }

    let series = order
        .into_iter()
        .map(|genre| RevenueSeries {
            genre: genre.to_owned(),
            points: points.remove(genre).unwrap_or_default(),
        })
        .collect();
    RevenueStreams { series }
}
