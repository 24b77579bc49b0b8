use crate::dataset::RecordSet;
use serde::Serialize;
use std::collections::HashMap;

pub const TOP_DIRECTORS: usize = 100;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DirectorStats {
    pub director: String,
    pub mean_vote_average: f64,
    pub mean_revenue: f64,
    pub films: usize,
}

/// Directors ranked by mean revenue, highest first.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DirectorMatrix {
    pub directors: Vec<DirectorStats>,
}

impl DirectorMatrix {
    pub fn is_empty(&self) -> bool {
        self.directors.is_empty()
    }
}

#[derive(Default)]
struct Mean {
    sum: f64,
    samples: usize,
}

impl Mean {
    fn add(&mut self, value: Option<f64>) {
        if let Some(value) = value {
            self.sum += value;
            self.samples += 1;
        }
    }

    fn value(&self) -> Option<f64> {
        (self.samples > 0).then(|| self.sum / self.samples as f64)
    }
}

#[derive(Default)]
struct DirectorAccumulator {
    vote_average: Mean,
    revenue: Mean,
    films: usize,
}

pub fn director_matrix(records: &RecordSet) -> DirectorMatrix {
    let mut order: Vec<&str> = Vec::new();
    let mut accumulators: HashMap<&str, DirectorAccumulator> = HashMap::new();

    for record in records {
        let Some(director) = record.director.as_deref() else {
            continue;
        };
        let accumulator = accumulators.entry(director).or_insert_with(|| {
            order.push(director);
            DirectorAccumulator::default()
        });
        accumulator.vote_average.add(record.vote_average);
        accumulator.revenue.add(record.revenue);
        accumulator.films += 1;
    }

    let mut directors: Vec<DirectorStats> = order
        .into_iter()
        .filter_map(|director| {
            let accumulator = accumulators.get(director)?;
            Some(DirectorStats {
                director: director.to_owned(),
                mean_vote_average: accumulator.vote_average.value()?,
                mean_revenue: accumulator.revenue.value()?,
                films: accumulator.films,
            })
        })
        .collect();

    directors.sort_by(|a, b| b.mean_revenue.total_cmp(&a.mean_revenue));
    directors.truncate(TOP_DIRECTORS);
    DirectorMatrix { directors }
}
