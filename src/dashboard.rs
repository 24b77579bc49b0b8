//! The batch run: load the record set once, aggregate it and assemble every
//! dashboard panel.

use crate::aggregate::{
    actor_genre_hierarchy, country_production, director_matrix, genre_keyword_counts,
    genre_revenue_streams, partition_by_genre,
};
use crate::chart::{
    actor_sunburst, director_scatter, genre_actor_sunburst, genre_revenue_line, keyword_bar,
    production_map, revenue_streamgraph, ChartDescription, KeywordPanel,
};
use crate::dataset::{DataError, DatasetSource, RecordSet};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::info;

/// Every chart of the dashboard. Genre keyed panels hold one chart per
/// distinct genre, including genres whose chart came out empty.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dashboard {
    pub panel1: ChartDescription,
    pub panel2: ChartDescription,
    pub panel3: ChartDescription,
    pub panel4: ChartDescription,
    pub panel5: ChartDescription,
    pub genre_panel1: BTreeMap<String, ChartDescription>,
    pub genre_panel5: BTreeMap<String, ChartDescription>,
    pub genre_panel3: BTreeMap<String, ChartDescription>,
}

impl Dashboard {
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.genre_panel1.keys().map(String::as_str)
    }
}

/// Loads the record set from `source` and builds the dashboard from it.
pub fn run_batch(source: &dyn DatasetSource) -> Result<Dashboard, DataError> {
    let start = Instant::now();
    let records = source.load()?;
    let dashboard = build_dashboard(&records);
    info!(
        "Built dashboard from {} movies in {}ms",
        records.len(),
        start.elapsed().as_millis()
    );
    Ok(dashboard)
}

pub fn build_dashboard(records: &RecordSet) -> Dashboard {
    info!("Generating Panel 1...");
    let panel1 = keyword_bar(&genre_keyword_counts(records), KeywordPanel::Overview);

    info!("Generating Panel 2...");
    let panel2 = director_scatter(&director_matrix(records));

    info!("Generating Panel 3...");
    let panel3 = revenue_streamgraph(&genre_revenue_streams(records));

    info!("Generating Panel 4...");
    let panel4 = production_map(&country_production(records));

    info!("Generating Panel 5...");
    let panel5 = actor_sunburst(&actor_genre_hierarchy(records));

    info!("Generating genre panels...");
    let partition = partition_by_genre(records);
    let mut genre_panel1 = BTreeMap::new();
    let mut genre_panel5 = BTreeMap::new();
    let mut genre_panel3 = BTreeMap::new();
    // genres are sorted, so the position doubles as the colour index
    for (color_index, breakdown) in partition.genres.iter().enumerate() {
        genre_panel1.insert(
            breakdown.genre.clone(),
            keyword_bar(&breakdown.keywords, KeywordPanel::Genre),
        );
        genre_panel5.insert(
            breakdown.genre.clone(),
            genre_actor_sunburst(&breakdown.actors, color_index),
        );
        genre_panel3.insert(
            breakdown.genre.clone(),
            genre_revenue_line(&breakdown.revenue),
        );
    }

    Dashboard {
        panel1,
        panel2,
        panel3,
        panel4,
        panel5,
        genre_panel1,
        genre_panel5,
        genre_panel3,
    }
}
