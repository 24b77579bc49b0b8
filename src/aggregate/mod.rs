//! Pure aggregations over a `RecordSet`, one per dashboard panel.

mod by_genre;
mod counter;
mod countries;
mod directors;
mod keywords;
mod streamgraph;
mod sunburst;

pub use by_genre::{
    partition_by_genre, GenreBreakdown, GenrePartition, TOP_GENRE_ACTORS, TOP_GENRE_KEYWORDS,
};
pub use countries::{country_production, CountryProduction, ProductionMap, ProductionTier};
pub use directors::{director_matrix, DirectorMatrix, DirectorStats, TOP_DIRECTORS};
pub use keywords::{genre_keyword_counts, KeywordCount, KeywordRanking, TOP_KEYWORDS};
pub use streamgraph::{genre_revenue_streams, RevenueSeries, RevenueStreams, YearlyRevenue};
pub use sunburst::{actor_genre_hierarchy, ActorCount, ActorHierarchy, GenreActors, TOP_ACTORS};
