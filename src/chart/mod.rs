//! Chart descriptions for the dashboard panels, themed for the dark page.

mod assemble;
pub mod model;
pub mod theme;

pub use assemble::{
    actor_sunburst, director_scatter, empty_chart, genre_actor_sunburst, genre_revenue_line,
    keyword_bar, production_map, revenue_streamgraph, KeywordPanel,
};
pub use model::{ChartDescription, Trace};
