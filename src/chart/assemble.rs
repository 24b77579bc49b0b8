//! Turns aggregates into chart descriptions. Assembly never fails: an empty
//! aggregate becomes `empty_chart()`.

use super::model::*;
use super::theme::{
    category_color, leaf_color, tier_color, FONT_COLOR, GRID_COLOR, LAND_COLOR,
    LEGEND_BACKGROUND, NODE_BORDER_COLOR, PAPER_BACKGROUND,
};
use crate::aggregate::{
    ActorHierarchy, DirectorMatrix, GenreActors, KeywordRanking, ProductionMap, ProductionTier,
    RevenueSeries, RevenueStreams,
};

const CHART_HEIGHT: u32 = 600;
const SUNBURST_HEIGHT: u32 = 650;

const BAR_HOVER: &str = "<b>%{y}</b><br>Count: %{x}<extra></extra>";
const SUNBURST_HOVER: &str = "<b>%{label}</b><br>Movies: %{value}<extra></extra>";
const MAP_HOVER: &str = "<b>%{location}</b><br>Films: %{customdata}<extra></extra>";

/// Placement of the keyword bar chart, which only changes the top margin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeywordPanel {
    Overview,
    Genre,
}

impl KeywordPanel {
    fn top_margin(&self) -> u32 {
        match self {
            KeywordPanel::Overview => 50,
            KeywordPanel::Genre => 20,
        }
    }
}

pub fn empty_chart() -> ChartDescription {
    ChartDescription {
        data: vec![],
        layout: Layout::dark(),
    }
}

fn themed_font() -> Font {
    Font {
        color: Some(FONT_COLOR.to_owned()),
        size: None,
    }
}

fn grid_axis(title: &str) -> Axis {
    Axis {
        title: Some(Title::new(title)),
        gridcolor: Some(GRID_COLOR.to_owned()),
        ..Default::default()
    }
}

fn labels<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    items.map(str::to_owned).collect()
}

pub fn keyword_bar(ranking: &KeywordRanking, panel: KeywordPanel) -> ChartDescription {
    if ranking.is_empty() {
        return empty_chart();
    }

    let counts: Vec<i64> = ranking.entries.iter().map(|e| e.count as i64).collect();
    let keywords = labels(ranking.entries.iter().map(|e| e.keyword.as_str()));

    let trace = BarTrace {
        x: Values::Integers(counts.clone()),
        y: Values::Labels(keywords),
        orientation: "h".to_owned(),
        marker: Marker {
            color: Some(Values::Integers(counts)),
            colorscale: Some("Viridis".to_owned()),
            showscale: Some(true),
            colorbar: Some(ColorBar {
                title: Title::new("Count"),
                tickfont: None,
            }),
            ..Default::default()
        },
        hovertemplate: BAR_HOVER.to_owned(),
    };

    let mut layout = Layout::dark();
    layout.height = Some(CHART_HEIGHT);
    layout.margin = Some(Margin {
        l: 150,
        r: 50,
        t: panel.top_margin(),
        b: 50,
    });
    layout.xaxis = Some(Axis {
        title: Some(Title::new("Count")),
        ..Default::default()
    });
    layout.yaxis = Some(Axis {
        title: Some(Title::new("Keyword")),
        categoryorder: Some("total ascending".to_owned()),
        tickfont: Some(Font {
            color: None,
            size: Some(11),
        }),
        ..Default::default()
    });

    ChartDescription {
        data: vec![Trace::Bar(trace)],
        layout,
    }
}

pub fn director_scatter(matrix: &DirectorMatrix) -> ChartDescription {
    if matrix.is_empty() {
        return empty_chart();
    }

    let revenue: Vec<f64> = matrix.directors.iter().map(|d| d.mean_revenue).collect();
    let rating: Vec<f64> = matrix.directors.iter().map(|d| d.mean_vote_average).collect();
    let names = labels(matrix.directors.iter().map(|d| d.director.as_str()));

    let trace = ScatterTrace {
        x: Values::Numbers(revenue),
        y: Values::Numbers(rating.clone()),
        mode: "markers".to_owned(),
        name: None,
        text: Some(names),
        hoverinfo: Some("text+x+y".to_owned()),
        stackgroup: None,
        marker: Some(Marker {
            color: Some(Values::Numbers(rating)),
            colorscale: Some("Teal".to_owned()),
            showscale: Some(true),
            colorbar: Some(ColorBar {
                title: Title {
                    text: "Rating".to_owned(),
                    font: Some(themed_font()),
                },
                tickfont: Some(themed_font()),
            }),
            size: Some(14.0),
            line: Some(Line {
                width: 1.0,
                color: Some(FONT_COLOR.to_owned()),
            }),
            ..Default::default()
        }),
        line: None,
    };

    let mut layout = Layout::dark();
    layout.height = Some(CHART_HEIGHT);
    layout.xaxis = Some(grid_axis("Revenue"));
    layout.yaxis = Some(grid_axis("Vote (Average)"));

    ChartDescription {
        data: vec![Trace::Scatter(trace)],
        layout,
    }
}

fn revenue_layout() -> Layout {
    let mut layout = Layout::dark();
    layout.height = Some(CHART_HEIGHT);
    layout.xaxis = Some(grid_axis("Year"));
    layout.yaxis = Some(grid_axis("Revenue"));
    layout
}

fn revenue_trace(series: &RevenueSeries) -> ScatterTrace {
    ScatterTrace {
        x: Values::Integers(series.points.iter().map(|p| p.year as i64).collect()),
        y: Values::Numbers(series.points.iter().map(|p| p.revenue).collect()),
        mode: "lines".to_owned(),
        name: Some(series.genre.clone()),
        text: None,
        hoverinfo: None,
        stackgroup: None,
        marker: None,
        line: None,
    }
}

/// Stacked area chart, one band per genre.
pub fn revenue_streamgraph(streams: &RevenueStreams) -> ChartDescription {
    if streams.is_empty() {
        return empty_chart();
    }

    let data = streams
        .series
        .iter()
        .map(|series| {
            let mut trace = revenue_trace(series);
            trace.stackgroup = Some("one".to_owned());
            Trace::Scatter(trace)
        })
        .collect();

    ChartDescription {
        data,
        layout: revenue_layout(),
    }
}

/// Single line chart of one genre's yearly revenue.
pub fn genre_revenue_line(series: &RevenueSeries) -> ChartDescription {
    if series.is_empty() {
        return empty_chart();
    }

    let mut trace = revenue_trace(series);
    trace.line = Some(Line {
        width: 2.0,
        color: None,
    });

    ChartDescription {
        data: vec![Trace::Scatter(trace)],
        layout: revenue_layout(),
    }
}

/// Choropleth with one trace per production tier present in the data, in
/// tier order, so the legend lists tiers from lowest to highest.
pub fn production_map(map: &ProductionMap) -> ChartDescription {
    if map.is_empty() {
        return empty_chart();
    }

    let data = ProductionTier::ALL
        .iter()
        .filter_map(|tier| {
            let countries: Vec<_> = map.in_tier(*tier).collect();
            if countries.is_empty() {
                return None;
            }
            let color = tier_color(tier.index());
            Some(Trace::Choropleth(ChoroplethTrace {
                name: tier.label().to_owned(),
                legendgroup: tier.label().to_owned(),
                showlegend: true,
                locations: labels(countries.iter().map(|c| c.country.as_str())),
                locationmode: "country names".to_owned(),
                z: vec![1.0; countries.len()],
                colorscale: vec![(0.0, color.to_owned()), (1.0, color.to_owned())],
                showscale: false,
                customdata: countries.iter().map(|c| c.films).collect(),
                hovertemplate: MAP_HOVER.to_owned(),
            }))
        })
        .collect();

    let legend_font = Font {
        color: Some(FONT_COLOR.to_owned()),
        size: Some(14),
    };
    let mut layout = Layout::dark();
    layout.height = Some(CHART_HEIGHT);
    layout.margin = Some(Margin {
        l: 20,
        r: 20,
        t: 70,
        b: 20,
    });
    layout.legend = Some(Legend {
        title: Title {
            text: "Production Tier".to_owned(),
            font: Some(legend_font.clone()),
        },
        bgcolor: LEGEND_BACKGROUND.to_owned(),
        orientation: "h".to_owned(),
        yanchor: "top".to_owned(),
        y: -0.12,
        x: 0.5,
        xanchor: "center".to_owned(),
        font: legend_font,
    });
    layout.geo = Some(Geo {
        showframe: false,
        showcoastlines: true,
        projection: Projection {
            kind: "equirectangular".to_owned(),
        },
        bgcolor: PAPER_BACKGROUND.to_owned(),
        landcolor: LAND_COLOR.to_owned(),
        oceancolor: PAPER_BACKGROUND.to_owned(),
        showocean: true,
        coastlinecolor: GRID_COLOR.to_owned(),
    });

    ChartDescription { data, layout }
}

#[derive(Default)]
struct SunburstNodes {
    ids: Vec<String>,
    labels: Vec<String>,
    parents: Vec<String>,
    values: Vec<usize>,
    colors: Vec<String>,
}

impl SunburstNodes {
    /// Appends a genre node followed by its actor leaves.
    fn push_genre(&mut self, genre: &GenreActors, color: &str) {
        self.ids.push(genre.genre.clone());
        self.labels.push(genre.genre.clone());
        self.parents.push(String::new());
        self.values.push(genre.total);
        self.colors.push(color.to_owned());

        let child_color = leaf_color(color);
        for actor in &genre.actors {
            self.ids.push(format!("{}/{}", genre.genre, actor.actor));
            self.labels.push(actor.actor.clone());
            self.parents.push(genre.genre.clone());
            self.values.push(actor.count);
            self.colors.push(child_color.clone());
        }
    }

    fn into_chart(self) -> ChartDescription {
        let trace = SunburstTrace {
            ids: self.ids,
            labels: self.labels,
            parents: self.parents,
            values: self.values,
            branchvalues: "total".to_owned(),
            maxdepth: 2,
            insidetextorientation: "radial".to_owned(),
            marker: Marker {
                colors: Some(self.colors),
                line: Some(Line {
                    width: 1.5,
                    color: Some(NODE_BORDER_COLOR.to_owned()),
                }),
                ..Default::default()
            },
            hovertemplate: SUNBURST_HOVER.to_owned(),
        };

        let mut layout = Layout::dark();
        layout.height = Some(SUNBURST_HEIGHT);
        layout.margin = Some(Margin {
            l: 20,
            r: 20,
            t: 80,
            b: 20,
        });

        ChartDescription {
            data: vec![Trace::Sunburst(trace)],
            layout,
        }
    }
}

/// Genre ring coloured from the palette, actor ring in darker shades.
pub fn actor_sunburst(hierarchy: &ActorHierarchy) -> ChartDescription {
    if hierarchy.is_empty() {
        return empty_chart();
    }

    let mut nodes = SunburstNodes::default();
    for (i, genre) in hierarchy.genres.iter().enumerate() {
        nodes.push_genre(genre, category_color(i));
    }
    nodes.into_chart()
}

/// Sunburst of a single genre; `color_index` is the genre's position among
/// all genres so that it keeps the same colour across panels.
pub fn genre_actor_sunburst(genre: &GenreActors, color_index: usize) -> ChartDescription {
    if genre.is_empty() {
        return empty_chart();
    }

    let mut nodes = SunburstNodes::default();
    nodes.push_genre(genre, category_color(color_index));
    nodes.into_chart()
}
