//! Declarative chart descriptions. The shapes follow Plotly's figure JSON
//! (`{"data": [...], "layout": {...}}`) so the page can hand them straight to
//! the renderer.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartDescription {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl ChartDescription {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar(BarTrace),
    Scatter(ScatterTrace),
    Choropleth(ChoroplethTrace),
    Sunburst(SunburstTrace),
}

/// A column of trace values.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Values {
    Integers(Vec<i64>),
    Numbers(Vec<f64>),
    Labels(Vec<String>),
}

impl Values {
    pub fn len(&self) -> usize {
        match self {
            Values::Integers(v) => v.len(),
            Values::Numbers(v) => v.len(),
            Values::Labels(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_numbers(&self) -> Option<Vec<f64>> {
        match self {
            Values::Integers(v) => Some(v.iter().map(|x| *x as f64).collect()),
            Values::Numbers(v) => Some(v.clone()),
            Values::Labels(_) => None,
        }
    }

    pub fn as_labels(&self) -> Option<&[String]> {
        match self {
            Values::Labels(v) => Some(v),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

impl Title {
    pub fn new(text: &str) -> Title {
        Title {
            text: text.to_owned(),
            font: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Line {
    pub width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorBar {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickfont: Option<Font>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Values>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showscale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorbar: Option<ColorBar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarTrace {
    pub x: Values,
    pub y: Values,
    pub orientation: String,
    pub marker: Marker,
    pub hovertemplate: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub x: Values,
    pub y: Values,
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoverinfo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stackgroup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
}

/// One choropleth trace per discrete category; `z` is constant and the
/// colour scale is flat so the whole trace renders in the category colour.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChoroplethTrace {
    pub name: String,
    pub legendgroup: String,
    pub showlegend: bool,
    pub locations: Vec<String>,
    pub locationmode: String,
    pub z: Vec<f64>,
    pub colorscale: Vec<(f64, String)>,
    pub showscale: bool,
    pub customdata: Vec<usize>,
    pub hovertemplate: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SunburstTrace {
    pub ids: Vec<String>,
    pub labels: Vec<String>,
    pub parents: Vec<String>,
    pub values: Vec<usize>,
    pub branchvalues: String,
    pub maxdepth: u32,
    pub insidetextorientation: String,
    pub marker: Marker,
    pub hovertemplate: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoryorder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickfont: Option<Font>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Legend {
    pub title: Title,
    pub bgcolor: String,
    pub orientation: String,
    pub yanchor: String,
    pub y: f64,
    pub x: f64,
    pub xanchor: String,
    pub font: Font,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Projection {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Geo {
    pub showframe: bool,
    pub showcoastlines: bool,
    pub projection: Projection,
    pub bgcolor: String,
    pub landcolor: String,
    pub oceancolor: String,
    pub showocean: bool,
    pub coastlinecolor: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layout {
    pub paper_bgcolor: String,
    pub plot_bgcolor: String,
    pub font: Font,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
}
