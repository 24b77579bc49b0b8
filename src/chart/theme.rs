use super::model::{Font, Layout};

pub const PAPER_BACKGROUND: &str = "#1f2833";
pub const FONT_COLOR: &str = "#c5c6c7";
pub const GRID_COLOR: &str = "#45a29e";
pub const LAND_COLOR: &str = "#0b0c10";
pub const LEGEND_BACKGROUND: &str = "rgba(31, 40, 51, 0.8)";
pub const NODE_BORDER_COLOR: &str = "white";

/// Sequential palette for hierarchical panels.
pub const TEAL_PALETTE: [&str; 8] = [
    "#66FCF1", "#45A29E", "#3EC7BA", "#31A6A4", "#2E8C8E", "#207070", "#175E5C", "#0E4A47",
];

/// One colour per production tier, in tier order.
pub const TIER_PALETTE: [&str; 6] = [
    "#2c3e50", "#004d40", "#00796b", "#26a69a", "#4db6ac", "#66fcf1",
];

pub const LEAF_LUMINANCE: f64 = 0.75;
pub const LEAF_ALPHA: f64 = 0.95;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parses `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Multiplies every channel by `factor`, truncating.
    pub fn scaled(self, factor: f64) -> Rgb {
        let scale = |c: u8| (c as f64 * factor).clamp(0.0, 255.0) as u8;
        Rgb {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }

    pub fn to_rgba(self, alpha: f64) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }
}

/// Colour of the `index`-th category.
pub fn category_color(index: usize) -> &'static str {
    TEAL_PALETTE[index % TEAL_PALETTE.len()]
}

/// Darkened variant of a parent colour, used for child nodes.
pub fn leaf_color(parent: &str) -> String {
    match Rgb::from_hex(parent) {
        Some(rgb) => rgb.scaled(LEAF_LUMINANCE).to_rgba(LEAF_ALPHA),
        None => parent.to_owned(),
    }
}

pub fn tier_color(index: usize) -> &'static str {
    TIER_PALETTE[index % TIER_PALETTE.len()]
}

impl Layout {
    /// Theme-only layout: dark background and font, nothing else.
    pub fn dark() -> Layout {
        Layout {
            paper_bgcolor: PAPER_BACKGROUND.to_owned(),
            plot_bgcolor: PAPER_BACKGROUND.to_owned(),
            font: Font {
                color: Some(FONT_COLOR.to_owned()),
                size: None,
            },
            height: None,
            margin: None,
            xaxis: None,
            yaxis: None,
            legend: None,
            geo: None,
        }
    }
}
