use super::counter::OrderedCounter;
use crate::dataset::RecordSet;
use serde::Serialize;

/// Production volume buckets. A count belongs to the first tier whose upper
/// bound it does not exceed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ProductionTier {
    #[serde(rename = "No Data")]
    NoData,
    #[serde(rename = "1-10")]
    UpTo10,
    #[serde(rename = "11-50")]
    UpTo50,
    #[serde(rename = "51-100")]
    UpTo100,
    #[serde(rename = "101-500")]
    UpTo500,
    #[serde(rename = ">500")]
    Over500,
}

impl ProductionTier {
    pub const ALL: [ProductionTier; 6] = [
        ProductionTier::NoData,
        ProductionTier::UpTo10,
        ProductionTier::UpTo50,
        ProductionTier::UpTo100,
        ProductionTier::UpTo500,
        ProductionTier::Over500,
    ];

    pub fn from_count(count: usize) -> ProductionTier {
        match count {
            0 => ProductionTier::NoData,
            1..=10 => ProductionTier::UpTo10,
            11..=50 => ProductionTier::UpTo50,
            51..=100 => ProductionTier::UpTo100,
            101..=500 => ProductionTier::UpTo500,
            _ => ProductionTier::Over500,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductionTier::NoData => "No Data",
            ProductionTier::UpTo10 => "1-10",
            ProductionTier::UpTo50 => "11-50",
            ProductionTier::UpTo100 => "51-100",
            ProductionTier::UpTo500 => "101-500",
            ProductionTier::Over500 => ">500",
        }
    }

    /// Position of the tier in `ALL`.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for ProductionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CountryProduction {
    pub country: String,
    pub films: usize,
    pub tier: ProductionTier,
}

/// Film counts per production country, most productive first.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProductionMap {
    pub countries: Vec<CountryProduction>,
}

impl ProductionMap {
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn country(&self, name: &str) -> Option<&CountryProduction> {
        self.countries.iter().find(|c| c.country == name)
    }

    pub fn in_tier(&self, tier: ProductionTier) -> impl Iterator<Item = &CountryProduction> {
        self.countries.iter().filter(move |c| c.tier == tier)
    }
}

pub fn country_production(records: &RecordSet) -> ProductionMap {
    let mut counter = OrderedCounter::default();
    for record in records {
        for country in &record.countries {
            counter.add(country);
        }
    }

    let countries = counter
        .into_top(usize::MAX)
        .into_iter()
        .map(|(country, films)| CountryProduction {
            country,
            films,
            tier: ProductionTier::from_count(films),
        })
        .collect();
    ProductionMap { countries }
}
