use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One news entry surfaced to the user. `link` is the dedup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub summary: String,
    pub link: String,
}

/// One road segment row from the INVIAS table. Rows missing sector,
/// tramo or estado are dropped at load time and never surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadRecord {
    pub sector: String,
    pub tramo: String,
    pub estado: String,
    #[serde(rename = "observacion_invias", default)]
    pub observacion: String,
}

/// A raw entry as parsed from a single feed, before any matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub title: String,
    pub summary: String,
    pub link: String,
}

/// Per-source scan outcome. A failing source is recorded and skipped,
/// never allowed to abort the whole scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedScan {
    Fetched { url: String, entries: Vec<FeedEntry> },
    Skipped { url: String, reason: String },
}

impl FeedScan {
    pub fn url(&self) -> &str {
        match self {
            FeedScan::Fetched { url, .. } | FeedScan::Skipped { url, .. } => url,
        }
    }
}

/// The four display states of the weather section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WeatherReport {
    Current {
        condition: String,
        temp_c: f64,
        humidity: f64,
    },
    /// City or API key missing; no request was issued.
    MissingParams,
    /// Transport failure or non-2xx response.
    ConnectionError(String),
    /// 2xx response without a usable `current` object.
    Unavailable,
}

/// The road section either renders its table or a load error; a failed
/// load never aborts the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RoadsReport {
    Table(Vec<RoadRecord>),
    LoadError(String),
}

/// Everything one query produced, handed to the renderer.
#[derive(Debug, Clone)]
pub struct CityReport {
    pub city: String,
    pub weather: WeatherReport,
    /// Matched items, already truncated to the display limit.
    pub news: Vec<NewsItem>,
    /// Per-source outcomes of the feed scan, in scan order.
    pub scans: Vec<FeedScan>,
    /// False when the feed-parsing capability is disabled.
    pub news_available: bool,
    /// Set when the municipality table could not be read; the query
    /// continues with an empty map.
    pub municipios_warning: Option<String>,
    pub roads: RoadsReport,
    pub generated_at: DateTime<Local>,
}
