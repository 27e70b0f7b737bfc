pub mod clima;
pub mod engine;
pub mod feed;
pub mod municipios;
pub mod noticias;
pub mod sources;
pub mod vias;

pub use crate::domain::model::{
    CityReport, FeedEntry, FeedScan, NewsItem, RoadRecord, RoadsReport, WeatherReport,
};
pub use crate::domain::ports::{ConfigProvider, FeedFetcher, ResourceStore};
pub use crate::utils::error::Result;
