pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{file_config::FileConfig, resources::LocalResources, CliConfig, ResolvedConfig};
pub use core::engine::ConsultaEngine;
pub use core::feed::{HttpFeedFetcher, NoopFeedFetcher};
pub use core::{CityReport, NewsItem, RoadRecord, RoadsReport, WeatherReport};
pub use utils::error::{ConsultaError, Result};
