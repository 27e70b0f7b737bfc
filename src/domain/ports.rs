use crate::domain::model::FeedEntry;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ResourceStore: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn weather_api_url(&self) -> &str;
    fn weather_api_key(&self) -> &str;
    fn municipios_file(&self) -> &str;
    fn vias_file(&self) -> &str;
}

/// Feed parsing is an optional capability: the production implementation
/// talks HTTP and parses RSS/Atom, the no-op implementation reports
/// itself unavailable and the news section degrades to a warning.
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<FeedEntry>>;

    fn is_available(&self) -> bool {
        true
    }
}
