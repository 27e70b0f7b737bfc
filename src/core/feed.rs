use crate::core::FeedFetcher;
use crate::domain::model::FeedEntry;
use crate::utils::error::{ConsultaError, Result};
use async_trait::async_trait;
use reqwest::Client;

const USER_AGENT: &str = "ciudad-consulta/0.1";

/// Production feed capability: fetches a source over HTTP and parses it
/// as RSS first, Atom second.
pub struct HttpFeedFetcher {
    client: Client,
}

impl HttpFeedFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FeedFetcher for HttpFeedFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<FeedEntry>> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ConsultaError::FeedError {
                url: url.to_string(),
                message: format!("HTTP status {}", response.status()),
            });
        }

        let content = response.bytes().await?;

        if let Ok(channel) = rss::Channel::read_from(&content[..]) {
            return Ok(parse_rss_channel(&channel));
        }

        if let Ok(feed) = atom_syndication::Feed::read_from(&content[..]) {
            return Ok(parse_atom_feed(&feed));
        }

        Err(ConsultaError::FeedError {
            url: url.to_string(),
            message: "Unrecognized feed format".to_string(),
        })
    }
}

/// Stand-in used when the feed capability is disabled: reports itself
/// unavailable and yields nothing.
pub struct NoopFeedFetcher;

#[async_trait]
impl FeedFetcher for NoopFeedFetcher {
    async fn fetch(&self, _url: &str) -> Result<Vec<FeedEntry>> {
        Ok(Vec::new())
    }

    fn is_available(&self) -> bool {
        false
    }
}

fn parse_rss_channel(channel: &rss::Channel) -> Vec<FeedEntry> {
    channel
        .items()
        .iter()
        .filter_map(|item| {
            let title = item.title()?.to_string();
            let link = item.link()?.to_string();
            let summary = item.description().unwrap_or_default().to_string();
            Some(FeedEntry {
                title,
                summary,
                link,
            })
        })
        .collect()
}

fn parse_atom_feed(feed: &atom_syndication::Feed) -> Vec<FeedEntry> {
    feed.entries()
        .iter()
        .filter_map(|entry| {
            let title = entry.title().to_string();
            let link = entry.links().first()?.href().to_string();
            let summary = entry
                .summary()
                .map(|t| t.to_string())
                .unwrap_or_default();
            Some(FeedEntry {
                title,
                summary,
                link,
            })
        })
        .collect()
}
