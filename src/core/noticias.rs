use crate::core::municipios::MunicipalityMap;
use crate::core::sources::{feeds_for_city, PUBLIC_ORDER_KEYWORDS};
use crate::core::FeedFetcher;
use crate::domain::model::{FeedScan, NewsItem};
use crate::utils::text::{fold, title_case};
use std::collections::HashSet;

/// Display limit for the news section.
pub const MAX_NEWS_ITEMS: usize = 5;

#[derive(Debug, Clone)]
pub struct NewsScanResult {
    /// Matched items in scan order, not yet truncated.
    pub items: Vec<NewsItem>,
    /// One outcome per source, in source order.
    pub scans: Vec<FeedScan>,
}

/// Scans every source for the city and matches entries against the
/// public-order keyword set. A second, department-only pass runs over
/// the same scans when the first pass comes up empty.
pub async fn find_news<F: FeedFetcher>(
    fetcher: &F,
    city: &str,
    municipios: &MunicipalityMap,
) -> NewsScanResult {
    let city = city.trim();
    let folded_city = fold(city);

    // the municipality table is keyed by title-cased names
    let department = municipios
        .get(&title_case(city))
        .map(|d| fold(d))
        .filter(|d| !d.is_empty());

    let mut keywords: Vec<String> = PUBLIC_ORDER_KEYWORDS.iter().map(|k| fold(k)).collect();
    keywords.push(folded_city);
    if let Some(dep) = &department {
        keywords.push(dep.clone());
    }

    let feeds = feeds_for_city(city);
    let mut scans = Vec::with_capacity(feeds.len());
    for url in feeds {
        match fetcher.fetch(&url).await {
            Ok(entries) => {
                tracing::debug!("Fetched {} entries from {}", entries.len(), url);
                scans.push(FeedScan::Fetched { url, entries });
            }
            Err(e) => {
                tracing::warn!("⚠️ Fuente de noticias omitida {}: {}", url, e);
                scans.push(FeedScan::Skipped {
                    url,
                    reason: e.to_string(),
                });
            }
        }
    }

    let mut seen = HashSet::new();
    let mut items = match_entries(&scans, &mut seen, |texto| {
        keywords.iter().any(|k| texto.contains(k.as_str()))
    });

    if items.is_empty() {
        if let Some(dep) = &department {
            tracing::info!("Sin coincidencias directas, buscando por departamento");
            items = match_entries(&scans, &mut seen, |texto| texto.contains(dep.as_str()));
        }
    }

    NewsScanResult { items, scans }
}

fn match_entries<M: Fn(&str) -> bool>(
    scans: &[FeedScan],
    seen: &mut HashSet<String>,
    matches: M,
) -> Vec<NewsItem> {
    let mut items = Vec::new();
    for scan in scans {
        let entries = match scan {
            FeedScan::Fetched { entries, .. } => entries,
            FeedScan::Skipped { .. } => continue,
        };
        for entry in entries {
            let texto = fold(&format!("{} {}", entry.title, entry.summary));
            if matches(&texto) && !seen.contains(&entry.link) {
                seen.insert(entry.link.clone());
                items.push(NewsItem {
                    title: entry.title.clone(),
                    summary: entry.summary.clone(),
                    link: entry.link.clone(),
                });
            }
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FeedEntry;
    use crate::utils::error::{ConsultaError, Result};
    use async_trait::async_trait;
    use std::collections::HashMap;

    struct StubFetcher {
        responses: HashMap<String, Vec<FeedEntry>>,
        failing: Vec<String>,
    }

    impl StubFetcher {
        fn new() -> Self {
            Self {
                responses: HashMap::new(),
                failing: Vec::new(),
            }
        }

        fn with_entries(mut self, url: &str, entries: Vec<FeedEntry>) -> Self {
            self.responses.insert(url.to_string(), entries);
            self
        }

        fn with_failure(mut self, url: &str) -> Self {
            self.failing.push(url.to_string());
            self
        }
    }

    #[async_trait]
    impl FeedFetcher for StubFetcher {
        async fn fetch(&self, url: &str) -> Result<Vec<FeedEntry>> {
            if self.failing.iter().any(|u| u == url) {
                return Err(ConsultaError::FeedError {
                    url: url.to_string(),
                    message: "connection refused".to_string(),
                });
            }
            Ok(self.responses.get(url).cloned().unwrap_or_default())
        }
    }

    fn entry(title: &str, summary: &str, link: &str) -> FeedEntry {
        FeedEntry {
            title: title.to_string(),
            summary: summary.to_string(),
            link: link.to_string(),
        }
    }

    fn antioquia_map() -> MunicipalityMap {
        let mut map = MunicipalityMap::new();
        map.insert("Medellín".to_string(), "Antioquia".to_string());
        map
    }

    // general feed used by every city
    const FEED: &str = "https://www.eltiempo.com/rss/colombia.xml";
    const FEED2: &str = "https://www.kienyke.com/feed";

    #[tokio::test]
    async fn test_keyword_match_on_folded_text() {
        let fetcher = StubFetcher::new().with_entries(
            FEED,
            vec![
                entry("Capturado por hurto en el centro", "", "https://n/1"),
                entry("Festival gastronómico", "Nada de orden público aquí... bueno, sí", "https://n/2"),
                entry("Resultados deportivos", "El equipo ganó", "https://n/3"),
            ],
        );

        let result = find_news(&fetcher, "Pereira", &MunicipalityMap::new()).await;

        let links: Vec<&str> = result.items.iter().map(|i| i.link.as_str()).collect();
        assert_eq!(links, vec!["https://n/1", "https://n/2"]);
    }

    #[tokio::test]
    async fn test_accented_keyword_matches_unaccented_text() {
        // "policía" and "ejército" fold to "policia"/"ejercito"
        let fetcher = StubFetcher::new().with_entries(
            FEED,
            vec![entry("Operativo de la POLICIA nacional", "", "https://n/1")],
        );

        let result = find_news(&fetcher, "Pereira", &MunicipalityMap::new()).await;
        assert_eq!(result.items.len(), 1);
    }

    #[tokio::test]
    async fn test_city_name_is_a_keyword() {
        let fetcher = StubFetcher::new().with_entries(
            FEED,
            vec![entry("Nuevo parque en Pereira", "Inauguración", "https://n/1")],
        );

        let result = find_news(&fetcher, "Pereira", &MunicipalityMap::new()).await;
        assert_eq!(result.items.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_links_keep_first_only() {
        let fetcher = StubFetcher::new()
            .with_entries(
                FEED,
                vec![entry("Hurto en el norte", "primera", "https://n/dup")],
            )
            .with_entries(
                FEED2,
                vec![entry("Hurto en el norte (repetida)", "segunda", "https://n/dup")],
            );

        let result = find_news(&fetcher, "Pereira", &MunicipalityMap::new()).await;

        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].summary, "primera");
    }

    #[tokio::test]
    async fn test_failing_feed_is_skipped_not_fatal() {
        let fetcher = StubFetcher::new()
            .with_failure(FEED)
            .with_entries(FEED2, vec![entry("Alerta de seguridad", "", "https://n/1")]);

        let result = find_news(&fetcher, "Pereira", &MunicipalityMap::new()).await;

        assert_eq!(result.items.len(), 1);
        assert!(result
            .scans
            .iter()
            .any(|s| matches!(s, FeedScan::Skipped { url, .. } if url == FEED)));
    }

    #[tokio::test]
    async fn test_department_mention_included_without_base_keyword() {
        // entry mentions Antioquia but no base keyword and not "medellin"
        let fetcher = StubFetcher::new().with_entries(
            FEED,
            vec![entry("Nueva vía en Antioquia", "Obras en el oriente", "https://n/1")],
        );

        let result = find_news(&fetcher, "Medellín", &antioquia_map()).await;

        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].link, "https://n/1");
    }

    #[tokio::test]
    async fn test_department_and_keyword_matches_combine() {
        let fetcher = StubFetcher::new().with_entries(
            FEED,
            vec![
                entry("Hurto en Medellín", "", "https://n/1"),
                entry("Inversión en Antioquia", "", "https://n/2"),
            ],
        );

        let result = find_news(&fetcher, "Medellín", &antioquia_map()).await;

        assert_eq!(result.items.len(), 2);
    }

    #[tokio::test]
    async fn test_no_fallback_without_department() {
        let fetcher = StubFetcher::new().with_entries(
            FEED,
            vec![entry("Nueva vía en Antioquia", "", "https://n/1")],
        );

        // city not in the municipality table: no department, no fallback
        let result = find_news(&fetcher, "Pereira", &MunicipalityMap::new()).await;

        assert!(result.items.is_empty());
    }

    #[tokio::test]
    async fn test_department_lookup_uses_title_cased_city() {
        let fetcher = StubFetcher::new().with_entries(
            FEED,
            vec![entry("Nueva vía en Antioquia", "", "https://n/1")],
        );

        // lowercase input still resolves "Medellín" in the table
        let result = find_news(&fetcher, "medellín", &antioquia_map()).await;

        assert_eq!(result.items.len(), 1);
    }

    #[tokio::test]
    async fn test_city_feeds_scanned_before_general() {
        let fetcher = StubFetcher::new()
            .with_entries(
                "https://www.elcolombiano.com/rss",
                vec![entry("Hurto en el poblado", "", "https://n/city")],
            )
            .with_entries(FEED, vec![entry("Hurto en bogotá", "", "https://n/gen")]);

        let result = find_news(&fetcher, "Medellín", &antioquia_map()).await;

        assert_eq!(result.items[0].link, "https://n/city");
        assert_eq!(result.scans[0].url(), "https://www.elcolombiano.com/rss");
    }
}
