use crate::core::municipios::{self, MunicipalityMap};
use crate::core::noticias::{self, MAX_NEWS_ITEMS};
use crate::core::{clima, vias, ConfigProvider, FeedFetcher, ResourceStore};
use crate::domain::model::{CityReport, RoadsReport};
use crate::utils::error::{ConsultaError, Result};
use crate::utils::monitor::SystemMonitor;
use reqwest::Client;

/// Runs one full query: weather, then news, then roads, in that order.
/// Each section degrades on its own; only an empty city aborts before
/// any fetch.
pub struct ConsultaEngine<F: FeedFetcher, S: ResourceStore, C: ConfigProvider> {
    fetcher: F,
    store: S,
    config: C,
    client: Client,
    monitor: SystemMonitor,
}

impl<F: FeedFetcher, S: ResourceStore, C: ConfigProvider> ConsultaEngine<F, S, C> {
    pub fn new(fetcher: F, store: S, config: C) -> Self {
        Self::new_with_monitoring(fetcher, store, config, false)
    }

    pub fn new_with_monitoring(fetcher: F, store: S, config: C, monitor_enabled: bool) -> Self {
        Self {
            fetcher,
            store,
            config,
            client: Client::new(),
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self, city: &str, road_filter: &str) -> Result<CityReport> {
        let city = city.trim();
        if city.is_empty() {
            return Err(ConsultaError::ValidationError {
                message: "Por favor ingrese una ciudad antes de consultar.".to_string(),
            });
        }

        tracing::info!("Consultando clima para {}...", city);
        let weather = clima::fetch_weather(
            &self.client,
            self.config.weather_api_url(),
            city,
            self.config.weather_api_key(),
        )
        .await;
        self.monitor.log_stats("Clima");

        tracing::info!("Buscando noticias de orden público...");
        let news_available = self.fetcher.is_available();
        let mut municipios_warning = None;
        let (news, scans) = if news_available {
            let municipios = match municipios::load_municipalities(
                &self.store,
                self.config.municipios_file(),
            )
            .await
            {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!("⚠️ Error al cargar el diccionario de municipios: {}", e);
                    municipios_warning = Some(e.user_friendly_message());
                    MunicipalityMap::new()
                }
            };

            let mut result = noticias::find_news(&self.fetcher, city, &municipios).await;
            tracing::info!("{} noticias coincidentes", result.items.len());
            result.items.truncate(MAX_NEWS_ITEMS);
            (result.items, result.scans)
        } else {
            tracing::warn!("⚠️ La capacidad de noticias está deshabilitada");
            (Vec::new(), Vec::new())
        };
        self.monitor.log_stats("Noticias");

        tracing::info!("Filtrando estado de las vías...");
        let roads = match vias::filter_roads(
            &self.store,
            self.config.vias_file(),
            Some(city),
            road_filter,
        )
        .await
        {
            Ok(records) => {
                tracing::info!("{} tramos en el resultado", records.len());
                RoadsReport::Table(records)
            }
            Err(e) => {
                tracing::error!("❌ Error al cargar el archivo de vías: {}", e);
                RoadsReport::LoadError(e.user_friendly_message())
            }
        };
        self.monitor.log_stats("Vías");

        self.monitor.log_final_stats();

        Ok(CityReport {
            city: city.to_string(),
            weather,
            news,
            scans,
            news_available,
            municipios_warning,
            roads,
            generated_at: chrono::Local::now(),
        })
    }
}
