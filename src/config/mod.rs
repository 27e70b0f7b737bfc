pub mod file_config;
pub mod resources;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::Parser;
use file_config::FileConfig;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WEATHER_URL: &str = "http://api.weatherapi.com";
pub const DEFAULT_MUNICIPIOS_FILE: &str = "data/municipios_departamentos.csv";
pub const DEFAULT_VIAS_FILE: &str = "data/red_vial_invias.csv";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "ciudad-consulta")]
#[command(about = "Clima, noticias de orden público y estado de vías para ciudades de Colombia")]
pub struct CliConfig {
    /// Ciudad a consultar (ej: Medellín)
    pub ciudad: String,

    /// Filtro adicional por tramo o sector de vía
    #[arg(long, default_value = "")]
    pub filtro: String,

    /// Archivo de configuración TOML opcional
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub weather_url: Option<String>,

    #[arg(long)]
    pub weather_key: Option<String>,

    #[arg(long)]
    pub municipios_file: Option<String>,

    #[arg(long)]
    pub vias_file: Option<String>,

    /// Consultar sin la sección de noticias
    #[arg(long)]
    pub sin_noticias: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

/// Final configuration after merging CLI flags over the optional TOML
/// file: CLI value wins, then file value, then default. The API key
/// additionally falls back to the WEATHER_API_KEY environment variable
/// and ends up as an empty string when nothing supplies it.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub weather_api_url: String,
    pub weather_api_key: String,
    pub municipios_file: String,
    pub vias_file: String,
    pub news_enabled: bool,
}

impl CliConfig {
    pub fn resolve(&self, file: Option<&FileConfig>) -> ResolvedConfig {
        let file_weather = file.and_then(|f| f.weather.as_ref());
        let file_datos = file.and_then(|f| f.datos.as_ref());

        let weather_api_url = self
            .weather_url
            .clone()
            .or_else(|| file_weather.and_then(|w| w.url.clone()))
            .unwrap_or_else(|| DEFAULT_WEATHER_URL.to_string());

        let weather_api_key = self
            .weather_key
            .clone()
            .or_else(|| file_weather.and_then(|w| w.api_key.clone()))
            .or_else(|| std::env::var("WEATHER_API_KEY").ok())
            .unwrap_or_default();

        let municipios_file = self
            .municipios_file
            .clone()
            .or_else(|| file_datos.and_then(|d| d.municipios_file.clone()))
            .unwrap_or_else(|| DEFAULT_MUNICIPIOS_FILE.to_string());

        let vias_file = self
            .vias_file
            .clone()
            .or_else(|| file_datos.and_then(|d| d.vias_file.clone()))
            .unwrap_or_else(|| DEFAULT_VIAS_FILE.to_string());

        let news_enabled = !self.sin_noticias
            && file
                .and_then(|f| f.noticias.as_ref())
                .map(|n| n.habilitadas)
                .unwrap_or(true);

        ResolvedConfig {
            weather_api_url,
            weather_api_key,
            municipios_file,
            vias_file,
            news_enabled,
        }
    }
}

impl ConfigProvider for ResolvedConfig {
    fn weather_api_url(&self) -> &str {
        &self.weather_api_url
    }

    fn weather_api_key(&self) -> &str {
        &self.weather_api_key
    }

    fn municipios_file(&self) -> &str {
        &self.municipios_file
    }

    fn vias_file(&self) -> &str {
        &self.vias_file
    }
}

impl Validate for ResolvedConfig {
    fn validate(&self) -> Result<()> {
        validate_url("weather_url", &self.weather_api_url)?;
        validate_path("municipios_file", &self.municipios_file)?;
        validate_path("vias_file", &self.vias_file)?;
        Ok(())
    }
}
