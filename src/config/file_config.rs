use crate::utils::error::{ConsultaError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional `consulta.toml` companion file. Every section and field is
/// optional; the CLI merges it under its own flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub weather: Option<WeatherSection>,
    pub datos: Option<DatosSection>,
    pub noticias: Option<NoticiasSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSection {
    pub url: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatosSection {
    pub municipios_file: Option<String>,
    pub vias_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticiasSection {
    #[serde(default = "default_true")]
    pub habilitadas: bool,
}

fn default_true() -> bool {
    true
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ConsultaError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ConsultaError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` references with environment values; unknown
    /// variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = FileConfig::from_toml_str(
            r#"
            [weather]
            url = "http://api.weatherapi.com"
            api_key = "abc123"

            [datos]
            municipios_file = "data/municipios.csv"
            vias_file = "data/vias.csv"

            [noticias]
            habilitadas = false
            "#,
        )
        .unwrap();

        assert_eq!(
            config.weather.as_ref().unwrap().api_key.as_deref(),
            Some("abc123")
        );
        assert!(!config.noticias.unwrap().habilitadas);
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = FileConfig::from_toml_str("").unwrap();
        assert!(config.weather.is_none());
        assert!(config.datos.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CONSULTA_TEST_KEY", "from-env");
        let config = FileConfig::from_toml_str(
            r#"
            [weather]
            api_key = "${CONSULTA_TEST_KEY}"
            "#,
        )
        .unwrap();
        std::env::remove_var("CONSULTA_TEST_KEY");

        assert_eq!(
            config.weather.unwrap().api_key.as_deref(),
            Some("from-env")
        );
    }

    #[test]
    fn test_unknown_env_var_left_as_literal() {
        let config = FileConfig::from_toml_str(
            r#"
            [weather]
            api_key = "${CONSULTA_NO_SUCH_VAR}"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.weather.unwrap().api_key.as_deref(),
            Some("${CONSULTA_NO_SUCH_VAR}")
        );
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = FileConfig::from_toml_str("[weather\nurl = ").unwrap_err();
        assert!(matches!(err, ConsultaError::ConfigError { .. }));
    }
}
