use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsultaError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Feed error for {url}: {message}")]
    FeedError { url: String, message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl ConsultaError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ConsultaError::ApiError(e) => format!("No se pudo contactar el servicio: {}", e),
            ConsultaError::CsvError(_) | ConsultaError::IoError(_) => {
                "No se pudo leer un archivo de datos local".to_string()
            }
            ConsultaError::SerializationError(_) => {
                "El servicio devolvió una respuesta inesperada".to_string()
            }
            ConsultaError::ConfigError { message }
            | ConsultaError::ProcessingError { message }
            | ConsultaError::ValidationError { message } => message.clone(),
            ConsultaError::InvalidConfigValueError { field, reason, .. } => {
                format!("Valor inválido para {}: {}", field, reason)
            }
            ConsultaError::FeedError { url, .. } => {
                format!("No se pudo leer la fuente de noticias {}", url)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConsultaError::ApiError(_) | ConsultaError::FeedError { .. } => {
                "Verifique su conexión a internet e intente de nuevo"
            }
            ConsultaError::CsvError(_) | ConsultaError::IoError(_) => {
                "Verifique que los archivos de municipios y vías existan y sean legibles"
            }
            ConsultaError::SerializationError(_) => "Intente de nuevo más tarde",
            ConsultaError::ConfigError { .. } | ConsultaError::InvalidConfigValueError { .. } => {
                "Revise los parámetros de configuración (--help para ver opciones)"
            }
            ConsultaError::ProcessingError { .. } => "Intente con otros parámetros de consulta",
            ConsultaError::ValidationError { .. } => "Ingrese una ciudad antes de consultar",
        }
    }
}

pub type Result<T> = std::result::Result<T, ConsultaError>;
