use crate::error::{config::ConfigError, AppError};

const MAPQUEST_GEOCODE_URL: &str = "https://www.mapquestapi.com/geocoding/v1/address";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_SEED_FILE: &str = "data/bootcamps.json";

pub struct Config {
    pub port: u16,
    pub environment: String,

    pub database_url: String,

    pub geocoder_api_key: String,
    pub geocoder_url: String,

    pub seed_file: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            port: match std::env::var("PORT") {
                Ok(value) => {
                    value
                        .parse()
                        .map_err(|_| ConfigError::InvalidEnvVar {
                            name: "PORT".to_string(),
                            value,
                        })?
                }
                Err(_) => DEFAULT_PORT,
            },
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string()),
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            geocoder_api_key: std::env::var("GEOCODER_API_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("GEOCODER_API_KEY".to_string()))?,
            geocoder_url: std::env::var("GEOCODER_URL")
                .unwrap_or_else(|_| MAPQUEST_GEOCODE_URL.to_string()),
            seed_file: std::env::var("SEED_FILE")
                .unwrap_or_else(|_| DEFAULT_SEED_FILE.to_string()),
        })
    }

    /// Whether request tracing should be enabled for this environment.
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}
