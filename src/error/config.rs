use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check
    /// the `.env.example` file for the required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but cannot be parsed.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// The environment variable name
        name: String,
        /// The value that failed to parse
        value: String,
    },
}
