use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but could not be parsed.
    ///
    /// Numeric settings (e.g. the connection pool bound) must parse into their
    /// expected type; anything else aborts startup.
    #[error("Invalid value for environment variable {name}: {source}")]
    InvalidEnvVar {
        /// Name of the offending environment variable
        name: String,
        /// The underlying parse error
        #[source]
        source: std::num::ParseIntError,
    },
}
