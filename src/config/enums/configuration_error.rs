use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("configuration file '{path}' unusable: {source}")]
    IOError {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("configuration file '{path}' is not valid JSON: {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("configuration could not be serialized: {0}")]
    SerializeError(#[source] serde_json::Error),
}
