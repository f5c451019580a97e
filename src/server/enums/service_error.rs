use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Service management is not supported on {0}")]
    Unsupported(String),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("'{command}' failed with exit code {code:?}")]
    CommandFailed { command: String, code: Option<i32> },
}
