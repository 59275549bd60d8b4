use thiserror::Error;

/// Errors surfaced by pool initialization.
///
/// Both variants are configuration-class failures: they happen synchronously,
/// before any network I/O, and mean the process cannot get a usable handle.
/// Connectivity failures from the startup probe are a separate class — they
/// are logged and swallowed, never returned to a caller (see
/// [`crate::db::get_pool`]).
#[derive(Debug, Error)]
pub enum DbError {
    /// Required configuration is missing or could not be deserialized.
    #[error("database configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The connection string was present but rejected by the driver.
    #[error("invalid database URL: {0}")]
    InvalidUrl(#[source] sqlx::Error),
}
