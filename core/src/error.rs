use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid fixture customer '{customer_id}': {reason}")]
    InvalidFixture { customer_id: String, reason: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SeedResult<T> = Result<T, SeedError>;
