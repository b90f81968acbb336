use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Could not parse time '{0}'. Expected HH:MM.")]
    Parse(String),

    #[error("Unknown day '{0}'.")]
    UnknownDay(String),

    #[error("Invalid time range '{range}': {reason}")]
    InvalidRange { range: String, reason: String },

    #[error("Unknown timezone '{0}'.")]
    Timezone(String),

    #[error("Could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not deserialize config.\n{0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
