use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("can't read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("can't parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },
}

#[allow(clippy::enum_variant_names)]
#[derive(Debug, Error)]
pub enum SaveLoadError {
    #[error("can't open file: {0}")]
    CantOpen(std::io::Error),
    #[error("can't create file: {0}")]
    CantCreate(std::io::Error),
    #[error("can't write data: {0}")]
    CantWrite(serde_json::Error),
    #[error("can't flush data to disk: {0}")]
    CantFlush(std::io::Error),
    #[error("can't read data: {0}")]
    CantRead(serde_json::Error),
}
