use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocaleError {
    #[error("Unknown locale code `{0}`")]
    NotFound(String),
    #[error("Invalid format of locale config: {0}")]
    InvalidConfig(#[from] toml::de::Error),
    #[error("Failed to read locale config: {0}")]
    Io(#[from] std::io::Error),
}
