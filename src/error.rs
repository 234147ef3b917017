use thiserror::Error;

#[derive(Error, Debug)]
pub enum CropWiseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Advisor unavailable: {0}")]
    AdvisorUnavailable(String),
}

pub type Result<T> = std::result::Result<T, CropWiseError>;
