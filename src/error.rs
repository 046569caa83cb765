use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorigamiError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Load Error: {0}")]
    DataLoad(String),

    #[error("Render Error: {0}")]
    Render(String),
}

pub type SgResult<T> = Result<T, ScorigamiError>;
