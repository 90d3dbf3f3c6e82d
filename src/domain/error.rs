//! Domain error types.

/// Top-level error type for trendbench.
#[derive(Debug, thiserror::Error)]
pub enum TrendbenchError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("invalid scenario: {reason}")]
    ScenarioInvalid { reason: String },

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("no intraday data for {symbol}")]
    NoData { symbol: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&TrendbenchError> for std::process::ExitCode {
    fn from(err: &TrendbenchError) -> Self {
        let code: u8 = match err {
            TrendbenchError::Io(_) => 1,
            TrendbenchError::ConfigParse { .. }
            | TrendbenchError::ConfigMissing { .. }
            | TrendbenchError::ConfigInvalid { .. } => 2,
            TrendbenchError::ScenarioInvalid { .. } => 4,
            TrendbenchError::Data { .. }
            | TrendbenchError::NoData { .. }
            | TrendbenchError::Json(_) => 5,
        };
        std::process::ExitCode::from(code)
    }
}
