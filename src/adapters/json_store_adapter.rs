//! JSON results-file adapter implementing ScoreStorePort.
//!
//! Stand-in for the persistence collaborator: writes the scored results for
//! one symbol as a single JSON document.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use serde::Serialize;

use crate::domain::error::TrendbenchError;
use crate::domain::pipeline::TrendScoreResult;
use crate::ports::store_port::ScoreStorePort;

#[derive(Serialize)]
struct ResultsDocument<'a> {
    symbol: &'a str,
    generated_at: String,
    results: &'a [TrendScoreResult],
}

pub struct JsonStoreAdapter {
    path: PathBuf,
}

impl JsonStoreAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ScoreStorePort for JsonStoreAdapter {
    fn save_results(
        &self,
        symbol: &str,
        results: &[TrendScoreResult],
    ) -> Result<(), TrendbenchError> {
        let document = ResultsDocument {
            symbol,
            generated_at: Utc::now().to_rfc3339(),
            results,
        };

        let json = serde_json::to_string_pretty(&document)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
