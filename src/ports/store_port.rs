//! Score persistence port trait.

use crate::domain::error::TrendbenchError;
use crate::domain::pipeline::TrendScoreResult;

/// Port for handing finalized score results to a persistence collaborator.
pub trait ScoreStorePort {
    fn save_results(
        &self,
        symbol: &str,
        results: &[TrendScoreResult],
    ) -> Result<(), TrendbenchError>;
}
