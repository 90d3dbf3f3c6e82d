//! Simulated trades and run-scoped identifiers.

use serde::Serialize;

/// Opaque identifier linking a scenario run's transactions to its score
/// result. Assigned by the core, one per scenario evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TrendId(pub u64);

/// Opaque per-transaction identifier, assigned by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TransactionId(pub u64);

/// Sequential id assignment for one run.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next_trend: u64,
    next_transaction: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trend_id(&mut self) -> TrendId {
        self.next_trend += 1;
        TrendId(self.next_trend)
    }

    pub fn transaction_id(&mut self) -> TransactionId {
        self.next_transaction += 1;
        TransactionId(self.next_transaction)
    }
}

/// One fully closed simulated trade. Open positions never become
/// transactions: a position still open at the end of a walk is discarded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub trend_id: TrendId,
    pub date_bought: String,
    pub price_bought: f64,
    pub date_sold: String,
    pub price_sold: f64,
    pub volume: i64,
}

impl Transaction {
    /// Signed profit in notional terms.
    pub fn profit(&self) -> f64 {
        (self.price_sold - self.price_bought) * self.volume as f64
    }

    /// Profit as a percentage of the entry price.
    pub fn pct_profit(&self) -> f64 {
        (self.price_sold - self.price_bought) / self.price_bought * 100.0
    }

    pub fn is_win(&self) -> bool {
        self.price_sold > self.price_bought
    }
}
