use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeAction {
    Buy,
    Sell,
}

impl std::fmt::Display for TradeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeAction::Buy => write!(f, "BUY"),
            TradeAction::Sell => write!(f, "SELL"),
        }
    }
}

/// One historical trade. Quantity and price are optional: partial records
/// show up in real exports and must degrade instead of failing aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub trade_id: String,
    pub symbol: String,
    pub action: TradeAction,
    pub quantity: Option<Decimal>,
    pub price: Option<Decimal>,
    pub timestamp: DateTime<Utc>,
}

impl Trade {
    /// Quantity × price; a missing side zeroes the term.
    pub fn notional(&self) -> Decimal {
        match (self.quantity, self.price) {
            (Some(quantity), Some(price)) => quantity * price,
            _ => Decimal::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TradeMetrics {
    pub total_trades: u64,
    pub total_volume: Decimal,
    pub total_value: Decimal,
}

impl TradeMetrics {
    pub const ZERO: TradeMetrics = TradeMetrics {
        total_trades: 0,
        total_volume: Decimal::ZERO,
        total_value: Decimal::ZERO,
    };
}

/// Reduce a trade list to its summary statistics. An empty list is a valid
/// all-zero result. Never fails for a well-typed list: missing quantity or
/// price degrades that term to zero, and value is summed regardless of the
/// buy/sell direction.
pub fn aggregate_trades(trades: &[Trade]) -> TradeMetrics {
    let mut metrics = TradeMetrics::ZERO;
    for trade in trades {
        metrics.total_trades += 1;
        metrics.total_volume += trade.quantity.unwrap_or(Decimal::ZERO);
        metrics.total_value += trade.notional();
    }
    metrics
}

/// Static trade history fixture. Every user sees the same trades until a
/// real trading backend exists.
pub fn user_trades(user_id: &str) -> Vec<Trade> {
    tracing::debug!(user = user_id, "loading trade fixture");
    vec![
        Trade {
            trade_id: "t1".to_string(),
            symbol: "BTC-100K-YES".to_string(),
            action: TradeAction::Buy,
            quantity: Some(dec!(10)),
            price: Some(dec!(0.70)),
            timestamp: Utc.with_ymd_and_hms(2026, 1, 12, 14, 30, 0).unwrap(),
        },
        Trade {
            trade_id: "t2".to_string(),
            symbol: "ETH-FLIP-NO".to_string(),
            action: TradeAction::Buy,
            quantity: Some(dec!(25)),
            price: Some(dec!(0.68)),
            timestamp: Utc.with_ymd_and_hms(2026, 2, 3, 9, 15, 0).unwrap(),
        },
        Trade {
            trade_id: "t3".to_string(),
            symbol: "BTC-100K-YES".to_string(),
            action: TradeAction::Sell,
            quantity: Some(dec!(4)),
            price: Some(dec!(0.75)),
            timestamp: Utc.with_ymd_and_hms(2026, 3, 21, 18, 5, 0).unwrap(),
        },
        Trade {
            trade_id: "t4".to_string(),
            symbol: "WC-HOST-YES".to_string(),
            action: TradeAction::Buy,
            quantity: Some(dec!(50)),
            price: Some(dec!(0.16)),
            timestamp: Utc.with_ymd_and_hms(2026, 5, 7, 11, 45, 0).unwrap(),
        },
    ]
}
