// In crates/core-types/src/types.rs

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One time-stamped price observation.
///
/// Bars arrive pre-sorted ascending by time; sorting is the data-fetch
/// collaborator's job and is never re-done here. The engine only ever reads
/// `close`. `timestamp` is an epoch-millisecond ordering key carried through
/// for diagnostics; unknown fields on the wire (open, high, low, volume, ...)
/// are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    pub close: Decimal,
}

impl PriceBar {
    pub fn new(close: Decimal) -> Self {
        Self {
            timestamp: None,
            close,
        }
    }

    pub fn at(timestamp: i64, close: Decimal) -> Self {
        Self {
            timestamp: Some(timestamp),
            close,
        }
    }
}

/// The categorical trading decision.
///
/// HOLD is the universal safe default: any guard, malformed input or numeric
/// problem resolves to it, so a caller always receives a well-formed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::Hold => "HOLD",
        };
        f.write_str(s)
    }
}
