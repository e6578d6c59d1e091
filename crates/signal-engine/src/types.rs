// In crates/signal-engine/src/types.rs

use core_types::{Error, Result, Signal};
use serde::{Deserialize, Serialize};

/// Window lengths for the dual-SMA crossover rule.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SmaCrossoverSettings {
    pub short_period: u32,
    pub long_period: u32,
}

impl Default for SmaCrossoverSettings {
    fn default() -> Self {
        Self {
            short_period: 5,
            long_period: 15,
        }
    }
}

impl SmaCrossoverSettings {
    pub fn new(short_period: u32, long_period: u32) -> Self {
        Self {
            short_period,
            long_period,
        }
    }

    /// Rejects window pairs the crossover rule cannot meaningfully evaluate:
    /// non-positive lengths, and short >= long.
    ///
    /// [`compute_signal`](crate::compute_signal) itself stays total — it maps
    /// any pair to a result — so this is the caller-level check, run on the
    /// final merged configuration before an evaluation.
    pub fn validate(&self) -> Result<()> {
        if self.short_period == 0 || self.long_period == 0 {
            return Err(Error::Configuration(
                "window lengths must be positive".into(),
            ));
        }
        if self.short_period >= self.long_period {
            return Err(Error::Configuration(format!(
                "short period {} must be less than long period {}",
                self.short_period, self.long_period
            )));
        }
        Ok(())
    }
}

/// One aligned point: an index where both SMAs are defined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmaPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    pub close: f64,
    pub sma_short: f64,
    pub sma_long: f64,
}

/// Outcome of one engine evaluation.
///
/// `signal` is always present. The healthy path fills the last close, the
/// last short/long SMA values and a short trailing window of aligned points;
/// the degraded path fills `reason` instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalResult {
    pub signal: Signal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_close: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_short: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_long: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recent: Vec<SmaPoint>,
}

impl SignalResult {
    /// Fail-safe result: the evaluation could not run, so the caller gets
    /// HOLD plus the rendered cause.
    pub fn degraded(error: Error) -> Self {
        Self {
            signal: Signal::Hold,
            reason: Some(error.to_string()),
            latest_close: None,
            sma_short: None,
            sma_long: None,
            recent: Vec::new(),
        }
    }
}
