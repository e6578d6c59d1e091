// In crates/signal-engine/src/sma_crossover.rs

use core_types::{Error, PriceBar, Signal};
use num_traits::cast::ToPrimitive;
use ta::Next;
use ta::indicators::SimpleMovingAverage as Sma;

use crate::types::{SignalResult, SmaCrossoverSettings, SmaPoint};

/// How many aligned points `SignalResult::recent` carries for observability.
const RECENT_POINTS: usize = 5;

/// Evaluates the dual-SMA crossover rule over an ordered series of bars.
///
/// Pure and total: identical inputs always produce identical output, no state
/// survives between calls, and no failure escapes — every guard and numeric
/// problem degrades to HOLD with the cause in `reason`.
///
/// Bars must already be sorted ascending by time; only `close` is read. The
/// decision uses the two most recent aligned points only:
///
/// * BUY when the short SMA moves from at-or-below the long SMA to strictly
///   above it — non-strict on the previous point, strict on the last, so a
///   touch followed by a breakout counts as a cross;
/// * SELL on the mirror-image downward cross;
/// * HOLD otherwise (no cross, or mid-trend with no crossing event).
pub fn compute_signal(bars: &[PriceBar], settings: &SmaCrossoverSettings) -> SignalResult {
    let short = settings.short_period as usize;
    let long = settings.long_period as usize;
    if short == 0 || long == 0 {
        // Caller error, but never divide by zero: resolve as insufficient data.
        return SignalResult::degraded(Error::InsufficientData(
            "window lengths must be positive".into(),
        ));
    }

    let needed = short.max(long);
    if bars.len() < needed {
        return SignalResult::degraded(Error::InsufficientData(format!(
            "{} bars provided, {} required",
            bars.len(),
            needed
        )));
    }

    let (Ok(mut sma_short), Ok(mut sma_long)) = (Sma::new(short), Sma::new(long)) else {
        return SignalResult::degraded(Error::InsufficientData(
            "window lengths must be positive".into(),
        ));
    };

    // Both indicators warm up over the first `needed - 1` bars; every index
    // from there on has both SMAs defined and forms the aligned sub-sequence.
    let mut aligned: Vec<SmaPoint> = Vec::with_capacity(bars.len() - needed + 1);
    for (i, bar) in bars.iter().enumerate() {
        let Some(close) = bar.close.to_f64() else {
            return SignalResult::degraded(Error::MalformedInput(format!(
                "close price {} at bar {} is not representable",
                bar.close, i
            )));
        };
        let sma_short_val = sma_short.next(close);
        let sma_long_val = sma_long.next(close);
        if i + 1 >= needed {
            aligned.push(SmaPoint {
                timestamp: bar.timestamp,
                close,
                sma_short: sma_short_val,
                sma_long: sma_long_val,
            });
        }
    }

    let [.., prev, last] = aligned.as_slice() else {
        return SignalResult::degraded(Error::InsufficientData(
            "fewer than 2 aligned points".into(),
        ));
    };

    let signal = if prev.sma_short <= prev.sma_long && last.sma_short > last.sma_long {
        Signal::Buy
    } else if prev.sma_short >= prev.sma_long && last.sma_short < last.sma_long {
        Signal::Sell
    } else {
        Signal::Hold
    };

    SignalResult {
        signal,
        reason: None,
        latest_close: Some(last.close),
        sma_short: Some(last.sma_short),
        sma_long: Some(last.sma_long),
        recent: aligned[aligned.len().saturating_sub(RECENT_POINTS)..].to_vec(),
    }
}
