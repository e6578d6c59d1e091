// In crates/signal-engine/src/lib.rs

pub mod sma_crossover;
pub mod types;

// Re-export the engine surface for easy access from other crates.
pub use sma_crossover::compute_signal;
pub use types::{SignalResult, SmaCrossoverSettings, SmaPoint};
