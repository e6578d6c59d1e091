// In crates/app-config/src/types.rs

use serde::Deserialize;

use signal_engine::SmaCrossoverSettings;

/// The resolved caller-level configuration.
///
/// The engine never reads ambient process state; whatever the environment,
/// a config file or CLI flags contribute is folded into this value before an
/// evaluation runs. `symbol` is informational only and is echoed back in
/// responses.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_symbol")]
    pub symbol: String,
    #[serde(default = "default_short_period")]
    pub short_period: u32,
    #[serde(default = "default_long_period")]
    pub long_period: u32,
}

fn default_symbol() -> String {
    "AAPL".to_string()
}

fn default_short_period() -> u32 {
    5
}

fn default_long_period() -> u32 {
    15
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            short_period: default_short_period(),
            long_period: default_long_period(),
        }
    }
}

impl Settings {
    /// The window lengths as the engine consumes them.
    pub fn windows(&self) -> SmaCrossoverSettings {
        SmaCrossoverSettings::new(self.short_period, self.long_period)
    }

    /// Caller-level window validation, run on the final merged pair.
    pub fn validate(&self) -> core_types::Result<()> {
        self.windows().validate()
    }
}
