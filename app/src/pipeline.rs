// In app/src/pipeline.rs

use app_config::Settings;
use core_types::{Error, PriceBar, Signal};
use serde::{Deserialize, Serialize};
use signal_engine::{SignalResult, SmaCrossoverSettings, SmaPoint, compute_signal};

/// The structured request read from stdin.
///
/// Every field except `bars` falls back to the resolved settings. Bars must
/// arrive pre-sorted ascending by time and each carry at least a numeric
/// `close`.
#[derive(Debug, Deserialize)]
pub struct SignalRequest {
    pub symbol: Option<String>,
    pub short: Option<u32>,
    pub long: Option<u32>,
    #[serde(default)]
    pub bars: Vec<PriceBar>,
}

/// The response written to stdout. `signal` is always present; the degraded
/// path carries `reason` instead of the SMA diagnostics.
#[derive(Debug, Serialize, PartialEq)]
pub struct SignalResponse {
    pub symbol: String,
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

impl SignalResponse {
    fn from_result(symbol: String, result: SignalResult) -> Self {
        Self {
            symbol,
            signal: result.signal,
            reason: result.reason,
            latest_close: result.latest_close,
            sma_short: result.sma_short,
            sma_long: result.sma_long,
            recent: result.recent,
        }
    }

    fn degraded(symbol: String, error: Error) -> Self {
        Self::from_result(symbol, SignalResult::degraded(error))
    }
}

/// Evaluates one stdin request against the resolved settings.
///
/// Never fails: unparseable JSON, a bar missing its `close`, or an invalid
/// per-request window pair all degrade to HOLD with the cause in `reason`,
/// so a scheduler driving this pipe always receives a categorical answer.
pub fn evaluate(input: &str, defaults: &Settings) -> SignalResponse {
    let request: SignalRequest = match serde_json::from_str(input) {
        Ok(request) => request,
        Err(err) => {
            return SignalResponse::degraded(
                defaults.symbol.clone(),
                Error::MalformedInput(err.to_string()),
            );
        }
    };

    let symbol = request.symbol.unwrap_or_else(|| defaults.symbol.clone());
    let windows = SmaCrossoverSettings::new(
        request.short.unwrap_or(defaults.short_period),
        request.long.unwrap_or(defaults.long_period),
    );

    // Request-level overrides get validated again: a bad pair degrades the
    // response rather than killing the pipe.
    if let Err(err) = windows.validate() {
        return SignalResponse::degraded(symbol, err);
    }

    SignalResponse::from_result(symbol, compute_signal(&request.bars, &windows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Settings {
        Settings::default()
    }

    // The upward-cross fixture: a dip then a jump crosses the short SMA above
    // the long SMA on the final bar.
    const BUY_REQUEST: &str = r#"{
        "short": 2,
        "long": 5,
        "bars": [
            {"close": 10}, {"close": 10}, {"close": 10}, {"close": 10},
            {"close": 10}, {"close": 10}, {"close": 10}, {"close": 10},
            {"close": 10}, {"close": 1}, {"close": 20}
        ]
    }"#;

    #[test]
    fn buy_request_produces_full_response() {
        let response = evaluate(BUY_REQUEST, &defaults());
        assert_eq!(response.signal, Signal::Buy);
        assert_eq!(response.symbol, "AAPL");
        assert_eq!(response.reason, None);
        assert_eq!(response.latest_close, Some(20.0));
        assert_eq!(response.recent.len(), 5);
    }

    #[test]
    fn response_serializes_without_reason_on_healthy_path() {
        let response = evaluate(BUY_REQUEST, &defaults());
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["signal"], "BUY");
        assert_eq!(value["symbol"], "AAPL");
        assert!(value.get("reason").is_none());
        assert!(value["recent"].is_array());
    }

    #[test]
    fn plain_rendering_is_the_bare_word() {
        let response = evaluate(BUY_REQUEST, &defaults());
        assert_eq!(response.signal.to_string(), "BUY");
    }

    #[test]
    fn request_symbol_is_echoed() {
        let request = r#"{"symbol": "MSFT", "bars": []}"#;
        let response = evaluate(request, &defaults());
        assert_eq!(response.symbol, "MSFT");
    }

    #[test]
    fn empty_bar_list_degrades_to_hold() {
        let response = evaluate(r#"{"bars": []}"#, &defaults());
        assert_eq!(response.signal, Signal::Hold);
        assert!(response.reason.unwrap().contains("insufficient data"));
    }

    #[test]
    fn missing_bars_field_degrades_to_hold() {
        let response = evaluate(r#"{"symbol": "AAPL"}"#, &defaults());
        assert_eq!(response.signal, Signal::Hold);
        assert!(response.reason.unwrap().contains("insufficient data"));
    }

    #[test]
    fn unparseable_input_degrades_to_hold() {
        let response = evaluate("not json at all", &defaults());
        assert_eq!(response.signal, Signal::Hold);
        assert_eq!(response.symbol, "AAPL");
        assert!(response.reason.unwrap().contains("malformed input"));
    }

    #[test]
    fn bar_without_close_degrades_to_hold() {
        let request = r#"{"bars": [{"timestamp": 1}, {"close": 10.0}]}"#;
        let response = evaluate(request, &defaults());
        assert_eq!(response.signal, Signal::Hold);
        assert!(response.reason.unwrap().contains("malformed input"));
    }

    #[test]
    fn invalid_request_windows_degrade_to_hold() {
        let request = r#"{"short": 10, "long": 5, "bars": [{"close": 1.0}]}"#;
        let response = evaluate(request, &defaults());
        assert_eq!(response.signal, Signal::Hold);
        assert!(
            response
                .reason
                .unwrap()
                .contains("invalid window configuration")
        );
    }

    #[test]
    fn request_windows_override_defaults() {
        // 11 bars would be short of the default 15-bar long window; the
        // request's 2/5 pair makes them sufficient.
        let response = evaluate(BUY_REQUEST, &defaults());
        assert_eq!(response.signal, Signal::Buy);

        let without_override = r#"{
            "bars": [
                {"close": 10}, {"close": 10}, {"close": 10}, {"close": 10},
                {"close": 10}, {"close": 10}, {"close": 10}, {"close": 10},
                {"close": 10}, {"close": 1}, {"close": 20}
            ]
        }"#;
        let response = evaluate(without_override, &defaults());
        assert_eq!(response.signal, Signal::Hold);
        assert!(response.reason.unwrap().contains("15 required"));
    }

    #[test]
    fn evaluation_is_deterministic() {
        assert_eq!(
            evaluate(BUY_REQUEST, &defaults()),
            evaluate(BUY_REQUEST, &defaults())
        );
    }
}
