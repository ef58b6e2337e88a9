use serde::{Deserialize, Serialize};
use std::fmt;

/// Root of a strategy preset file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetConfigFile {
    pub presets: Vec<PresetConfig>,
}

/// One persisted strategy preset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetConfig {
    /// Unique identifier for the preset (e.g., "eurusd-renko")
    pub id: String,
    /// Currency pair, "EUR/USD" or "EURUSD"
    pub instrument: String,
    /// Currency P&L is reported in (defaults to the pair's secondary currency)
    #[serde(default)]
    pub account_currency: Option<String>,
    /// Whether this preset is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Bar aggregation settings
    pub aggregation: AggregationConfig,
}

/// Bar aggregation settings as written by the configuration UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AggregationConfig {
    /// Range bars of a fixed pip height
    RangeBar { range: Token },
    /// Renko bricks of a fixed pip size
    Renko { brick: Token },
    /// Bars of a fixed tick count
    TickBar { size: Token },
    /// Line break chart with a lookback in lines
    LineBreak { lookback: Token },
}

impl AggregationConfig {
    /// Name of the field holding the token, for error reporting
    pub fn field(&self) -> &'static str {
        match self {
            AggregationConfig::RangeBar { .. } => "range",
            AggregationConfig::Renko { .. } => "brick",
            AggregationConfig::TickBar { .. } => "size",
            AggregationConfig::LineBreak { .. } => "lookback",
        }
    }

    pub fn token(&self) -> &Token {
        match self {
            AggregationConfig::RangeBar { range } => range,
            AggregationConfig::Renko { brick } => brick,
            AggregationConfig::TickBar { size } => size,
            AggregationConfig::LineBreak { lookback } => lookback,
        }
    }
}

/// A value identifier as persisted: either a measure or a name/prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Token {
    Measure(i64),
    Text(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Measure(m) => write!(f, "{}", m),
            Token::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token::Text(s.to_string())
    }
}

impl From<i64> for Token {
    fn from(m: i64) -> Self {
        Token::Measure(m)
    }
}

fn default_true() -> bool {
    true
}
