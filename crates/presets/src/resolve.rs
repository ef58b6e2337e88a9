//! Preset resolution
//!
//! Turns raw tokens from a preset file into canonical values. Integer tokens
//! go through exact measure lookup, string tokens through token lookup
//! (label prefix, integer literal, partial name).

use std::fmt;

use hermes_core::{
    CanonicalValue, Currency, CurrencyPair, LineBreakLookback, Price, PriceRange, TickBarSize,
    ValueDomain,
};
use log::{debug, warn};

use crate::config::{AggregationConfig, ConfigError, PresetConfig, PresetConfigFile, Token};

/// Bar aggregation with canonical values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aggregation {
    RangeBar(PriceRange),
    Renko(PriceRange),
    TickBar(TickBarSize),
    LineBreak(LineBreakLookback),
}

impl Aggregation {
    /// Price height of one bar or brick, for price-based aggregations
    pub fn price_delta(&self, pair: &CurrencyPair) -> Option<Price> {
        match self {
            Aggregation::RangeBar(range) | Aggregation::Renko(range) => {
                Some(range.to_price_delta(pair))
            }
            Aggregation::TickBar(_) | Aggregation::LineBreak(_) => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Aggregation::RangeBar(_) => "range_bar",
            Aggregation::Renko(_) => "renko",
            Aggregation::TickBar(_) => "tick_bar",
            Aggregation::LineBreak(_) => "line_break",
        }
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Aggregation::RangeBar(v) | Aggregation::Renko(v) => write!(f, "{}({})", self.kind(), v),
            Aggregation::TickBar(v) => write!(f, "{}({})", self.kind(), v),
            Aggregation::LineBreak(v) => write!(f, "{}({})", self.kind(), v),
        }
    }
}

/// A preset with every token resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPreset {
    pub id: String,
    pub instrument: CurrencyPair,
    pub account_currency: Currency,
    pub aggregation: Aggregation,
}

/// Resolve a token against one value domain
pub fn resolve_token<D: ValueDomain>(token: &Token) -> Option<CanonicalValue<D>> {
    match token {
        Token::Measure(m) => u32::try_from(*m)
            .ok()
            .and_then(CanonicalValue::from_measure),
        Token::Text(s) => CanonicalValue::from_token(s),
    }
}

impl PresetConfig {
    /// Resolve this preset's instrument, currency and aggregation
    pub fn resolve(&self) -> Result<ResolvedPreset, ConfigError> {
        let instrument: CurrencyPair =
            self.instrument
                .parse()
                .map_err(|source| ConfigError::InvalidInstrument {
                    preset: self.id.clone(),
                    source,
                })?;

        let account_currency = match &self.account_currency {
            Some(code) => Currency::get_instance(code),
            None => instrument.secondary().clone(),
        };

        let aggregation = match &self.aggregation {
            AggregationConfig::RangeBar { range } => Aggregation::RangeBar(self.lookup(range)?),
            AggregationConfig::Renko { brick } => Aggregation::Renko(self.lookup(brick)?),
            AggregationConfig::TickBar { size } => Aggregation::TickBar(self.lookup(size)?),
            AggregationConfig::LineBreak { lookback } => {
                Aggregation::LineBreak(self.lookup(lookback)?)
            }
        };

        debug!(
            "Resolved preset {}: {} {} in {}",
            self.id, instrument, aggregation, account_currency
        );

        Ok(ResolvedPreset {
            id: self.id.clone(),
            instrument,
            account_currency,
            aggregation,
        })
    }

    fn lookup<D: ValueDomain>(&self, token: &Token) -> Result<CanonicalValue<D>, ConfigError> {
        resolve_token(token).ok_or_else(|| {
            warn!(
                "Preset {}: {} '{}' not found in {}",
                self.id,
                self.aggregation.field(),
                token,
                D::NAME
            );
            ConfigError::UnresolvedToken {
                preset: self.id.clone(),
                field: self.aggregation.field(),
                token: token.to_string(),
                domain: D::NAME,
            }
        })
    }
}

impl PresetConfigFile {
    /// Validate, then resolve every enabled preset
    pub fn resolve(&self) -> Result<Vec<ResolvedPreset>, ConfigError> {
        self.validate()?;
        self.presets
            .iter()
            .filter(|p| p.enabled)
            .map(PresetConfig::resolve)
            .collect()
    }
}
