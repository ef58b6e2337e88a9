//! Hermes Presets
//!
//! Loads persisted strategy presets and resolves their string or integer
//! tokens into canonical Hermes values, the way a strategy host restores
//! configuration saved by its UI.
//!
//! ```ignore
//! use hermes_presets::load_default_config;
//!
//! for preset in load_default_config()?.resolve()? {
//!     println!("{}: {} on {}", preset.id, preset.aggregation, preset.instrument);
//! }
//! ```

pub mod config;
pub mod resolve;

pub use config::{
    AggregationConfig, ConfigError, PresetConfig, PresetConfigFile, Token, load_config,
    load_config_from_str, load_default_config,
};
pub use resolve::{Aggregation, ResolvedPreset, resolve_token};
