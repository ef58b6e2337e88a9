//! Concrete bounded value domains
//!
//! - Price ranges in pips (range bars, renko bricks)
//! - Tick bar sizes in ticks
//! - Line break lookbacks in lines

mod line_break;
mod price_range;
mod tick_bar_size;

pub use line_break::{LineBreakLookback, Lines};
pub use price_range::{Pips, PriceRange};
pub use tick_bar_size::{TickBarSize, Ticks};
