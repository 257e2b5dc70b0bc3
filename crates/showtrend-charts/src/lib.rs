//! Season trend chart assembly for showtrend
//!
//! Turns a [`showtrend_common::Show`] into a declarative [`ChartSpec`]:
//! one least-squares trend line plus one globally x-aligned scatter series
//! per season, ready for an external charting layer to draw.

pub mod builder;
pub mod palette;
pub mod regression;
pub mod season_index;
pub mod types;

pub use builder::SeasonTrendBuilder;
pub use palette::Palette;
pub use season_index::SeasonIndex;
pub use types::*;
