//! Season color palette with per-render shuffling
//!
//! Colors are looked up by season NUMBER, not by emission order, so a
//! season number with no episodes still consumes its slot and the colors
//! of the surrounding seasons stay reproducible.

/// Default series colors (hex)
pub const DEFAULT_COLORS: [&str; 8] = [
    "#1f77b4", // Blue
    "#ff7f0e", // Orange
    "#2ca02c", // Green
    "#d62728", // Red
    "#9467bd", // Purple
    "#8c564b", // Brown
    "#e377c2", // Pink
    "#7f7f7f", // Gray
];

/// A render-local color assignment: the default palette in a shuffled order
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Shuffle the default palette with the given randomness source.
    ///
    /// One shuffle per render: repeated renders vary the assignment, but
    /// within a render every lookup sees the same order.
    pub fn shuffled(rng: &mut fastrand::Rng) -> Self {
        let mut colors: Vec<String> = DEFAULT_COLORS.iter().map(|c| c.to_string()).collect();
        rng.shuffle(&mut colors);
        Self { colors }
    }

    /// Color for a season, indexed by season number modulo palette size
    pub fn color_for_season(&self, season: u32) -> &str {
        &self.colors[season as usize % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
