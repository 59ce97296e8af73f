use ndarray::ArrayView2;
use std::fmt;

/// Water share at or above which a tile counts as water
pub const WATER_THRESHOLD: f64 = 0.8;
/// Water share at or above which a tile counts as shoreline
pub const EDGE_THRESHOLD: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileClass {
    Water,
    Edge,
    Green,
}

impl TileClass {
    pub const ALL: [TileClass; 3] = [TileClass::Water, TileClass::Edge, TileClass::Green];

    /// Name of the output subdirectory for this class
    pub fn dir_name(self) -> &'static str {
        match self {
            TileClass::Water => "water",
            TileClass::Edge => "edge",
            TileClass::Green => "green",
        }
    }

    pub fn from_water_fraction(perc_water: f64) -> Self {
        if perc_water >= WATER_THRESHOLD {
            TileClass::Water
        } else if perc_water >= EDGE_THRESHOLD {
            TileClass::Edge
        } else {
            TileClass::Green
        }
    }
}

impl fmt::Display for TileClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Fraction of cells in the window equal to `value`
pub fn value_fraction(window: &ArrayView2<'_, i32>, value: i32) -> f64 {
    let total = window.len();
    if total == 0 {
        return 0.0;
    }
    let count = window.iter().filter(|&&v| v == value).count();
    count as f64 / total as f64
}

/// Classify a label window by its share of `water_value` cells
pub fn classify_window(window: &ArrayView2<'_, i32>, water_value: i32) -> (TileClass, f64) {
    let perc_water = value_fraction(window, water_value);
    (TileClass::from_water_fraction(perc_water), perc_water)
}
