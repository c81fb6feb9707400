use serde_derive::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

pub const PALETTE_SIZE: usize = 16;

/// Fixed channel palette; reused cyclically when there are more channels
/// than entries, so channel colors stay stable across restarts.
pub const PALETTE: [Color; PALETTE_SIZE] = [
    Color::rgba(0.0, 0.0, 1.0, 1.0),    // blue
    Color::rgba(0.0, 1.0, 0.0, 1.0),    // green
    Color::rgba(1.0, 1.0, 0.0, 1.0),    // yellow
    Color::rgba(1.0, 0.0, 0.0, 1.0),    // red
    Color::rgba(0.0, 1.0, 1.0, 1.0),    // cyan
    Color::rgba(1.0, 0.0, 1.0, 1.0),    // magenta
    Color::rgba(1.0, 0.64, 0.0, 1.0),   // orange
    Color::rgba(0.75, 1.0, 0.0, 1.0),   // lime
    Color::rgba(0.0, 0.5, 0.5, 1.0),    // teal
    Color::rgba(0.5, 0.0, 0.5, 1.0),    // purple
    Color::rgba(1.0, 0.75, 0.8, 1.0),   // pink
    Color::rgba(0.65, 0.17, 0.17, 1.0), // brown
    Color::rgba(0.5, 0.0, 0.0, 1.0),    // maroon
    Color::rgba(0.5, 0.5, 0.0, 1.0),    // olive
    Color::rgba(0.0, 0.0, 0.5, 1.0),    // navy
    Color::rgba(0.5, 0.5, 0.5, 1.0),    // grey
];

/// Color for track boxes and labels of entities with no association
/// in the current cycle.
pub const DIMMED: Color = Color::rgba(0.5, 0.5, 0.5, 1.0);

pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);

#[inline]
pub fn channel_color(index: usize) -> Color {
    PALETTE[index % PALETTE_SIZE]
}
