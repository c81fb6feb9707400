use nalgebra as na;
use serde_derive::{Deserialize, Serialize};

use crate::color::Color;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn raised(self, dz: f64) -> Self {
        Self {
            z: self.z + dz,
            ..self
        }
    }
}

impl From<na::Point3<f64>> for Point {
    #[inline]
    fn from(p: na::Point3<f64>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

/// What the viewer should do with the primitive. `Delete` is an explicit
/// tombstone: a previously drawn primitive with the same key and namespace
/// must be cleared, never inferred from absence.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Delete,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Shape {
    /// One small cube per point.
    BoxList { size: f64, points: Vec<Point> },
    /// Consecutive point pairs form independent segments.
    LineList { width: f64, points: Vec<Point> },
    /// View-facing label.
    Text {
        position: Point,
        height: f64,
        text: String,
    },
}

impl Shape {
    /// True when the shape carries nothing to draw.
    pub fn is_empty(&self) -> bool {
        match self {
            Shape::BoxList { points, .. } | Shape::LineList { points, .. } => points.is_empty(),
            Shape::Text { text, .. } => text.is_empty(),
        }
    }
}

/// One independently addressable drawable. Regenerated every cycle and
/// never diffed against the previous cycle; the short `lifetime` lets a
/// viewer expire stale primitives instead of waiting for retraction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Primitive {
    pub key: u32,
    pub namespace: String,
    pub stamp: f64,
    pub lifetime: f64,
    pub action: Action,
    pub color: Color,
    pub shape: Shape,
}

impl Primitive {
    #[inline]
    pub fn points(&self) -> &[Point] {
        match &self.shape {
            Shape::BoxList { points, .. } | Shape::LineList { points, .. } => points,
            Shape::Text { .. } => &[],
        }
    }
}
