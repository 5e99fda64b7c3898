use serde::{Deserialize, Serialize};

use crate::config::EPS;

/// Axis-aligned size in centimetres. `length` runs along the panel's length
/// axis (x), `width` across it (y).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub length: f64,
    pub width: f64,
}

impl Rect {
    pub fn new(length: f64, width: f64) -> Self {
        Self { length, width }
    }

    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    pub fn inflated(&self, margin: f64) -> Self {
        Self {
            length: self.length + margin,
            width: self.width + margin,
        }
    }

    pub fn fits_in(&self, other: &Rect) -> bool {
        self.length <= other.length + EPS && self.width <= other.width + EPS
    }

    pub fn is_positive(&self) -> bool {
        self.length > 0.0 && self.width > 0.0
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}x{:.1}", self.length, self.width)
    }
}

/// A flat rectangular cut from sheet stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelPiece {
    pub name: String,
    pub length: f64,
    pub width: f64,
    pub thickness: f64,
}

impl PanelPiece {
    pub fn new(name: impl Into<String>, length: f64, width: f64, thickness: f64) -> Self {
        Self {
            name: name.into(),
            length,
            width,
            thickness,
        }
    }

    /// Design size, without saw clearance.
    pub fn size(&self) -> Rect {
        Rect::new(self.length, self.width)
    }

    /// Area the piece occupies on the sheet once the cut margin is reserved.
    pub fn footprint(&self, margin: f64) -> Rect {
        self.size().inflated(margin)
    }
}

/// A linear cut from beam stock with a fixed cross-section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamPiece {
    pub name: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl BeamPiece {
    pub fn new(name: impl Into<String>, length: f64, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            length,
            width,
            height,
        }
    }
}

/// Packer input. `id` must be unique within one packing call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackItem {
    pub id: usize,
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub rect: Rect,
}

impl Placement {
    pub fn x_end(&self) -> f64 {
        self.x + self.rect.length
    }

    pub fn y_end(&self) -> f64 {
        self.y + self.rect.width
    }

    /// True when the interiors intersect; shared edges don't count.
    pub fn overlaps(&self, other: &Placement) -> bool {
        self.x + EPS < other.x_end()
            && other.x + EPS < self.x_end()
            && self.y + EPS < other.y_end()
            && other.y + EPS < self.y_end()
    }
}
