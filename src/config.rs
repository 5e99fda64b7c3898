//! Build dimensions for the sofa-side storage box. All values in centimetres.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::types::Rect;

/// Floating-point comparison epsilon.
pub const EPS: f64 = 1e-6;

/// Every input the piece formulas depend on.
///
/// Values are taken as given; a combination that derives a non-positive
/// piece shows up later as a packing failure rather than being rejected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxConfig {
    pub panel_length: f64,
    pub panel_width: f64,
    pub panel_thickness: f64,

    pub beam_width: f64,
    pub beam_height: f64,

    /// Saw clearance added to both axes of every panel piece before packing.
    pub cut_margin: f64,

    pub sofa_width: f64,
    pub sofa_height: f64,

    pub baseboard_height: f64,
    pub baseboard_depth: f64,

    pub piece_depth: f64,
    pub box_inner_depth: f64,

    /// Beam stock on hand. When unset only the required total is reported.
    pub beam_stock_length: Option<f64>,
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self {
            panel_length: 240.0,
            panel_width: 60.0,
            panel_thickness: 1.8,
            beam_width: 5.0,
            beam_height: 7.0,
            cut_margin: 1.0,
            sofa_width: 164.0,
            sofa_height: 64.0,
            baseboard_height: 7.5,
            baseboard_depth: 1.5,
            piece_depth: 14.0,
            box_inner_depth: 16.0,
            beam_stock_length: None,
        }
    }
}

impl BoxConfig {
    /// The stock sheet every panel piece is packed into.
    pub fn panel(&self) -> Rect {
        Rect::new(self.panel_length, self.panel_width)
    }

    pub fn piece_width(&self) -> f64 {
        self.sofa_width
    }

    pub fn piece_height(&self) -> f64 {
        self.sofa_height
    }

    pub fn box_inner_width(&self) -> f64 {
        self.piece_depth - 2.0 * self.panel_thickness
    }

    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| PlanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }
}
