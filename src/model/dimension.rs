//! Dimension - Project measurements in millimeters.

use crate::config::float_cmp::is_positive;
use crate::pricing::{compute_area, compute_perimeter};
use serde::{Deserialize, Serialize};

/// Measured opening of a project, in millimeters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    /// Height in mm.
    pub height_mm: f64,
    /// Width in mm.
    pub width_mm: f64,
    /// Optional depth in mm (shower niches, facades).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth_mm: Option<f64>,
}

impl Dimension {
    /// Create a dimension without depth.
    pub fn new(height_mm: f64, width_mm: f64) -> Self {
        Self {
            height_mm,
            width_mm,
            depth_mm: None,
        }
    }

    /// Set the depth.
    pub fn with_depth(mut self, depth_mm: f64) -> Self {
        self.depth_mm = Some(depth_mm);
        self
    }

    /// Both height and width are set and positive.
    pub fn is_priceable(&self) -> bool {
        is_positive(self.height_mm) && is_positive(self.width_mm)
    }

    /// Priced area in m², tolerance included.
    pub fn area(&self) -> f64 {
        compute_area(self.height_mm, self.width_mm)
    }

    /// Perimeter in linear meters.
    pub fn perimeter(&self) -> f64 {
        compute_perimeter(self.height_mm, self.width_mm)
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}mm", self.height_mm, self.width_mm)?;
        if let Some(depth) = self.depth_mm {
            write!(f, " (depth {}mm)", depth)?;
        }
        Ok(())
    }
}
