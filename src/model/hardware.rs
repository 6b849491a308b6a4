//! Hardware (rollers, hinges, locks, handles) specification.

use serde::{Deserialize, Serialize};

/// Hardware line with a caller-supplied unit price. No price table exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HardwareSpec {
    /// Hardware type, e.g. "rollers".
    #[serde(rename = "type")]
    pub hardware_type: String,
    /// Brand name.
    #[serde(default)]
    pub brand: String,
    /// Model name.
    #[serde(default)]
    pub model: String,
    /// Number of pieces.
    pub quantity: u32,
    /// Price per piece.
    pub unit_price: f64,
}

impl HardwareSpec {
    /// Create a hardware spec without brand/model.
    pub fn new(hardware_type: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        Self {
            hardware_type: hardware_type.into(),
            quantity,
            unit_price,
            ..Default::default()
        }
    }

    /// Set brand and model.
    pub fn with_brand(mut self, brand: impl Into<String>, model: impl Into<String>) -> Self {
        self.brand = brand.into();
        self.model = model.into();
        self
    }

    /// Description used on quote lines.
    pub fn label(&self) -> String {
        [self.hardware_type.as_str(), self.brand.as_str(), self.model.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
