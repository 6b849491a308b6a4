//! QuoteItem - One priced line of a quote.

use super::{Dimension, FrameSpec, GlassSpec, HardwareSpec, NamedOption};
use crate::pricing::{FrameCost, GlassCost};
use serde::{Deserialize, Serialize};

/// Line item category. Glass, frame and hardware are materials; service is labor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum ItemCategory {
    Glass,
    Frame,
    Hardware,
    Service,
}

impl ItemCategory {
    /// Check if this category counts toward the materials subtotal.
    pub fn is_material(&self) -> bool {
        matches!(self, Self::Glass | Self::Frame | Self::Hardware)
    }

    /// Check if this category counts toward the labor subtotal.
    pub fn is_labor(&self) -> bool {
        *self == Self::Service
    }
}

impl NamedOption for ItemCategory {
    const KIND: &'static str = "item category";

    fn all() -> &'static [Self] {
        &[Self::Glass, Self::Frame, Self::Hardware, Self::Service]
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Glass => "glass",
            Self::Frame => "frame",
            Self::Hardware => "hardware",
            Self::Service => "service",
        }
    }
}

named_option_traits!(ItemCategory);

/// How an item was generated, with the calculator breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ItemSpec {
    Glass {
        spec: GlassSpec,
        dimension: Dimension,
        cost: GlassCost,
    },
    Frame {
        spec: FrameSpec,
        cost: FrameCost,
    },
    Hardware {
        spec: HardwareSpec,
    },
    Installation {
        area_m2: f64,
        includes: Vec<String>,
    },
    /// Entered by hand, no calculator involved.
    Manual,
}

/// One line of a quote (QuoteItem).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteItem {
    /// Identifier, unique within its quote.
    pub id: u32,
    /// Category for the materials/labor split.
    pub category: ItemCategory,
    /// Free-text description.
    pub description: String,
    /// Quantity, editable.
    pub quantity: f64,
    /// Unit label, e.g. "pc", "kit".
    pub unit: String,
    /// Unit price, editable.
    pub unit_price: f64,
    /// Always quantity x unit price.
    pub total_price: f64,
    /// Generation details as computed when the item was added. Quantity and
    /// price edits do not change them.
    pub spec: ItemSpec,
}

impl QuoteItem {
    /// Create an item; total price is derived.
    pub fn new(
        id: u32,
        category: ItemCategory,
        description: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        unit_price: f64,
    ) -> Self {
        Self {
            id,
            category,
            description: description.into(),
            quantity,
            unit: unit.into(),
            unit_price,
            total_price: quantity * unit_price,
            spec: ItemSpec::Manual,
        }
    }

    /// Attach generation details.
    pub fn with_spec(mut self, spec: ItemSpec) -> Self {
        self.spec = spec;
        self
    }

    /// Change the quantity and recompute the total.
    pub fn set_quantity(&mut self, quantity: f64) {
        self.quantity = quantity;
        self.recompute_total();
    }

    /// Change the unit price and recompute the total.
    pub fn set_unit_price(&mut self, unit_price: f64) {
        self.unit_price = unit_price;
        self.recompute_total();
    }

    fn recompute_total(&mut self) {
        self.total_price = self.quantity * self.unit_price;
    }
}
