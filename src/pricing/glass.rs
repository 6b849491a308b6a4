//! Glass cost calculator.

use super::tables::glass_price_or_default;
use crate::config::{BEVELING_RATE, CUTOUTS_RATE, DRILLING_FLAT, POLISHING_RATE};
use crate::model::{Finishing, GlassSpec};
use serde::{Deserialize, Serialize};

/// Cost breakdown for one glass piece.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GlassCost {
    /// Priced area in m².
    pub area: f64,
    /// Unit price used (table or fallback).
    pub price_per_m2: f64,
    /// area x price_per_m2.
    pub material_cost: f64,
    /// Sum of finishing operations.
    pub finishing_cost: f64,
    /// material_cost + finishing_cost.
    pub total_price: f64,
}

/// Cost of the finishing operations for a piece of `area_m2`.
///
/// Drilling is a flat charge per list entry, not per hole. Sandblasting has
/// no rate and adds nothing.
pub fn calculate_finishing_cost(finishing: &[Finishing], area_m2: f64) -> f64 {
    finishing
        .iter()
        .map(|f| match f {
            Finishing::Polishing => area_m2 * POLISHING_RATE,
            Finishing::Drilling => DRILLING_FLAT,
            Finishing::Cutouts => area_m2 * CUTOUTS_RATE,
            Finishing::Beveling => area_m2 * BEVELING_RATE,
            Finishing::Sandblasting => 0.0,
        })
        .sum()
}

/// Price a glass piece of `area_m2`.
pub fn calculate_glass_cost(spec: &GlassSpec, area_m2: f64) -> GlassCost {
    let price_per_m2 = glass_price_or_default(spec.glass_type, spec.thickness_mm, spec.color);
    let material_cost = area_m2 * price_per_m2;
    let finishing_cost = calculate_finishing_cost(&spec.finishing, area_m2);

    GlassCost {
        area: area_m2,
        price_per_m2,
        material_cost,
        finishing_cost,
        total_price: material_cost + finishing_cost,
    }
}
