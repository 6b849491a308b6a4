//! Frame (profile) cost calculator.

use super::tables::frame_price_or_default;
use crate::config::{FRAME_EXTRA_MATERIAL, FRAME_LABOR_RATE};
use crate::model::FrameSpec;
use serde::{Deserialize, Serialize};

/// Cost breakdown for a framed opening.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameCost {
    /// Perimeter meters requested.
    pub linear_meters: f64,
    /// Allowance for crossbars and reinforcements.
    pub extra_material: f64,
    /// linear_meters + extra_material.
    pub total_linear_meters: f64,
    /// Unit price used (table or fallback).
    pub price_per_meter: f64,
    /// total_linear_meters x price_per_meter.
    pub material_cost: f64,
    /// Labor on the un-inflated linear meters.
    pub labor_cost: f64,
    /// material_cost + labor_cost.
    pub total_price: f64,
}

/// Price the profiles for a frame.
pub fn calculate_frame_cost(spec: &FrameSpec) -> FrameCost {
    let price_per_meter = frame_price_or_default(&spec.profile_line, spec.color);

    let linear_meters = spec.linear_meters;
    let extra_material = linear_meters * FRAME_EXTRA_MATERIAL;
    let total_linear_meters = linear_meters + extra_material;

    let material_cost = total_linear_meters * price_per_meter;
    // Labor is charged on the measured meters only, not on the extra material
    let labor_cost = linear_meters * FRAME_LABOR_RATE;

    FrameCost {
        linear_meters,
        extra_material,
        total_linear_meters,
        price_per_meter,
        material_cost,
        labor_cost,
        total_price: material_cost + labor_cost,
    }
}
