//! Quick ballpark estimate by project type, separate from itemized quotes.

use super::geometry::{compute_area, compute_perimeter};
use crate::config::float_cmp::approx_zero;
use crate::model::ProjectType;
use serde::{Deserialize, Serialize};

/// Price per m² applied when a project type has no formula.
const GENERIC_RATE: f64 = 100.0;

/// Result of a quick estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QuickEstimate {
    pub area: f64,
    pub perimeter: f64,
    pub estimated_price: f64,
    /// estimated_price / area, 0 when the area is 0.
    pub price_per_m2: f64,
}

/// Per-m², per-linear-m and fixed coefficients for a project type.
fn estimate_coefficients(project_type: ProjectType) -> Option<(f64, f64, f64)> {
    match project_type {
        // glass + profile + hardware
        ProjectType::SlidingWindow => Some((65.0, 18.0, 120.0)),
        ProjectType::PivotDoor => Some((95.0, 35.0, 250.0)),
        ProjectType::FrontShowerBox => Some((80.0, 25.0, 180.0)),
        _ => None,
    }
}

/// Estimate a project type. Types without a formula use the generic rate.
pub fn estimate_for(project_type: ProjectType, height_mm: f64, width_mm: f64) -> QuickEstimate {
    let area = compute_area(height_mm, width_mm);
    let perimeter = compute_perimeter(height_mm, width_mm);

    let estimated_price = match estimate_coefficients(project_type) {
        Some((per_m2, per_m, fixed)) => area * per_m2 + perimeter * per_m + fixed,
        None => area * GENERIC_RATE,
    };

    let price_per_m2 = if approx_zero(area) {
        0.0
    } else {
        estimated_price / area
    };

    QuickEstimate {
        area,
        perimeter,
        estimated_price,
        price_per_m2,
    }
}

/// Estimate from a project type name. Unknown names use the generic rate.
pub fn quick_estimate(project_type: &str, height_mm: f64, width_mm: f64) -> QuickEstimate {
    let parsed = project_type.parse::<ProjectType>().unwrap_or_else(|_| {
        tracing::debug!("Unknown project type '{}', using generic rate", project_type);
        ProjectType::Other
    });
    estimate_for(parsed, height_mm, width_mm)
}
