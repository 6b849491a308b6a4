//! Pricing engine: geometry, price tables, cost calculators and totals.
//!
//! Every function here is pure. Missing table entries fall back to fixed
//! unit prices and invalid dimensions yield zero instead of an error.

mod aggregate;
mod estimate;
mod frame;
mod geometry;
mod glass;
mod hardware;
mod service;
pub mod tables;

pub use aggregate::{aggregate, aggregate_with};
pub use estimate::{estimate_for, quick_estimate, QuickEstimate};
pub use frame::{calculate_frame_cost, FrameCost};
pub use geometry::{compute_area, compute_perimeter};
pub use glass::{calculate_finishing_cost, calculate_glass_cost, GlassCost};
pub use hardware::{calculate_hardware_cost, HardwareCost};
pub use service::calculate_installation_cost;
