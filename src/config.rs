//! Pricing constants and settings for the quote engine.

use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon for currency values.
pub const EPS: f64 = 0.0001;

/// Combined fabrication/installation allowance per axis in mm (5mm each side).
pub const TOLERANCE_MM: f64 = 10.0;

/// Millimeters per meter.
pub const MM_PER_M: f64 = 1000.0;

/// Decimal places kept for areas (m²).
pub const AREA_DECIMALS: i32 = 4;

/// Decimal places kept for perimeters (linear m).
pub const PERIMETER_DECIMALS: i32 = 2;

/// Unit price (per m²) used when a glass combination has no table entry.
pub const GLASS_FALLBACK_PRICE: f64 = 50.0;

/// Unit price (per linear m) used when a profile line/color has no table entry.
pub const FRAME_FALLBACK_PRICE: f64 = 20.0;

/// Polishing cost per m².
pub const POLISHING_RATE: f64 = 8.0;

/// Flat drilling cost per finishing entry.
pub const DRILLING_FLAT: f64 = 15.0;

/// Cutout cost per m².
pub const CUTOUTS_RATE: f64 = 12.0;

/// Beveling cost per m².
pub const BEVELING_RATE: f64 = 25.0;

/// Extra profile material for crossbars and reinforcements (15%).
pub const FRAME_EXTRA_MATERIAL: f64 = 0.15;

/// Frame labor per linear meter, applied to the un-inflated meters.
pub const FRAME_LABOR_RATE: f64 = 8.0;

/// Installation service base price.
pub const INSTALLATION_BASE: f64 = 150.0;

/// Installation service price per m².
pub const INSTALLATION_RATE: f64 = 50.0;

/// Default losses rate over subtotal.
pub const DEFAULT_LOSSES_RATE: f64 = 0.05;

/// Default overhead rate over subtotal.
pub const DEFAULT_OVERHEAD_RATE: f64 = 0.10;

/// Default profit margin over cost total.
pub const DEFAULT_PROFIT_RATE: f64 = 0.30;

/// Default number of days a quote stays valid.
pub const DEFAULT_VALIDITY_DAYS: u32 = 15;

/// Markup stack applied on top of materials and labor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupRates {
    /// Losses, computed on subtotal.
    pub losses: f64,
    /// Overhead, computed on subtotal.
    pub overhead: f64,
    /// Profit, computed on cost total (subtotal + losses + overhead).
    pub profit: f64,
}

impl Default for MarkupRates {
    fn default() -> Self {
        Self {
            losses: DEFAULT_LOSSES_RATE,
            overhead: DEFAULT_OVERHEAD_RATE,
            profit: DEFAULT_PROFIT_RATE,
        }
    }
}

impl MarkupRates {
    /// Create a markup stack with explicit rates.
    pub fn new(losses: f64, overhead: f64, profit: f64) -> Self {
        Self {
            losses,
            overhead,
            profit,
        }
    }

    /// Check that every rate is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.losses, self.overhead, self.profit]
            .iter()
            .all(|r| r.is_finite() && *r >= 0.0)
    }
}

/// Pricing configuration for a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Markup stack for totals.
    pub markup: MarkupRates,
    /// Days until a finalized quote expires.
    pub validity_days: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            markup: MarkupRates::default(),
            validity_days: DEFAULT_VALIDITY_DAYS,
        }
    }
}

impl PricingConfig {
    /// Create a configuration with the given markup and the default validity.
    pub fn new(markup: MarkupRates) -> Self {
        Self {
            markup,
            validity_days: DEFAULT_VALIDITY_DAYS,
        }
    }
}

/// Utility functions for floating-point comparisons and rounding.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }

    /// Round to `decimals` places, half away from zero.
    #[inline]
    pub fn round_to(value: f64, decimals: i32) -> f64 {
        let factor = 10f64.powi(decimals);
        (value * factor).round() / factor
    }

    /// Check that a measurement is usable for pricing (finite and positive).
    #[inline]
    pub fn is_positive(value: f64) -> bool {
        value.is_finite() && value > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::float_cmp::*;
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.82714, 4), 1.8271);
        assert_eq!(round_to(5.404, 2), 5.4);
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(-0.125, 2), -0.13);
    }

    #[test]
    fn test_is_positive() {
        assert!(is_positive(1.0));
        assert!(!is_positive(0.0));
        assert!(!is_positive(-3.0));
        assert!(!is_positive(f64::NAN));
        assert!(!is_positive(f64::INFINITY));
    }

    #[test]
    fn test_default_config() {
        let config = PricingConfig::default();
        assert_eq!(config.markup, MarkupRates::new(0.05, 0.10, 0.30));
        assert_eq!(config.validity_days, 15);
        assert!(config.markup.is_valid());
        assert!(!MarkupRates::new(-0.1, 0.1, 0.3).is_valid());
    }
}
