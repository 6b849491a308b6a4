//! Area and perimeter of a measured opening.

use crate::config::float_cmp::{is_positive, round_to};
use crate::config::{AREA_DECIMALS, MM_PER_M, PERIMETER_DECIMALS, TOLERANCE_MM};

/// Priced area in m² with the 10mm per-axis tolerance, rounded to 4 decimals.
///
/// Returns 0 when either dimension is missing, zero, negative or not finite.
pub fn compute_area(height_mm: f64, width_mm: f64) -> f64 {
    if !is_positive(height_mm) || !is_positive(width_mm) {
        return 0.0;
    }

    let height_m = (height_mm + TOLERANCE_MM) / MM_PER_M;
    let width_m = (width_mm + TOLERANCE_MM) / MM_PER_M;

    round_to(height_m * width_m, AREA_DECIMALS)
}

/// Perimeter in linear meters (no tolerance), rounded to 2 decimals.
///
/// Returns 0 when either dimension is missing, zero, negative or not finite.
pub fn compute_perimeter(height_mm: f64, width_mm: f64) -> f64 {
    if !is_positive(height_mm) || !is_positive(width_mm) {
        return 0.0;
    }

    let height_m = height_mm / MM_PER_M;
    let width_m = width_mm / MM_PER_M;

    round_to(2.0 * (height_m + width_m), PERIMETER_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_includes_tolerance() {
        // (1210 / 1000) * (1510 / 1000) = 1.8271
        assert_eq!(compute_area(1200.0, 1500.0), 1.8271);
        assert_eq!(compute_area(1000.0, 1000.0), 1.0201);
    }

    #[test]
    fn test_area_rounds_to_four_decimals() {
        // 0.613 * 0.457 = 0.280141
        assert_eq!(compute_area(603.0, 447.0), 0.2801);
        // 0.0111 * 0.0111 = 0.00012321
        assert_eq!(compute_area(1.1, 1.1), 0.0001);
    }

    #[test]
    fn test_perimeter() {
        assert_eq!(compute_perimeter(1200.0, 1500.0), 5.4);
        // 2 * (0.603 + 0.447) = 2.1
        assert_eq!(compute_perimeter(603.0, 447.0), 2.1);
        // 2 * (0.1234 + 0.1) = 0.4468
        assert_eq!(compute_perimeter(123.4, 100.0), 0.45);
    }

    #[test]
    fn test_invalid_dimensions_yield_zero() {
        assert_eq!(compute_area(0.0, 1500.0), 0.0);
        assert_eq!(compute_area(1200.0, f64::NAN), 0.0);
        assert_eq!(compute_area(-1200.0, 1500.0), 0.0);
        assert_eq!(compute_perimeter(1200.0, 0.0), 0.0);
        assert_eq!(compute_perimeter(-1.0, -1.0), 0.0);
    }
}
