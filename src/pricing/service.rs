//! Installation service pricing.

use crate::config::{INSTALLATION_BASE, INSTALLATION_RATE};

/// Installation price: base fee plus a rate per m² of glazing.
pub fn calculate_installation_cost(area_m2: f64) -> f64 {
    INSTALLATION_BASE + area_m2 * INSTALLATION_RATE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_installation_cost() {
        assert_eq!(calculate_installation_cost(0.0), 150.0);
        assert_eq!(calculate_installation_cost(2.0), 250.0);
    }
}
