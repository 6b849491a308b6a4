//! Hardware cost calculator.

use serde::{Deserialize, Serialize};

/// Cost of a hardware line. The unit price always comes from the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HardwareCost {
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
}

/// Price `quantity` pieces at `unit_price`.
pub fn calculate_hardware_cost(quantity: u32, unit_price: f64) -> HardwareCost {
    HardwareCost {
        quantity,
        unit_price,
        total_price: f64::from(quantity) * unit_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hardware_cost() {
        let cost = calculate_hardware_cost(4, 15.0);
        assert_eq!(cost.quantity, 4);
        assert_eq!(cost.total_price, 60.0);
        assert_eq!(calculate_hardware_cost(0, 99.0).total_price, 0.0);
    }
}
