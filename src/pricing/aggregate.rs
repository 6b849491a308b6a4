//! Quote totals: materials, labor and the markup stack.

use crate::config::MarkupRates;
use crate::model::{QuoteItem, QuoteTotals};

/// Aggregate items with the default markup stack (5% losses, 10% overhead, 30% profit).
pub fn aggregate(items: &[QuoteItem]) -> QuoteTotals {
    aggregate_with(items, &MarkupRates::default())
}

/// Aggregate items with an explicit markup stack.
///
/// Losses and overhead are taken on the subtotal; profit is taken on the cost
/// total, which already includes losses and overhead.
pub fn aggregate_with(items: &[QuoteItem], rates: &MarkupRates) -> QuoteTotals {
    let materials: f64 = items
        .iter()
        .filter(|item| item.category.is_material())
        .map(|item| item.total_price)
        .sum();

    let labor: f64 = items
        .iter()
        .filter(|item| item.category.is_labor())
        .map(|item| item.total_price)
        .sum();

    let subtotal = materials + labor;
    let losses = subtotal * rates.losses;
    let overhead = subtotal * rates.overhead;
    let cost_total = subtotal + losses + overhead;
    let profit = cost_total * rates.profit;

    QuoteTotals {
        materials,
        labor,
        subtotal,
        losses,
        overhead,
        cost_total,
        profit,
        grand_total: cost_total + profit,
    }
}
