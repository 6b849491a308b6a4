//! Plain-text quote sheet.

use crate::model::Quote;
use std::fmt;

/// Format an amount with two decimals.
pub fn format_money(value: f64) -> String {
    format!("{:.2}", value)
}

/// Renders a quote as a fixed-width text sheet.
pub struct QuoteSheet<'a>(pub &'a Quote);

impl fmt::Display for QuoteSheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quote = self.0;

        writeln!(f, "QUOTE {}", quote.number)?;
        writeln!(f, "Customer: {}", quote.customer)?;
        if !quote.project_name.is_empty() {
            writeln!(f, "Project: {} ({})", quote.project_name, quote.project_type)?;
        } else {
            writeln!(f, "Project: {}", quote.project_type)?;
        }
        writeln!(f, "Dimensions: {}", quote.dimension)?;
        writeln!(f, "Date: {}  Valid until: {}", quote.date, quote.valid_until)?;
        if !quote.salesperson.is_empty() {
            writeln!(f, "Salesperson: {}", quote.salesperson)?;
        }
        writeln!(f)?;

        for (idx, item) in quote.items.iter().enumerate() {
            writeln!(
                f,
                "{:>3}. [{:<8}] {:<50} {:>8} {:<7} x {:>10} = {:>12}",
                idx + 1,
                item.category,
                item.description,
                item.quantity,
                item.unit,
                format_money(item.unit_price),
                format_money(item.total_price)
            )?;
        }
        writeln!(f)?;

        let totals = &quote.totals;
        let rows = [
            ("Materials", totals.materials),
            ("Labor", totals.labor),
            ("Subtotal", totals.subtotal),
            ("Losses", totals.losses),
            ("Overhead", totals.overhead),
            ("Cost total", totals.cost_total),
            ("Profit", totals.profit),
            ("TOTAL", totals.grand_total),
        ];
        for (label, value) in rows {
            writeln!(f, "{:<12}{:>14}", label, format_money(value))?;
        }

        if let Some(notes) = &quote.notes {
            writeln!(f)?;
            writeln!(f, "Notes: {}", notes)?;
        }

        Ok(())
    }
}
