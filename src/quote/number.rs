//! Quote numbers in the `YYYYMMNNNN` format.

use chrono::{Datelike, Local};
use rand::Rng;

/// Format a quote number from year, month and a sequence (kept to 4 digits).
pub fn quote_number(year: i32, month: u32, sequence: u32) -> String {
    format!("{:04}{:02}{:04}", year, month, sequence % 10_000)
}

/// New quote number for the current month with a random sequence.
pub fn generate_quote_number() -> String {
    let today = Local::now().date_naive();
    let sequence = rand::thread_rng().gen_range(0..10_000);
    quote_number(today.year(), today.month(), sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_number_format() {
        assert_eq!(quote_number(2024, 3, 42), "2024030042");
        assert_eq!(quote_number(2025, 12, 9999), "2025129999");
        assert_eq!(quote_number(2025, 1, 12345), "2025012345");
    }

    #[test]
    fn test_generated_number_shape() {
        let number = generate_quote_number();
        assert_eq!(number.len(), 10);
        assert!(number.chars().all(|c| c.is_ascii_digit()));
    }
}
