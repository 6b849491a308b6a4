//! Plain-text quote sheet generator module.

mod sheet;

pub use sheet::{format_money, QuoteSheet};
