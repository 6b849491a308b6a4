//! Quote building: the in-progress draft and quote numbering.

mod draft;
mod number;

pub use draft::{QuoteDraft, QuoteHeader};
pub use number::{generate_quote_number, quote_number};
