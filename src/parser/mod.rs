//! Quote request file parser module.

mod request;

pub use request::{parse_request_file, parse_request_str, FrameRequest, QuoteRequest};
