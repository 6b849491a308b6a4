//! glass-quote - Pricing engine and quote builder for glass and window shops.
//!
//! Turns measured openings (height/width in mm) and material choices into
//! itemized costs and a quote total with the losses/overhead/profit markup
//! stack. A separate quick estimator gives ballpark figures per project type.
//!
//! # Example
//!
//! ```
//! use glass_quote::{Dimension, GlassColor, GlassSpec, GlassType, QuoteDraft};
//!
//! let mut draft = QuoteDraft::new(Dimension::new(1200.0, 1500.0));
//! draft
//!     .add_glass_item(GlassSpec::new(GlassType::Tempered, 6, GlassColor::Clear))
//!     .unwrap();
//! draft.add_installation_item().unwrap();
//!
//! let totals = draft.totals();
//! assert!(totals.grand_total > totals.cost_total);
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod parser;
pub mod pricing;
pub mod quote;
pub mod validation;

// Re-exports for convenience
pub use config::{MarkupRates, PricingConfig};
pub use error::{QuoteError, Result};
pub use generator::{format_money, QuoteSheet};
pub use model::{
    Dimension, Finishing, FrameColor, FrameSpec, FrameSystem, GlassColor, GlassSpec, GlassType,
    HardwareSpec, ItemCategory, ProjectType, Quote, QuoteItem, QuoteStatus, QuoteTotals,
};
pub use parser::{parse_request_file, parse_request_str, QuoteRequest};
pub use pricing::{
    aggregate, aggregate_with, calculate_frame_cost, calculate_glass_cost,
    calculate_hardware_cost, calculate_installation_cost, compute_area, compute_perimeter,
    quick_estimate, QuickEstimate,
};
pub use quote::{generate_quote_number, QuoteDraft, QuoteHeader};
pub use validation::{validate_request, ValidationResult};

/// Price a request and produce the quote record.
///
/// Runs every "add item" action the request asks for on a fresh draft, in
/// the order glass, frames, hardware, installation.
pub fn build_quote(request: &QuoteRequest) -> Result<Quote> {
    let mut draft = QuoteDraft::with_config(request.dimension, request.pricing_config())?;

    for glass in &request.glass {
        draft.add_glass_item(glass.clone())?;
    }

    for frame in &request.frames {
        draft.add_frame_item(frame.system, &frame.profile_line, frame.color)?;
    }

    for hardware in &request.hardware {
        draft.add_hardware_item(hardware.clone())?;
    }

    if request.installation {
        draft.add_installation_item()?;
    }

    let header = QuoteHeader {
        number: request
            .number
            .clone()
            .unwrap_or_else(generate_quote_number),
        customer: request.customer.clone(),
        project_name: request.project_name.clone(),
        project_type: request.project_type,
        salesperson: request.salesperson.clone(),
        date: request
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive()),
        notes: request.notes.clone(),
    };

    draft.finalize(header)
}

/// Parse, validate and price a request file.
///
/// Validation warnings are logged; validation errors abort.
pub fn quote_from_file(path: &std::path::Path) -> Result<Quote> {
    let request = parse_request_file(path)?;

    let validation = validate_request(&request);
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }
    if !validation.passed {
        return Err(QuoteError::InvalidRequest {
            message: validation.errors.join("; "),
        });
    }

    build_quote(&request)
}
