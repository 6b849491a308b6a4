//! JSON quote request files.

use crate::config::{MarkupRates, PricingConfig, DEFAULT_VALIDITY_DAYS};
use crate::error::{QuoteError, Result};
use crate::model::{Dimension, FrameColor, FrameSystem, GlassSpec, HardwareSpec, ProjectType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Frame requested for the opening; linear meters come from the perimeter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRequest {
    pub system: FrameSystem,
    pub profile_line: String,
    pub color: FrameColor,
}

/// Everything needed to price and issue a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Quote number; generated when absent.
    #[serde(default)]
    pub number: Option<String>,
    pub customer: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub project_type: ProjectType,
    #[serde(default)]
    pub salesperson: String,
    /// Issue date; today when absent.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub dimension: Dimension,
    #[serde(default)]
    pub glass: Vec<GlassSpec>,
    #[serde(default)]
    pub frames: Vec<FrameRequest>,
    #[serde(default)]
    pub hardware: Vec<HardwareSpec>,
    /// Add the installation service.
    #[serde(default)]
    pub installation: bool,
    /// Markup override; defaults to the standard stack.
    #[serde(default)]
    pub markup: Option<MarkupRates>,
    #[serde(default = "default_validity_days")]
    pub validity_days: u32,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_validity_days() -> u32 {
    DEFAULT_VALIDITY_DAYS
}

impl QuoteRequest {
    /// Number of items the request will generate.
    pub fn item_count(&self) -> usize {
        self.glass.len() + self.frames.len() + self.hardware.len() + usize::from(self.installation)
    }

    /// Pricing configuration for this request.
    pub fn pricing_config(&self) -> PricingConfig {
        PricingConfig {
            markup: self.markup.unwrap_or_default(),
            validity_days: self.validity_days,
        }
    }
}

/// Parse a request from JSON text.
pub fn parse_request_str(content: &str) -> Result<QuoteRequest> {
    let request: QuoteRequest = serde_json::from_str(content)?;
    tracing::debug!(
        "Parsed request for '{}' with {} item(s)",
        request.customer,
        request.item_count()
    );
    Ok(request)
}

/// Parse a request file.
pub fn parse_request_file(path: &Path) -> Result<QuoteRequest> {
    if !path.exists() {
        return Err(QuoteError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(QuoteError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    parse_request_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GlassColor, GlassType};

    const MINIMAL: &str = r#"{
        "customer": "Maria Souza",
        "dimension": { "height_mm": 1200, "width_mm": 1500 }
    }"#;

    #[test]
    fn test_minimal_request_defaults() {
        let request = parse_request_str(MINIMAL).unwrap();
        assert_eq!(request.customer, "Maria Souza");
        assert_eq!(request.dimension, Dimension::new(1200.0, 1500.0));
        assert_eq!(request.project_type, ProjectType::Other);
        assert_eq!(request.validity_days, 15);
        assert_eq!(request.item_count(), 0);
        assert_eq!(request.pricing_config(), PricingConfig::default());
    }

    #[test]
    fn test_full_request() {
        let request = parse_request_str(
            r#"{
                "customer": "Obra Central",
                "project_type": "janela-correr",
                "date": "2024-03-20",
                "dimension": { "height_mm": 1200, "width_mm": 1500, "depth_mm": 80 },
                "glass": [{ "type": "tempered", "thickness_mm": 8, "color": "smoke" }],
                "frames": [{ "system": "sliding", "profile_line": "Line 30", "color": "black" }],
                "hardware": [{ "type": "rollers", "quantity": 4, "unit_price": 15.0 }],
                "installation": true,
                "markup": { "profit": 0.25 },
                "validity_days": 30
            }"#,
        )
        .unwrap();

        assert_eq!(request.project_type, ProjectType::SlidingWindow);
        assert_eq!(request.dimension.depth_mm, Some(80.0));
        assert_eq!(request.glass[0], GlassSpec::new(GlassType::Tempered, 8, GlassColor::Smoke));
        assert_eq!(request.item_count(), 4);

        let config = request.pricing_config();
        assert_eq!(config.markup, MarkupRates::new(0.05, 0.10, 0.25));
        assert_eq!(config.validity_days, 30);
    }

    #[test]
    fn test_invalid_request() {
        let err = parse_request_str(r#"{ "customer": "x" }"#).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidRequest { .. }));

        let err = parse_request_str(
            r#"{ "customer": "x", "dimension": { "height_mm": 1, "width_mm": 1 },
                 "glass": [{ "type": "mirror", "thickness_mm": 4, "color": "clear" }] }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("mirror"));
    }
}
