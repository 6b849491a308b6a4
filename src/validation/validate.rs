//! Validation logic for quote requests.

use crate::config::{FRAME_FALLBACK_PRICE, GLASS_FALLBACK_PRICE};
use crate::model::{Dimension, Finishing, FrameSpec, GlassSpec, HardwareSpec};
use crate::parser::QuoteRequest;
use crate::pricing::tables::{frame_unit_price, glass_unit_price, normalize_profile_line};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

fn check_measure(result: &mut ValidationResult, name: &str, value: f64) {
    if value.is_nan() || value.is_infinite() {
        result.add_error(format!("{}: {} is not a number", name, value));
    } else if value < 0.0 {
        result.add_error(format!("{}: negative value {} mm", name, value));
    } else if value == 0.0 {
        result.add_error(format!("{}: missing (0 mm)", name));
    }
}

/// Validate the measured opening. Height and width must be positive.
pub fn validate_dimension(dimension: &Dimension) -> ValidationResult {
    let mut result = ValidationResult::ok();

    check_measure(&mut result, "Height", dimension.height_mm);
    check_measure(&mut result, "Width", dimension.width_mm);

    if let Some(depth) = dimension.depth_mm {
        if !depth.is_finite() || depth < 0.0 {
            result.add_error(format!("Depth: invalid value {} mm", depth));
        }
    }

    result
}

/// Validate a glass spec against the stock and the price table.
pub fn validate_glass_spec(spec: &GlassSpec) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if !spec.is_standard_thickness() {
        result.add_warning(format!(
            "Glass {}: {}mm is not a standard thickness",
            spec.label(),
            spec.thickness_mm
        ));
    }

    if glass_unit_price(spec.glass_type, spec.thickness_mm, spec.color).is_none() {
        result.add_warning(format!(
            "Glass {}: no price table entry, using {:.2}/m²",
            spec.label(),
            GLASS_FALLBACK_PRICE
        ));
    }

    // Sandblasting is priced at 0
    if spec.finishing.contains(&Finishing::Sandblasting) {
        result.add_warning(format!(
            "Glass {}: sandblasting has no rate and is not charged",
            spec.label()
        ));
    }

    result
}

/// Validate a frame spec against the price table.
pub fn validate_frame_spec(spec: &FrameSpec) -> ValidationResult {
    let mut result = ValidationResult::ok();

    let key = normalize_profile_line(&spec.profile_line);
    if frame_unit_price(&key, spec.color).is_none() {
        result.add_warning(format!(
            "Frame {}: no price table entry, using {:.2}/m",
            spec.label(),
            FRAME_FALLBACK_PRICE
        ));
    }

    if !spec.linear_meters.is_finite() || spec.linear_meters <= 0.0 {
        result.add_error(format!(
            "Frame {}: invalid linear meters {}",
            spec.label(),
            spec.linear_meters
        ));
    }

    result
}

/// Validate a hardware line.
pub fn validate_hardware_spec(spec: &HardwareSpec) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if spec.quantity == 0 {
        result.add_warning(format!("Hardware {}: quantity is 0", spec.label()));
    }

    if !spec.unit_price.is_finite() || spec.unit_price < 0.0 {
        result.add_error(format!(
            "Hardware {}: invalid unit price {}",
            spec.label(),
            spec.unit_price
        ));
    }

    result
}

/// Validate a whole quote request.
pub fn validate_request(request: &QuoteRequest) -> ValidationResult {
    let mut result = validate_dimension(&request.dimension);

    if request.item_count() == 0 {
        result.add_error("Request has no glass, frame, hardware or installation items");
    }

    for glass in &request.glass {
        result.merge(validate_glass_spec(glass));
    }

    let perimeter = request.dimension.perimeter();
    for frame in &request.frames {
        let spec = FrameSpec::new(frame.system, frame.profile_line.clone(), frame.color, perimeter);
        result.merge(validate_frame_spec(&spec));
    }

    for hardware in &request.hardware {
        result.merge(validate_hardware_spec(hardware));
    }

    if let Some(markup) = &request.markup {
        if !markup.is_valid() {
            result.add_error(format!("Invalid markup rates: {:?}", markup));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FrameColor, FrameSystem, GlassColor, GlassType};

    #[test]
    fn test_dimension_errors() {
        assert!(validate_dimension(&Dimension::new(1200.0, 1500.0)).passed);

        let result = validate_dimension(&Dimension::new(-1200.0, 0.0));
        assert!(!result.passed);
        assert_eq!(
            result.errors,
            vec!["Height: negative value -1200 mm", "Width: missing (0 mm)"]
        );

        let result = validate_dimension(&Dimension::new(10.0, f64::NAN).with_depth(-1.0));
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn test_glass_warnings() {
        let clean = validate_glass_spec(&GlassSpec::new(GlassType::Tempered, 6, GlassColor::Clear));
        assert!(clean.passed);
        assert!(clean.warnings.is_empty());

        let spec = GlassSpec::new(GlassType::Tempered, 19, GlassColor::Clear)
            .with_finishing(Finishing::Sandblasting);
        let result = validate_glass_spec(&spec);
        assert!(result.passed);
        assert_eq!(result.warnings.len(), 2);
        assert!(result.warnings[0].contains("no price table entry"));
        assert!(result.warnings[1].contains("sandblasting"));

        let odd = validate_glass_spec(&GlassSpec::new(GlassType::Plain, 7, GlassColor::Clear));
        assert_eq!(odd.warnings.len(), 2);
    }

    #[test]
    fn test_frame_validation() {
        let ok = FrameSpec::new(FrameSystem::Sliding, "Line 25", FrameColor::White, 5.4);
        assert!(validate_frame_spec(&ok).warnings.is_empty());

        let fallback = FrameSpec::new(FrameSystem::Sliding, "Line 25", FrameColor::WoodGrain, 0.0);
        let result = validate_frame_spec(&fallback);
        assert!(!result.passed);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_hardware_validation() {
        assert!(validate_hardware_spec(&HardwareSpec::new("lock", 1, 80.0)).passed);
        assert!(!validate_hardware_spec(&HardwareSpec::new("lock", 1, -80.0)).passed);
        assert_eq!(validate_hardware_spec(&HardwareSpec::new("lock", 0, 80.0)).warnings.len(), 1);
    }
}
