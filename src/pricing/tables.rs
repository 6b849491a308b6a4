//! Static unit price tables.
//!
//! Coverage is intentionally partial. Lookups return `None` on a miss and the
//! `*_or_default` wrappers substitute the fallback unit price.

use crate::config::{FRAME_FALLBACK_PRICE, GLASS_FALLBACK_PRICE};
use crate::model::{FrameColor, GlassColor, GlassType};

/// Glass price per m² for a type/thickness/color combination.
pub fn glass_unit_price(glass_type: GlassType, thickness_mm: u8, color: GlassColor) -> Option<f64> {
    use GlassType::*;

    // Columns: clear, smoke, green, bronze
    let row: [f64; 4] = match (glass_type, thickness_mm) {
        (Tempered, 4) => [45.0, 50.0, 55.0, 55.0],
        (Tempered, 6) => [55.0, 60.0, 65.0, 65.0],
        (Tempered, 8) => [70.0, 75.0, 80.0, 80.0],
        (Tempered, 10) => [85.0, 90.0, 95.0, 95.0],
        (Tempered, 12) => [105.0, 110.0, 115.0, 115.0],
        (Laminated, 6) => [75.0, 85.0, 90.0, 90.0],
        (Laminated, 8) => [95.0, 105.0, 110.0, 110.0],
        (Laminated, 10) => [120.0, 130.0, 135.0, 135.0],
        (Plain, 4) => [25.0, 30.0, 35.0, 35.0],
        (Plain, 6) => [35.0, 40.0, 45.0, 45.0],
        _ => return None,
    };

    let column = match color {
        GlassColor::Clear => 0,
        GlassColor::Smoke => 1,
        GlassColor::Green => 2,
        GlassColor::Bronze => 3,
        _ => return None,
    };

    Some(row[column])
}

/// Glass price per m², or the fallback price when the table has no entry.
pub fn glass_price_or_default(glass_type: GlassType, thickness_mm: u8, color: GlassColor) -> f64 {
    glass_unit_price(glass_type, thickness_mm, color).unwrap_or_else(|| {
        tracing::debug!(
            "No glass price for {} {}mm {}, using fallback {}",
            glass_type,
            thickness_mm,
            color,
            GLASS_FALLBACK_PRICE
        );
        GLASS_FALLBACK_PRICE
    })
}

/// Normalize a profile line name to its table key ("Line 25" -> "line_25").
///
/// The legacy "Linha 25" spelling maps to the same key.
pub fn normalize_profile_line(line: &str) -> String {
    let key = line.trim().to_lowercase().replace(' ', "_");
    match key.strip_prefix("linha_") {
        Some(rest) => format!("line_{}", rest),
        None => key,
    }
}

/// Profile price per linear meter for a normalized line key and color.
pub fn frame_unit_price(line_key: &str, color: FrameColor) -> Option<f64> {
    // Columns: white, black, anodized
    let row: [f64; 3] = match line_key {
        "line_25" => [15.0, 18.0, 20.0],
        "line_30" => [18.0, 22.0, 25.0],
        "line_40" => [25.0, 30.0, 35.0],
        "line_50" => [35.0, 42.0, 48.0],
        _ => return None,
    };

    let column = match color {
        FrameColor::White => 0,
        FrameColor::Black => 1,
        FrameColor::Anodized => 2,
        FrameColor::WoodGrain => return None,
    };

    Some(row[column])
}

/// Profile price per linear meter, or the fallback price when missing.
pub fn frame_price_or_default(profile_line: &str, color: FrameColor) -> f64 {
    let key = normalize_profile_line(profile_line);
    frame_unit_price(&key, color).unwrap_or_else(|| {
        tracing::debug!(
            "No profile price for {} {}, using fallback {}",
            key,
            color,
            FRAME_FALLBACK_PRICE
        );
        FRAME_FALLBACK_PRICE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glass_table_hits() {
        assert_eq!(glass_unit_price(GlassType::Tempered, 6, GlassColor::Clear), Some(55.0));
        assert_eq!(glass_unit_price(GlassType::Tempered, 12, GlassColor::Bronze), Some(115.0));
        assert_eq!(glass_unit_price(GlassType::Laminated, 10, GlassColor::Smoke), Some(130.0));
        assert_eq!(glass_unit_price(GlassType::Plain, 4, GlassColor::Green), Some(35.0));
    }

    #[test]
    fn test_glass_table_misses_fall_back() {
        // Unknown thickness, uncovered type, uncovered color
        assert_eq!(glass_unit_price(GlassType::Tempered, 19, GlassColor::Clear), None);
        assert_eq!(glass_unit_price(GlassType::Laminated, 4, GlassColor::Clear), None);
        assert_eq!(glass_unit_price(GlassType::Wired, 6, GlassColor::Clear), None);
        assert_eq!(glass_unit_price(GlassType::Tempered, 6, GlassColor::Frosted), None);

        assert_eq!(glass_price_or_default(GlassType::Plain, 8, GlassColor::Clear), 50.0);
        assert_eq!(glass_price_or_default(GlassType::Tempered, 8, GlassColor::Smoke), 75.0);
    }

    #[test]
    fn test_normalize_profile_line() {
        assert_eq!(normalize_profile_line("Line 25"), "line_25");
        assert_eq!(normalize_profile_line("Linha 30"), "line_30");
        assert_eq!(normalize_profile_line(" LINE 50 "), "line_50");
        assert_eq!(normalize_profile_line("line_40"), "line_40");
    }

    #[test]
    fn test_frame_table() {
        assert_eq!(frame_unit_price("line_25", FrameColor::White), Some(15.0));
        assert_eq!(frame_unit_price("line_50", FrameColor::Anodized), Some(48.0));
        assert_eq!(frame_unit_price("line_25", FrameColor::WoodGrain), None);
        assert_eq!(frame_unit_price("line_60", FrameColor::White), None);

        assert_eq!(frame_price_or_default("Line 40", FrameColor::Black), 30.0);
        assert_eq!(frame_price_or_default("Line 40", FrameColor::WoodGrain), 20.0);
        assert_eq!(frame_price_or_default("Series X", FrameColor::White), 20.0);
    }
}
