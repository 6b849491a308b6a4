//! Glass specification: type, thickness, color and finishing.

use super::NamedOption;
use serde::{Deserialize, Serialize};

/// Thicknesses (mm) the shop stocks. Only some have price entries.
pub const STANDARD_THICKNESSES: [u8; 8] = [4, 5, 6, 8, 10, 12, 15, 19];

/// Glass type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum GlassType {
    #[default]
    Tempered,
    Laminated,
    Plain,
    Wired,
}

impl NamedOption for GlassType {
    const KIND: &'static str = "glass type";

    fn all() -> &'static [Self] {
        &[Self::Tempered, Self::Laminated, Self::Plain, Self::Wired]
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Tempered => "tempered",
            Self::Laminated => "laminated",
            Self::Plain => "plain",
            Self::Wired => "wired",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Tempered => &["temperado"],
            Self::Laminated => &["laminado"],
            Self::Plain => &["comum"],
            Self::Wired => &["aramado"],
        }
    }
}

/// Glass color or decorative surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum GlassColor {
    #[default]
    Clear,
    Smoke,
    Green,
    Bronze,
    Reflective,
    Frosted,
    Etched,
    ScreenPrinted,
}

impl NamedOption for GlassColor {
    const KIND: &'static str = "glass color";

    fn all() -> &'static [Self] {
        &[
            Self::Clear,
            Self::Smoke,
            Self::Green,
            Self::Bronze,
            Self::Reflective,
            Self::Frosted,
            Self::Etched,
            Self::ScreenPrinted,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Smoke => "smoke",
            Self::Green => "green",
            Self::Bronze => "bronze",
            Self::Reflective => "reflective",
            Self::Frosted => "frosted",
            Self::Etched => "etched",
            Self::ScreenPrinted => "screen-printed",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Clear => &["incolor"],
            Self::Smoke => &["fume"],
            Self::Green => &["verde"],
            Self::Reflective => &["refletivo"],
            Self::Frosted => &["fosco"],
            Self::ScreenPrinted => &["serigrafado"],
            Self::Bronze | Self::Etched => &[],
        }
    }
}

/// Finishing operation on a glass piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Finishing {
    Polishing,
    Drilling,
    Cutouts,
    Beveling,
    Sandblasting,
}

impl NamedOption for Finishing {
    const KIND: &'static str = "finishing";

    fn all() -> &'static [Self] {
        &[
            Self::Polishing,
            Self::Drilling,
            Self::Cutouts,
            Self::Beveling,
            Self::Sandblasting,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Polishing => "polishing",
            Self::Drilling => "drilling",
            Self::Cutouts => "cutouts",
            Self::Beveling => "beveling",
            Self::Sandblasting => "sandblasting",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Polishing => &["lapidacao"],
            Self::Drilling => &["furos"],
            Self::Cutouts => &["recortes"],
            Self::Beveling => &["bisote"],
            Self::Sandblasting => &["jateamento"],
        }
    }
}

named_option_traits!(GlassType, GlassColor, Finishing);

/// Glass piece specification (GlassSpec).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlassSpec {
    /// Glass type.
    #[serde(rename = "type")]
    pub glass_type: GlassType,
    /// Nominal thickness in mm.
    pub thickness_mm: u8,
    /// Color.
    pub color: GlassColor,
    /// Finishing operations; repeated entries are priced repeatedly.
    #[serde(default)]
    pub finishing: Vec<Finishing>,
}

impl Default for GlassSpec {
    fn default() -> Self {
        Self {
            glass_type: GlassType::Tempered,
            thickness_mm: 6,
            color: GlassColor::Clear,
            finishing: Vec::new(),
        }
    }
}

impl GlassSpec {
    /// Create a glass spec without finishing.
    pub fn new(glass_type: GlassType, thickness_mm: u8, color: GlassColor) -> Self {
        Self {
            glass_type,
            thickness_mm,
            color,
            finishing: Vec::new(),
        }
    }

    /// Add a finishing operation.
    pub fn with_finishing(mut self, finishing: Finishing) -> Self {
        self.finishing.push(finishing);
        self
    }

    /// Check whether the thickness is one the shop stocks.
    pub fn is_standard_thickness(&self) -> bool {
        STANDARD_THICKNESSES.contains(&self.thickness_mm)
    }

    /// Short label, e.g. "tempered 6mm clear".
    pub fn label(&self) -> String {
        format!("{} {}mm {}", self.glass_type, self.thickness_mm, self.color)
    }
}
