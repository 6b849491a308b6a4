//! Frame (window/door profile) specification.

use super::NamedOption;
use serde::{Deserialize, Serialize};

/// Opening system of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum FrameSystem {
    #[default]
    Sliding,
    TiltTurn,
    Pivot,
    Awning,
    Hinged,
    Folding,
}

impl NamedOption for FrameSystem {
    const KIND: &'static str = "frame system";

    fn all() -> &'static [Self] {
        &[
            Self::Sliding,
            Self::TiltTurn,
            Self::Pivot,
            Self::Awning,
            Self::Hinged,
            Self::Folding,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Sliding => "sliding",
            Self::TiltTurn => "tilt-turn",
            Self::Pivot => "pivot",
            Self::Awning => "awning",
            Self::Hinged => "hinged",
            Self::Folding => "folding",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Sliding => &["correr"],
            Self::TiltTurn => &["maximar"],
            Self::Pivot => &["pivotante"],
            Self::Awning => &["basculante"],
            Self::Hinged => &["abrir"],
            Self::Folding => &["rebativel"],
        }
    }
}

/// Profile finish color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum FrameColor {
    #[default]
    White,
    Black,
    Anodized,
    WoodGrain,
}

impl NamedOption for FrameColor {
    const KIND: &'static str = "frame color";

    fn all() -> &'static [Self] {
        &[Self::White, Self::Black, Self::Anodized, Self::WoodGrain]
    }

    fn name(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
            Self::Anodized => "anodized",
            Self::WoodGrain => "wood-grain",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::White => &["branco"],
            Self::Black => &["preto"],
            Self::Anodized => &["anodizado"],
            Self::WoodGrain => &["madeirado"],
        }
    }
}

named_option_traits!(FrameSystem, FrameColor);

/// Frame specification (FrameSpec).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSpec {
    /// Opening system.
    pub system: FrameSystem,
    /// Profile line name as entered, e.g. "Line 25".
    pub profile_line: String,
    /// Profile color.
    pub color: FrameColor,
    /// Linear meters of perimeter to frame.
    #[serde(default)]
    pub linear_meters: f64,
}

impl FrameSpec {
    /// Create a frame spec.
    pub fn new(
        system: FrameSystem,
        profile_line: impl Into<String>,
        color: FrameColor,
        linear_meters: f64,
    ) -> Self {
        Self {
            system,
            profile_line: profile_line.into(),
            color,
            linear_meters,
        }
    }

    /// Short label, e.g. "sliding Line 25 white".
    pub fn label(&self) -> String {
        format!("{} {} {}", self.system, self.profile_line, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("Tilt Turn".parse::<FrameSystem>().unwrap(), FrameSystem::TiltTurn);
        assert_eq!("correr".parse::<FrameSystem>().unwrap(), FrameSystem::Sliding);
        assert_eq!("wood_grain".parse::<FrameColor>().unwrap(), FrameColor::WoodGrain);
        assert!("chrome".parse::<FrameColor>().is_err());
    }

    #[test]
    fn test_label() {
        let spec = FrameSpec::new(FrameSystem::Sliding, "Line 25", FrameColor::White, 5.4);
        assert_eq!(spec.label(), "sliding Line 25 white");
    }
}
