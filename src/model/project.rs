//! ProjectType - Kind of glazing job being quoted.

use super::NamedOption;
use serde::{Deserialize, Serialize};

/// Project type. Only a few types have a quick-estimate formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum ProjectType {
    SlidingWindow,
    TiltTurnWindow,
    AwningWindow,
    HingedWindow,
    PivotDoor,
    SlidingDoor,
    HingedDoor,
    FrontShowerBox,
    SideShowerBox,
    NicheShowerBox,
    DecorativeMirror,
    BathroomMirror,
    RoofCover,
    BalconyCover,
    CurtainWallFacade,
    StructuralFacade,
    #[default]
    Other,
}

impl NamedOption for ProjectType {
    const KIND: &'static str = "project type";

    fn all() -> &'static [Self] {
        &[
            Self::SlidingWindow,
            Self::TiltTurnWindow,
            Self::AwningWindow,
            Self::HingedWindow,
            Self::PivotDoor,
            Self::SlidingDoor,
            Self::HingedDoor,
            Self::FrontShowerBox,
            Self::SideShowerBox,
            Self::NicheShowerBox,
            Self::DecorativeMirror,
            Self::BathroomMirror,
            Self::RoofCover,
            Self::BalconyCover,
            Self::CurtainWallFacade,
            Self::StructuralFacade,
            Self::Other,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            Self::SlidingWindow => "sliding-window",
            Self::TiltTurnWindow => "tilt-turn-window",
            Self::AwningWindow => "awning-window",
            Self::HingedWindow => "hinged-window",
            Self::PivotDoor => "pivot-door",
            Self::SlidingDoor => "sliding-door",
            Self::HingedDoor => "hinged-door",
            Self::FrontShowerBox => "front-shower-box",
            Self::SideShowerBox => "side-shower-box",
            Self::NicheShowerBox => "niche-shower-box",
            Self::DecorativeMirror => "decorative-mirror",
            Self::BathroomMirror => "bathroom-mirror",
            Self::RoofCover => "roof-cover",
            Self::BalconyCover => "balcony-cover",
            Self::CurtainWallFacade => "curtain-wall-facade",
            Self::StructuralFacade => "structural-facade",
            Self::Other => "other",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::SlidingWindow => &["janela-correr"],
            Self::TiltTurnWindow => &["janela-maximar"],
            Self::AwningWindow => &["janela-basculante"],
            Self::HingedWindow => &["janela-abrir"],
            Self::PivotDoor => &["porta-pivotante"],
            Self::SlidingDoor => &["porta-correr"],
            Self::HingedDoor => &["porta-abrir"],
            Self::FrontShowerBox => &["box-frontal"],
            Self::SideShowerBox => &["box-lateral"],
            Self::NicheShowerBox => &["box-nicho"],
            Self::DecorativeMirror => &["espelho-decorativo"],
            Self::BathroomMirror => &["espelho-banheiro"],
            Self::RoofCover => &["cobertura-telhado"],
            Self::BalconyCover => &["cobertura-sacada"],
            Self::CurtainWallFacade => &["fachada-curtain"],
            Self::StructuralFacade => &["fachada-estrutural"],
            Self::Other => &["outros"],
        }
    }
}

named_option_traits!(ProjectType);
