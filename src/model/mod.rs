//! Data model types for quote pricing.

/// `Display`, `FromStr` and `TryFrom<String>` for [`NamedOption`] enums.
///
/// Enums deserialize through `TryFrom<String>` (`#[serde(try_from = "String")]`),
/// so serde and the CLI share one list of names and aliases.
macro_rules! named_option_traits {
    ($($ty:ty),*) => {$(
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.pad($crate::model::NamedOption::name(self))
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::error::QuoteError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $crate::model::parse_named(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = $crate::error::QuoteError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                $crate::model::parse_named(&value)
            }
        }
    )*};
}

mod dimension;
mod frame;
mod glass;
mod hardware;
mod item;
mod project;
mod quote;

pub use dimension::Dimension;
pub use frame::{FrameColor, FrameSpec, FrameSystem};
pub use glass::{Finishing, GlassColor, GlassSpec, GlassType, STANDARD_THICKNESSES};
pub use hardware::HardwareSpec;
pub use item::{ItemCategory, ItemSpec, QuoteItem};
pub use project::ProjectType;
pub use quote::{Quote, QuoteStatus, QuoteTotals};

use crate::error::{QuoteError, Result};

/// Option enums that parse from their kebab-case name or a legacy alias.
pub(crate) trait NamedOption: Copy + 'static {
    /// Human-readable kind used in error messages.
    const KIND: &'static str;

    /// Every variant, in declaration order.
    fn all() -> &'static [Self];

    /// Canonical kebab-case name.
    fn name(&self) -> &'static str;

    /// Accepted alternate spellings (already normalized).
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }
}

/// Normalize user input: trim, lowercase, `_`/space to `-`.
fn normalize_option(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c == ' ' { '-' } else { c })
        .collect()
}

/// Parse a named option, accepting canonical names and aliases.
pub(crate) fn parse_named<T: NamedOption>(value: &str) -> Result<T> {
    let key = normalize_option(value);
    T::all()
        .iter()
        .copied()
        .find(|opt| opt.name() == key || opt.aliases().contains(&key.as_str()))
        .ok_or_else(|| QuoteError::UnknownOption {
            kind: T::KIND,
            value: value.to_string(),
        })
}
