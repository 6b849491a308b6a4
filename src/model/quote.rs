//! Quote - Priced estimate handed to the record store.

use super::{Dimension, NamedOption, ProjectType, QuoteItem};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Quote status. Set by user action, never by the pricing engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum QuoteStatus {
    #[default]
    Draft,
    Sent,
    Pending,
    Approved,
    Declined,
    Expired,
}

impl QuoteStatus {
    /// Approved, declined and expired quotes are closed.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Approved | Self::Declined | Self::Expired)
    }
}

impl NamedOption for QuoteStatus {
    const KIND: &'static str = "quote status";

    fn all() -> &'static [Self] {
        &[
            Self::Draft,
            Self::Sent,
            Self::Pending,
            Self::Approved,
            Self::Declined,
            Self::Expired,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Declined => "declined",
            Self::Expired => "expired",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Draft => &["rascunho"],
            Self::Sent => &["enviado"],
            Self::Approved => &["aprovado"],
            Self::Declined => &["recusado"],
            Self::Expired => &["expirado"],
            Self::Pending => &[],
        }
    }
}

named_option_traits!(QuoteStatus);

/// Aggregated totals of a quote (QuoteTotals).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteTotals {
    /// Sum of glass, frame and hardware items.
    pub materials: f64,
    /// Sum of service items.
    pub labor: f64,
    /// materials + labor.
    pub subtotal: f64,
    /// Losses over subtotal.
    pub losses: f64,
    /// Overhead over subtotal.
    pub overhead: f64,
    /// subtotal + losses + overhead.
    pub cost_total: f64,
    /// Profit over cost total.
    pub profit: f64,
    /// cost_total + profit.
    pub grand_total: f64,
}

/// Complete quote record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Quote number, `YYYYMMNNNN`.
    pub number: String,
    /// Customer name or reference.
    pub customer: String,
    /// Project name.
    pub project_name: String,
    /// Project type.
    pub project_type: ProjectType,
    /// Issue date.
    pub date: NaiveDate,
    /// Last valid day.
    pub valid_until: NaiveDate,
    /// Status.
    pub status: QuoteStatus,
    /// Salesperson.
    #[serde(default)]
    pub salesperson: String,
    /// Measured opening.
    pub dimension: Dimension,
    /// Line items.
    pub items: Vec<QuoteItem>,
    /// Totals at the time of issue.
    pub totals: QuoteTotals,
    /// Free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Quote {
    /// Number of items in a category.
    pub fn count_items(&self, category: super::ItemCategory) -> usize {
        self.items.iter().filter(|i| i.category == category).count()
    }
}
