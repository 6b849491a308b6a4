//! QuoteDraft - In-progress quote owning the mutable item list.

use crate::config::PricingConfig;
use crate::error::{QuoteError, Result};
use crate::model::{
    Dimension, FrameColor, FrameSpec, FrameSystem, GlassSpec, HardwareSpec, ItemCategory,
    ItemSpec, ProjectType, Quote, QuoteItem, QuoteStatus, QuoteTotals,
};
use crate::pricing::{
    aggregate_with, calculate_frame_cost, calculate_glass_cost, calculate_hardware_cost,
    calculate_installation_cost,
};
use chrono::{Days, NaiveDate};
use tracing::debug;

/// Steps included in the installation service.
const INSTALLATION_INCLUDES: [&str; 4] = ["measurement", "installation", "sealing", "cleaning"];

/// Header data supplied when a draft is finalized.
#[derive(Debug, Clone, Default)]
pub struct QuoteHeader {
    pub number: String,
    pub customer: String,
    pub project_name: String,
    pub project_type: ProjectType,
    pub salesperson: String,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

/// In-progress quote: current dimensions plus the items added so far.
#[derive(Debug, Clone)]
pub struct QuoteDraft {
    dimension: Dimension,
    config: PricingConfig,
    items: Vec<QuoteItem>,
    next_id: u32,
}

impl QuoteDraft {
    /// Create an empty draft with the default pricing configuration.
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            config: PricingConfig::default(),
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Create an empty draft with an explicit pricing configuration.
    ///
    /// Markup rates must be finite and non-negative.
    pub fn with_config(dimension: Dimension, config: PricingConfig) -> Result<Self> {
        let markup = &config.markup;
        check_amount("markup.losses", markup.losses)?;
        check_amount("markup.overhead", markup.overhead)?;
        check_amount("markup.profit", markup.profit)?;

        Ok(Self {
            dimension,
            config,
            items: Vec::new(),
            next_id: 1,
        })
    }

    pub fn items(&self) -> &[QuoteItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn require_dimension(&self) -> Result<()> {
        if self.dimension.is_priceable() {
            Ok(())
        } else {
            Err(QuoteError::InvalidDimensions {
                height: self.dimension.height_mm,
                width: self.dimension.width_mm,
            })
        }
    }

    fn push(&mut self, item: QuoteItem) -> &QuoteItem {
        debug!(
            "Added {} item #{}: {} = {:.2}",
            item.category, item.id, item.description, item.total_price
        );
        self.next_id += 1;
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    /// Add a glass piece covering the current opening.
    pub fn add_glass_item(&mut self, spec: GlassSpec) -> Result<&QuoteItem> {
        self.require_dimension()?;

        let cost = calculate_glass_cost(&spec, self.dimension.area());
        let description = format!("Glass {} {}", spec.label(), self.dimension);
        let item = QuoteItem::new(
            self.next_id,
            ItemCategory::Glass,
            description,
            1.0,
            "pc",
            cost.total_price,
        )
        .with_spec(ItemSpec::Glass {
            spec,
            dimension: self.dimension,
            cost,
        });

        Ok(self.push(item))
    }

    /// Add a frame around the current opening's perimeter.
    pub fn add_frame_item(
        &mut self,
        system: FrameSystem,
        profile_line: &str,
        color: FrameColor,
    ) -> Result<&QuoteItem> {
        self.require_dimension()?;

        let spec = FrameSpec::new(system, profile_line, color, self.dimension.perimeter());
        let cost = calculate_frame_cost(&spec);
        let description = format!("Frame {} - {}", spec.label(), self.dimension);
        let item = QuoteItem::new(
            self.next_id,
            ItemCategory::Frame,
            description,
            1.0,
            "set",
            cost.total_price,
        )
        .with_spec(ItemSpec::Frame { spec, cost });

        Ok(self.push(item))
    }

    /// Add a hardware line at the caller's unit price.
    pub fn add_hardware_item(&mut self, spec: HardwareSpec) -> Result<&QuoteItem> {
        check_amount("unit_price", spec.unit_price)?;

        let cost = calculate_hardware_cost(spec.quantity, spec.unit_price);
        let item = QuoteItem::new(
            self.next_id,
            ItemCategory::Hardware,
            format!("Hardware {}", spec.label()),
            f64::from(cost.quantity),
            "pc",
            cost.unit_price,
        )
        .with_spec(ItemSpec::Hardware { spec });

        Ok(self.push(item))
    }

    /// Add the installation service for the current opening.
    pub fn add_installation_item(&mut self) -> Result<&QuoteItem> {
        self.require_dimension()?;

        let area_m2 = self.dimension.area();
        let price = calculate_installation_cost(area_m2);
        let item = QuoteItem::new(
            self.next_id,
            ItemCategory::Service,
            format!("Installation including {}", INSTALLATION_INCLUDES.join(", ")),
            1.0,
            "service",
            price,
        )
        .with_spec(ItemSpec::Installation {
            area_m2,
            includes: INSTALLATION_INCLUDES.iter().map(|s| s.to_string()).collect(),
        });

        Ok(self.push(item))
    }

    /// Add a hand-entered item.
    pub fn add_manual_item(
        &mut self,
        category: ItemCategory,
        description: &str,
        quantity: f64,
        unit: &str,
        unit_price: f64,
    ) -> Result<&QuoteItem> {
        check_amount("quantity", quantity)?;
        check_amount("unit_price", unit_price)?;

        let item = QuoteItem::new(self.next_id, category, description, quantity, unit, unit_price);
        Ok(self.push(item))
    }

    /// Remove the item at `index`.
    pub fn remove_item(&mut self, index: usize) -> Result<QuoteItem> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    /// Edit the quantity of the item at `index`; the total is recomputed.
    ///
    /// The item's `spec` keeps the values it was generated with.
    pub fn update_item_quantity(&mut self, index: usize, quantity: f64) -> Result<&QuoteItem> {
        self.check_index(index)?;
        check_amount("quantity", quantity)?;
        self.items[index].set_quantity(quantity);
        Ok(&self.items[index])
    }

    /// Edit the unit price of the item at `index`; the total is recomputed.
    ///
    /// The item's `spec` keeps the values it was generated with.
    pub fn update_item_price(&mut self, index: usize, unit_price: f64) -> Result<&QuoteItem> {
        self.check_index(index)?;
        check_amount("unit_price", unit_price)?;
        self.items[index].set_unit_price(unit_price);
        Ok(&self.items[index])
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(QuoteError::ItemNotFound {
                index,
                len: self.items.len(),
            })
        }
    }

    /// Current totals with the draft's markup stack.
    pub fn totals(&self) -> QuoteTotals {
        aggregate_with(&self.items, &self.config.markup)
    }

    /// Freeze the draft into a quote record.
    pub fn finalize(&self, header: QuoteHeader) -> Result<Quote> {
        if self.items.is_empty() {
            return Err(QuoteError::NoItems);
        }

        let validity_days = self.config.validity_days;
        let valid_until = header
            .date
            .checked_add_days(Days::new(u64::from(validity_days)))
            .ok_or(QuoteError::InvalidValue {
                field: "validity_days".to_string(),
                value: f64::from(validity_days),
            })?;

        Ok(Quote {
            number: header.number,
            customer: header.customer,
            project_name: header.project_name,
            project_type: header.project_type,
            date: header.date,
            valid_until,
            status: QuoteStatus::Draft,
            salesperson: header.salesperson,
            dimension: self.dimension,
            items: self.items.clone(),
            totals: self.totals(),
            notes: header.notes,
        })
    }
}

/// Quantities and prices may be zero but must be finite and non-negative.
fn check_amount(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(QuoteError::InvalidValue {
            field: field.to_string(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;
    use crate::config::MarkupRates;
    use crate::model::{GlassColor, GlassType};

    fn draft() -> QuoteDraft {
        QuoteDraft::new(Dimension::new(1200.0, 1500.0))
    }

    #[test]
    fn test_add_glass_item() {
        let mut draft = draft();
        let item = draft
            .add_glass_item(GlassSpec::new(GlassType::Tempered, 6, GlassColor::Clear))
            .unwrap();

        assert_eq!(item.id, 1);
        assert_eq!(item.category, ItemCategory::Glass);
        assert!(approx_eq(item.total_price, 1.8271 * 55.0));
        assert_eq!(item.total_price, item.quantity * item.unit_price);
        assert_eq!(item.description, "Glass tempered 6mm clear 1200x1500mm");
    }

    #[test]
    fn test_add_frame_item_uses_perimeter() {
        let mut draft = draft();
        let item = draft
            .add_frame_item(FrameSystem::Sliding, "Line 25", FrameColor::White)
            .unwrap();

        // 5.4m + 15% at 15/m, plus 5.4m labor at 8/m
        assert!(approx_eq(item.total_price, 5.4 * 1.15 * 15.0 + 5.4 * 8.0));
        match &item.spec {
            ItemSpec::Frame { spec, cost } => {
                assert_eq!(spec.linear_meters, 5.4);
                assert_eq!(cost.price_per_meter, 15.0);
            }
            other => panic!("unexpected spec {:?}", other),
        }
    }

    #[test]
    fn test_add_hardware_and_installation() {
        let mut draft = draft();
        let hw = draft
            .add_hardware_item(HardwareSpec::new("rollers", 4, 15.0).with_brand("Acme", "Standard"))
            .unwrap();
        assert_eq!(hw.total_price, 60.0);
        assert_eq!(hw.description, "Hardware rollers Acme Standard");

        let service = draft.add_installation_item().unwrap();
        assert_eq!(service.id, 2);
        assert!(approx_eq(service.total_price, 150.0 + 1.8271 * 50.0));
    }

    #[test]
    fn test_items_require_dimensions() {
        let mut draft = QuoteDraft::new(Dimension::new(1200.0, 0.0));

        let err = draft.add_glass_item(GlassSpec::default()).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidDimensions { .. }));
        assert!(draft
            .add_frame_item(FrameSystem::Sliding, "Line 25", FrameColor::White)
            .is_err());
        assert!(draft.add_installation_item().is_err());

        // Hardware does not depend on the opening
        assert!(draft.add_hardware_item(HardwareSpec::new("lock", 1, 80.0)).is_ok());
        assert_eq!(draft.items().len(), 1);
    }

    #[test]
    fn test_edit_items() {
        let mut draft = draft();
        draft.add_hardware_item(HardwareSpec::new("handle", 2, 30.0)).unwrap();

        let item = draft.update_item_quantity(0, 3.0).unwrap();
        assert_eq!(item.total_price, 90.0);

        let item = draft.update_item_price(0, 25.0).unwrap();
        assert_eq!(item.total_price, 75.0);

        assert!(matches!(
            draft.update_item_price(0, -1.0),
            Err(QuoteError::InvalidValue { .. })
        ));
        assert!(matches!(
            draft.update_item_quantity(5, 1.0),
            Err(QuoteError::ItemNotFound { index: 5, len: 1 })
        ));

        let removed = draft.remove_item(0).unwrap();
        assert_eq!(removed.description, "Hardware handle");
        assert!(draft.is_empty());
        assert!(draft.remove_item(0).is_err());
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let mut draft = draft();
        draft.add_installation_item().unwrap();
        draft.remove_item(0).unwrap();
        let item = draft.add_installation_item().unwrap();
        assert_eq!(item.id, 2);
    }

    #[test]
    fn test_totals_use_configured_markup() {
        let config = PricingConfig::new(MarkupRates::new(0.0, 0.0, 0.0));
        let mut draft = QuoteDraft::with_config(Dimension::new(1000.0, 1000.0), config).unwrap();
        draft
            .add_manual_item(ItemCategory::Service, "Site visit", 1.0, "service", 80.0)
            .unwrap();

        let totals = draft.totals();
        assert_eq!(totals.labor, 80.0);
        assert_eq!(totals.grand_total, 80.0);
    }

    #[test]
    fn test_rejects_invalid_markup() {
        let dimension = Dimension::new(1200.0, 1500.0);

        let negative = PricingConfig::new(MarkupRates::new(0.05, 0.10, -2.0));
        match QuoteDraft::with_config(dimension, negative) {
            Err(QuoteError::InvalidValue { field, value }) => {
                assert_eq!(field, "markup.profit");
                assert_eq!(value, -2.0);
            }
            other => panic!("unexpected result {:?}", other),
        }

        let nan = PricingConfig::new(MarkupRates::new(f64::NAN, 0.10, 0.30));
        assert!(QuoteDraft::with_config(dimension, nan).is_err());
    }

    #[test]
    fn test_edits_keep_generation_spec() {
        let mut draft = draft();
        draft
            .add_hardware_item(HardwareSpec::new("rollers", 2, 15.0))
            .unwrap();

        let item = draft.update_item_quantity(0, 3.0).unwrap();
        assert_eq!(item.total_price, 45.0);
        match &item.spec {
            ItemSpec::Hardware { spec } => {
                assert_eq!(spec.quantity, 2);
                assert_eq!(spec.unit_price, 15.0);
            }
            other => panic!("unexpected spec {:?}", other),
        }
    }

    #[test]
    fn test_finalize_validity_overflow() {
        let config = PricingConfig {
            markup: MarkupRates::default(),
            validity_days: 4_000_000_000,
        };
        let mut draft = QuoteDraft::with_config(Dimension::new(1200.0, 1500.0), config).unwrap();
        draft.add_installation_item().unwrap();

        let header = QuoteHeader {
            date: NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
            ..Default::default()
        };
        assert!(matches!(
            draft.finalize(header),
            Err(QuoteError::InvalidValue { field, .. }) if field == "validity_days"
        ));
    }

    #[test]
    fn test_finalize() {
        let mut draft = draft();
        assert!(matches!(
            draft.finalize(QuoteHeader::default()),
            Err(QuoteError::NoItems)
        ));

        draft.add_installation_item().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let quote = draft
            .finalize(QuoteHeader {
                number: "2024030042".to_string(),
                customer: "Maria Souza".to_string(),
                project_type: ProjectType::SlidingWindow,
                date,
                ..Default::default()
            })
            .unwrap();

        assert_eq!(quote.status, QuoteStatus::Draft);
        assert_eq!(quote.valid_until, NaiveDate::from_ymd_opt(2024, 4, 4).unwrap());
        assert_eq!(quote.items.len(), 1);
        assert_eq!(quote.totals, draft.totals());
    }
}
