// Pricing Engine
//
// Validates orders, decides whether they can be quoted, and computes the amount
// payable: line-item sum, then country tax, then reduction on the taxed amount.

use std::sync::Arc;

use tracing::debug;
use validator::Validate;

use crate::orders::{Order, Quote, ValidatedOrder};
use crate::pricing::{
    reduction::{reduction_rate, Reduction},
    tax::TaxRegistry,
};

/// Every intermediate value of a quote computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuoteBreakdown {
    pub pre_tax: f64,
    pub tax_rate: f64,
    pub taxed: f64,
    pub reduction_rate: f64,
    pub total: f64,
}

/// Pricing Engine
///
/// Stateless apart from the tax registry it reads; cheap to clone and safe
/// to share across requests.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    tax_registry: Arc<TaxRegistry>,
}

impl PricingEngine {
    /// Create a new PricingEngine
    pub fn new(tax_registry: Arc<TaxRegistry>) -> Self {
        Self { tax_registry }
    }

    /// Whether the order is well-formed
    ///
    /// An absent order is never valid. An unknown country or reduction name
    /// does not make an order invalid.
    pub fn is_valid(&self, order: Option<&Order>) -> bool {
        order.map_or(false, |order| order.validate().is_ok())
    }

    /// Whether the engine is willing to quote the order
    ///
    /// Valid, with a known country and a recognized reduction.
    pub fn is_processable(&self, order: Option<&Order>) -> bool {
        let Some(order) = order else {
            return false;
        };

        self.is_valid(Some(order))
            && self.can_process(
                order.country.as_deref().unwrap_or_default(),
                order.reduction.as_deref().unwrap_or_default(),
            )
    }

    /// Whether a validated order has a known country and a recognized reduction
    pub fn accepts(&self, order: &ValidatedOrder) -> bool {
        self.can_process(order.country(), order.reduction())
    }

    fn can_process(&self, country: &str, reduction: &str) -> bool {
        self.tax_registry.is_defined(country) && reduction.parse::<Reduction>().is_ok()
    }

    /// Tax rate for `country` at the pre-tax `amount`
    pub fn tax_rate(&self, country: &str, amount: f64) -> f64 {
        self.tax_registry.rate_for(country, amount)
    }

    /// Reduction rate for `category` at the taxed `amount`
    pub fn reduction_rate(&self, amount: f64, category: &str) -> f64 {
        reduction_rate(amount, category)
    }

    /// Sum of price * quantity over every line item
    pub fn amount_before_tax(&self, order: &ValidatedOrder) -> f64 {
        order
            .line_items()
            .fold(0.0, |amount, (price, quantity)| amount + price * quantity as f64)
    }

    /// Pre-tax amount with the country's tax applied
    pub fn amount_with_tax(&self, order: &ValidatedOrder) -> f64 {
        let pre_tax = self.amount_before_tax(order);
        pre_tax * (1.0 + self.tax_rate(order.country(), pre_tax))
    }

    /// Compute the full quote, keeping the intermediate values
    ///
    /// Tax is resolved on the pre-tax sum; the reduction tier is resolved on
    /// the taxed amount. No rounding is applied.
    pub fn breakdown(&self, order: &ValidatedOrder) -> QuoteBreakdown {
        let pre_tax = self.amount_before_tax(order);
        let tax_rate = self.tax_rate(order.country(), pre_tax);
        let taxed = pre_tax * (1.0 + tax_rate);
        let reduction_rate = self.reduction_rate(taxed, order.reduction());
        let total = taxed * (1.0 - reduction_rate);

        QuoteBreakdown {
            pre_tax,
            tax_rate,
            taxed,
            reduction_rate,
            total,
        }
    }

    /// Amount payable for a validated order
    pub fn quote(&self, order: &ValidatedOrder) -> Quote {
        let breakdown = self.breakdown(order);
        debug!(
            pre_tax = breakdown.pre_tax,
            tax_rate = breakdown.tax_rate,
            taxed = breakdown.taxed,
            reduction_rate = breakdown.reduction_rate,
            "Quote computed"
        );

        Quote {
            total: breakdown.total,
        }
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(Arc::new(TaxRegistry::default()))
    }
}
