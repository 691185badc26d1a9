use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

/// An order as received on the wire
///
/// Every field is optional so that a missing or `null` field surfaces as a
/// validation failure rather than a decode failure. Prices and quantities are
/// paired by position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    /// Unit price of each line item
    pub prices: Option<Vec<f64>>,
    /// Quantity of each line item
    pub quantities: Option<Vec<u64>>,
    /// Tax jurisdiction code
    #[schema(example = "FR")]
    pub country: Option<String>,
    /// Reduction category name
    #[schema(example = "STANDARD")]
    pub reduction: Option<String>,
}

impl Order {
    /// Parse into a [`ValidatedOrder`], keeping the field-level errors on failure
    pub fn into_validated(self) -> Result<ValidatedOrder, ValidationErrors> {
        self.validate()?;
        // every field is present once validate() has passed
        Ok(ValidatedOrder {
            prices: self.prices.unwrap_or_default(),
            quantities: self.quantities.unwrap_or_default(),
            country: self.country.unwrap_or_default(),
            reduction: self.reduction.unwrap_or_default(),
        })
    }
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

impl Validate for Order {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.prices.as_ref().map_or(true, |prices| prices.is_empty()) {
            errors.add(
                "prices",
                field_error("required", "Order must contain at least one price"),
            );
        }

        if self
            .quantities
            .as_ref()
            .map_or(true, |quantities| quantities.is_empty())
        {
            errors.add(
                "quantities",
                field_error("required", "Order must contain at least one quantity"),
            );
        }

        if let (Some(prices), Some(quantities)) = (&self.prices, &self.quantities) {
            if prices.len() != quantities.len() {
                errors.add(
                    "__all__",
                    field_error(
                        "length_mismatch",
                        "Prices and quantities must have the same length",
                    ),
                );
            }
        }

        let country_len = self.country.as_deref().map(|c| c.chars().count());
        if !matches!(country_len, Some(1..=2)) {
            errors.add(
                "country",
                field_error("length", "Country must be 1 or 2 characters long"),
            );
        }

        if self.reduction.as_deref().map_or(true, str::is_empty) {
            errors.add(
                "reduction",
                field_error("required", "Reduction must not be empty"),
            );
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// An order that passed validation
///
/// Only obtainable through [`Order::into_validated`], so prices and quantities
/// are non-empty and of equal length, the country is 1-2 characters and the
/// reduction is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedOrder {
    prices: Vec<f64>,
    quantities: Vec<u64>,
    country: String,
    reduction: String,
}

impl ValidatedOrder {
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn quantities(&self) -> &[u64] {
        &self.quantities
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn reduction(&self) -> &str {
        &self.reduction
    }

    /// Line items as (price, quantity) pairs
    pub fn line_items(&self) -> impl Iterator<Item = (f64, u64)> + '_ {
        self.prices
            .iter()
            .copied()
            .zip(self.quantities.iter().copied())
    }
}

impl TryFrom<Order> for ValidatedOrder {
    type Error = ValidationErrors;

    fn try_from(order: Order) -> Result<Self, Self::Error> {
        order.into_validated()
    }
}

/// Amount payable for an order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Quote {
    #[schema(example = 1.2)]
    pub total: f64,
}

/// Feedback sent back by the order issuer
///
/// The endpoint accepts any payload; this is the shape it usually has.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct FeedbackMessage {
    #[serde(rename = "type")]
    #[schema(example = "ERROR")]
    pub kind: Option<String>,
    #[schema(example = "The field \"total\" in the response is missing.")]
    pub content: Option<String>,
}
