// Reduction policies
//
// Resolves the discount rate applied to the taxed amount of an order.

use std::fmt;
use std::str::FromStr;

/// Standard reduction tiers as (inclusive lower bound, rate), highest first
const STANDARD_TIERS: [(f64, f64); 5] = [
    (50000.0, 0.15),
    (10000.0, 0.10),
    (7000.0, 0.07),
    (5000.0, 0.05),
    (1000.0, 0.03),
];

/// Recognized reduction categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reduction {
    /// Amount-tiered discount
    Standard,
    /// Flat 50%
    HalfPrice,
    /// No discount
    PayThePrice,
}

/// Returned when a reduction name is not one of the recognized categories
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognized reduction: {0}")]
pub struct UnknownReduction(pub String);

impl Reduction {
    /// Every recognized category
    pub const ALL: [Reduction; 3] = [
        Reduction::Standard,
        Reduction::HalfPrice,
        Reduction::PayThePrice,
    ];

    /// Name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Reduction::Standard => "STANDARD",
            Reduction::HalfPrice => "HALF PRICE",
            Reduction::PayThePrice => "PAY THE PRICE",
        }
    }

    /// Discount rate for an amount that already includes tax
    pub fn rate_for(&self, amount: f64) -> f64 {
        match self {
            Reduction::Standard => standard_rate(amount),
            Reduction::HalfPrice => 0.50,
            Reduction::PayThePrice => 0.00,
        }
    }
}

impl FromStr for Reduction {
    type Err = UnknownReduction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STANDARD" => Ok(Reduction::Standard),
            "HALF PRICE" | "HALF_PRICE" => Ok(Reduction::HalfPrice),
            "PAY THE PRICE" | "PAY_THE_PRICE" => Ok(Reduction::PayThePrice),
            other => Err(UnknownReduction(other.to_string())),
        }
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn standard_rate(amount: f64) -> f64 {
    STANDARD_TIERS
        .iter()
        .find(|(lower_bound, _)| amount >= *lower_bound)
        .map(|&(_, rate)| rate)
        .unwrap_or(0.00)
}

/// Discount rate for a named category
///
/// Unrecognized names get no discount. Whether such an order is quoted at all
/// is decided by the processability check, not here.
pub fn reduction_rate(amount: f64, category: &str) -> f64 {
    category
        .parse::<Reduction>()
        .map(|reduction| reduction.rate_for(amount))
        .unwrap_or(0.00)
}
