// Tax Registry
//
// Maps a country code to the rule that resolves its tax rate for a pre-tax amount.

use std::collections::HashMap;

/// How a jurisdiction's tax rate is resolved
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaxRule {
    /// Same rate whatever the amount
    Flat(f64),

    /// `at_or_below` applies while the pre-tax amount is <= `threshold`, `above` after that
    Threshold {
        threshold: f64,
        at_or_below: f64,
        above: f64,
    },
}

impl TaxRule {
    /// Resolve the rate for a pre-tax amount
    pub fn rate_for(&self, amount: f64) -> f64 {
        match *self {
            TaxRule::Flat(rate) => rate,
            TaxRule::Threshold {
                threshold,
                at_or_below,
                above,
            } => {
                if amount > threshold {
                    above
                } else {
                    at_or_below
                }
            }
        }
    }
}

/// Flat-rate jurisdictions, by country code
const FLAT_RATES: [(&str, f64); 27] = [
    ("DE", 0.20),
    ("FR", 0.20),
    ("IT", 0.25),
    ("ES", 0.19),
    ("PL", 0.21),
    ("RO", 0.20),
    ("NL", 0.20),
    ("BE", 0.24),
    ("EL", 0.20),
    ("CZ", 0.19),
    ("PT", 0.23),
    ("HU", 0.27),
    ("SE", 0.23),
    ("AT", 0.22),
    ("BG", 0.21),
    ("DK", 0.21),
    ("FI", 0.17),
    ("SK", 0.18),
    ("IE", 0.21),
    ("HR", 0.23),
    ("LT", 0.23),
    ("SI", 0.24),
    ("LV", 0.20),
    ("EE", 0.22),
    ("CY", 0.21),
    ("LU", 0.25),
    ("MT", 0.20),
];

/// The UK taxes small orders at a reduced rate
const UK_RULE: TaxRule = TaxRule::Threshold {
    threshold: 2000.00,
    at_or_below: 0.05,
    above: 0.21,
};

/// Registry of known tax jurisdictions
///
/// Built once at startup and never mutated. Codes are matched exactly
/// (case-sensitive).
#[derive(Debug, Clone)]
pub struct TaxRegistry {
    rules: HashMap<&'static str, TaxRule>,
}

impl TaxRegistry {
    /// Create a registry from an explicit set of rules
    pub fn new(rules: impl IntoIterator<Item = (&'static str, TaxRule)>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Whether `country` is a known jurisdiction
    pub fn is_defined(&self, country: &str) -> bool {
        self.rules.contains_key(country)
    }

    /// Rule registered for `country`, if any
    pub fn find(&self, country: &str) -> Option<&TaxRule> {
        self.rules.get(country)
    }

    /// Tax rate for `country` at the given pre-tax amount
    ///
    /// Unknown countries are taxed at zero; refusing them is the caller's call.
    pub fn rate_for(&self, country: &str, amount: f64) -> f64 {
        self.find(country)
            .map(|rule| rule.rate_for(amount))
            .unwrap_or(0.0)
    }
}

impl Default for TaxRegistry {
    fn default() -> Self {
        Self::new(
            FLAT_RATES
                .iter()
                .map(|&(code, rate)| (code, TaxRule::Flat(rate)))
                .chain(std::iter::once(("UK", UK_RULE))),
        )
    }
}
