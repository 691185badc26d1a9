// Order pricing: tax registry, reduction policies and the engine composing them

pub mod engine;
pub mod reduction;
pub mod tax;

pub use engine::{PricingEngine, QuoteBreakdown};
pub use reduction::{reduction_rate, Reduction, UnknownReduction};
pub use tax::{TaxRegistry, TaxRule};
