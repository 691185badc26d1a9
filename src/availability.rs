// Order-taking switch
//
// Shared across request handlers; admin endpoints flip it, order handling reads it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Whether the service currently answers orders
///
/// Clones share the same flag. Last write wins.
#[derive(Debug, Clone)]
pub struct ServiceAvailability {
    taking_orders: Arc<AtomicBool>,
}

impl ServiceAvailability {
    pub fn new(taking_orders: bool) -> Self {
        Self {
            taking_orders: Arc::new(AtomicBool::new(taking_orders)),
        }
    }

    pub fn enable(&self) {
        self.taking_orders.store(true, Ordering::Release);
    }

    pub fn disable(&self) {
        self.taking_orders.store(false, Ordering::Release);
    }

    pub fn is_taking_orders(&self) -> bool {
        self.taking_orders.load(Ordering::Acquire)
    }
}

impl Default for ServiceAvailability {
    fn default() -> Self {
        Self::new(true)
    }
}
