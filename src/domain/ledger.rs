//! Aggregate cost/profit totals for one inventory session.
//!
//! The ledger is owned by the engine and lent to each [`Product`] operation
//! that moves money, so there is exactly one writer at any time.
//!
//! [`Product`]: super::product::Product

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    running_cost: f64,
    running_profit: f64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cost basis of stock currently held.
    pub fn cost(&self) -> f64 {
        self.running_cost
    }

    /// Realized profit from sales, net of write-offs.
    pub fn profit(&self) -> f64 {
        self.running_profit
    }

    pub fn reset(&mut self) {
        self.running_cost = 0.0;
        self.running_profit = 0.0;
    }

    pub(crate) fn record_purchase(&mut self, cost: f64) {
        self.running_cost += cost;
    }

    pub(crate) fn record_sale(&mut self, cost_basis: f64, profit: f64) {
        self.running_cost -= cost_basis;
        self.running_profit += profit;
    }

    pub(crate) fn record_write_off(&mut self, amount: f64) {
        self.running_cost -= amount;
        self.running_profit -= amount;
    }
}
