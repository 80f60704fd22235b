//! Per-product pricing and stock.

use super::ledger::Ledger;

/// Returned by [`Product::sell`] when the request exceeds stock on hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsufficientStock {
    pub requested: u32,
    pub available: u32,
}

/// Returned by [`Product::buy`] when stock on hand would exceed `u32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockOverflow {
    pub requested: u32,
    pub held: u32,
}

/// A product's ledger entry. Prices are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    cost_price: f64,
    selling_price: f64,
    stock: u32,
}

impl Product {
    pub fn new(cost_price: f64, selling_price: f64) -> Self {
        Product {
            cost_price,
            selling_price,
            stock: 0,
        }
    }

    pub fn cost_price(&self) -> f64 {
        self.cost_price
    }

    pub fn selling_price(&self) -> f64 {
        self.selling_price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Add `quantity` units to stock and return their total cost.
    ///
    /// Leaves stock and the ledger untouched when the new stock level would
    /// not fit in a `u32`.
    pub fn buy(&mut self, quantity: u32, ledger: &mut Ledger) -> Result<f64, StockOverflow> {
        self.stock = self.stock.checked_add(quantity).ok_or(StockOverflow {
            requested: quantity,
            held: self.stock,
        })?;
        let total_cost = quantity as f64 * self.cost_price;
        ledger.record_purchase(total_cost);
        Ok(total_cost)
    }

    /// Remove `quantity` units from stock and return the revenue.
    ///
    /// Leaves stock and the ledger untouched when `quantity` exceeds stock.
    pub fn sell(&mut self, quantity: u32, ledger: &mut Ledger) -> Result<f64, InsufficientStock> {
        if quantity > self.stock {
            return Err(InsufficientStock {
                requested: quantity,
                available: self.stock,
            });
        }
        self.stock -= quantity;
        ledger.record_sale(quantity as f64 * self.cost_price, self.profit(quantity));
        Ok(quantity as f64 * self.selling_price)
    }

    /// Profit on `quantity` units at the fixed margin. Pure.
    pub fn profit(&self, quantity: u32) -> f64 {
        quantity as f64 * (self.selling_price - self.cost_price)
    }

    /// Write off all remaining stock at cost and return the amount lost.
    pub fn loss(&mut self, ledger: &mut Ledger) -> f64 {
        let amount = self.stock as f64 * self.cost_price;
        ledger.record_write_off(amount);
        self.stock = 0;
        amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product::new(2.0, 5.0)
    }

    #[test]
    fn new_product_has_no_stock() {
        let p = widget();
        assert_eq!(p.stock(), 0);
        assert!((p.cost_price() - 2.0).abs() < f64::EPSILON);
        assert!((p.selling_price() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn buy_adds_stock_and_cost() {
        let mut ledger = Ledger::new();
        let mut p = widget();
        let cost = p.buy(10, &mut ledger).unwrap();
        assert!((cost - 20.0).abs() < f64::EPSILON);
        assert_eq!(p.stock(), 10);
        assert!((ledger.cost() - 20.0).abs() < f64::EPSILON);
        assert!((ledger.profit() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn buy_past_capacity_is_rejected() {
        let mut ledger = Ledger::new();
        let mut p = Product::new(0.01, 0.02);
        p.buy(3_000_000_000, &mut ledger).unwrap();
        let before = ledger.clone();

        let err = p.buy(3_000_000_000, &mut ledger).unwrap_err();
        assert_eq!(
            err,
            StockOverflow {
                requested: 3_000_000_000,
                held: 3_000_000_000
            }
        );
        assert_eq!(p.stock(), 3_000_000_000);
        assert_eq!(ledger, before);
    }

    #[test]
    fn buy_up_to_capacity() {
        let mut ledger = Ledger::new();
        let mut p = widget();
        p.buy(u32::MAX - 1, &mut ledger).unwrap();
        assert!(p.buy(1, &mut ledger).is_ok());
        assert_eq!(p.stock(), u32::MAX);
    }

    #[test]
    fn sell_returns_revenue_and_books_profit() {
        let mut ledger = Ledger::new();
        let mut p = widget();
        p.buy(10, &mut ledger).unwrap();

        let revenue = p.sell(4, &mut ledger).unwrap();
        assert!((revenue - 20.0).abs() < f64::EPSILON);
        assert_eq!(p.stock(), 6);
        assert!((ledger.cost() - 12.0).abs() < f64::EPSILON);
        assert!((ledger.profit() - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn sell_exact_stock() {
        let mut ledger = Ledger::new();
        let mut p = widget();
        p.buy(3, &mut ledger).unwrap();
        assert!(p.sell(3, &mut ledger).is_ok());
        assert_eq!(p.stock(), 0);
    }

    #[test]
    fn sell_more_than_stock_is_rejected() {
        let mut ledger = Ledger::new();
        let mut p = widget();
        p.buy(2, &mut ledger).unwrap();
        let before = ledger.clone();

        let err = p.sell(3, &mut ledger).unwrap_err();
        assert_eq!(
            err,
            InsufficientStock {
                requested: 3,
                available: 2
            }
        );
        assert_eq!(p.stock(), 2);
        assert_eq!(ledger, before);
    }

    #[test]
    fn sell_zero_is_a_no_op_sale() {
        let mut ledger = Ledger::new();
        let mut p = widget();
        let revenue = p.sell(0, &mut ledger).unwrap();
        assert!((revenue - 0.0).abs() < f64::EPSILON);
        assert_eq!(p.stock(), 0);
    }

    #[test]
    fn profit_is_pure() {
        let p = widget();
        assert!((p.profit(4) - 12.0).abs() < f64::EPSILON);
        assert!((p.profit(4) - 12.0).abs() < f64::EPSILON);
        assert_eq!(p.stock(), 0);
    }

    #[test]
    fn profit_negative_margin() {
        let p = Product::new(5.0, 3.0);
        assert!((p.profit(2) - (-4.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn loss_writes_off_remaining_stock() {
        let mut ledger = Ledger::new();
        let mut p = widget();
        p.buy(7, &mut ledger).unwrap();

        let amount = p.loss(&mut ledger);
        assert!((amount - 14.0).abs() < f64::EPSILON);
        assert_eq!(p.stock(), 0);
        assert!((ledger.cost() - 0.0).abs() < f64::EPSILON);
        assert!((ledger.profit() - (-14.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn loss_with_no_stock_is_zero() {
        let mut ledger = Ledger::new();
        let mut p = widget();
        assert!((p.loss(&mut ledger) - 0.0).abs() < f64::EPSILON);
        assert_eq!(ledger, Ledger::new());
    }
}
