//! Inventory control engine.
//!
//! Owns the product map, the session [`Ledger`] and the output buffer. Every
//! handler commits immediately and appends exactly one line to the output,
//! whether the transaction succeeded or was rejected.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, info, warn};

use super::error::TransactionError;
use super::ledger::Ledger;
use super::product::Product;
use super::transaction::Transaction;

#[derive(Debug, Default)]
pub struct InventoryControl {
    inventory: HashMap<String, Product>,
    ledger: Ledger,
    messages: Vec<String>,
}

impl InventoryControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh session: empty inventory, zeroed ledger, no output.
    pub fn new_session(&mut self) {
        self.inventory.clear();
        self.ledger.reset();
        self.messages.clear();
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn product(&self, name: &str) -> Option<&Product> {
        self.inventory.get(name)
    }

    pub fn len(&self) -> usize {
        self.inventory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inventory.is_empty()
    }

    /// Output lines so far, in order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Output lines joined by newlines, surrounding whitespace trimmed.
    pub fn output(&self) -> String {
        self.messages.join("\n").trim().to_string()
    }

    pub fn create(&mut self, name: &str, cost_price: f64, selling_price: f64) {
        let outcome = match self.inventory.entry(name.to_string()) {
            Entry::Occupied(_) => Err(TransactionError::DuplicateProduct {
                name: name.to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(Product::new(cost_price, selling_price));
                Ok(format!("{} added to inventory", name))
            }
        };
        self.emit(outcome);
    }

    pub fn delete(&mut self, name: &str) {
        let outcome = match self.inventory.remove(name) {
            Some(mut product) => {
                let loss = product.loss(&mut self.ledger);
                Ok(format!(
                    "{} removed from inventory for a total loss of ${:.2}",
                    name, loss
                ))
            }
            None => Err(unknown(name)),
        };
        self.emit(outcome);
    }

    pub fn sell(&mut self, name: &str, quantity: u32) {
        let outcome = match self.inventory.get_mut(name) {
            Some(product) => match product.sell(quantity, &mut self.ledger) {
                Ok(revenue) => Ok(format!(
                    "{} units of {} sold at a total price of ${:.2} for a profit of ${:.2}",
                    quantity,
                    name,
                    revenue,
                    product.profit(quantity)
                )),
                Err(short) => {
                    debug!(
                        product = name,
                        requested = short.requested,
                        available = short.available,
                        "sale exceeds stock"
                    );
                    Err(TransactionError::InsufficientStock {
                        name: name.to_string(),
                        quantity,
                    })
                }
            },
            None => Err(unknown(name)),
        };
        self.emit(outcome);
    }

    pub fn buy(&mut self, name: &str, quantity: u32) {
        let outcome = match self.inventory.get_mut(name) {
            Some(product) => match product.buy(quantity, &mut self.ledger) {
                Ok(cost) => Ok(format!(
                    "{} units of {} added to inventory at a total cost of ${:.2}",
                    quantity, name, cost
                )),
                Err(full) => {
                    debug!(
                        product = name,
                        requested = full.requested,
                        held = full.held,
                        "purchase exceeds stock capacity"
                    );
                    Err(TransactionError::StockOverflow {
                        name: name.to_string(),
                        quantity,
                    })
                }
            },
            None => Err(unknown(name)),
        };
        self.emit(outcome);
    }

    pub fn report(&mut self) {
        let line = format!(
            "Total cost: ${:.2}, Total profit: ${:.2}",
            self.ledger.cost(),
            self.ledger.profit()
        );
        self.emit(Ok(line));
    }

    pub fn apply(&mut self, transaction: &Transaction) {
        debug!(
            code = transaction.code(),
            product = transaction.product(),
            %transaction,
            "applying"
        );
        match transaction {
            Transaction::New {
                name,
                cost_price,
                selling_price,
            } => self.create(name, *cost_price, *selling_price),
            Transaction::Delete { name } => self.delete(name),
            Transaction::Sell { name, quantity } => self.sell(name, *quantity),
            Transaction::Buy { name, quantity } => self.buy(name, *quantity),
            Transaction::Report => self.report(),
        }
    }

    /// Apply every transaction in order and return the accumulated output.
    pub fn process<'a, I>(&mut self, transactions: I) -> String
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut applied = 0usize;
        for tx in transactions {
            self.apply(tx);
            applied += 1;
        }
        info!(
            applied,
            products = self.inventory.len(),
            cost = self.ledger.cost(),
            profit = self.ledger.profit(),
            "batch processed"
        );
        self.output()
    }

    fn emit(&mut self, outcome: Result<String, TransactionError>) {
        let line = match outcome {
            Ok(line) => line,
            Err(err) => {
                warn!(error = %err, "transaction rejected");
                format!("ERROR: {}", err)
            }
        };
        self.messages.push(line);
    }
}

fn unknown(name: &str) -> TransactionError {
    TransactionError::UnknownProduct {
        name: name.to_string(),
    }
}
