#![allow(dead_code)]

use stockroom::domain::engine::InventoryControl;
use stockroom::domain::transaction::Transaction;
use std::io::Write;

pub fn new_product(name: &str, cost_price: f64, selling_price: f64) -> Transaction {
    Transaction::New {
        name: name.to_string(),
        cost_price,
        selling_price,
    }
}

pub fn buy(name: &str, quantity: u32) -> Transaction {
    Transaction::Buy {
        name: name.to_string(),
        quantity,
    }
}

pub fn sell(name: &str, quantity: u32) -> Transaction {
    Transaction::Sell {
        name: name.to_string(),
        quantity,
    }
}

pub fn delete(name: &str) -> Transaction {
    Transaction::Delete {
        name: name.to_string(),
    }
}

/// Run `transactions` through a fresh engine and hand it back for inspection.
pub fn run(transactions: &[Transaction]) -> InventoryControl {
    let mut engine = InventoryControl::new();
    engine.process(transactions);
    engine
}

pub fn write_temp(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub const SAMPLE_LOG: &str = "\
new Widget 2.00 5.00
new Gadget 10.50 12.00
buy Widget 10
buy Gadget 4
sell Widget 4
sell Gadget 5
sell Ghost 1
new Widget 3.00 4.00
report
delete Gadget
report
*
buy Widget 100
";

pub const SAMPLE_OUTPUT: &str = "\
Widget added to inventory
Gadget added to inventory
10 units of Widget added to inventory at a total cost of $20.00
4 units of Gadget added to inventory at a total cost of $42.00
4 units of Widget sold at a total price of $20.00 for a profit of $12.00
ERROR: 5 exceeds units of Gadget in inventory
ERROR: Ghost not in inventory
ERROR: Widget already in inventory
Total cost: $54.00, Total profit: $12.00
Gadget removed from inventory for a total loss of $42.00
Total cost: $12.00, Total profit: $-30.00";
