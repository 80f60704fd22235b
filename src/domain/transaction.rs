//! Transaction records applied by the inventory engine.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Transaction {
    /// `new <name> <cost_price> <selling_price>`
    New {
        name: String,
        cost_price: f64,
        selling_price: f64,
    },
    /// `delete <name>`
    Delete { name: String },
    /// `sell <name> <quantity>`
    Sell { name: String, quantity: u32 },
    /// `buy <name> <quantity>`
    Buy { name: String, quantity: u32 },
    /// `report`
    Report,
}

impl Transaction {
    /// The record's code in the command log.
    pub fn code(&self) -> &'static str {
        match self {
            Transaction::New { .. } => "new",
            Transaction::Delete { .. } => "delete",
            Transaction::Sell { .. } => "sell",
            Transaction::Buy { .. } => "buy",
            Transaction::Report => "report",
        }
    }

    /// The product the record refers to, if any.
    pub fn product(&self) -> Option<&str> {
        match self {
            Transaction::New { name, .. }
            | Transaction::Delete { name }
            | Transaction::Sell { name, .. }
            | Transaction::Buy { name, .. } => Some(name),
            Transaction::Report => None,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transaction::New {
                name,
                cost_price,
                selling_price,
            } => write!(f, "new {} {} {}", name, cost_price, selling_price),
            Transaction::Delete { name } => write!(f, "delete {}", name),
            Transaction::Sell { name, quantity } => write!(f, "sell {} {}", name, quantity),
            Transaction::Buy { name, quantity } => write!(f, "buy {} {}", name, quantity),
            Transaction::Report => write!(f, "report"),
        }
    }
}

/// A parsed batch of transactions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    pub transactions: Vec<Transaction>,
    /// Whether the batch ended with an explicit `*` record.
    pub terminated: bool,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Record counts per code, in first-seen order.
    pub fn tally(&self) -> Vec<(&'static str, usize)> {
        let mut counts: Vec<(&'static str, usize)> = Vec::new();
        for tx in &self.transactions {
            match counts.iter_mut().find(|(code, _)| *code == tx.code()) {
                Some((_, n)) => *n += 1,
                None => counts.push((tx.code(), 1)),
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_log_syntax() {
        let cases = [
            (
                Transaction::New {
                    name: "Widget".into(),
                    cost_price: 2.5,
                    selling_price: 5.0,
                },
                "new Widget 2.5 5",
            ),
            (Transaction::Delete { name: "Widget".into() }, "delete Widget"),
            (
                Transaction::Sell {
                    name: "Widget".into(),
                    quantity: 4,
                },
                "sell Widget 4",
            ),
            (
                Transaction::Buy {
                    name: "Widget".into(),
                    quantity: 10,
                },
                "buy Widget 10",
            ),
            (Transaction::Report, "report"),
        ];
        for (tx, expected) in &cases {
            assert_eq!(tx.to_string(), *expected);
        }
    }

    #[test]
    fn product_name() {
        assert_eq!(
            Transaction::Delete { name: "Gadget".into() }.product(),
            Some("Gadget")
        );
        assert_eq!(Transaction::Report.product(), None);
    }

    #[test]
    fn tally_counts_in_first_seen_order() {
        let batch = Batch {
            transactions: vec![
                Transaction::Buy {
                    name: "A".into(),
                    quantity: 1,
                },
                Transaction::Report,
                Transaction::Buy {
                    name: "B".into(),
                    quantity: 2,
                },
            ],
            terminated: true,
        };
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.tally(), vec![("buy", 2), ("report", 1)]);
    }

    #[test]
    fn empty_batch() {
        let batch = Batch::default();
        assert!(batch.is_empty());
        assert!(!batch.terminated);
        assert!(batch.tally().is_empty());
    }
}
