//! Command-log parser.
//!
//! One record per line: a code followed by whitespace-separated fields. The
//! batch ends at the first `*` line; anything after it is ignored. Blank lines
//! are skipped. Any other malformed line is an error carrying its line and
//! column.

use crate::domain::error::ParseError;
use crate::domain::transaction::{Batch, Transaction};

pub const TERMINATOR: &str = "*";

/// A single parsed line.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Transaction(Transaction),
    Terminator,
}

#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    text: &'a str,
    column: usize,
}

fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;
    for (i, ch) in line.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, Some(s)) => {
                tokens.push(Token {
                    text: &line[s..i],
                    column: s,
                });
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push(Token {
            text: &line[s..],
            column: s,
        });
    }
    tokens
}

struct LineParser<'a> {
    tokens: Vec<Token<'a>>,
    line: usize,
    /// Column just past the last token, for "missing field" errors.
    end: usize,
}

impl<'a> LineParser<'a> {
    fn new(tokens: Vec<Token<'a>>, line: usize) -> Self {
        let end = tokens
            .last()
            .map(|t| t.column + t.text.len())
            .unwrap_or(0);
        Self { tokens, line, end }
    }

    fn error(&self, message: String, column: usize) -> ParseError {
        ParseError {
            message,
            line: self.line,
            column,
        }
    }

    fn field(&self, index: usize, what: &str) -> Result<Token<'a>, ParseError> {
        self.tokens.get(index).copied().ok_or_else(|| {
            self.error(format!("expected {}, found end of line", what), self.end)
        })
    }

    fn name(&self, index: usize) -> Result<String, ParseError> {
        Ok(self.field(index, "product name")?.text.to_string())
    }

    fn price(&self, index: usize, what: &str) -> Result<f64, ParseError> {
        let token = self.field(index, what)?;
        match token.text.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(self.error(
                format!("invalid {} '{}'", what, token.text),
                token.column,
            )),
        }
    }

    fn quantity(&self, index: usize) -> Result<u32, ParseError> {
        let token = self.field(index, "quantity")?;
        token.text.parse::<u32>().map_err(|_| {
            self.error(
                format!("invalid quantity '{}'", token.text),
                token.column,
            )
        })
    }

    fn expect_end(&self, arity: usize) -> Result<(), ParseError> {
        match self.tokens.get(arity) {
            Some(extra) => Err(self.error(
                format!("unexpected '{}' after {} field(s)", extra.text, arity - 1),
                extra.column,
            )),
            None => Ok(()),
        }
    }

    fn parse(&self) -> Result<Record, ParseError> {
        let code = self.field(0, "transaction code")?;
        let (record, arity) = match code.text {
            "new" => (
                Transaction::New {
                    name: self.name(1)?,
                    cost_price: self.price(2, "cost price")?,
                    selling_price: self.price(3, "selling price")?,
                },
                4,
            ),
            "delete" => (Transaction::Delete { name: self.name(1)? }, 2),
            "sell" => (
                Transaction::Sell {
                    name: self.name(1)?,
                    quantity: self.quantity(2)?,
                },
                3,
            ),
            "buy" => (
                Transaction::Buy {
                    name: self.name(1)?,
                    quantity: self.quantity(2)?,
                },
                3,
            ),
            "report" => (Transaction::Report, 1),
            TERMINATOR => {
                self.expect_end(1)?;
                return Ok(Record::Terminator);
            }
            other => {
                return Err(self.error(
                    format!("unknown transaction code '{}'", other),
                    code.column,
                ));
            }
        };
        self.expect_end(arity)?;
        Ok(Record::Transaction(record))
    }
}

/// Parse one non-blank line. `line` is the 1-based line number used in errors.
pub fn parse_line(input: &str, line: usize) -> Result<Record, ParseError> {
    LineParser::new(tokenize(input), line).parse()
}

/// Parse pre-split fields (e.g. a CSV row). Empty fields are ignored so short
/// rows can pad with blanks.
pub fn parse_fields(fields: &[&str], line: usize) -> Result<Record, ParseError> {
    let mut tokens = Vec::with_capacity(fields.len());
    let mut column = 0;
    for field in fields {
        let text = field.trim();
        if !text.is_empty() {
            tokens.push(Token { text, column });
            column += text.len() + 1;
        }
    }
    LineParser::new(tokens, line).parse()
}

/// Parse a full command log.
pub fn parse_log(input: &str) -> Result<Batch, ParseError> {
    let mut batch = Batch::default();
    for (idx, raw) in input.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        match parse_line(raw, idx + 1)? {
            Record::Transaction(tx) => batch.transactions.push(tx),
            Record::Terminator => {
                batch.terminated = true;
                break;
            }
        }
    }
    Ok(batch)
}
