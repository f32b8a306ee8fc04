/// Transaction types for hashledger
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque record carried by a block. The ledger never inspects the payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(with = "serde_bytes")]
    data: Vec<u8>,
}

impl Transaction {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Transaction { data: data.into() }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<&str> for Transaction {
    fn from(data: &str) -> Self {
        Transaction::new(data)
    }
}

impl From<Vec<u8>> for Transaction {
    fn from(data: Vec<u8>) -> Self {
        Transaction::new(data)
    }
}

/// Renders the payload as text; invalid UTF-8 is replaced, not rejected.
impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.data))
    }
}

/// Human-readable rendering of a transaction list, e.g. `[a,b]`.
///
/// Only used for display. Block digests are computed from the raw payload
/// bytes, never from this string.
pub fn transactions_to_string(transactions: &[Transaction]) -> String {
    let rendered: Vec<String> = transactions.iter().map(|tx| tx.to_string()).collect();
    format!("[{}]", rendered.join(","))
}
