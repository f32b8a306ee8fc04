//! Thread-safe handle over a [`Blockchain`].
//!
//! The ledger itself is single-threaded. This wrapper serializes appenders so
//! reading the tail hash and pushing the new block happen under one lock,
//! which keeps every `prev_block_hash` pointing at its real predecessor.

use crate::blockchain::{Block, Blockchain};
use crate::crypto::Sha256Hash;
use crate::error::Result;
use crate::transaction::Transaction;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct SharedBlockchain {
    inner: Arc<Mutex<Blockchain>>,
}

impl SharedBlockchain {
    pub fn new(chain: Blockchain) -> Self {
        Self {
            inner: Arc::new(Mutex::new(chain)),
        }
    }

    /// Appends under the lock and returns a copy of the new block.
    pub fn add_block(&self, transactions: Vec<Transaction>) -> Result<Block> {
        let mut chain = self.inner.lock();
        let block = chain.add_block(transactions)?.clone();
        Ok(block)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn last_hash(&self) -> Option<Sha256Hash> {
        self.inner.lock().last_block().map(Block::hash)
    }

    pub fn verify(&self) -> Result<()> {
        self.inner.lock().verify()
    }

    /// Copies the current chain out of the lock.
    pub fn snapshot(&self) -> Blockchain {
        self.inner.lock().clone()
    }
}

impl From<Blockchain> for SharedBlockchain {
    fn from(chain: Blockchain) -> Self {
        Self::new(chain)
    }
}
