use crate::crypto::{hash_to_hex, sha256_concat, Sha256Hash};
use crate::error::{ChainError, Result};
use crate::transaction::{transactions_to_string, Transaction};
use chrono::SecondsFormat;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

use super::clock::{Clock, SystemClock, TimestampZone};
use super::validation::validate_chain;

/// Payload of the single transaction carried by every genesis block.
pub const GENESIS_DATA: &str = "Genesis";

/// Only [`Block::create`] produces a block, so the stored hash is always the
/// derived one. Blocks serialize for display but never deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    timestamp: i64,
    transactions: Vec<Transaction>,
    #[serde(serialize_with = "hex::serde::serialize")]
    prev_block_hash: Vec<u8>,
    #[serde(serialize_with = "hex::serde::serialize")]
    hash: Sha256Hash,
}

impl Block {
    /// Builds a block stamped with `clock.now()` and derives its hash.
    pub fn create(
        transactions: Vec<Transaction>,
        prev_block_hash: Vec<u8>,
        clock: &dyn Clock,
        zone: TimestampZone,
    ) -> Self {
        let now = clock.now();
        let rendered = render_timestamp(zone, now.timestamp())
            .unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Secs, true));
        let hash = Self::derive_hash(&rendered, &transactions, &prev_block_hash);

        Block {
            timestamp: now.timestamp(),
            transactions,
            prev_block_hash,
            hash,
        }
    }

    /// The first block of every chain: one "Genesis" transaction, no predecessor.
    pub fn genesis(clock: &dyn Clock, zone: TimestampZone) -> Self {
        Self::create(vec![Transaction::new(GENESIS_DATA)], Vec::new(), clock, zone)
    }

    /// SHA-256 over the rendered timestamp, the raw payloads in order, then
    /// the previous hash. Nothing separates the three segments.
    pub fn derive_hash(
        rendered_timestamp: &str,
        transactions: &[Transaction],
        prev_block_hash: &[u8],
    ) -> Sha256Hash {
        let payloads = transactions.iter().map(Transaction::data);
        sha256_concat(
            std::iter::once(rendered_timestamp.as_bytes())
                .chain(payloads)
                .chain(std::iter::once(prev_block_hash)),
        )
    }

    /// Re-derives the hash from the stored fields.
    pub fn compute_hash(&self, zone: TimestampZone) -> Result<Sha256Hash> {
        let rendered = render_timestamp(zone, self.timestamp)
            .ok_or(ChainError::InvalidTimestamp(self.timestamp))?;
        Ok(Self::derive_hash(
            &rendered,
            &self.transactions,
            &self.prev_block_hash,
        ))
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn prev_block_hash(&self) -> &[u8] {
        &self.prev_block_hash
    }

    pub fn hash(&self) -> Sha256Hash {
        self.hash
    }

    pub fn hash_str(&self) -> String {
        hash_to_hex(&self.hash)
    }

    pub fn is_genesis(&self) -> bool {
        self.prev_block_hash.is_empty()
    }

    /// Assembles a block from raw fields without deriving its hash, so tests
    /// can build tampered chains.
    #[cfg(test)]
    pub(crate) fn from_raw_parts(
        timestamp: i64,
        transactions: Vec<Transaction>,
        prev_block_hash: Vec<u8>,
        hash: Sha256Hash,
    ) -> Self {
        Block {
            timestamp,
            transactions,
            prev_block_hash,
            hash,
        }
    }
}

/// Renders in `zone`, falling back to UTC when the zone holds an offset
/// chrono cannot represent. `None` only for out-of-range timestamps.
fn render_timestamp(zone: TimestampZone, secs: i64) -> Option<String> {
    zone.render(secs)
        .or_else(|| TimestampZone::Utc.render(secs))
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Previous hash: {}", hash_to_hex(&self.prev_block_hash))?;
        writeln!(f, "Transactions:  {}", transactions_to_string(&self.transactions))?;
        write!(f, "Hash:          {}", self.hash_str())
    }
}

/// Builds a block against the system clock, rendering its timestamp in the
/// local zone.
pub fn create_block(transactions: Vec<Transaction>, prev_block_hash: Vec<u8>) -> Block {
    Block::create(transactions, prev_block_hash, &SystemClock, TimestampZone::Local)
}

/// Genesis block against the system clock and local zone. Its hash differs
/// from run to run because the timestamp is part of the digest.
pub fn genesis() -> Block {
    Block::genesis(&SystemClock, TimestampZone::Local)
}

/// Append-only, in-memory sequence of hash-linked blocks.
#[derive(Clone)]
pub struct Blockchain {
    blocks: Vec<Block>,
    clock: Arc<dyn Clock>,
    zone: TimestampZone,
}

impl fmt::Debug for Blockchain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Blockchain")
            .field("blocks", &self.blocks)
            .field("zone", &self.zone)
            .finish_non_exhaustive()
    }
}

impl Default for Blockchain {
    fn default() -> Self {
        Self::new()
    }
}

impl Blockchain {
    /// Create a chain holding only a genesis block, stamped by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock), TimestampZone::Local)
    }

    /// Create a chain whose blocks are stamped by `clock` and rendered in `zone`.
    pub fn with_clock(clock: Arc<dyn Clock>, zone: TimestampZone) -> Self {
        let genesis_block = Block::genesis(clock.as_ref(), zone);
        info!(
            "Initialized chain with genesis block {} (zone = {})",
            genesis_block.hash_str(),
            zone
        );

        Blockchain {
            blocks: vec![genesis_block],
            clock,
            zone,
        }
    }

    /// Links a new block to the current tail and appends it.
    pub fn add_block(&mut self, transactions: Vec<Transaction>) -> Result<&Block> {
        let prev_hash = self.blocks.last().ok_or(ChainError::EmptyChain)?.hash();
        let block = Block::create(
            transactions,
            prev_hash.to_vec(),
            self.clock.as_ref(),
            self.zone,
        );

        debug!(
            "Appending block {} at height {} ({} transactions)",
            block.hash_str(),
            self.blocks.len(),
            block.transactions().len()
        );

        self.blocks.push(block);
        self.blocks.last().ok_or(ChainError::EmptyChain)
    }

    /// Checks linkage and recomputes every stored hash.
    pub fn verify(&self) -> Result<()> {
        validate_chain(&self.blocks, self.zone)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn last_block(&self) -> Option<&Block> {
        self.blocks.last()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Height of the tail block; genesis sits at height 0.
    pub fn height(&self) -> u64 {
        self.blocks.len().saturating_sub(1) as u64
    }

    pub fn zone(&self) -> TimestampZone {
        self.zone
    }
}

impl<'a> IntoIterator for &'a Blockchain {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
