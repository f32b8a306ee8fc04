use crate::crypto::hash_to_hex;
use crate::error::{ChainError, Result};
use tracing::warn;

use super::chain::Block;
use super::clock::TimestampZone;

/// Walks `blocks` from genesis to tail, checking that each block points at its
/// predecessor's hash and that every stored hash matches its content.
pub fn validate_chain(blocks: &[Block], zone: TimestampZone) -> Result<()> {
    let genesis = blocks.first().ok_or(ChainError::EmptyChain)?;
    if !genesis.prev_block_hash().is_empty() {
        return Err(ChainError::InvalidGenesis(format!(
            "expected an empty previous hash, found {}",
            hash_to_hex(genesis.prev_block_hash())
        )));
    }

    for (index, block) in blocks.iter().enumerate() {
        if index > 0 && block.prev_block_hash() != blocks[index - 1].hash().as_slice() {
            warn!(
                "Block {} points at {}, expected {}",
                index,
                hash_to_hex(block.prev_block_hash()),
                blocks[index - 1].hash_str()
            );
            return Err(ChainError::InvalidBlockLinkage { index });
        }

        if block.compute_hash(zone)? != block.hash() {
            warn!("Block {} content does not match hash {}", index, block.hash_str());
            return Err(ChainError::HashMismatch { index });
        }
    }

    Ok(())
}
