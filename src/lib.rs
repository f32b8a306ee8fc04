//! hashledger - A minimal append-only hash-linked ledger
//!
//! Every block commits, through a SHA-256 digest, to its timestamp, its
//! transactions and the digest of the block before it.
//!
//! # Architecture
//!
//! ## Core Ledger
//! - [`blockchain`] - Blocks, the chain, time sources and verification
//! - [`transaction`] - Opaque transaction payloads
//! - [`shared`] - Mutex-guarded handle for concurrent appenders
//!
//! ## Cryptography
//! - [`crypto`] - SHA-256 hashing helpers
//!
//! ## Configuration & Utilities
//! - [`config`] - Configuration management
//! - [`error`] - Error types

#![forbid(unsafe_code)]

// ============================================================================
// Core Ledger
// ============================================================================
pub mod blockchain;
pub mod shared;
pub mod transaction;

// ============================================================================
// Cryptography
// ============================================================================
pub mod crypto;

// ============================================================================
// Configuration & Utilities
// ============================================================================
pub mod config;
pub mod error;

pub use blockchain::{Block, Blockchain};
pub use error::{ChainError, Result};
pub use transaction::Transaction;
