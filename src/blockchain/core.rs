// core.rs splits the ledger into time handling, block/chain structure and
// read-only verification.
pub mod chain;
pub mod clock;
pub mod validation;

pub use chain::*;
pub use clock::*;
pub use validation::*;
