// crates/valset-core/src/lib.rs
//
// valset-core: Core types, traits, and configuration for the validator-set
// test harness.
//
// This is the leaf crate that all other crates in the workspace depend on.
// It defines block-number and account types, the protocol-wide error enum,
// the chain collaborator trait, TOML configuration, and tracing setup.

pub mod config;
pub mod error;
pub mod logging;
pub mod traits;
pub mod types;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use valset_core::BlockNumber;`

pub use types::{Address, BlockNumber, B256, U256};

pub use config::HarnessConfig;
pub use error::ValsetError;
pub use logging::init_tracing;
pub use traits::ChainClient;
