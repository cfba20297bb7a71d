// crates/valset-core/src/types.rs
//
// Primitive types shared by every crate in the harness.
//
// Block heights are tracked as u128 so period arithmetic on long-lived
// chains cannot silently overflow a machine word. Account and amount types
// come from alloy-primitives so decoded logs compare directly against the
// values a scenario expects.

pub use alloy_primitives::{Address, B256, U256};

/// A block height on the simulated chain.
pub type BlockNumber = u128;
