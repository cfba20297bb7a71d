// crates/valset-chain/src/lib.rs
//
// valset-chain: Simulated chain for the validator-set test harness.
//
// Provides an in-memory `ChainClient` whose height only moves when a
// scenario mines blocks, plus the JSON-RPC quantity encoding used for
// `hardhat_mine` style requests.

pub mod quantity;
pub mod simulated;

pub use quantity::to_quantity;
pub use simulated::SimulatedChain;
