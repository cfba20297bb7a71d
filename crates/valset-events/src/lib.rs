// crates/valset-events/src/lib.rs
//
// valset-events: Event assertions for the validator-set test harness.
//
// Decodes the logs of a transaction receipt against a contract's event
// interface and checks that a named event was emitted the expected number
// of times with the expected arguments. The Ronin validator-set catalog and
// its typed expectations live in `validator_set`.

pub mod assertion;
pub mod interface;
pub mod receipt;
pub mod validator_set;
pub mod value;

// Re-export key types for ergonomic access from downstream crates.
pub use alloy_dyn_abi::DynSolValue;
pub use alloy_json_abi::{Event, EventParam};
pub use alloy_primitives::Log;
pub use assertion::{expect_arg, expect_event, expect_marker_event};
pub use interface::{AbiEventInterface, DecodedEvent, EventInterface};
pub use receipt::TransactionReceipt;
pub use validator_set::{validator_set_interface, ValidatorSetExpects};
pub use value::address_list;
