// crates/valset-chain/src/quantity.rs
//
// JSON-RPC quantity encoding: "0x" followed by lowercase hex with no
// leading zeros. Zero encodes as "0x0".

use valset_core::BlockNumber;

/// Encode a block count as a JSON-RPC quantity (e.g. `2` -> `"0x2"`).
pub fn to_quantity(value: BlockNumber) -> String {
    format!("{:#x}", value)
}
