// crates/valset-events/src/value.rs
//
// Helpers over decoded event arguments.

use alloy_dyn_abi::DynSolValue;
use alloy_primitives::Address;

/// An `address[]` argument holding `addresses` in order.
pub fn address_list(addresses: &[Address]) -> DynSolValue {
    DynSolValue::Array(addresses.iter().copied().map(DynSolValue::from).collect())
}

/// Render an argument for mismatch reports: checksummed addresses,
/// decimal integers, bracketed lists.
pub fn render(value: &DynSolValue) -> String {
    match value {
        DynSolValue::Address(address) => address.to_string(),
        DynSolValue::Uint(value, _) => value.to_string(),
        DynSolValue::Int(value, _) => value.to_string(),
        DynSolValue::Bool(value) => value.to_string(),
        DynSolValue::Array(items) | DynSolValue::FixedArray(items) => {
            let items: Vec<String> = items.iter().map(render).collect();
            format!("[{}]", items.join(", "))
        }
        other => format!("{:?}", other),
    }
}
