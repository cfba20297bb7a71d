// crates/valset-events/src/assertion.rs
//
// Event assertions over transaction receipts.
//
// An assertion fails on the first discrepancy and never retries: either the
// occurrence count is wrong, or one argument of one occurrence differs from
// what the scenario expected.

use valset_core::error::ValsetError;

use alloy_dyn_abi::DynSolValue;

use crate::interface::{DecodedEvent, EventInterface};
use crate::receipt::TransactionReceipt;
use crate::value::render;

/// Assert that `event` was emitted exactly `expected_count` times in `receipt`.
///
/// `check` runs on every occurrence in emission order, and its first error
/// is returned.
///
/// # Errors
/// - `ValsetError::CountMismatch` if the number of occurrences differs.
/// - Whatever `check` returns, typically `ValsetError::ArgumentMismatch`.
/// - Decoding errors from the interface.
pub fn expect_event<I, F>(
    interface: &I,
    event: &str,
    receipt: &TransactionReceipt,
    mut check: F,
    expected_count: usize,
) -> Result<(), ValsetError>
where
    I: EventInterface + ?Sized,
    F: FnMut(&DecodedEvent) -> Result<(), ValsetError>,
{
    let occurrences = interface.decode_logs(receipt, event)?;

    if occurrences.len() != expected_count {
        tracing::warn!(
            "{}.{}: expected {} occurrence(s), found {}",
            interface.contract_name(),
            event,
            expected_count,
            occurrences.len()
        );
        return Err(ValsetError::CountMismatch {
            event: event.to_string(),
            expected: expected_count,
            actual: occurrences.len(),
        });
    }

    for occurrence in &occurrences {
        check(occurrence)?;
    }
    Ok(())
}

/// Assert the occurrence count of an event that carries no arguments.
pub fn expect_marker_event<I>(
    interface: &I,
    event: &str,
    receipt: &TransactionReceipt,
    expected_count: usize,
) -> Result<(), ValsetError>
where
    I: EventInterface + ?Sized,
{
    expect_event(interface, event, receipt, |_| Ok(()), expected_count)
}

/// Compare the argument at `position` against `expected`.
///
/// Scalars must match exactly; arrays must hold the same items in the same order.
pub fn expect_arg(
    event: &DecodedEvent,
    position: usize,
    label: &str,
    expected: impl Into<DynSolValue>,
) -> Result<(), ValsetError> {
    let expected = expected.into();
    match event.arg(position) {
        Some(actual) if *actual == expected => Ok(()),
        actual => {
            let actual = actual.map_or_else(|| "<missing>".to_string(), render);
            tracing::warn!(
                "{}: {} at argument {}: expected {}, got {}",
                event.name,
                label,
                position,
                render(&expected),
                actual
            );
            Err(ValsetError::ArgumentMismatch {
                event: event.name.clone(),
                position,
                label: label.to_string(),
                expected: render(&expected),
                actual,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::{event, param, AbiEventInterface};
    use crate::value::address_list;
    use alloy_primitives::{Address, U256};

    fn interface() -> AbiEventInterface {
        AbiEventInterface::new(
            "Pool",
            vec![
                event("Deposited", vec![param("amount", "uint256")]),
                event("Paused", Vec::new()),
            ],
        )
    }

    fn receipt_with_deposits(amounts: &[u64]) -> TransactionReceipt {
        let interface = interface();
        amounts.iter().fold(TransactionReceipt::default(), |receipt, amount| {
            let log = interface
                .encode_log(
                    Address::ZERO,
                    "Deposited",
                    &[DynSolValue::from(U256::from(*amount))],
                )
                .unwrap();
            receipt.with_log(log)
        })
    }

    #[test]
    fn test_check_runs_in_emission_order() {
        let receipt = receipt_with_deposits(&[5, 6, 7]);
        let mut seen = Vec::new();
        expect_event(
            &interface(),
            "Deposited",
            &receipt,
            |event| {
                seen.push(event.args[0].clone());
                Ok(())
            },
            3,
        )
        .unwrap();
        assert_eq!(
            seen,
            vec![
                DynSolValue::from(U256::from(5u64)),
                DynSolValue::from(U256::from(6u64)),
                DynSolValue::from(U256::from(7u64)),
            ]
        );
    }

    #[test]
    fn test_count_mismatch_skips_check() {
        let receipt = receipt_with_deposits(&[5, 6]);
        let mut calls = 0;
        let err = expect_event(
            &interface(),
            "Deposited",
            &receipt,
            |_| {
                calls += 1;
                Ok(())
            },
            1,
        )
        .unwrap_err();
        assert_eq!(calls, 0);
        match err {
            ValsetError::CountMismatch {
                event,
                expected,
                actual,
            } => {
                assert_eq!(event, "Deposited");
                assert_eq!(expected, 1);
                assert_eq!(actual, 2);
            }
            other => panic!("expected count mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_first_check_error_is_returned() {
        let receipt = receipt_with_deposits(&[5, 6]);
        let err = expect_event(
            &interface(),
            "Deposited",
            &receipt,
            |event| expect_arg(event, 0, "invalid amount", U256::from(5u64)),
            2,
        )
        .unwrap_err();
        match err {
            ValsetError::ArgumentMismatch {
                expected, actual, ..
            } => {
                assert_eq!(expected, "5");
                assert_eq!(actual, "6");
            }
            other => panic!("expected argument mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_marker_event_counts() {
        let interface = interface();
        let paused = interface.encode_log(Address::ZERO, "Paused", &[]).unwrap();
        let receipt = TransactionReceipt::default().with_log(paused);

        assert!(expect_marker_event(&interface, "Paused", &receipt, 1).is_ok());
        assert!(expect_marker_event(&interface, "Paused", &receipt, 0).is_err());
    }

    #[test]
    fn test_dyn_interface() {
        let interface: Box<dyn EventInterface> = Box::new(interface());
        let receipt = receipt_with_deposits(&[1]);
        assert!(expect_marker_event(&*interface, "Deposited", &receipt, 1).is_ok());
    }

    #[test]
    fn test_expect_arg_missing_position() {
        let event = DecodedEvent {
            name: "Paused".to_string(),
            address: Address::ZERO,
            args: Vec::new(),
        };
        match expect_arg(&event, 0, "invalid amount", U256::ZERO) {
            Err(ValsetError::ArgumentMismatch {
                position, actual, ..
            }) => {
                assert_eq!(position, 0);
                assert_eq!(actual, "<missing>");
            }
            other => panic!("expected argument mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_expect_arg_array_order_matters() {
        let a = Address::repeat_byte(1);
        let b = Address::repeat_byte(2);
        let event = DecodedEvent {
            name: "ValidatorSetUpdated".to_string(),
            address: Address::ZERO,
            args: vec![address_list(&[a, b])],
        };
        assert!(expect_arg(&event, 0, "invalid validator set", address_list(&[a, b])).is_ok());
        assert!(expect_arg(&event, 0, "invalid validator set", address_list(&[b, a])).is_err());
        assert!(expect_arg(&event, 0, "invalid validator set", address_list(&[a])).is_err());
    }
}
