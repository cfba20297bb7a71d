// crates/valset-events/src/receipt.rs
//
// Transaction receipt model consumed by the assertion harness. Logs are
// plain `alloy_primitives::Log` values.

use alloy_primitives::{Log, B256};
use serde::{Deserialize, Serialize};

use valset_core::BlockNumber;

/// The result of a mined transaction. Logs are kept in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub transaction_hash: B256,
    pub block_number: BlockNumber,
    #[serde(default)]
    pub logs: Vec<Log>,
}

impl TransactionReceipt {
    /// Create a receipt with no logs.
    pub fn new(transaction_hash: B256, block_number: BlockNumber) -> Self {
        Self {
            transaction_hash,
            block_number,
            logs: Vec::new(),
        }
    }

    /// Append a log, keeping emission order.
    pub fn with_log(mut self, log: Log) -> Self {
        self.logs.push(log);
        self
    }

    pub fn logs(&self) -> &[Log] {
        &self.logs
    }
}
