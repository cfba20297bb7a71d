// crates/valset-chain/src/simulated.rs
//
// In-memory chain implementing the `ChainClient` trait.
//
// The height only moves when a scenario mines blocks. Every mine request is
// recorded as the quantity a `hardhat_mine` call would have carried, so
// tests can assert on exactly what a clock asked the chain to do. A failure
// can be armed for the next request to exercise error propagation.

use std::sync::RwLock;

use async_trait::async_trait;

use valset_core::config::HarnessConfig;
use valset_core::error::ValsetError;
use valset_core::traits::ChainClient;
use valset_core::BlockNumber;

use crate::quantity::to_quantity;

#[derive(Debug, Default)]
struct ChainState {
    height: BlockNumber,
    mine_requests: Vec<String>,
    armed_failure: Option<String>,
}

/// Simulated chain with a mutable block height.
#[derive(Debug, Default)]
pub struct SimulatedChain {
    state: RwLock<ChainState>,
}

impl SimulatedChain {
    /// Create a chain positioned at `height`.
    pub fn new(height: BlockNumber) -> Self {
        Self {
            state: RwLock::new(ChainState {
                height,
                ..ChainState::default()
            }),
        }
    }

    /// Create a chain positioned at the configured initial height.
    pub fn from_config(config: &HarnessConfig) -> Self {
        Self::new(config.initial_height)
    }

    /// Return the quantities of every successful mine request, oldest first.
    pub fn mine_requests(&self) -> Result<Vec<String>, ValsetError> {
        let state = self
            .state
            .read()
            .map_err(|e| ValsetError::Chain(format!("RwLock poisoned: {}", e)))?;
        Ok(state.mine_requests.clone())
    }

    /// Make the next height query or mine request fail with `reason`.
    pub fn fail_next_request(&self, reason: &str) -> Result<(), ValsetError> {
        let mut state = self
            .state
            .write()
            .map_err(|e| ValsetError::Chain(format!("RwLock poisoned: {}", e)))?;
        state.armed_failure = Some(reason.to_string());
        Ok(())
    }
}

fn take_armed_failure(state: &mut ChainState) -> Result<(), ValsetError> {
    match state.armed_failure.take() {
        Some(reason) => Err(ValsetError::Chain(reason)),
        None => Ok(()),
    }
}

#[async_trait]
impl ChainClient for SimulatedChain {
    async fn block_number(&self) -> Result<BlockNumber, ValsetError> {
        let mut state = self
            .state
            .write()
            .map_err(|e| ValsetError::Chain(format!("RwLock poisoned: {}", e)))?;
        take_armed_failure(&mut state)?;
        Ok(state.height)
    }

    async fn mine(&self, blocks: BlockNumber) -> Result<(), ValsetError> {
        let mut state = self
            .state
            .write()
            .map_err(|e| ValsetError::Chain(format!("RwLock poisoned: {}", e)))?;
        take_armed_failure(&mut state)?;

        let target = state.height.checked_add(blocks).ok_or_else(|| {
            ValsetError::Chain(format!(
                "Mining {} blocks from height {} overflows the block number",
                blocks, state.height
            ))
        })?;

        let quantity = to_quantity(blocks);
        tracing::debug!("Mined {} blocks ({}): {} -> {}", blocks, quantity, state.height, target);
        state.height = target;
        state.mine_requests.push(quantity);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_starts_at_given_height() {
        let chain = SimulatedChain::new(42);
        assert_eq!(chain.block_number().await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_default_starts_at_genesis() {
        let chain = SimulatedChain::default();
        assert_eq!(chain.block_number().await.unwrap(), 0);
        assert!(chain.mine_requests().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mine_advances_height() {
        let chain = SimulatedChain::new(10);
        chain.mine(5).await.unwrap();
        chain.mine(0).await.unwrap();
        assert_eq!(chain.block_number().await.unwrap(), 15);
        assert_eq!(chain.mine_requests().unwrap(), vec!["0x5", "0x0"]);
    }

    #[tokio::test]
    async fn test_from_config() {
        let config = HarnessConfig {
            initial_height: 777,
            ..HarnessConfig::default()
        };
        let chain = SimulatedChain::from_config(&config);
        assert_eq!(chain.block_number().await.unwrap(), 777);
    }

    #[tokio::test]
    async fn test_overflow_is_rejected_without_moving() {
        let chain = SimulatedChain::new(BlockNumber::MAX);
        let err = chain.mine(1).await.unwrap_err();
        assert!(matches!(err, ValsetError::Chain(_)));
        assert_eq!(chain.block_number().await.unwrap(), BlockNumber::MAX);
        assert!(chain.mine_requests().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_armed_failure_fires_once() {
        let chain = SimulatedChain::new(3);
        chain.fail_next_request("node unavailable").unwrap();

        match chain.mine(4).await {
            Err(ValsetError::Chain(reason)) => assert_eq!(reason, "node unavailable"),
            other => panic!("expected chain error, got {:?}", other),
        }
        assert_eq!(chain.block_number().await.unwrap(), 3);

        chain.mine(4).await.unwrap();
        assert_eq!(chain.block_number().await.unwrap(), 7);
    }
}
