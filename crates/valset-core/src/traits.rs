// crates/valset-core/src/traits.rs

use async_trait::async_trait;

use crate::error::ValsetError;
use crate::types::BlockNumber;

/// The chain a scenario runs against.
///
/// Implemented by valset-chain (in-memory simulation). A live node adapter
/// would forward `mine` to `hardhat_mine` / `anvil_mine`.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Return the current block height.
    async fn block_number(&self) -> Result<BlockNumber, ValsetError>;

    /// Advance the chain by exactly `blocks` blocks.
    ///
    /// Either the full advance happens or an error is returned; there is
    /// no partial-advance outcome.
    async fn mine(&self, blocks: BlockNumber) -> Result<(), ValsetError>;
}
