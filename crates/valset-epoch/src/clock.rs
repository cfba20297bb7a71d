// crates/valset-epoch/src/clock.rs
//
// Chain-advancing clock built on an `EpochSchedule`.
//
// The clock reads the height from the injected chain, works out how far
// the next boundary is, and mines up to it. "Before end" means one block
// short of the last block of the window, never the last block itself.

use std::fmt;
use std::sync::Arc;

use valset_core::config::HarnessConfig;
use valset_core::error::ValsetError;
use valset_core::traits::ChainClient;
use valset_core::BlockNumber;

use crate::schedule::EpochSchedule;

/// Blocks mined after reaching "before end" to land on the next window's first block.
const BLOCKS_TO_NEXT_START: BlockNumber = 2;

/// The kind of window a clock operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Epoch,
    Period,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::Epoch => write!(f, "epoch"),
            Boundary::Period => write!(f, "period"),
        }
    }
}

/// Drives a chain to epoch and period boundaries.
pub struct EpochClock {
    schedule: EpochSchedule,
    chain: Arc<dyn ChainClient>,
}

impl EpochClock {
    /// Create a clock for `chain` using `schedule`.
    pub fn new(schedule: EpochSchedule, chain: Arc<dyn ChainClient>) -> Self {
        Self { schedule, chain }
    }

    /// Create a clock from the timing fields of a harness configuration.
    pub fn from_config(
        config: &HarnessConfig,
        chain: Arc<dyn ChainClient>,
    ) -> Result<Self, ValsetError> {
        Ok(Self::new(EpochSchedule::from_config(config)?, chain))
    }

    /// The schedule this clock computes boundaries with.
    pub fn schedule(&self) -> &EpochSchedule {
        &self.schedule
    }

    /// Current height of the chain.
    pub async fn current_height(&self) -> Result<BlockNumber, ValsetError> {
        self.chain.block_number().await
    }

    /// Period the chain's current height belongs to.
    pub async fn current_period(&self) -> Result<BlockNumber, ValsetError> {
        let height = self.current_height().await?;
        Ok(self.schedule.period_of(height))
    }

    /// Mine until the chain is one block before the end of an epoch.
    ///
    /// Returns the number of blocks mined.
    pub async fn advance_to_before_epoch_end(&self) -> Result<BlockNumber, ValsetError> {
        self.advance_to_before_end(Boundary::Epoch).await
    }

    /// Mine until the chain is one block before the end of a period.
    ///
    /// Returns the number of blocks mined.
    pub async fn advance_to_before_period_end(&self) -> Result<BlockNumber, ValsetError> {
        self.advance_to_before_end(Boundary::Period).await
    }

    /// Mine until the chain sits on the first block of the next epoch.
    ///
    /// Returns the number of blocks mined.
    pub async fn advance_to_start_of_next_epoch(&self) -> Result<BlockNumber, ValsetError> {
        self.advance_to_start_of_next(Boundary::Epoch).await
    }

    /// Mine until the chain sits on the first block of the next period.
    ///
    /// Returns the number of blocks mined.
    pub async fn advance_to_start_of_next_period(&self) -> Result<BlockNumber, ValsetError> {
        self.advance_to_start_of_next(Boundary::Period).await
    }

    fn window(&self, boundary: Boundary) -> BlockNumber {
        match boundary {
            Boundary::Epoch => self.schedule.blocks_per_epoch(),
            Boundary::Period => self.schedule.blocks_per_period(),
        }
    }

    /// Blocks to mine from `height` to stand one block before the end.
    ///
    /// On the last block of a window the naive count is -1; it wraps by a
    /// full window so the target becomes one before the end of the next one.
    fn blocks_to_before_end(&self, height: BlockNumber, boundary: Boundary) -> BlockNumber {
        let until_end = match boundary {
            Boundary::Epoch => self.schedule.blocks_until_epoch_end(height),
            Boundary::Period => self.schedule.blocks_until_period_end(height),
        };
        match until_end.checked_sub(1) {
            Some(blocks) => blocks,
            None => self.window(boundary) - 1,
        }
    }

    async fn advance_to_before_end(&self, boundary: Boundary) -> Result<BlockNumber, ValsetError> {
        let height = self.chain.block_number().await?;
        let blocks = self.blocks_to_before_end(height, boundary);

        tracing::debug!(
            "Advancing {} blocks from height {} to before {} end",
            blocks,
            height,
            boundary
        );
        self.chain.mine(blocks).await?;
        Ok(blocks)
    }

    async fn advance_to_start_of_next(&self, boundary: Boundary) -> Result<BlockNumber, ValsetError> {
        let mined = self.advance_to_before_end(boundary).await?;
        self.chain.mine(BLOCKS_TO_NEXT_START).await?;
        let total = mined.checked_add(BLOCKS_TO_NEXT_START).ok_or_else(|| {
            ValsetError::Overflow(format!("blocks mined to cross the {} boundary", boundary))
        })?;

        tracing::debug!("Crossed {} boundary after {} blocks", boundary, total);
        Ok(total)
    }
}
