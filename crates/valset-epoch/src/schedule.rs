// crates/valset-epoch/src/schedule.rs
//
// Epoch and period boundary arithmetic.
//
// An epoch is a fixed run of `blocks_per_epoch` blocks; a period is
// `epochs_per_period` consecutive epochs. The last block of an epoch or
// period belongs to the window it closes. Block 0 is in period 0; every
// other block is in period `block / blocks_per_period + 1`.

use serde::{Deserialize, Serialize};

use valset_core::config::HarnessConfig;
use valset_core::error::ValsetError;
use valset_core::BlockNumber;

/// Fixed timing parameters of a chain.
///
/// Deserialization goes through `EpochSchedule::new`, so a decoded
/// schedule obeys the same rules as a constructed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScheduleParams")]
pub struct EpochSchedule {
    /// Minimum lead, in blocks, a scheduled change needs before its epoch starts.
    min_offset: BlockNumber,
    /// Number of blocks per epoch.
    blocks_per_epoch: BlockNumber,
    /// Number of epochs per period.
    epochs_per_period: BlockNumber,
}

#[derive(Deserialize)]
struct ScheduleParams {
    min_offset: BlockNumber,
    blocks_per_epoch: BlockNumber,
    epochs_per_period: BlockNumber,
}

impl TryFrom<ScheduleParams> for EpochSchedule {
    type Error = ValsetError;

    fn try_from(params: ScheduleParams) -> Result<Self, Self::Error> {
        Self::new(
            params.min_offset,
            params.blocks_per_epoch,
            params.epochs_per_period,
        )
    }
}

impl EpochSchedule {
    /// Create a schedule.
    ///
    /// # Errors
    /// Returns `ValsetError::Config` if either length is zero or the period
    /// length does not fit in a `BlockNumber`.
    pub fn new(
        min_offset: BlockNumber,
        blocks_per_epoch: BlockNumber,
        epochs_per_period: BlockNumber,
    ) -> Result<Self, ValsetError> {
        if blocks_per_epoch == 0 {
            return Err(ValsetError::Config(
                "blocks_per_epoch must be greater than zero".to_string(),
            ));
        }
        if epochs_per_period == 0 {
            return Err(ValsetError::Config(
                "epochs_per_period must be greater than zero".to_string(),
            ));
        }
        if blocks_per_epoch.checked_mul(epochs_per_period).is_none() {
            return Err(ValsetError::Config(format!(
                "period length {} x {} overflows the block number",
                blocks_per_epoch, epochs_per_period
            )));
        }

        Ok(Self {
            min_offset,
            blocks_per_epoch,
            epochs_per_period,
        })
    }

    /// Create a schedule from the timing fields of a harness configuration.
    pub fn from_config(config: &HarnessConfig) -> Result<Self, ValsetError> {
        Self::new(
            config.min_offset,
            config.blocks_per_epoch,
            config.epochs_per_period,
        )
    }

    pub fn min_offset(&self) -> BlockNumber {
        self.min_offset
    }

    pub fn blocks_per_epoch(&self) -> BlockNumber {
        self.blocks_per_epoch
    }

    pub fn epochs_per_period(&self) -> BlockNumber {
        self.epochs_per_period
    }

    /// Number of blocks per period. Always derived from its two factors.
    pub fn blocks_per_period(&self) -> BlockNumber {
        self.blocks_per_epoch * self.epochs_per_period
    }

    /// First block of the earliest epoch that starts strictly after
    /// `block + min_offset`.
    ///
    /// # Errors
    /// Returns `ValsetError::Overflow` if that block is not representable.
    pub fn start_of_next_epoch(&self, block: BlockNumber) -> Result<BlockNumber, ValsetError> {
        block
            .checked_add(self.min_offset)
            .map(|lead| lead / self.blocks_per_epoch + 1)
            .and_then(|epoch| epoch.checked_mul(self.blocks_per_epoch))
            .ok_or_else(|| {
                ValsetError::Overflow(format!(
                    "next epoch after block {} with offset {}",
                    block, self.min_offset
                ))
            })
    }

    /// Blocks remaining in the epoch after `block`; 0 on its last block.
    pub fn blocks_until_epoch_end(&self, block: BlockNumber) -> BlockNumber {
        blocks_until_window_end(block, self.blocks_per_epoch)
    }

    /// Blocks remaining in the period after `block`; 0 on its last block.
    pub fn blocks_until_period_end(&self, block: BlockNumber) -> BlockNumber {
        blocks_until_window_end(block, self.blocks_per_period())
    }

    /// Last block of the epoch containing `block`.
    ///
    /// # Errors
    /// Returns `ValsetError::Overflow` if the epoch runs past the largest block number.
    pub fn end_of_current_epoch(&self, block: BlockNumber) -> Result<BlockNumber, ValsetError> {
        window_end(block, self.blocks_until_epoch_end(block), "epoch")
    }

    /// Last block of the period containing `block`.
    ///
    /// # Errors
    /// Returns `ValsetError::Overflow` if the period runs past the largest block number.
    pub fn end_of_current_period(&self, block: BlockNumber) -> Result<BlockNumber, ValsetError> {
        window_end(block, self.blocks_until_period_end(block), "period")
    }

    /// Period number of `block`.
    pub fn period_of(&self, block: BlockNumber) -> BlockNumber {
        if block == 0 {
            return 0;
        }
        block / self.blocks_per_period() + 1
    }
}

fn blocks_until_window_end(block: BlockNumber, window: BlockNumber) -> BlockNumber {
    (window - 1) - (block % window)
}

fn window_end(
    block: BlockNumber,
    remaining: BlockNumber,
    kind: &str,
) -> Result<BlockNumber, ValsetError> {
    block.checked_add(remaining).ok_or_else(|| {
        ValsetError::Overflow(format!("end of the {} containing block {}", kind, block))
    })
}
