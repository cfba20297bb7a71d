// crates/valset-events/src/validator_set.rs
//
// Ronin validator-set event catalog and typed expectations.
//
// Each `emit_*` method asserts that the corresponding event was emitted
// exactly once in a receipt and that its arguments match. Amounts are
// uint256; validator and producer sets are compared in order.

use alloy_primitives::{Address, U256};

use alloy_json_abi::Event;

use valset_core::error::ValsetError;

use crate::assertion::{expect_arg, expect_event, expect_marker_event};
use crate::interface::{event, indexed_param, param, AbiEventInterface, EventInterface};
use crate::receipt::TransactionReceipt;
use crate::value::address_list;

pub const CONTRACT_NAME: &str = "RoninValidatorSet";

pub const REWARD_DEPRECATED: &str = "RewardDeprecated";
pub const BLOCK_REWARD_SUBMITTED: &str = "BlockRewardSubmitted";
pub const MINING_REWARD_DISTRIBUTED: &str = "MiningRewardDistributed";
pub const BRIDGE_OPERATOR_REWARD_DISTRIBUTED: &str = "BridgeOperatorRewardDistributed";
pub const STAKING_REWARD_DISTRIBUTED: &str = "StakingRewardDistributed";
pub const VALIDATOR_SET_UPDATED: &str = "ValidatorSetUpdated";
pub const BLOCK_PRODUCER_SET_UPDATED: &str = "BlockProducerSetUpdated";
pub const ACTIVATED_BLOCK_PRODUCERS: &str = "ActivatedBlockProducers";
pub const DEACTIVATED_BLOCK_PRODUCERS: &str = "DeactivatedBlockProducers";
pub const WRAPPED_UP_EPOCH: &str = "WrappedUpEpoch";

/// Events emitted by the validator-set contract.
pub fn validator_set_events() -> Vec<Event> {
    vec![
        event(
            REWARD_DEPRECATED,
            vec![
                indexed_param("coinbaseAddr", "address"),
                param("rewardAmount", "uint256"),
            ],
        ),
        event(
            BLOCK_REWARD_SUBMITTED,
            vec![
                indexed_param("coinbaseAddr", "address"),
                param("submittedAmount", "uint256"),
                param("bonusAmount", "uint256"),
            ],
        ),
        event(
            MINING_REWARD_DISTRIBUTED,
            vec![
                indexed_param("consensusAddr", "address"),
                indexed_param("recipientAddr", "address"),
                param("amount", "uint256"),
            ],
        ),
        event(
            BRIDGE_OPERATOR_REWARD_DISTRIBUTED,
            vec![
                indexed_param("consensusAddr", "address"),
                indexed_param("recipientAddr", "address"),
                param("amount", "uint256"),
            ],
        ),
        event(STAKING_REWARD_DISTRIBUTED, vec![param("amount", "uint256")]),
        event(VALIDATOR_SET_UPDATED, vec![param("consensusAddrs", "address[]")]),
        event(BLOCK_PRODUCER_SET_UPDATED, vec![param("consensusAddrs", "address[]")]),
        event(ACTIVATED_BLOCK_PRODUCERS, vec![param("consensusAddrs", "address[]")]),
        event(DEACTIVATED_BLOCK_PRODUCERS, vec![param("consensusAddrs", "address[]")]),
        event(WRAPPED_UP_EPOCH, Vec::new()),
    ]
}

/// Event interface of the validator-set contract, not bound to an address.
pub fn validator_set_interface() -> AbiEventInterface {
    AbiEventInterface::new(CONTRACT_NAME, validator_set_events())
}

/// Typed assertions for validator-set events.
pub struct ValidatorSetExpects<'a> {
    interface: &'a dyn EventInterface,
}

impl<'a> ValidatorSetExpects<'a> {
    pub fn new(interface: &'a dyn EventInterface) -> Self {
        Self { interface }
    }

    pub fn emit_reward_deprecated(
        &self,
        receipt: &TransactionReceipt,
        coinbase: Address,
        deprecated_reward: U256,
    ) -> Result<(), ValsetError> {
        expect_event(
            self.interface,
            REWARD_DEPRECATED,
            receipt,
            |event| {
                expect_arg(event, 0, "invalid coinbase address", coinbase)?;
                expect_arg(event, 1, "invalid reward", deprecated_reward)
            },
            1,
        )
    }

    pub fn emit_block_reward_submitted(
        &self,
        receipt: &TransactionReceipt,
        coinbase: Address,
        submitted_reward: U256,
        staking_vesting: U256,
    ) -> Result<(), ValsetError> {
        expect_event(
            self.interface,
            BLOCK_REWARD_SUBMITTED,
            receipt,
            |event| {
                expect_arg(event, 0, "invalid coinbase address", coinbase)?;
                expect_arg(event, 1, "invalid submitted reward", submitted_reward)?;
                expect_arg(event, 2, "invalid staking vesting", staking_vesting)
            },
            1,
        )
    }

    pub fn emit_mining_reward_distributed(
        &self,
        receipt: &TransactionReceipt,
        coinbase: Address,
        recipient: Address,
        amount: U256,
    ) -> Result<(), ValsetError> {
        self.expect_reward_distributed(MINING_REWARD_DISTRIBUTED, receipt, coinbase, recipient, amount)
    }

    pub fn emit_bridge_operator_reward_distributed(
        &self,
        receipt: &TransactionReceipt,
        coinbase: Address,
        recipient: Address,
        amount: U256,
    ) -> Result<(), ValsetError> {
        self.expect_reward_distributed(
            BRIDGE_OPERATOR_REWARD_DISTRIBUTED,
            receipt,
            coinbase,
            recipient,
            amount,
        )
    }

    pub fn emit_staking_reward_distributed(
        &self,
        receipt: &TransactionReceipt,
        amount: U256,
    ) -> Result<(), ValsetError> {
        expect_event(
            self.interface,
            STAKING_REWARD_DISTRIBUTED,
            receipt,
            |event| expect_arg(event, 0, "invalid distributing reward", amount),
            1,
        )
    }

    pub fn emit_validator_set_updated(
        &self,
        receipt: &TransactionReceipt,
        validators: &[Address],
    ) -> Result<(), ValsetError> {
        self.expect_address_set(VALIDATOR_SET_UPDATED, receipt, "invalid validator set", validators)
    }

    pub fn emit_block_producer_set_updated(
        &self,
        receipt: &TransactionReceipt,
        producers: &[Address],
    ) -> Result<(), ValsetError> {
        self.expect_address_set(BLOCK_PRODUCER_SET_UPDATED, receipt, "invalid validator set", producers)
    }

    pub fn emit_activated_block_producers(
        &self,
        receipt: &TransactionReceipt,
        producers: &[Address],
    ) -> Result<(), ValsetError> {
        self.expect_address_set(
            ACTIVATED_BLOCK_PRODUCERS,
            receipt,
            "invalid activated producer set",
            producers,
        )
    }

    pub fn emit_deactivated_block_producers(
        &self,
        receipt: &TransactionReceipt,
        producers: &[Address],
    ) -> Result<(), ValsetError> {
        self.expect_address_set(
            DEACTIVATED_BLOCK_PRODUCERS,
            receipt,
            "invalid deactivated producer set",
            producers,
        )
    }

    pub fn emit_wrapped_up_epoch(&self, receipt: &TransactionReceipt) -> Result<(), ValsetError> {
        expect_marker_event(self.interface, WRAPPED_UP_EPOCH, receipt, 1)
    }

    fn expect_reward_distributed(
        &self,
        event_name: &str,
        receipt: &TransactionReceipt,
        coinbase: Address,
        recipient: Address,
        amount: U256,
    ) -> Result<(), ValsetError> {
        expect_event(
            self.interface,
            event_name,
            receipt,
            |event| {
                expect_arg(event, 0, "invalid coinbase address", coinbase)?;
                expect_arg(event, 1, "invalid recipient address", recipient)?;
                expect_arg(event, 2, "invalid amount", amount)
            },
            1,
        )
    }

    fn expect_address_set(
        &self,
        event_name: &str,
        receipt: &TransactionReceipt,
        label: &str,
        expected: &[Address],
    ) -> Result<(), ValsetError> {
        expect_event(
            self.interface,
            event_name,
            receipt,
            |event| expect_arg(event, 0, label, address_list(expected)),
            1,
        )
    }
}
