//! Call context handed to contract code.
//!
//! Everything a contract may observe about its invocation (the `msg`, `tx`,
//! `block` and `this` globals of the source language) lives here and is passed
//! explicitly into every execution.

use borsh::{BorshDeserialize, BorshSerialize};
use primer_types::{Address, U256};

/// Metadata of the block a call executes in.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct BlockInfo {
    /// Block number
    pub number: u64,
    /// Block timestamp (seconds)
    pub timestamp: u64,
    /// Chain ID
    pub chain_id: u64,
    /// Fee recipient
    pub coinbase: Address,
    /// Block gas limit
    pub gas_limit: u64,
}

impl BlockInfo {
    pub fn genesis(chain_id: u64, timestamp: u64, coinbase: Address, gas_limit: u64) -> Self {
        Self {
            number: 0,
            timestamp,
            chain_id,
            coinbase,
            gas_limit,
        }
    }

    /// The block that a transaction sent now would be mined in.
    pub fn next(&self, block_time: u64) -> Self {
        Self {
            number: self.number + 1,
            timestamp: self.timestamp + block_time,
            ..self.clone()
        }
    }
}

/// Execution context for a contract call.
#[derive(Debug, Clone)]
pub struct CallContext {
    /// Address of the contract being executed
    pub this: Address,
    /// Immediate caller
    pub sender: Address,
    /// Account that signed the transaction
    pub origin: Address,
    /// Value sent with the call
    pub value: U256,
    /// Block the call executes in
    pub block: BlockInfo,
    /// Whether this is a read-only call (no state changes)
    pub is_static: bool,
}

impl CallContext {
    /// Context for a call or deployment sent directly by an account.
    pub fn new(this: Address, sender: Address, block: BlockInfo) -> Self {
        Self {
            this,
            sender,
            origin: sender,
            value: U256::ZERO,
            block,
            is_static: false,
        }
    }

    /// Set value.
    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    /// Set as static call.
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }
}
