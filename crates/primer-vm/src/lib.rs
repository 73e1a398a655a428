//! Primer VM - the simulated ledger environment the harness drives.
//!
//! This crate provides:
//! - Contract ABIs with visibility, mutability and payability
//! - Explicit call context (sender, origin, own address, value, block)
//! - Native contract execution over borsh-encoded storage
//! - Gas metering and fee accounting
//! - Atomic transactions with exact revert

pub mod abi;
pub mod context;
pub mod contract;
pub mod error;
pub mod gas_metering;
pub mod ledger;

pub use abi::{ConstructorAbi, ContractAbi, EventAbi, MethodAbi, Mutability, Param, Visibility};
pub use context::{BlockInfo, CallContext};
pub use contract::{require, Args, Artifact, Contract, Env, Revert};
pub use error::VmError;
pub use gas_metering::{GasSchedule, GasTracker};
pub use ledger::{Account, Ledger, LedgerConfig};

/// VM version constant
pub const VM_VERSION: u32 = 1;

/// Default gas limit for a single transaction
pub const DEFAULT_GAS_LIMIT: u64 = 30_000_000;

/// Default chain id of the development network
pub const DEV_CHAIN_ID: u64 = 31337;
