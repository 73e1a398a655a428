use primer_types::{Address, TypesError, U256};
use thiserror::Error;

use crate::abi::Visibility;

/// Errors that can occur while validating or executing a call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VmError {
    #[error("Out of gas: used {used}, limit {limit}")]
    OutOfGas { used: u64, limit: u64 },

    #[error("Unknown contract artifact: {0}")]
    UnknownArtifact(String),

    #[error("Contract artifact already registered: {0}")]
    DuplicateArtifact(String),

    #[error("No contract deployed at {0}")]
    ContractNotFound(Address),

    #[error("Contract {contract} has no method {method}")]
    UnknownMethod { contract: String, method: String },

    #[error("{contract}.{method} is {visibility} and cannot be called from outside the contract")]
    Visibility {
        contract: String,
        method: String,
        visibility: Visibility,
    },

    #[error("{contract}.{method} is not payable")]
    NotPayable { contract: String, method: String },

    #[error("Invalid arguments for {method}: {reason}")]
    InvalidArguments { method: String, reason: String },

    #[error("Invalid return value from {method}: {reason}")]
    InvalidReturn { method: String, reason: String },

    #[error("Execution reverted{}", reason_suffix(.reason))]
    Reverted { reason: Option<String> },

    #[error("Insufficient funds for {address}: required {required}, available {available}")]
    InsufficientFunds {
        address: Address,
        required: U256,
        available: U256,
    },

    #[error("Read-only method {method} attempted to modify state")]
    StaticCallViolation { method: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error(transparent)]
    Types(#[from] TypesError),
}

fn reason_suffix(reason: &Option<String>) -> String {
    reason.as_ref().map(|r| format!(": {}", r)).unwrap_or_default()
}

impl VmError {
    /// Errors raised while validating a call against the ABI, before any
    /// state is read or written.
    pub fn is_link_error(&self) -> bool {
        matches!(
            self,
            VmError::UnknownArtifact(_)
                | VmError::UnknownMethod { .. }
                | VmError::Visibility { .. }
                | VmError::NotPayable { .. }
                | VmError::InvalidArguments { .. }
        )
    }
}
