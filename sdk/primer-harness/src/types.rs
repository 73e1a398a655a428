//! Harness request options and call outcomes.

use primer_types::{Address, Receipt, Tuple, U256};

/// Deployment options.
#[derive(Debug, Clone, Default)]
pub struct DeployOptions {
    /// Deployer (defaults to the first signer)
    pub from: Option<Address>,
    /// Value sent to the constructor
    pub value: Option<U256>,
}

impl DeployOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set deployer address.
    pub fn from(mut self, addr: Address) -> Self {
        self.from = Some(addr);
        self
    }

    /// Set value.
    pub fn value(mut self, value: U256) -> Self {
        self.value = Some(value);
        self
    }
}

/// Call options.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    /// Caller (defaults to the signer the handle is connected to)
    pub from: Option<Address>,
    /// Value sent with the call
    pub value: Option<U256>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set caller address.
    pub fn from(mut self, addr: Address) -> Self {
        self.from = Some(addr);
        self
    }

    /// Set value.
    pub fn value(mut self, value: U256) -> Self {
        self.value = Some(value);
        self
    }
}

/// Result of [`call`](crate::ContractHandle::call).
#[derive(Debug, Clone, PartialEq)]
pub enum CallOutcome {
    /// Decoded return values of a read-only call
    Values(Tuple),
    /// Receipt of a mined transaction
    Transaction(Receipt),
}

impl CallOutcome {
    pub fn values(&self) -> Option<&Tuple> {
        match self {
            CallOutcome::Values(values) => Some(values),
            CallOutcome::Transaction(_) => None,
        }
    }

    pub fn receipt(&self) -> Option<&Receipt> {
        match self {
            CallOutcome::Transaction(receipt) => Some(receipt),
            CallOutcome::Values(_) => None,
        }
    }

    pub fn into_values(self) -> Option<Tuple> {
        match self {
            CallOutcome::Values(values) => Some(values),
            CallOutcome::Transaction(_) => None,
        }
    }

    pub fn into_receipt(self) -> Option<Receipt> {
        match self {
            CallOutcome::Transaction(receipt) => Some(receipt),
            CallOutcome::Values(_) => None,
        }
    }

    pub fn is_transaction(&self) -> bool {
        matches!(self, CallOutcome::Transaction(_))
    }
}
