//! Error types for the harness.

use primer_vm::{Visibility, VmError};
use thiserror::Error;

/// Harness result type.
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Harness errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HarnessError {
    /// Deployment rejected or constructor reverted
    #[error("Deployment of {contract} failed: {reason}")]
    Deployment { contract: String, reason: String },

    /// Guard condition failed inside the callee
    #[error("{method} reverted{}", reason_suffix(.reason))]
    Revert { method: String, reason: Option<String> },

    /// Internal or private member accessed from outside the contract
    #[error("{method} is {visibility} and cannot be called from outside the contract")]
    Visibility { method: String, visibility: Visibility },

    /// No such member in the contract's ABI
    #[error("{contract} has no method {method}")]
    UnknownMethod { contract: String, method: String },

    /// Arguments do not match the ABI
    #[error("Invalid arguments for {method}: {reason}")]
    InvalidArguments { method: String, reason: String },

    /// Value attached to a method that cannot receive it
    #[error("{method} is not payable")]
    NonPayable { method: String },

    /// Any other ledger failure
    #[error("Ledger error: {0}")]
    Ledger(VmError),

    /// Expected event missing from a receipt
    #[error("Event {expected} was not emitted (emitted: [{}])", .emitted.join(", "))]
    EventNotFound { expected: String, emitted: Vec<String> },
}

fn reason_suffix(reason: &Option<String>) -> String {
    reason.as_ref().map(|r| format!(": {}", r)).unwrap_or_default()
}

impl HarnessError {
    /// Map a ledger error raised while deploying `contract`.
    pub fn deployment(contract: &str, err: VmError) -> Self {
        match err {
            VmError::UnknownArtifact(_)
            | VmError::Reverted { .. }
            | VmError::InvalidArguments { .. }
            | VmError::NotPayable { .. } => HarnessError::Deployment {
                contract: contract.to_string(),
                reason: err.to_string(),
            },
            other => HarnessError::Ledger(other),
        }
    }

    /// Map a ledger error raised while calling `method`.
    pub fn call(method: &str, err: VmError) -> Self {
        match err {
            VmError::Reverted { reason } => HarnessError::Revert {
                method: method.to_string(),
                reason,
            },
            VmError::Visibility { visibility, .. } => HarnessError::Visibility {
                method: method.to_string(),
                visibility,
            },
            VmError::UnknownMethod { contract, method } => HarnessError::UnknownMethod { contract, method },
            VmError::InvalidArguments { method, reason } => HarnessError::InvalidArguments { method, reason },
            VmError::NotPayable { method, .. } => HarnessError::NonPayable { method },
            other => HarnessError::Ledger(other),
        }
    }

    /// Whether the callee ran and rejected the call.
    pub fn is_revert(&self) -> bool {
        matches!(self, HarnessError::Revert { .. })
    }

    pub fn revert_reason(&self) -> Option<&str> {
        match self {
            HarnessError::Revert { reason, .. } => reason.as_deref(),
            _ => None,
        }
    }

    /// Whether the call was rejected against the ABI without reaching the ledger.
    pub fn is_link_error(&self) -> bool {
        matches!(
            self,
            HarnessError::Visibility { .. }
                | HarnessError::UnknownMethod { .. }
                | HarnessError::InvalidArguments { .. }
                | HarnessError::NonPayable { .. }
        )
    }
}

impl From<VmError> for HarnessError {
    fn from(e: VmError) -> Self {
        HarnessError::Ledger(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_error_mapping() {
        let err = HarnessError::call("setName1", VmError::Reverted { reason: Some("Caller must be owner".into()) });
        assert!(err.is_revert());
        assert_eq!(err.revert_reason(), Some("Caller must be owner"));
        assert_eq!(err.to_string(), "setName1 reverted: Caller must be owner");

        let err = HarnessError::call(
            "increment3",
            VmError::Visibility {
                contract: "Functions4".into(),
                method: "increment3".into(),
                visibility: Visibility::Internal,
            },
        );
        assert!(err.is_link_error());
        assert_eq!(
            err.to_string(),
            "increment3 is internal and cannot be called from outside the contract"
        );
    }

    #[test]
    fn test_deployment_error_mapping() {
        let err = HarnessError::deployment("Constructors3", VmError::Reverted { reason: Some("Name required".into()) });
        assert!(matches!(err, HarnessError::Deployment { ref contract, .. } if contract == "Constructors3"));

        let err = HarnessError::deployment("X", VmError::OutOfGas { used: 2, limit: 1 });
        assert!(matches!(err, HarnessError::Ledger(VmError::OutOfGas { .. })));
    }

    #[test]
    fn test_silent_revert_display() {
        let err = HarnessError::Revert { method: "add".into(), reason: None };
        assert_eq!(err.to_string(), "add reverted");
    }

    #[test]
    fn test_event_not_found_display() {
        let err = HarnessError::EventNotFound {
            expected: "NameChanged(\"x\")".into(),
            emitted: vec!["NameChanged(\"y\")".into()],
        };
        assert!(err.to_string().contains("emitted: [NameChanged(\"y\")]"));
    }
}
