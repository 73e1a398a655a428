//! Primer Example Contracts
//!
//! Minimal contracts grouped into three example sets:
//! - Constructors: how initial state is established
//! - Functions: visibility, mutability, modifiers and return values
//! - Variables: state variables and the call-context globals

pub mod constructors;
pub mod functions;
pub mod variables;

pub use constructors::{
    Constructors1, Constructors2, Constructors3, Constructors4, Constructors5, Constructors6, Parent1, Parent2,
};
pub use functions::{Functions1, Functions3, Functions4, Functions5, Functions6, Functions7};
pub use variables::{Variables1, Variables2, Variables3, Variables4, Variables5};

use primer_vm::{Artifact, Ledger, Revert, VmError};

/// Contract version
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Every example contract, in example-set order.
pub fn artifacts() -> Vec<Artifact> {
    vec![
        Artifact::of::<Constructors1>(),
        Artifact::of::<Constructors2>(),
        Artifact::of::<Constructors3>(),
        Artifact::of::<Constructors4>(),
        Artifact::of::<Constructors5>(),
        Artifact::of::<Constructors6>(),
        Artifact::of::<Functions1>(),
        Artifact::of::<Functions3>(),
        Artifact::of::<Functions4>(),
        Artifact::of::<Functions5>(),
        Artifact::of::<Functions6>(),
        Artifact::of::<Functions7>(),
        Artifact::of::<Variables1>(),
        Artifact::of::<Variables2>(),
        Artifact::of::<Variables3>(),
        Artifact::of::<Variables4>(),
        Artifact::of::<Variables5>(),
    ]
}

/// Make every example contract deployable on `ledger`.
pub fn register_all(ledger: &mut Ledger) -> Result<(), VmError> {
    for artifact in artifacts() {
        ledger.register(artifact)?;
    }
    Ok(())
}

/// Dispatch fallthrough. The ledger resolves methods against the ABI first,
/// so reaching this means a contract's ABI and dispatcher disagree.
pub(crate) fn unknown_method(method: &str) -> Revert {
    Revert::new(format!("no dispatch for {}", method))
}
