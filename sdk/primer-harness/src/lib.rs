//! Primer Harness
//!
//! Deploys the example contracts onto a simulated ledger and asserts their
//! observable behaviour: return values, balances, events and reverts.
//!
//! # Example
//! ```rust
//! use primer_harness::{CallOptions, DeployOptions, Harness};
//!
//! let harness = Harness::dev().unwrap();
//! let contract = harness
//!     .deploy("Constructors3", &["Example 3".into()], DeployOptions::default())
//!     .unwrap();
//! assert_eq!(contract.read("name", &[]).unwrap(), "Example 3");
//!
//! let receipt = harness
//!     .deploy("Functions7", &[], DeployOptions::default())
//!     .unwrap()
//!     .send("setName1", &[], CallOptions::default())
//!     .unwrap();
//! harness.expect_event(&receipt, "NameChanged", &["New name".into()]).unwrap();
//! ```

pub mod config;
pub mod contract;
pub mod errors;
pub mod events;
pub mod harness;
pub mod signer;
pub mod telemetry;
pub mod types;

pub use config::HarnessConfig;
pub use contract::{ContractHandle, SharedLedger};
pub use errors::{HarnessError, Result};
pub use events::{events_named, expect_event};
pub use harness::Harness;
pub use signer::Signer;
pub use telemetry::init_telemetry;
pub use types::*;

/// Re-export primer-types for convenience
pub use primer_types::{format_ether, parse_ether, units, Address, Event, Hash, Receipt, Tuple, Value, U256};
pub use primer_vm::{Visibility, VmError};
