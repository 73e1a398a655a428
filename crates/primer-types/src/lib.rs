//! Primer Types - Core value types shared by the ledger, the example
//! contracts and the assertion harness.
//!
//! This crate provides:
//! - Addresses (20-byte, hex encoded)
//! - Hashes (32-byte, blake3 digests)
//! - U256 (256-bit unsigned integer)
//! - ABI values, parameter types and return tuples
//! - Events and transaction receipts
//! - Exact currency unit conversion (wei / gwei / ether)

pub mod address;
pub mod hash;
pub mod u256;
pub mod units;
pub mod value;
pub mod receipt;
pub mod error;

#[cfg(any(feature = "serde", feature = "borsh"))]
mod serialization;

pub use address::Address;
pub use hash::Hash;
pub use u256::U256;
pub use units::{format_ether, format_units, parse_ether, parse_units, Unit};
pub use value::{ParamType, Tuple, Value};
pub use receipt::{Event, Receipt};
pub use error::TypesError;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Address, Hash, U256,
        ParamType, Tuple, Value,
        Event, Receipt,
        TypesError,
    };
    pub use crate::units::{ether, format_ether, gwei, parse_ether};
}
