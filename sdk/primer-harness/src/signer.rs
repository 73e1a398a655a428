//! Pre-funded development accounts.

use primer_types::Address;
use std::fmt;

/// A deterministic dev account the harness can send transactions from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signer {
    index: u32,
    address: Address,
}

impl Signer {
    /// Signer number `index`; the same index always yields the same address.
    pub fn dev(index: u32) -> Self {
        Self {
            index,
            address: Address::dev_account(index),
        }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn address(&self) -> Address {
        self.address
    }
}

impl fmt::Display for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "signer#{} ({})", self.index, self.address)
    }
}

impl From<&Signer> for Address {
    fn from(signer: &Signer) -> Self {
        signer.address
    }
}

/// The first `count` dev signers.
pub fn dev_signers(count: u32) -> Vec<Signer> {
    (0..count).map(Signer::dev).collect()
}
