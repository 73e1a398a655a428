use crate::error::TypesError;
use std::fmt;
use std::str::FromStr;

/// 20-byte account or contract address.
/// Display format: lowercase hex with a `0x` prefix.
///
/// # Derivation
/// - dev accounts: `blake3("primer/account" || index_be)[0..20]`
/// - contracts: `blake3("primer/contract" || deployer || nonce_be)[0..20]`
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address([u8; 20]);

impl Address {
    pub const ZERO: Self = Self([0u8; 20]);
    pub const LEN: usize = 20;

    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Create from a byte slice
    pub fn from_slice(slice: &[u8]) -> Result<Self, TypesError> {
        if slice.len() != Self::LEN {
            return Err(TypesError::InvalidAddressLength(slice.len()));
        }
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(slice);
        Ok(Self(bytes))
    }

    /// Deterministic address of the pre-funded development account at `index`.
    pub fn dev_account(index: u32) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"primer/account");
        hasher.update(&index.to_be_bytes());
        Self::truncate(hasher.finalize().as_bytes())
    }

    /// Address of the contract created by `deployer` with the given nonce.
    pub fn contract(deployer: &Address, nonce: u64) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"primer/contract");
        hasher.update(&deployer.0);
        hasher.update(&nonce.to_be_bytes());
        Self::truncate(hasher.finalize().as_bytes())
    }

    fn truncate(digest: &[u8; 32]) -> Self {
        let mut addr = [0u8; 20];
        addr.copy_from_slice(&digest[..20]);
        Self(addr)
    }

    /// Check if this is the zero address
    pub fn is_zero(&self) -> bool {
        self == &Self::ZERO
    }

    /// Convert to hex string without 0x prefix
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address(0x{})", self.to_hex())
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::UpperHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode_upper(self.0))
    }
}

impl FromStr for Address {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| TypesError::InvalidAddressFormat(s.to_string()))?;
        let bytes = hex::decode(digits)?;
        Self::from_slice(&bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_zero() {
        assert_eq!(Address::ZERO.as_bytes(), &[0u8; 20]);
        assert!(Address::ZERO.is_zero());
    }

    #[test]
    fn test_dev_accounts_are_distinct_and_stable() {
        let a0 = Address::dev_account(0);
        let a1 = Address::dev_account(1);
        assert_ne!(a0, a1);
        assert_eq!(a0, Address::dev_account(0));
        assert!(!a0.is_zero());
    }

    #[test]
    fn test_contract_address_depends_on_nonce() {
        let deployer = Address::dev_account(0);
        assert_ne!(Address::contract(&deployer, 0), Address::contract(&deployer, 1));
        assert_ne!(Address::contract(&deployer, 0), deployer);
    }

    #[test]
    fn test_address_hex_parse() {
        let addr = Address::from_bytes([0xab; 20]);
        let s = addr.to_string();
        assert!(s.starts_with("0x"));
        assert_eq!(s.len(), 42);
        assert_eq!(s.parse::<Address>().unwrap(), addr);
    }

    #[test]
    fn test_address_parse_rejects_bad_input() {
        assert!(matches!(
            "abcd".parse::<Address>(),
            Err(TypesError::InvalidAddressFormat(_))
        ));
        assert!(matches!(
            "0x1234".parse::<Address>(),
            Err(TypesError::InvalidAddressLength(2))
        ));
        assert!(matches!("0xzz".parse::<Address>(), Err(TypesError::InvalidHex(_))));
    }
}
