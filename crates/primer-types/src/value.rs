//! ABI values: what goes into a contract call and what comes back out.

use crate::address::Address;
use crate::error::TypesError;
use crate::u256::U256;
use std::fmt;
use std::ops::Index;

/// Declared type of a method input, output or event argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ParamType {
    Uint256,
    Bool,
    String,
    Address,
}

impl ParamType {
    /// Zero value returned when a method exits without an explicit return.
    pub fn zero_value(self) -> Value {
        match self {
            ParamType::Uint256 => Value::Uint(U256::ZERO),
            ParamType::Bool => Value::Bool(false),
            ParamType::String => Value::String(String::new()),
            ParamType::Address => Value::Address(Address::ZERO),
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParamType::Uint256 => "uint256",
            ParamType::Bool => "bool",
            ParamType::String => "string",
            ParamType::Address => "address",
        };
        f.write_str(name)
    }
}

/// A single ABI value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "borsh", derive(borsh::BorshSerialize, borsh::BorshDeserialize))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Uint(U256),
    Bool(bool),
    String(String),
    Address(Address),
}

impl Value {
    pub fn param_type(&self) -> ParamType {
        match self {
            Value::Uint(_) => ParamType::Uint256,
            Value::Bool(_) => ParamType::Bool,
            Value::String(_) => ParamType::String,
            Value::Address(_) => ParamType::Address,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_uint(&self) -> Option<U256> {
        match self {
            Value::Uint(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_address(&self) -> Option<Address> {
        match self {
            Value::Address(a) => Some(*a),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Word-aligned encoding used for calldata and log gas accounting.
    ///
    /// Static types take one 32-byte word; strings take a length word
    /// followed by the bytes padded to a word boundary.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Value::Uint(v) => v.to_be_bytes().to_vec(),
            Value::Bool(b) => U256::from_u64(*b as u64).to_be_bytes().to_vec(),
            Value::Address(a) => {
                let mut word = vec![0u8; 12];
                word.extend_from_slice(a.as_bytes());
                word
            }
            Value::String(s) => {
                let mut out = U256::from_u64(s.len() as u64).to_be_bytes().to_vec();
                out.extend_from_slice(s.as_bytes());
                let padding = (32 - s.len() % 32) % 32;
                out.resize(out.len() + padding, 0);
                out
            }
        }
    }

    /// Encode a sequence of values back to back.
    pub fn encode_all(values: &[Value]) -> Vec<u8> {
        values.iter().flat_map(Value::encode).collect()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Uint(v) => write!(f, "{}", v),
            Value::Bool(b) => write!(f, "{}", b),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Address(a) => write!(f, "{}", a),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<U256> for Value {
    fn from(v: U256) -> Self {
        Value::Uint(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Uint(U256::from_u64(v))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Address> for Value {
    fn from(a: Address) -> Self {
        Value::Address(a)
    }
}

fn mismatch(expected: ParamType, actual: &Value) -> TypesError {
    TypesError::TypeMismatch {
        expected: expected.to_string(),
        actual: actual.param_type().to_string(),
    }
}

impl TryFrom<Value> for String {
    type Error = TypesError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(mismatch(ParamType::String, &other)),
        }
    }
}

impl TryFrom<Value> for U256 {
    type Error = TypesError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.as_uint().ok_or_else(|| mismatch(ParamType::Uint256, &value))
    }
}

impl TryFrom<Value> for Address {
    type Error = TypesError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.as_address().ok_or_else(|| mismatch(ParamType::Address, &value))
    }
}

impl TryFrom<Value> for bool {
    type Error = TypesError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.as_bool().ok_or_else(|| mismatch(ParamType::Bool, &value))
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == Some(other.as_str())
    }
}

impl PartialEq<U256> for Value {
    fn eq(&self, other: &U256) -> bool {
        self.as_uint() == Some(*other)
    }
}

impl PartialEq<u64> for Value {
    fn eq(&self, other: &u64) -> bool {
        self.as_uint() == Some(U256::from_u64(*other))
    }
}

impl PartialEq<Address> for Value {
    fn eq(&self, other: &Address) -> bool {
        self.as_address() == Some(*other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

/// Ordered return values of a call, optionally named.
///
/// Indexable positionally (`result[0]`). A single-value tuple also compares
/// directly against plain values so `read("name")` can be asserted as a string.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Tuple {
    values: Vec<Value>,
    names: Vec<Option<String>>,
}

impl Tuple {
    pub fn new(values: Vec<Value>) -> Self {
        let names = vec![None; values.len()];
        Self { values, names }
    }

    /// Build from `(name, value)` pairs; empty names are treated as unnamed.
    pub fn named<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        let (names, values): (Vec<_>, Vec<_>) = fields
            .into_iter()
            .map(|(name, value)| {
                let name: String = name.into();
                ((!name.is_empty()).then_some(name), value)
            })
            .unzip();
        Self { values, names }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Look up a value by its declared output name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.names
            .iter()
            .position(|n| n.as_deref() == Some(name))
            .and_then(|i| self.values.get(i))
    }

    /// The only value of a single-output call.
    pub fn single(&self) -> Option<&Value> {
        match self.values.as_slice() {
            [value] => Some(value),
            _ => None,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

impl Index<usize> for Tuple {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.values[index]
    }
}

impl From<Vec<Value>> for Tuple {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}

impl IntoIterator for Tuple {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, ")")
    }
}

macro_rules! single_value_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PartialEq<$ty> for Tuple {
                fn eq(&self, other: &$ty) -> bool {
                    self.single().map_or(false, |v| v == other)
                }
            }
        )*
    };
}

single_value_eq!(&str, String, U256, u64, Address, bool, Value);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_values() {
        assert_eq!(ParamType::String.zero_value(), "");
        assert_eq!(ParamType::Uint256.zero_value(), 0u64);
        assert_eq!(ParamType::Bool.zero_value(), false);
        assert_eq!(ParamType::Address.zero_value(), Address::ZERO);
    }

    #[test]
    fn test_value_comparisons() {
        assert_eq!(Value::from("Example 1"), "Example 1");
        assert_ne!(Value::from("Example 1"), "Example 2");
        assert_ne!(Value::from(1u64), "1");
        assert_eq!(Value::from(3u64), U256::from_u64(3));
    }

    #[test]
    fn test_value_try_from_reports_mismatch() {
        let err = String::try_from(Value::from(1u64)).unwrap_err();
        assert_eq!(
            err,
            TypesError::TypeMismatch {
                expected: "string".into(),
                actual: "uint256".into()
            }
        );
        assert_eq!(U256::try_from(Value::from(5u64)).unwrap(), U256::from_u64(5));
    }

    #[test]
    fn test_string_encoding_is_word_aligned() {
        assert_eq!(Value::from("").encode().len(), 32);
        assert_eq!(Value::from("New name").encode().len(), 64);
        assert_eq!(Value::from("x".repeat(33)).encode().len(), 96);
        assert_eq!(Value::from(Address::ZERO).encode(), vec![0u8; 32]);
    }

    #[test]
    fn test_tuple_positional_and_named_access() {
        let tuple = Tuple::named([("first", Value::from("Example 7")), ("", Value::from("New name"))]);
        assert_eq!(tuple.len(), 2);
        assert_eq!(tuple[0], "Example 7");
        assert_eq!(tuple[1], "New name");
        assert_eq!(tuple.field("first"), Some(&Value::from("Example 7")));
        assert_eq!(tuple.field(""), None);
        assert!(tuple.single().is_none());
        assert_eq!(tuple.to_string(), "(\"Example 7\", \"New name\")");
    }

    #[test]
    fn test_single_value_tuple_compares_to_plain_values() {
        let tuple = Tuple::new(vec![Value::from(1u64)]);
        assert_eq!(tuple, 1u64);
        assert_ne!(tuple, 2u64);
        assert_ne!(Tuple::default(), 0u64);
    }
}
