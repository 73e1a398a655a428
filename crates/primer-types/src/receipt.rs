use crate::address::Address;
use crate::hash::Hash;
use crate::u256::U256;
use crate::value::Value;
use std::fmt;

/// Event emitted by a contract during a transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// Address of the contract that emitted this event
    pub address: Address,
    /// Event name as declared in the contract ABI
    pub name: String,
    /// Positional arguments
    pub args: Vec<Value>,
    /// Index within the transaction
    pub log_index: u32,
}

impl Event {
    pub fn new(address: Address, name: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            address,
            name: name.into(),
            args,
            log_index: 0,
        }
    }

    /// Name and every positional argument match, in order.
    pub fn matches(&self, name: &str, args: &[Value]) -> bool {
        self.name == name && self.args.as_slice() == args
    }

    /// Bytes billed as log data.
    pub fn data_len(&self) -> usize {
        Value::encode_all(&self.args).len()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}

/// Result of a mined transaction (deploy or state-mutating call).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Receipt {
    /// Hash of the transaction
    pub tx_hash: Hash,
    /// Number of the block containing this transaction
    pub block_number: u64,
    /// Address of the sender
    pub from: Address,
    /// Address of the callee (None for contract creation)
    pub to: Option<Address>,
    /// Address of created contract (if contract creation)
    pub contract_address: Option<Address>,
    /// Whether the transaction succeeded
    pub status: bool,
    /// Gas used by this transaction
    pub gas_used: u64,
    /// Price paid per unit of gas
    pub effective_gas_price: U256,
    /// Value transferred to the callee
    pub value: U256,
    /// Events emitted during execution, in order
    pub events: Vec<Event>,
}

impl Receipt {
    /// Check if transaction succeeded
    pub fn is_success(&self) -> bool {
        self.status
    }

    /// Network fee charged to the sender.
    pub fn fee(&self) -> U256 {
        U256::from_u64(self.gas_used).saturating_mul(&self.effective_gas_price)
    }

    /// All events with the given name, in emission order.
    pub fn events_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Event> + 'a {
        self.events.iter().filter(move |e| e.name == name)
    }

    /// First event matching name and arguments.
    pub fn find_event(&self, name: &str, args: &[Value]) -> Option<&Event> {
        self.events.iter().find(|e| e.matches(name, args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt_with(events: Vec<Event>) -> Receipt {
        Receipt {
            tx_hash: Hash::compute(b"tx"),
            block_number: 1,
            from: Address::dev_account(0),
            to: Some(Address::dev_account(1)),
            contract_address: None,
            status: true,
            gas_used: 21_000,
            effective_gas_price: U256::GWEI,
            value: U256::ZERO,
            events,
        }
    }

    #[test]
    fn test_event_matching_is_positional() {
        let event = Event::new(Address::ZERO, "Pair", vec!["a".into(), "b".into()]);
        assert!(event.matches("Pair", &["a".into(), "b".into()]));
        assert!(!event.matches("Pair", &["b".into(), "a".into()]));
        assert!(!event.matches("Pair", &["a".into()]));
        assert!(!event.matches("Other", &["a".into(), "b".into()]));
        assert_eq!(event.to_string(), "Pair(\"a\", \"b\")");
    }

    #[test]
    fn test_receipt_fee() {
        let receipt = receipt_with(vec![]);
        assert_eq!(receipt.fee(), U256::from_u64(21_000 * 1_000_000_000));
        assert!(receipt.is_success());
    }

    #[test]
    fn test_receipt_event_lookup() {
        let receipt = receipt_with(vec![
            Event::new(Address::ZERO, "NameChanged", vec!["New name".into()]),
            Event::new(Address::ZERO, "Paid", vec![1u64.into()]),
        ]);
        assert_eq!(receipt.events_named("NameChanged").count(), 1);
        assert!(receipt.find_event("Paid", &[1u64.into()]).is_some());
        assert!(receipt.find_event("Paid", &[2u64.into()]).is_none());
    }
}
