//! Event assertions over transaction receipts.

use primer_types::{Event, Receipt, Value};

use crate::errors::{HarnessError, Result};

/// Assert that `receipt` carries an event called `name` whose arguments
/// equal `args`, position by position.
pub fn expect_event<'a>(receipt: &'a Receipt, name: &str, args: &[Value]) -> Result<&'a Event> {
    receipt.find_event(name, args).ok_or_else(|| HarnessError::EventNotFound {
        expected: Event::new(receipt.to.unwrap_or_default(), name, args.to_vec()).to_string(),
        emitted: receipt.events.iter().map(Event::to_string).collect(),
    })
}

/// Every event in `receipt` called `name`, in emission order.
pub fn events_named<'a>(receipt: &'a Receipt, name: &str) -> Vec<&'a Event> {
    receipt.events.iter().filter(|e| e.name == name).collect()
}

/// `receipt` as a JSON string, for trace logs.
pub fn receipt_json(receipt: &Receipt) -> String {
    serde_json::to_string(receipt).unwrap_or_else(|e| format!("<unencodable receipt: {}>", e))
}
