use primer_types::{Event, Value};

use crate::error::VmError;

/// Gas schedule for ledger operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasSchedule {
    // TX
    pub tx_base: u64,                  // 21,000
    pub tx_create: u64,                // 32,000
    pub tx_data_zero_byte: u64,        // 4
    pub tx_data_nonzero_byte: u64,     // 16

    // Storage (per 32-byte word)
    pub storage_write_new: u64,        // 20,000
    pub storage_write_update: u64,     // 5,000

    // Transfers
    pub call_value_transfer: u64,      // 9,000

    // Events
    pub log_base: u64,                 // 375
    pub log_per_topic: u64,            // 375
    pub log_per_byte: u64,             // 8
}

impl Default for GasSchedule {
    fn default() -> Self {
        Self {
            tx_base: 21_000,
            tx_create: 32_000,
            tx_data_zero_byte: 4,
            tx_data_nonzero_byte: 16,

            storage_write_new: 20_000,
            storage_write_update: 5_000,

            call_value_transfer: 9_000,

            log_base: 375,
            log_per_topic: 375,
            log_per_byte: 8,
        }
    }
}

/// Size of a storage word in bytes.
const WORD: usize = 32;

/// Gas tracking during execution.
#[derive(Debug, Clone)]
pub struct GasTracker {
    /// Gas limit for this execution
    limit: u64,
    /// Gas already used
    used: u64,
    /// Gas schedule
    schedule: GasSchedule,
}

impl GasTracker {
    /// Create a new gas tracker.
    pub fn new(limit: u64, schedule: GasSchedule) -> Self {
        Self {
            limit,
            used: 0,
            schedule,
        }
    }

    /// Create with default schedule.
    pub fn with_default_schedule(limit: u64) -> Self {
        Self::new(limit, GasSchedule::default())
    }

    /// Get gas limit.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Get gas used.
    pub fn used(&self) -> u64 {
        self.used
    }

    /// Get remaining gas.
    pub fn remaining(&self) -> u64 {
        self.limit - self.used
    }

    /// Charge gas.
    pub fn charge(&mut self, amount: u64) -> Result<(), VmError> {
        let new_used = self.used.checked_add(amount).ok_or(VmError::OutOfGas {
            used: u64::MAX,
            limit: self.limit,
        })?;

        if new_used > self.limit {
            Err(VmError::OutOfGas {
                used: new_used,
                limit: self.limit,
            })
        } else {
            self.used = new_used;
            Ok(())
        }
    }

    /// Intrinsic cost of a transaction carrying `calldata`.
    pub fn charge_intrinsic(&mut self, calldata: &[u8], is_create: bool) -> Result<(), VmError> {
        let zeros = calldata.iter().filter(|&&b| b == 0).count() as u64;
        let nonzeros = calldata.len() as u64 - zeros;
        let mut cost = self.schedule.tx_base
            + zeros * self.schedule.tx_data_zero_byte
            + nonzeros * self.schedule.tx_data_nonzero_byte;
        if is_create {
            cost += self.schedule.tx_create;
        }
        self.charge(cost)
    }

    /// Charge for moving value into the callee.
    pub fn charge_value_transfer(&mut self) -> Result<(), VmError> {
        self.charge(self.schedule.call_value_transfer)
    }

    /// Charge for the storage words that differ between `before` and `after`.
    pub fn charge_storage_diff(&mut self, before: &[u8], after: &[u8]) -> Result<(), VmError> {
        let old_words = before.len().div_ceil(WORD);
        let new_words = after.len().div_ceil(WORD);
        let mut cost = 0u64;

        for i in 0..new_words {
            let new_word = &after[i * WORD..after.len().min((i + 1) * WORD)];
            if i >= old_words {
                cost += self.schedule.storage_write_new;
                continue;
            }
            let old_word = &before[i * WORD..before.len().min((i + 1) * WORD)];
            if old_word != new_word {
                cost += self.schedule.storage_write_update;
            }
        }

        self.charge(cost)
    }

    /// Charge for an emitted event (one topic for the event signature).
    pub fn charge_log(&mut self, event: &Event) -> Result<(), VmError> {
        let cost = self.schedule.log_base
            + self.schedule.log_per_topic
            + event.data_len() as u64 * self.schedule.log_per_byte;
        self.charge(cost)
    }

    /// Get gas schedule.
    pub fn schedule(&self) -> &GasSchedule {
        &self.schedule
    }
}

/// Calldata for a method call: a 4-byte selector followed by encoded arguments.
pub fn calldata(signature: &str, args: &[Value]) -> Vec<u8> {
    let selector = blake3_selector(signature);
    let mut data = selector.to_vec();
    data.extend(Value::encode_all(args));
    data
}

fn blake3_selector(signature: &str) -> [u8; 4] {
    let hash = primer_types::Hash::compute(signature.as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash.as_bytes()[..4]);
    selector
}

#[cfg(test)]
mod tests {
    use super::*;
    use primer_types::Address;

    #[test]
    fn test_gas_tracker() {
        let mut tracker = GasTracker::with_default_schedule(100_000);
        assert_eq!(tracker.limit(), 100_000);
        assert_eq!(tracker.remaining(), 100_000);

        tracker.charge(10_000).unwrap();
        assert_eq!(tracker.used(), 10_000);
        assert_eq!(tracker.remaining(), 90_000);
    }

    #[test]
    fn test_gas_tracker_out_of_gas() {
        let mut tracker = GasTracker::with_default_schedule(1_000);
        assert!(matches!(
            tracker.charge(10_000),
            Err(VmError::OutOfGas { used: 10_000, limit: 1_000 })
        ));
        assert_eq!(tracker.used(), 0);
    }

    #[test]
    fn test_intrinsic_gas_counts_bytes() {
        let mut tracker = GasTracker::with_default_schedule(1_000_000);
        tracker.charge_intrinsic(&[0, 0, 1], false).unwrap();
        assert_eq!(tracker.used(), 21_000 + 4 + 4 + 16);

        let mut create = GasTracker::with_default_schedule(1_000_000);
        create.charge_intrinsic(&[], true).unwrap();
        assert_eq!(create.used(), 53_000);
    }

    #[test]
    fn test_storage_diff_gas() {
        let mut tracker = GasTracker::with_default_schedule(1_000_000);
        tracker.charge_storage_diff(&[], &[1u8; 40]).unwrap();
        assert_eq!(tracker.used(), 2 * 20_000);

        let mut update = GasTracker::with_default_schedule(1_000_000);
        let mut after = vec![1u8; 40];
        after[35] = 2;
        update.charge_storage_diff(&[1u8; 40], &after).unwrap();
        assert_eq!(update.used(), 5_000);

        let mut unchanged = GasTracker::with_default_schedule(1_000_000);
        unchanged.charge_storage_diff(&[7u8; 64], &[7u8; 64]).unwrap();
        assert_eq!(unchanged.used(), 0);
    }

    #[test]
    fn test_log_gas() {
        let mut tracker = GasTracker::with_default_schedule(1_000_000);
        let event = Event::new(Address::ZERO, "NameChanged", vec![Value::from("New name")]);
        tracker.charge_log(&event).unwrap();
        assert_eq!(tracker.used(), 375 + 375 + 64 * 8);
    }

    #[test]
    fn test_calldata_prefixes_selector() {
        let data = calldata("setName(string)", &[Value::from("x")]);
        assert_eq!(data.len(), 4 + 64);
        assert_ne!(&data[..4], &calldata("getName()", &[])[..4]);
    }
}
