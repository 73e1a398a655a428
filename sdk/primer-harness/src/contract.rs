//! Deployed contract handles.

use parking_lot::RwLock;
use primer_types::{Address, Receipt, Tuple, Value, U256};
use primer_vm::{ContractAbi, Ledger, MethodAbi};
use std::fmt;
use std::sync::Arc;

use crate::errors::{HarnessError, Result};
use crate::events;
use crate::signer::Signer;
use crate::types::{CallOptions, CallOutcome};

/// Ledger shared between the harness and every handle it hands out.
pub type SharedLedger = Arc<RwLock<Ledger>>;

/// A deployed contract instance, bound to the signer that sends its calls.
#[derive(Clone)]
pub struct ContractHandle {
    ledger: SharedLedger,
    name: String,
    address: Address,
    abi: ContractAbi,
    signer: Address,
    deployment: Receipt,
}

impl ContractHandle {
    pub(crate) fn new(ledger: SharedLedger, abi: ContractAbi, address: Address, signer: Address, deployment: Receipt) -> Self {
        Self {
            ledger,
            name: abi.name.clone(),
            address,
            abi,
            signer,
            deployment,
        }
    }

    /// Get contract address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Artifact name the contract was deployed from.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abi(&self) -> &ContractAbi {
        &self.abi
    }

    /// Address calls are sent from unless overridden.
    pub fn signer(&self) -> Address {
        self.signer
    }

    /// Receipt of the deploying transaction.
    pub fn deployment(&self) -> &Receipt {
        &self.deployment
    }

    /// The same contract, with calls sent from `signer`.
    pub fn connect(&self, signer: &Signer) -> Self {
        Self {
            signer: signer.address(),
            ..self.clone()
        }
    }

    /// Native balance held by the contract.
    pub fn balance(&self) -> U256 {
        self.ledger.read().balance(&self.address)
    }

    fn resolve(&self, method: &str) -> Result<&MethodAbi> {
        self.abi.resolve(method).map_err(|e| HarnessError::call(method, e))
    }

    /// Invoke `method`: read-only methods are evaluated without a
    /// transaction, everything else is mined.
    ///
    /// Visibility and payability are checked against the ABI before the
    /// ledger is touched.
    pub fn call(&self, method: &str, args: &[Value], opts: CallOptions) -> Result<CallOutcome> {
        let method_abi = self.resolve(method)?;
        let value = opts.value.unwrap_or(U256::ZERO);
        if !value.is_zero() && !method_abi.mutability.is_payable() {
            return Err(HarnessError::NonPayable {
                method: method.to_string(),
            });
        }

        if method_abi.mutability.is_read_only() {
            let from = opts.from.unwrap_or(self.signer);
            self.read_from(from, method, args).map(CallOutcome::Values)
        } else {
            self.send(method, args, opts).map(CallOutcome::Transaction)
        }
    }

    /// Evaluate `method` and return its outputs without mining anything.
    ///
    /// Mutating methods are simulated and their effects discarded.
    pub fn read(&self, method: &str, args: &[Value]) -> Result<Tuple> {
        self.read_from(self.signer, method, args)
    }

    fn read_from(&self, from: Address, method: &str, args: &[Value]) -> Result<Tuple> {
        self.resolve(method)?;
        let result = self.ledger.read().view(from, self.address, method, args);
        tracing::trace!(contract = %self.name, method, "read");
        result.map_err(|e| HarnessError::call(method, e))
    }

    /// Send `method` as a transaction and return its receipt.
    pub fn send(&self, method: &str, args: &[Value], opts: CallOptions) -> Result<Receipt> {
        self.resolve(method)?;
        let from = opts.from.unwrap_or(self.signer);
        let value = opts.value.unwrap_or(U256::ZERO);

        let result = self.ledger.write().transact(from, self.address, method, args, value);
        match result {
            Ok(receipt) => {
                tracing::debug!(
                    contract = %self.name,
                    method,
                    from = %from,
                    gas_used = receipt.gas_used,
                    block = receipt.block_number,
                    "sent"
                );
                tracing::trace!(receipt = %events::receipt_json(&receipt), "receipt");
                Ok(receipt)
            }
            Err(e) => {
                tracing::debug!(contract = %self.name, method, from = %from, error = %e, "rejected");
                Err(HarnessError::call(method, e))
            }
        }
    }
}

impl fmt::Debug for ContractHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContractHandle")
            .field("name", &self.name)
            .field("address", &self.address)
            .field("signer", &self.signer)
            .finish()
    }
}
