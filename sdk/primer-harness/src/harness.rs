//! The assertion harness: a pre-funded simulated ledger with every example
//! contract registered.

use parking_lot::RwLock;
use primer_types::{Address, Event, Hash, Receipt, Value, U256};
use primer_vm::{BlockInfo, Contract, Ledger};
use std::sync::Arc;

use crate::config::HarnessConfig;
use crate::contract::{ContractHandle, SharedLedger};
use crate::errors::{HarnessError, Result};
use crate::events;
use crate::signer::{dev_signers, Signer};
use crate::telemetry;
use crate::types::{CallOptions, CallOutcome, DeployOptions};

/// Test harness over a fresh ledger.
pub struct Harness {
    ledger: SharedLedger,
    signers: Vec<Signer>,
    config: HarnessConfig,
}

impl Harness {
    /// Build a ledger from `config`, register the example contracts and fund
    /// the signers.
    ///
    /// Also installs the `[logging]` subscriber unless one is already set.
    pub fn new(config: HarnessConfig) -> anyhow::Result<Self> {
        config.validate()?;
        telemetry::init_from_config(&config.logging)?;

        let mut ledger = Ledger::new(config.ledger_config());
        primer_fixtures::register_all(&mut ledger)?;

        let balance = config.accounts.balance_wei()?;
        let signers = dev_signers(config.accounts.count);
        for signer in &signers {
            ledger.fund(signer.address(), balance)?;
        }

        tracing::info!(
            chain_id = config.chain.chain_id,
            signers = signers.len(),
            "harness ready"
        );

        Ok(Self {
            ledger: Arc::new(RwLock::new(ledger)),
            signers,
            config,
        })
    }

    /// Harness with the development defaults.
    pub fn dev() -> anyhow::Result<Self> {
        Self::new(HarnessConfig::default())
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Make an additional contract type deployable. Fails if the name is
    /// already taken.
    pub fn register<C: Contract>(&self) -> Result<()> {
        self.ledger.write().register_contract::<C>()?;
        Ok(())
    }

    /// Pre-funded signers; the first is the default deployer.
    pub fn signers(&self) -> &[Signer] {
        &self.signers
    }

    pub fn signer(&self, index: usize) -> Option<&Signer> {
        self.signers.get(index)
    }

    /// Default deployer and caller.
    pub fn deployer(&self) -> &Signer {
        // validate() guarantees at least one signer
        &self.signers[0]
    }

    /// Deploy `contract_name` with `args`, returning a handle connected to
    /// the deployer.
    pub fn deploy(&self, contract_name: &str, args: &[Value], opts: DeployOptions) -> Result<ContractHandle> {
        let from = opts.from.unwrap_or_else(|| self.deployer().address());
        let value = opts.value.unwrap_or(U256::ZERO);

        let mut ledger = self.ledger.write();
        let receipt = ledger
            .deploy(from, contract_name, args, value)
            .map_err(|e| HarnessError::deployment(contract_name, e))?;
        let address = receipt.contract_address.ok_or_else(|| HarnessError::Deployment {
            contract: contract_name.to_string(),
            reason: "receipt has no contract address".to_string(),
        })?;
        let abi = ledger.abi_at(&address)?.clone();
        drop(ledger);

        tracing::info!(contract = contract_name, address = %address, gas_used = receipt.gas_used, "deployed");
        tracing::trace!(receipt = %events::receipt_json(&receipt), "deployment receipt");
        Ok(ContractHandle::new(self.ledger.clone(), abi, address, from, receipt))
    }

    /// Invoke `method` on `handle`. See [`ContractHandle::call`].
    pub fn call(&self, handle: &ContractHandle, method: &str, args: &[Value], opts: CallOptions) -> Result<CallOutcome> {
        handle.call(method, args, opts)
    }

    /// Assert that `receipt` emitted `name(args..)`.
    pub fn expect_event<'a>(&self, receipt: &'a Receipt, name: &str, args: &[Value]) -> Result<&'a Event> {
        events::expect_event(receipt, name, args)
    }

    pub fn events_named<'a>(&self, receipt: &'a Receipt, name: &str) -> Vec<&'a Event> {
        events::events_named(receipt, name)
    }

    pub fn balance(&self, address: &Address) -> U256 {
        self.ledger.read().balance(address)
    }

    /// Number of the latest mined block.
    pub fn block_number(&self) -> u64 {
        self.ledger.read().block().number
    }

    pub fn block(&self) -> BlockInfo {
        self.ledger.read().block().clone()
    }

    /// Digest of the complete ledger state.
    pub fn state_hash(&self) -> Hash {
        self.ledger.read().state_hash()
    }

    pub fn ledger(&self) -> SharedLedger {
        self.ledger.clone()
    }
}
