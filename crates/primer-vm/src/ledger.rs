//! The simulated ledger: accounts, deployed contracts and atomic transactions.

use borsh::{BorshDeserialize, BorshSerialize};
use primer_types::{Address, Event, Hash, Receipt, Tuple, Value, U256};
use std::collections::{BTreeMap, HashMap};

use crate::abi::{ContractAbi, MethodAbi};
use crate::context::{BlockInfo, CallContext};
use crate::contract::{Artifact, Contract, Env};
use crate::error::VmError;
use crate::gas_metering::{calldata, GasSchedule, GasTracker};
use crate::{DEFAULT_GAS_LIMIT, DEV_CHAIN_ID};

/// Account state in the ledger
#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Account {
    pub balance: U256,
    pub nonce: u64,
    /// Artifact name of the deployed code, if this is a contract
    pub code: Option<String>,
    /// Encoded contract state
    pub storage: Vec<u8>,
}

impl Account {
    pub fn is_contract(&self) -> bool {
        self.code.is_some()
    }
}

/// Network parameters of the ledger.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    pub chain_id: u64,
    /// Price per unit of gas, in wei
    pub gas_price: U256,
    /// Gas limit per transaction and per block
    pub gas_limit: u64,
    /// Seconds between consecutive blocks
    pub block_time: u64,
    pub genesis_timestamp: u64,
    /// Receives transaction fees
    pub coinbase: Address,
    pub gas_schedule: GasSchedule,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            chain_id: DEV_CHAIN_ID,
            gas_price: U256::GWEI,
            gas_limit: DEFAULT_GAS_LIMIT,
            block_time: 1,
            genesis_timestamp: 1_700_000_000,
            coinbase: Address::from_bytes([0xc0; 20]),
            gas_schedule: GasSchedule::default(),
        }
    }
}

/// Everything a transaction can change. Cloned as the revert snapshot.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
struct WorldState {
    accounts: BTreeMap<Address, Account>,
    block: BlockInfo,
}

impl WorldState {
    fn debit(&mut self, address: &Address, amount: U256) -> Result<(), VmError> {
        let available = self.accounts.get(address).map(|a| a.balance).unwrap_or(U256::ZERO);
        let remaining = available
            .checked_sub(&amount)
            .ok_or(VmError::InsufficientFunds {
                address: *address,
                required: amount,
                available,
            })?;
        self.accounts.entry(*address).or_default().balance = remaining;
        Ok(())
    }

    fn credit(&mut self, address: &Address, amount: U256) -> Result<(), VmError> {
        let account = self.accounts.entry(*address).or_default();
        account.balance = account
            .balance
            .checked_add(&amount)
            .ok_or(primer_types::TypesError::U256Overflow)?;
        Ok(())
    }

    fn transfer(&mut self, from: &Address, to: &Address, amount: U256) -> Result<(), VmError> {
        if amount.is_zero() {
            return Ok(());
        }
        self.debit(from, amount)?;
        self.credit(to, amount)
    }
}

/// Outcome of executing one transaction body, before fees are settled.
struct Execution {
    contract_address: Option<Address>,
    to: Option<Address>,
    events: Vec<Event>,
}

/// The simulated ledger environment.
pub struct Ledger {
    state: WorldState,
    artifacts: HashMap<String, Artifact>,
    config: LedgerConfig,
}

impl Ledger {
    pub fn new(config: LedgerConfig) -> Self {
        let block = BlockInfo::genesis(
            config.chain_id,
            config.genesis_timestamp,
            config.coinbase,
            config.gas_limit,
        );
        Self {
            state: WorldState {
                accounts: BTreeMap::new(),
                block,
            },
            artifacts: HashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Genesis allocation: add `amount` to an account's balance.
    pub fn fund(&mut self, address: Address, amount: U256) -> Result<(), VmError> {
        self.state.credit(&address, amount)
    }

    /// Make an artifact deployable by name.
    ///
    /// Deployed accounts refer to their code by artifact name, so a name can
    /// only be registered once.
    pub fn register(&mut self, artifact: Artifact) -> Result<(), VmError> {
        if self.artifacts.contains_key(artifact.name()) {
            return Err(VmError::DuplicateArtifact(artifact.name().to_string()));
        }
        tracing::debug!(contract = artifact.name(), "registered artifact");
        self.artifacts.insert(artifact.name().to_string(), artifact);
        Ok(())
    }

    pub fn register_contract<C: Contract>(&mut self) -> Result<(), VmError> {
        self.register(Artifact::of::<C>())
    }

    pub fn artifact(&self, name: &str) -> Option<&Artifact> {
        self.artifacts.get(name)
    }

    pub fn balance(&self, address: &Address) -> U256 {
        self.state
            .accounts
            .get(address)
            .map(|a| a.balance)
            .unwrap_or(U256::ZERO)
    }

    pub fn nonce(&self, address: &Address) -> u64 {
        self.state.accounts.get(address).map(|a| a.nonce).unwrap_or(0)
    }

    pub fn account(&self, address: &Address) -> Option<&Account> {
        self.state.accounts.get(address)
    }

    /// Latest mined block.
    pub fn block(&self) -> &BlockInfo {
        &self.state.block
    }

    /// Digest of all accounts, code, storage and block info.
    pub fn state_hash(&self) -> Hash {
        match borsh::to_vec(&self.state) {
            Ok(bytes) => Hash::compute(&bytes),
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode ledger state");
                Hash::ZERO
            }
        }
    }

    /// ABI of the contract deployed at `address`.
    pub fn abi_at(&self, address: &Address) -> Result<&ContractAbi, VmError> {
        self.artifact_at(address).map(Artifact::abi)
    }

    fn artifact_at(&self, address: &Address) -> Result<&Artifact, VmError> {
        let code = self
            .state
            .accounts
            .get(address)
            .and_then(|a| a.code.as_deref())
            .ok_or(VmError::ContractNotFound(*address))?;
        self.artifacts
            .get(code)
            .ok_or_else(|| VmError::UnknownArtifact(code.to_string()))
    }

    /// Deploy `name` from `from`, attaching `value`.
    pub fn deploy(
        &mut self,
        from: Address,
        name: &str,
        args: &[Value],
        value: U256,
    ) -> Result<Receipt, VmError> {
        let artifact = self
            .artifacts
            .get(name)
            .ok_or_else(|| VmError::UnknownArtifact(name.to_string()))?;
        let abi = artifact.abi();
        if !value.is_zero() && !abi.constructor.payable {
            return Err(VmError::NotPayable {
                contract: abi.name.clone(),
                method: "constructor".to_string(),
            });
        }
        abi.constructor.check_args(args)?;

        let data = calldata(&format!("{}()", name), args);
        let mut gas = GasTracker::new(self.config.gas_limit, self.config.gas_schedule);
        gas.charge_intrinsic(&data, true)?;

        let block = self.state.block.next(self.config.block_time);
        let snapshot = self.state.clone();
        let result = Self::apply_deploy(&mut self.state, artifact, &mut gas, block, from, value, args)
            .and_then(|exec| Self::settle(&mut self.state, &self.config, &gas, from, value, exec));

        match result {
            Ok(receipt) => {
                tracing::debug!(
                    contract = name,
                    address = %receipt.contract_address.unwrap_or_default(),
                    gas_used = receipt.gas_used,
                    "deployed"
                );
                Ok(receipt)
            }
            Err(e) => {
                self.state = snapshot;
                tracing::debug!(contract = name, error = %e, "deployment reverted");
                Err(e)
            }
        }
    }

    /// Send a state-mutating transaction to `method` on the contract at `to`.
    pub fn transact(
        &mut self,
        from: Address,
        to: Address,
        method: &str,
        args: &[Value],
        value: U256,
    ) -> Result<Receipt, VmError> {
        let artifact = self.artifact_at(&to)?;
        let abi = artifact.abi();
        let method_abi = abi.resolve(method)?;
        if !value.is_zero() && !method_abi.mutability.is_payable() {
            return Err(VmError::NotPayable {
                contract: abi.name.clone(),
                method: method.to_string(),
            });
        }
        method_abi.check_args(args)?;

        let data = calldata(&method_abi.signature(), args);
        let mut gas = GasTracker::new(self.config.gas_limit, self.config.gas_schedule);
        gas.charge_intrinsic(&data, false)?;
        if !value.is_zero() {
            gas.charge_value_transfer()?;
        }

        // Names are never re-registered; clone the handle so the world state
        // can be borrowed mutably while executing.
        let artifact = artifact.clone();
        let method_abi = method_abi.clone();

        let block = self.state.block.next(self.config.block_time);
        let snapshot = self.state.clone();
        let result = Self::apply_call(&mut self.state, &artifact, &method_abi, &mut gas, block, from, to, value, args)
            .and_then(|exec| Self::settle(&mut self.state, &self.config, &gas, from, value, exec));

        match result {
            Ok(receipt) => {
                tracing::debug!(
                    contract = artifact.name(),
                    method,
                    from = %from,
                    gas_used = receipt.gas_used,
                    events = receipt.events.len(),
                    "transaction mined"
                );
                Ok(receipt)
            }
            Err(e) => {
                self.state = snapshot;
                tracing::debug!(contract = artifact.name(), method, from = %from, error = %e, "transaction reverted");
                Err(e)
            }
        }
    }

    /// Evaluate `method` without persisting anything (an `eth_call`).
    pub fn view(
        &self,
        from: Address,
        to: Address,
        method: &str,
        args: &[Value],
    ) -> Result<Tuple, VmError> {
        let artifact = self.artifact_at(&to)?;
        let method_abi = artifact.abi().resolve(method)?;
        method_abi.check_args(args)?;

        let account = self
            .state
            .accounts
            .get(&to)
            .ok_or(VmError::ContractNotFound(to))?;
        let ctx = CallContext::new(to, from, self.state.block.clone()).as_static();
        let mut env = Env::new(&ctx, &self.state.accounts);
        let (storage, outputs) = artifact.execute(&account.storage, &mut env, method, args)?;
        let events = env.into_events();

        if method_abi.mutability.is_read_only() && (storage != account.storage || !events.is_empty()) {
            return Err(VmError::StaticCallViolation {
                method: method.to_string(),
            });
        }

        let outputs = method_abi.normalize_outputs(outputs)?;
        tracing::trace!(contract = artifact.name(), method, "view call");
        Ok(Tuple::named(
            method_abi
                .outputs
                .iter()
                .map(|p| p.name.clone())
                .zip(outputs),
        ))
    }

    #[allow(clippy::too_many_arguments)]
    fn apply_deploy(
        state: &mut WorldState,
        artifact: &Artifact,
        gas: &mut GasTracker,
        block: BlockInfo,
        from: Address,
        value: U256,
        args: &[Value],
    ) -> Result<Execution, VmError> {
        let nonce = state.accounts.get(&from).map(|a| a.nonce).unwrap_or(0);
        let address = Address::contract(&from, nonce);

        // keep any balance already sent to the address
        let account = state.accounts.entry(address).or_default();
        account.code = Some(artifact.name().to_string());
        account.storage.clear();
        state.transfer(&from, &address, value)?;

        let ctx = CallContext::new(address, from, block).with_value(value);
        let mut env = Env::new(&ctx, &state.accounts);
        let storage = artifact.construct(&mut env, args)?;
        let events = env.into_events();

        gas.charge_storage_diff(&[], &storage)?;
        for event in &events {
            gas.charge_log(event)?;
        }

        if let Some(account) = state.accounts.get_mut(&address) {
            account.storage = storage;
        }

        Ok(Execution {
            contract_address: Some(address),
            to: None,
            events,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn apply_call(
        state: &mut WorldState,
        artifact: &Artifact,
        method: &MethodAbi,
        gas: &mut GasTracker,
        block: BlockInfo,
        from: Address,
        to: Address,
        value: U256,
        args: &[Value],
    ) -> Result<Execution, VmError> {
        state.transfer(&from, &to, value)?;

        let before = state
            .accounts
            .get(&to)
            .map(|a| a.storage.clone())
            .ok_or(VmError::ContractNotFound(to))?;

        let ctx = CallContext::new(to, from, block).with_value(value);
        let mut env = Env::new(&ctx, &state.accounts);
        let (after, outputs) = artifact.execute(&before, &mut env, &method.name, args)?;
        let events = env.into_events();

        if method.mutability.is_read_only() && (after != before || !events.is_empty()) {
            return Err(VmError::StaticCallViolation {
                method: method.name.clone(),
            });
        }
        method.normalize_outputs(outputs)?;

        gas.charge_storage_diff(&before, &after)?;
        for event in &events {
            gas.charge_log(event)?;
        }

        if let Some(account) = state.accounts.get_mut(&to) {
            account.storage = after;
        }

        Ok(Execution {
            contract_address: None,
            to: Some(to),
            events,
        })
    }

    /// Charge the fee, bump the sender nonce and mine the block.
    fn settle(
        state: &mut WorldState,
        config: &LedgerConfig,
        gas: &GasTracker,
        from: Address,
        value: U256,
        exec: Execution,
    ) -> Result<Receipt, VmError> {
        let fee = U256::from_u64(gas.used())
            .checked_mul(&config.gas_price)
            .ok_or(primer_types::TypesError::U256Overflow)?;
        state.transfer(&from, &config.coinbase, fee)?;

        let nonce = {
            let sender = state.accounts.entry(from).or_default();
            let nonce = sender.nonce;
            sender.nonce += 1;
            nonce
        };

        state.block = state.block.next(config.block_time);

        let tx_hash = Hash::compute_multi(&[
            from.as_bytes(),
            &nonce.to_be_bytes(),
            &state.block.number.to_be_bytes(),
        ]);

        Ok(Receipt {
            tx_hash,
            block_number: state.block.number,
            from,
            to: exec.to,
            contract_address: exec.contract_address,
            status: true,
            gas_used: gas.used(),
            effective_gas_price: config.gas_price,
            value,
            events: exec.events,
        })
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(LedgerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi::{ConstructorAbi, MethodAbi};
    use crate::contract::{require, Args, Revert};
    use primer_types::ParamType;

    /// Owner-guarded counter used to exercise the ledger directly.
    #[derive(BorshSerialize, BorshDeserialize)]
    struct Counter {
        owner: Address,
        count: U256,
        label: String,
    }

    impl Contract for Counter {
        const NAME: &'static str = "Counter";

        fn abi() -> ContractAbi {
            ContractAbi::new(Self::NAME)
                .constructor(ConstructorAbi::new().input("_label", ParamType::String).payable())
                .method(MethodAbi::getter("count", ParamType::Uint256))
                .method(MethodAbi::getter("label", ParamType::String))
                .method(MethodAbi::nonpayable("increment"))
                .method(MethodAbi::payable("deposit"))
                .method(MethodAbi::view("holdings").returns(ParamType::Uint256))
                .method(MethodAbi::view("sneaky"))
                .method(MethodAbi::nonpayable("reset").internal())
        }

        fn construct(env: &mut Env<'_>, args: Args<'_>) -> Result<Self, Revert> {
            let label = args.string(0)?;
            require(!label.is_empty(), "Label required")?;
            Ok(Self {
                owner: env.sender(),
                count: U256::ZERO,
                label,
            })
        }

        fn execute(&mut self, env: &mut Env<'_>, method: &str, _args: Args<'_>) -> Result<Vec<Value>, Revert> {
            match method {
                "count" => Ok(vec![self.count.into()]),
                "label" => Ok(vec![self.label.clone().into()]),
                "increment" => {
                    require(env.sender() == self.owner, "Not owner")?;
                    self.count = self.count + U256::ONE;
                    env.emit("Incremented", vec![self.count.into()]);
                    Ok(vec![])
                }
                "deposit" => Ok(vec![]),
                "holdings" => Ok(vec![env.self_balance().into()]),
                "sneaky" => {
                    self.count = self.count + U256::ONE;
                    Ok(vec![])
                }
                _ => Err(Revert::silent()),
            }
        }
    }

    fn setup() -> (Ledger, Address, Address) {
        let mut ledger = Ledger::default();
        ledger.register_contract::<Counter>().unwrap();
        let alice = Address::dev_account(0);
        let bob = Address::dev_account(1);
        ledger.fund(alice, primer_types::units::ether(100)).unwrap();
        ledger.fund(bob, primer_types::units::ether(100)).unwrap();
        (ledger, alice, bob)
    }

    fn deploy(ledger: &mut Ledger, from: Address) -> Address {
        ledger
            .deploy(from, "Counter", &["ticks".into()], U256::ZERO)
            .unwrap()
            .contract_address
            .unwrap()
    }

    #[test]
    fn test_deploy_mines_block_and_charges_fee() {
        let (mut ledger, alice, _) = setup();
        let before = ledger.balance(&alice);
        let receipt = ledger.deploy(alice, "Counter", &["ticks".into()], U256::ZERO).unwrap();

        assert!(receipt.is_success());
        assert_eq!(receipt.block_number, 1);
        assert_eq!(ledger.block().number, 1);
        assert!(receipt.gas_used >= 53_000);
        assert_eq!(ledger.balance(&alice), before - receipt.fee());
        assert_eq!(ledger.nonce(&alice), 1);
        assert_eq!(ledger.balance(&ledger.config().coinbase), receipt.fee());

        let address = receipt.contract_address.unwrap();
        assert_eq!(ledger.view(alice, address, "label", &[]).unwrap(), "ticks");
    }

    #[test]
    fn test_payable_constructor_receives_value() {
        let (mut ledger, alice, _) = setup();
        let one = primer_types::units::ether(1);
        let receipt = ledger.deploy(alice, "Counter", &["ticks".into()], one).unwrap();
        let address = receipt.contract_address.unwrap();
        assert_eq!(ledger.balance(&address), one);
        assert_eq!(ledger.view(alice, address, "holdings", &[]).unwrap(), one);
    }

    #[test]
    fn test_constructor_revert_leaves_state_untouched() {
        let (mut ledger, alice, _) = setup();
        let hash = ledger.state_hash();
        let err = ledger.deploy(alice, "Counter", &["".into()], U256::ZERO).unwrap_err();
        assert_eq!(err, VmError::Reverted { reason: Some("Label required".into()) });
        assert_eq!(ledger.state_hash(), hash);
        assert_eq!(ledger.block().number, 0);
    }

    #[test]
    fn test_deploy_validation_errors() {
        let (mut ledger, alice, _) = setup();
        assert!(matches!(
            ledger.deploy(alice, "Missing", &[], U256::ZERO),
            Err(VmError::UnknownArtifact(_))
        ));
        assert!(matches!(
            ledger.deploy(alice, "Counter", &[], U256::ZERO),
            Err(VmError::InvalidArguments { .. })
        ));
    }

    #[test]
    fn test_owner_guard_and_revert_is_exact() {
        let (mut ledger, alice, bob) = setup();
        let counter = deploy(&mut ledger, alice);

        let hash = ledger.state_hash();
        let err = ledger.transact(bob, counter, "increment", &[], U256::ZERO).unwrap_err();
        assert_eq!(err, VmError::Reverted { reason: Some("Not owner".into()) });
        assert_eq!(ledger.state_hash(), hash);

        let receipt = ledger.transact(alice, counter, "increment", &[], U256::ZERO).unwrap();
        assert_eq!(receipt.events.len(), 1);
        assert!(receipt.find_event("Incremented", &[1u64.into()]).is_some());
        assert_eq!(ledger.view(alice, counter, "count", &[]).unwrap(), 1u64);
    }

    #[test]
    fn test_visibility_and_payability_checked_before_execution() {
        let (mut ledger, alice, _) = setup();
        let counter = deploy(&mut ledger, alice);
        let hash = ledger.state_hash();

        let err = ledger.transact(alice, counter, "reset", &[], U256::ZERO).unwrap_err();
        assert!(matches!(err, VmError::Visibility { .. }));
        assert!(err.is_link_error());

        let err = ledger
            .transact(alice, counter, "increment", &[], U256::ONE)
            .unwrap_err();
        assert!(matches!(err, VmError::NotPayable { .. }));

        assert_eq!(ledger.state_hash(), hash);
    }

    #[test]
    fn test_payable_method_moves_value() {
        let (mut ledger, alice, _) = setup();
        let counter = deploy(&mut ledger, alice);
        let before = ledger.balance(&alice);
        let value = primer_types::units::ether(2);
        let receipt = ledger.transact(alice, counter, "deposit", &[], value).unwrap();
        assert_eq!(ledger.balance(&counter), value);
        assert_eq!(ledger.balance(&alice), before - value - receipt.fee());
    }

    #[test]
    fn test_view_is_side_effect_free() {
        let (mut ledger, alice, _) = setup();
        let counter = deploy(&mut ledger, alice);
        let hash = ledger.state_hash();
        let first = ledger.view(alice, counter, "count", &[]).unwrap();
        let second = ledger.view(alice, counter, "count", &[]).unwrap();
        assert_eq!(first, second);
        assert_eq!(ledger.state_hash(), hash);
    }

    #[test]
    fn test_view_method_mutating_state_is_rejected() {
        let (mut ledger, alice, _) = setup();
        let counter = deploy(&mut ledger, alice);
        assert!(matches!(
            ledger.view(alice, counter, "sneaky", &[]),
            Err(VmError::StaticCallViolation { .. })
        ));
        assert!(matches!(
            ledger.transact(alice, counter, "sneaky", &[], U256::ZERO),
            Err(VmError::StaticCallViolation { .. })
        ));
    }

    #[test]
    fn test_insufficient_funds_reverts() {
        let (mut ledger, _, _) = setup();
        let pauper = Address::dev_account(42);
        let hash = ledger.state_hash();
        let err = ledger.deploy(pauper, "Counter", &["x".into()], U256::ZERO).unwrap_err();
        assert!(matches!(err, VmError::InsufficientFunds { .. }));
        assert_eq!(ledger.state_hash(), hash);
    }

    #[test]
    fn test_out_of_gas() {
        let config = LedgerConfig {
            gas_limit: 60_000,
            ..LedgerConfig::default()
        };
        let mut ledger = Ledger::new(config);
        ledger.register_contract::<Counter>().unwrap();
        let alice = Address::dev_account(0);
        ledger.fund(alice, primer_types::units::ether(1)).unwrap();
        let hash = ledger.state_hash();
        assert!(matches!(
            ledger.deploy(alice, "Counter", &["ticks".into()], U256::ZERO),
            Err(VmError::OutOfGas { .. })
        ));
        assert_eq!(ledger.state_hash(), hash);
    }

    #[test]
    fn test_artifact_names_cannot_be_reused() {
        let (mut ledger, alice, _) = setup();
        let counter = deploy(&mut ledger, alice);
        let hash = ledger.state_hash();

        assert_eq!(
            ledger.register_contract::<Counter>(),
            Err(VmError::DuplicateArtifact("Counter".into()))
        );
        assert_eq!(ledger.state_hash(), hash);
        assert_eq!(ledger.view(alice, counter, "label", &[]).unwrap(), "ticks");
    }

    #[test]
    fn test_deploy_keeps_balance_already_at_address() {
        let (mut ledger, alice, _) = setup();
        let address = Address::contract(&alice, ledger.nonce(&alice));
        let prefunded = primer_types::units::ether(3);
        ledger.fund(address, prefunded).unwrap();

        let one = primer_types::units::ether(1);
        let receipt = ledger.deploy(alice, "Counter", &["ticks".into()], one).unwrap();
        assert_eq!(receipt.contract_address, Some(address));
        assert_eq!(ledger.balance(&address), prefunded + one);
        assert_eq!(ledger.view(alice, address, "holdings", &[]).unwrap(), prefunded + one);
    }

    #[test]
    fn test_calls_to_missing_contract() {
        let (mut ledger, alice, bob) = setup();
        assert_eq!(
            ledger.view(alice, bob, "count", &[]).unwrap_err(),
            VmError::ContractNotFound(bob)
        );
        assert!(ledger.transact(alice, bob, "count", &[], U256::ZERO).is_err());
    }

    fn total_supply(ledger: &Ledger) -> U256 {
        ledger
            .state
            .accounts
            .values()
            .fold(U256::ZERO, |acc, a| acc + a.balance)
    }

    proptest::proptest! {
        #[test]
        fn prop_transactions_conserve_supply(deposits in proptest::collection::vec(0u64..1_000_000, 1..8)) {
            let (mut ledger, alice, bob) = setup();
            let counter = deploy(&mut ledger, alice);
            let supply = total_supply(&ledger);

            for (i, wei) in deposits.iter().enumerate() {
                let from = if i % 2 == 0 { alice } else { bob };
                ledger.transact(from, counter, "deposit", &[], U256::from_u64(*wei)).unwrap();
                // reverts must not leak value either
                let _ = ledger.transact(bob, counter, "increment", &[], U256::ZERO);
            }

            proptest::prop_assert_eq!(total_supply(&ledger), supply);
        }
    }
}
