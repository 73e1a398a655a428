//! Native contract interface.
//!
//! A contract is a borsh-serializable state struct. The ledger stores the
//! encoded state as the contract's storage; every call decodes it, runs one
//! method against an [`Env`], and re-encodes it.

use borsh::{BorshDeserialize, BorshSerialize};
use primer_types::{Address, Event, Hash, Value, U256};
use std::collections::BTreeMap;
use std::fmt;

use crate::abi::ContractAbi;
use crate::context::{BlockInfo, CallContext};
use crate::error::VmError;
use crate::ledger::Account;

/// A rejected call, optionally carrying a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revert {
    pub reason: Option<String>,
}

impl Revert {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }

    pub fn silent() -> Self {
        Self { reason: None }
    }
}

impl fmt::Display for Revert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            Some(reason) => write!(f, "reverted: {}", reason),
            None => write!(f, "reverted"),
        }
    }
}

impl std::error::Error for Revert {}

impl From<Revert> for VmError {
    fn from(r: Revert) -> Self {
        VmError::Reverted { reason: r.reason }
    }
}

/// Revert with `reason` unless `condition` holds.
pub fn require(condition: bool, reason: &str) -> Result<(), Revert> {
    if condition {
        Ok(())
    } else {
        Err(Revert::new(reason))
    }
}

/// Typed access to call arguments.
///
/// Arguments are checked against the ABI before dispatch, so a mismatch here
/// means the contract's ABI and its dispatcher disagree.
#[derive(Debug, Clone, Copy)]
pub struct Args<'a>(&'a [Value]);

impl<'a> Args<'a> {
    pub fn new(values: &'a [Value]) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn get(&self, index: usize) -> Result<&'a Value, Revert> {
        self.0
            .get(index)
            .ok_or_else(|| Revert::new(format!("missing argument {}", index)))
    }

    pub fn string(&self, index: usize) -> Result<String, Revert> {
        self.get(index)?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| Revert::new(format!("argument {} is not a string", index)))
    }

    pub fn uint(&self, index: usize) -> Result<U256, Revert> {
        self.get(index)?
            .as_uint()
            .ok_or_else(|| Revert::new(format!("argument {} is not a uint256", index)))
    }

    pub fn address(&self, index: usize) -> Result<Address, Revert> {
        self.get(index)?
            .as_address()
            .ok_or_else(|| Revert::new(format!("argument {} is not an address", index)))
    }

    pub fn bool(&self, index: usize) -> Result<bool, Revert> {
        self.get(index)?
            .as_bool()
            .ok_or_else(|| Revert::new(format!("argument {} is not a bool", index)))
    }
}

/// What contract code can see and do during one call.
pub struct Env<'a> {
    ctx: &'a CallContext,
    accounts: &'a BTreeMap<Address, Account>,
    events: Vec<Event>,
}

impl<'a> Env<'a> {
    pub(crate) fn new(ctx: &'a CallContext, accounts: &'a BTreeMap<Address, Account>) -> Self {
        Self {
            ctx,
            accounts,
            events: Vec::new(),
        }
    }

    pub fn context(&self) -> &CallContext {
        self.ctx
    }

    /// `msg.sender`
    pub fn sender(&self) -> Address {
        self.ctx.sender
    }

    /// `tx.origin`
    pub fn origin(&self) -> Address {
        self.ctx.origin
    }

    /// `address(this)`
    pub fn this(&self) -> Address {
        self.ctx.this
    }

    /// `msg.value`
    pub fn value(&self) -> U256 {
        self.ctx.value
    }

    /// `block.*`
    pub fn block(&self) -> &BlockInfo {
        &self.ctx.block
    }

    /// Native balance of any account. Includes `msg.value` for the callee.
    pub fn balance_of(&self, address: &Address) -> U256 {
        self.accounts
            .get(address)
            .map(|a| a.balance)
            .unwrap_or(U256::ZERO)
    }

    /// `address(this).balance`
    pub fn self_balance(&self) -> U256 {
        self.balance_of(&self.ctx.this)
    }

    /// Record an event against the executing contract.
    pub fn emit(&mut self, name: &str, args: Vec<Value>) {
        let mut event = Event::new(self.ctx.this, name, args);
        event.log_index = self.events.len() as u32;
        self.events.push(event);
    }

    pub(crate) fn into_events(self) -> Vec<Event> {
        self.events
    }
}

/// A contract type the ledger can deploy and call.
pub trait Contract: BorshSerialize + BorshDeserialize + Sized + 'static {
    /// Artifact name used to deploy the contract.
    const NAME: &'static str;

    /// Callable surface of the contract.
    fn abi() -> ContractAbi;

    /// Run the constructor and produce the initial state.
    fn construct(env: &mut Env<'_>, args: Args<'_>) -> Result<Self, Revert>;

    /// Dispatch an externally callable method. Returning fewer values than
    /// the ABI declares yields zero values for the rest.
    fn execute(&mut self, env: &mut Env<'_>, method: &str, args: Args<'_>) -> Result<Vec<Value>, Revert>;
}

type ConstructFn = fn(&mut Env<'_>, &[Value]) -> Result<Vec<u8>, VmError>;
type ExecuteFn = fn(&[u8], &mut Env<'_>, &str, &[Value]) -> Result<(Vec<u8>, Vec<Value>), VmError>;

/// Type-erased contract: ABI plus entry points over encoded storage.
#[derive(Clone)]
pub struct Artifact {
    abi: ContractAbi,
    code_hash: Hash,
    construct: ConstructFn,
    execute: ExecuteFn,
}

impl Artifact {
    pub fn of<C: Contract>() -> Self {
        Self {
            abi: C::abi(),
            code_hash: Hash::compute(C::NAME.as_bytes()),
            construct: construct_impl::<C>,
            execute: execute_impl::<C>,
        }
    }

    pub fn name(&self) -> &str {
        &self.abi.name
    }

    pub fn abi(&self) -> &ContractAbi {
        &self.abi
    }

    pub fn code_hash(&self) -> Hash {
        self.code_hash
    }

    pub(crate) fn construct(&self, env: &mut Env<'_>, args: &[Value]) -> Result<Vec<u8>, VmError> {
        (self.construct)(env, args)
    }

    pub(crate) fn execute(
        &self,
        storage: &[u8],
        env: &mut Env<'_>,
        method: &str,
        args: &[Value],
    ) -> Result<(Vec<u8>, Vec<Value>), VmError> {
        (self.execute)(storage, env, method, args)
    }
}

impl fmt::Debug for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Artifact")
            .field("name", &self.abi.name)
            .field("code_hash", &self.code_hash)
            .finish()
    }
}

fn construct_impl<C: Contract>(env: &mut Env<'_>, args: &[Value]) -> Result<Vec<u8>, VmError> {
    let contract = C::construct(env, Args::new(args))?;
    borsh::to_vec(&contract).map_err(|e| VmError::Storage(e.to_string()))
}

fn execute_impl<C: Contract>(
    storage: &[u8],
    env: &mut Env<'_>,
    method: &str,
    args: &[Value],
) -> Result<(Vec<u8>, Vec<Value>), VmError> {
    let mut contract: C = borsh::from_slice(storage).map_err(|e| VmError::Storage(e.to_string()))?;
    let outputs = contract.execute(env, method, Args::new(args))?;
    let storage = borsh::to_vec(&contract).map_err(|e| VmError::Storage(e.to_string()))?;
    Ok((storage, outputs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        assert!(require(true, "never").is_ok());
        assert_eq!(require(false, "Not owner"), Err(Revert::new("Not owner")));
    }

    #[test]
    fn test_revert_into_vm_error() {
        let err: VmError = Revert::new("nope").into();
        assert_eq!(err, VmError::Reverted { reason: Some("nope".into()) });
        let silent: VmError = Revert::silent().into();
        assert_eq!(silent, VmError::Reverted { reason: None });
    }

    #[test]
    fn test_args_accessors() {
        let values = vec![Value::from("a"), Value::from(2u64), Value::from(true)];
        let args = Args::new(&values);
        assert_eq!(args.len(), 3);
        assert_eq!(args.string(0).unwrap(), "a");
        assert_eq!(args.uint(1).unwrap(), U256::from_u64(2));
        assert!(args.bool(2).unwrap());
        assert!(args.string(1).is_err());
        assert!(args.address(5).is_err());
    }

    #[test]
    fn test_env_emit_assigns_log_index() {
        let ctx = CallContext::new(
            Address::dev_account(1),
            Address::dev_account(0),
            BlockInfo::genesis(1, 0, Address::ZERO, 1),
        );
        let accounts = BTreeMap::new();
        let mut env = Env::new(&ctx, &accounts);
        env.emit("A", vec![]);
        env.emit("B", vec![Value::from(1u64)]);
        let events = env.into_events();
        assert_eq!(events[1].log_index, 1);
        assert_eq!(events[1].address, Address::dev_account(1));
        assert!(events[0].args.is_empty());
    }
}
