//! State variable examples: defaults, constructor-set values, private
//! storage, constants and immutables, and the `this`/`msg`/`tx`/`block`
//! globals.

use borsh::{BorshDeserialize, BorshSerialize};
use primer_types::{Address, ParamType, Value, U256};
use primer_vm::{Args, ConstructorAbi, Contract, ContractAbi, Env, MethodAbi, Revert};

use crate::unknown_method;

/// Public state variable with a default value.
#[derive(Debug, Clone, BorshSerialize, BorshDeserialize)]
pub struct Variables1 {
    pub name: String,
}

impl Contract for Variables1 {
    const NAME: &'static str = "Variables1";

    fn abi() -> ContractAbi {
        ContractAbi::new(Self::NAME).method(MethodAbi::getter("name", ParamType::String))
    }

    fn construct(_env: &mut Env<'_>, _args: Args<'_>) -> Result<Self, Revert> {
        Ok(Self {
            name: "Example 1".to_string(),
        })
    }

    fn execute(&mut self, _env: &mut Env<'_>, method: &str, _args: Args<'_>) -> Result<Vec<Value>, Revert> {
        match method {
            "name" => Ok(vec![self.name.clone().into()]),
            _ => Err(unknown_method(method)),
        }
    }
}

/// State variable assigned by the constructor.
#[derive(Debug, Clone, BorshSerialize, BorshDeserialize)]
pub struct Variables2 {
    pub name: String,
}

impl Contract for Variables2 {
    const NAME: &'static str = "Variables2";

    fn abi() -> ContractAbi {
        ContractAbi::new(Self::NAME)
            .constructor(ConstructorAbi::new().input("_name", ParamType::String))
            .method(MethodAbi::getter("name", ParamType::String))
    }

    fn construct(_env: &mut Env<'_>, args: Args<'_>) -> Result<Self, Revert> {
        Ok(Self { name: args.string(0)? })
    }

    fn execute(&mut self, _env: &mut Env<'_>, method: &str, _args: Args<'_>) -> Result<Vec<Value>, Revert> {
        match method {
            "name" => Ok(vec![self.name.clone().into()]),
            _ => Err(unknown_method(method)),
        }
    }
}

/// Private state variable reachable only through functions.
#[derive(Debug, Clone, Default, BorshSerialize, BorshDeserialize)]
pub struct Variables3 {
    name: String,
}

impl Contract for Variables3 {
    const NAME: &'static str = "Variables3";

    fn abi() -> ContractAbi {
        ContractAbi::new(Self::NAME)
            .private_state("name")
            .method(MethodAbi::view("getName").returns(ParamType::String))
            .method(MethodAbi::nonpayable("setName").input("_name", ParamType::String))
    }

    fn construct(_env: &mut Env<'_>, _args: Args<'_>) -> Result<Self, Revert> {
        Ok(Self::default())
    }

    fn execute(&mut self, _env: &mut Env<'_>, method: &str, args: Args<'_>) -> Result<Vec<Value>, Revert> {
        match method {
            "getName" => Ok(vec![self.name.clone().into()]),
            "setName" => {
                self.name = args.string(0)?;
                Ok(vec![])
            }
            _ => Err(unknown_method(method)),
        }
    }
}

/// A constant and an immutable set once at deployment.
///
/// Constants are not stored; only `owner` is part of the encoded state.
#[derive(Debug, Clone, BorshSerialize, BorshDeserialize)]
pub struct Variables4 {
    owner: Address,
}

impl Variables4 {
    pub const NAME_CONSTANT: &'static str = "Example 4";

    pub fn owner(&self) -> Address {
        self.owner
    }
}

impl Contract for Variables4 {
    const NAME: &'static str = "Variables4";

    fn abi() -> ContractAbi {
        ContractAbi::new(Self::NAME)
            .method(MethodAbi::getter("name", ParamType::String))
            .method(MethodAbi::getter("owner", ParamType::Address))
    }

    fn construct(env: &mut Env<'_>, _args: Args<'_>) -> Result<Self, Revert> {
        Ok(Self { owner: env.sender() })
    }

    fn execute(&mut self, _env: &mut Env<'_>, method: &str, _args: Args<'_>) -> Result<Vec<Value>, Revert> {
        match method {
            "name" => Ok(vec![Self::NAME_CONSTANT.into()]),
            "owner" => Ok(vec![self.owner.into()]),
            _ => Err(unknown_method(method)),
        }
    }
}

/// Global variables: the contract's own address, the message, the
/// transaction origin and the current block.
#[derive(Debug, Clone, Default, BorshSerialize, BorshDeserialize)]
pub struct Variables5 {
    pub amount: U256,
    pub payer: Address,
    pub origin: Address,
}

impl Contract for Variables5 {
    const NAME: &'static str = "Variables5";

    fn abi() -> ContractAbi {
        ContractAbi::new(Self::NAME)
            .method(MethodAbi::getter("amount", ParamType::Uint256))
            .method(MethodAbi::getter("payer", ParamType::Address))
            .method(MethodAbi::getter("origin", ParamType::Address))
            .method(MethodAbi::view("contractAddress").returns(ParamType::Address))
            .method(MethodAbi::payable("pay"))
            .method(
                MethodAbi::view("getBlockInfo")
                    .output("blockNumber", ParamType::Uint256)
                    .output("timestamp", ParamType::Uint256)
                    .output("chainId", ParamType::Uint256)
                    .output("coinbase", ParamType::Address)
                    .output("gasLimit", ParamType::Uint256),
            )
    }

    fn construct(_env: &mut Env<'_>, _args: Args<'_>) -> Result<Self, Revert> {
        Ok(Self::default())
    }

    fn execute(&mut self, env: &mut Env<'_>, method: &str, _args: Args<'_>) -> Result<Vec<Value>, Revert> {
        match method {
            "amount" => Ok(vec![self.amount.into()]),
            "payer" => Ok(vec![self.payer.into()]),
            "origin" => Ok(vec![self.origin.into()]),
            "contractAddress" => Ok(vec![env.this().into()]),
            "pay" => {
                self.amount = env.value();
                self.payer = env.sender();
                self.origin = env.origin();
                Ok(vec![])
            }
            "getBlockInfo" => {
                let block = env.block();
                Ok(vec![
                    block.number.into(),
                    block.timestamp.into(),
                    block.chain_id.into(),
                    block.coinbase.into(),
                    block.gas_limit.into(),
                ])
            }
            _ => Err(unknown_method(method)),
        }
    }
}
