//! Constructor examples.
//!
//! Six ways a contract gets its initial state: a field default, a no-arg
//! constructor, constructor arguments, a payable constructor, and two forms of
//! inheriting a parent's constructor.

use borsh::{BorshDeserialize, BorshSerialize};
use primer_types::{Address, ParamType, Value};
use primer_vm::{require, Args, ConstructorAbi, Contract, ContractAbi, Env, MethodAbi, Revert};

use crate::unknown_method;

/// No constructor; `name` has a default value.
#[derive(Debug, Clone, BorshSerialize, BorshDeserialize)]
pub struct Constructors1 {
    pub name: String,
}

impl Default for Constructors1 {
    fn default() -> Self {
        Self {
            name: "Example 1".to_string(),
        }
    }
}

impl Contract for Constructors1 {
    const NAME: &'static str = "Constructors1";

    fn abi() -> ContractAbi {
        ContractAbi::new(Self::NAME).method(MethodAbi::getter("name", ParamType::String))
    }

    fn construct(_env: &mut Env<'_>, _args: Args<'_>) -> Result<Self, Revert> {
        Ok(Self::default())
    }

    fn execute(&mut self, _env: &mut Env<'_>, method: &str, _args: Args<'_>) -> Result<Vec<Value>, Revert> {
        match method {
            "name" => Ok(vec![self.name.clone().into()]),
            _ => Err(unknown_method(method)),
        }
    }
}

/// Constructor without arguments.
#[derive(Debug, Clone, BorshSerialize, BorshDeserialize)]
pub struct Constructors2 {
    pub name: String,
}

impl Contract for Constructors2 {
    const NAME: &'static str = "Constructors2";

    fn abi() -> ContractAbi {
        ContractAbi::new(Self::NAME)
            .constructor(ConstructorAbi::new())
            .method(MethodAbi::getter("name", ParamType::String))
    }

    fn construct(_env: &mut Env<'_>, _args: Args<'_>) -> Result<Self, Revert> {
        Ok(Self {
            name: "Example 2".to_string(),
        })
    }

    fn execute(&mut self, _env: &mut Env<'_>, method: &str, _args: Args<'_>) -> Result<Vec<Value>, Revert> {
        match method {
            "name" => Ok(vec![self.name.clone().into()]),
            _ => Err(unknown_method(method)),
        }
    }
}

/// Constructor with an argument.
#[derive(Debug, Clone, BorshSerialize, BorshDeserialize)]
pub struct Constructors3 {
    pub name: String,
}

impl Contract for Constructors3 {
    const NAME: &'static str = "Constructors3";

    fn abi() -> ContractAbi {
        ContractAbi::new(Self::NAME)
            .constructor(ConstructorAbi::new().input("_name", ParamType::String))
            .method(MethodAbi::getter("name", ParamType::String))
    }

    fn construct(_env: &mut Env<'_>, args: Args<'_>) -> Result<Self, Revert> {
        let name = args.string(0)?;
        require(!name.is_empty(), "Name required")?;
        Ok(Self { name })
    }

    fn execute(&mut self, _env: &mut Env<'_>, method: &str, _args: Args<'_>) -> Result<Vec<Value>, Revert> {
        match method {
            "name" => Ok(vec![self.name.clone().into()]),
            _ => Err(unknown_method(method)),
        }
    }
}

/// Payable constructor; whatever is sent stays in the contract.
#[derive(Debug, Clone, BorshSerialize, BorshDeserialize)]
pub struct Constructors4 {
    pub owner: Address,
    pub name: String,
}

impl Contract for Constructors4 {
    const NAME: &'static str = "Constructors4";

    fn abi() -> ContractAbi {
        ContractAbi::new(Self::NAME)
            .constructor(ConstructorAbi::new().payable())
            .method(MethodAbi::getter("owner", ParamType::Address))
            .method(MethodAbi::getter("name", ParamType::String))
    }

    fn construct(env: &mut Env<'_>, _args: Args<'_>) -> Result<Self, Revert> {
        Ok(Self {
            owner: env.sender(),
            name: "Example 4".to_string(),
        })
    }

    fn execute(&mut self, _env: &mut Env<'_>, method: &str, _args: Args<'_>) -> Result<Vec<Value>, Revert> {
        match method {
            "owner" => Ok(vec![self.owner.into()]),
            "name" => Ok(vec![self.name.clone().into()]),
            _ => Err(unknown_method(method)),
        }
    }
}

/// Base whose constructor takes no arguments.
#[derive(Debug, Clone, BorshSerialize, BorshDeserialize)]
pub struct Parent1 {
    pub name: String,
}

impl Parent1 {
    pub fn new() -> Self {
        Self {
            name: "Example 5".to_string(),
        }
    }
}

impl Default for Parent1 {
    fn default() -> Self {
        Self::new()
    }
}

/// Inherits the parent constructor unchanged.
#[derive(Debug, Clone, BorshSerialize, BorshDeserialize)]
pub struct Constructors5 {
    pub parent: Parent1,
}

impl Contract for Constructors5 {
    const NAME: &'static str = "Constructors5";

    fn abi() -> ContractAbi {
        ContractAbi::new(Self::NAME).method(MethodAbi::getter("name", ParamType::String))
    }

    fn construct(_env: &mut Env<'_>, _args: Args<'_>) -> Result<Self, Revert> {
        Ok(Self {
            parent: Parent1::new(),
        })
    }

    fn execute(&mut self, _env: &mut Env<'_>, method: &str, _args: Args<'_>) -> Result<Vec<Value>, Revert> {
        match method {
            "name" => Ok(vec![self.parent.name.clone().into()]),
            _ => Err(unknown_method(method)),
        }
    }
}

/// Base whose constructor takes the name.
#[derive(Debug, Clone, BorshSerialize, BorshDeserialize)]
pub struct Parent2 {
    pub name: String,
}

impl Parent2 {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

/// Extends the parent constructor with an extra argument.
#[derive(Debug, Clone, BorshSerialize, BorshDeserialize)]
pub struct Constructors6 {
    pub parent: Parent2,
    pub description: String,
}

impl Contract for Constructors6 {
    const NAME: &'static str = "Constructors6";

    fn abi() -> ContractAbi {
        ContractAbi::new(Self::NAME)
            .constructor(
                ConstructorAbi::new()
                    .input("_name", ParamType::String)
                    .input("_description", ParamType::String),
            )
            .method(MethodAbi::getter("name", ParamType::String))
            .method(MethodAbi::getter("description", ParamType::String))
    }

    fn construct(_env: &mut Env<'_>, args: Args<'_>) -> Result<Self, Revert> {
        Ok(Self {
            parent: Parent2::new(args.string(0)?),
            description: args.string(1)?,
        })
    }

    fn execute(&mut self, _env: &mut Env<'_>, method: &str, _args: Args<'_>) -> Result<Vec<Value>, Revert> {
        match method {
            "name" => Ok(vec![self.parent.name.clone().into()]),
            "description" => Ok(vec![self.description.clone().into()]),
            _ => Err(unknown_method(method)),
        }
    }
}
