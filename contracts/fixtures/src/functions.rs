//! Function examples: reads and writes, visibility, state mutability,
//! modifiers and return values.

use borsh::{BorshDeserialize, BorshSerialize};
use primer_types::{Address, ParamType, Value, U256};
use primer_vm::{require, Args, Contract, ContractAbi, Env, EventAbi, MethodAbi, Revert};

use crate::unknown_method;

/// Read and write functions over a single name.
#[derive(Debug, Clone, BorshSerialize, BorshDeserialize)]
pub struct Functions1 {
    pub name: String,
}

impl Functions1 {
    const DEFAULT_NAME: &'static str = "Example 1";
}

impl Contract for Functions1 {
    const NAME: &'static str = "Functions1";

    fn abi() -> ContractAbi {
        ContractAbi::new(Self::NAME)
            .method(MethodAbi::getter("name", ParamType::String))
            .method(MethodAbi::view("getName").returns(ParamType::String))
            .method(MethodAbi::nonpayable("setName").input("_name", ParamType::String))
            .method(MethodAbi::nonpayable("resetName"))
    }

    fn construct(_env: &mut Env<'_>, _args: Args<'_>) -> Result<Self, Revert> {
        Ok(Self {
            name: Self::DEFAULT_NAME.to_string(),
        })
    }

    fn execute(&mut self, _env: &mut Env<'_>, method: &str, args: Args<'_>) -> Result<Vec<Value>, Revert> {
        match method {
            "name" | "getName" => Ok(vec![self.name.clone().into()]),
            "setName" => {
                self.name = args.string(0)?;
                Ok(vec![])
            }
            "resetName" => {
                self.name = Self::DEFAULT_NAME.to_string();
                Ok(vec![])
            }
            _ => Err(unknown_method(method)),
        }
    }
}

/// Calling a function from inside another function.
#[derive(Debug, Clone, Default, BorshSerialize, BorshDeserialize)]
pub struct Functions3 {
    pub count: U256,
}

impl Functions3 {
    fn add_one(&mut self) -> Result<(), Revert> {
        self.count = self.count.checked_add(&U256::ONE).ok_or_else(Revert::silent)?;
        Ok(())
    }
}

impl Contract for Functions3 {
    const NAME: &'static str = "Functions3";

    fn abi() -> ContractAbi {
        ContractAbi::new(Self::NAME)
            .method(MethodAbi::getter("count", ParamType::Uint256))
            .method(MethodAbi::nonpayable("increment"))
            .method(MethodAbi::nonpayable("addOne").internal())
    }

    fn construct(_env: &mut Env<'_>, _args: Args<'_>) -> Result<Self, Revert> {
        Ok(Self::default())
    }

    fn execute(&mut self, _env: &mut Env<'_>, method: &str, _args: Args<'_>) -> Result<Vec<Value>, Revert> {
        match method {
            "count" => Ok(vec![self.count.into()]),
            "increment" => {
                self.add_one()?;
                Ok(vec![])
            }
            _ => Err(unknown_method(method)),
        }
    }
}

/// Every visibility a function can have.
#[derive(Debug, Clone, Default, BorshSerialize, BorshDeserialize)]
pub struct Functions4 {
    pub count: U256,
}

impl Functions4 {
    fn increment1(&mut self) -> Result<(), Revert> {
        self.count = self.count.checked_add(&U256::ONE).ok_or_else(Revert::silent)?;
        Ok(())
    }

    fn increment2(&mut self) -> Result<(), Revert> {
        self.increment1()
    }

    // internal: reachable only from inside the contract
    fn increment3(&mut self) -> Result<(), Revert> {
        self.increment1()
    }

    fn increment4(&mut self) -> Result<(), Revert> {
        self.increment_private()
    }

    fn increment_private(&mut self) -> Result<(), Revert> {
        self.increment1()
    }

    fn increment5(&mut self) -> Result<(), Revert> {
        self.increment1()
    }

    // internal
    fn increment6(&mut self) -> Result<(), Revert> {
        self.increment3()
    }

    fn increment7(&mut self) -> Result<(), Revert> {
        self.increment6()
    }
}

impl Contract for Functions4 {
    const NAME: &'static str = "Functions4";

    fn abi() -> ContractAbi {
        ContractAbi::new(Self::NAME)
            .method(MethodAbi::getter("count", ParamType::Uint256))
            .method(MethodAbi::nonpayable("increment1"))
            .method(MethodAbi::nonpayable("increment2"))
            .method(MethodAbi::nonpayable("increment3").internal())
            .method(MethodAbi::nonpayable("increment4"))
            .method(MethodAbi::nonpayable("incrementPrivate").private())
            .method(MethodAbi::nonpayable("increment5").external())
            .method(MethodAbi::nonpayable("increment6").internal())
            .method(MethodAbi::nonpayable("increment7"))
    }

    fn construct(_env: &mut Env<'_>, _args: Args<'_>) -> Result<Self, Revert> {
        Ok(Self::default())
    }

    fn execute(&mut self, _env: &mut Env<'_>, method: &str, _args: Args<'_>) -> Result<Vec<Value>, Revert> {
        match method {
            "count" => return Ok(vec![self.count.into()]),
            "increment1" => self.increment1()?,
            "increment2" => self.increment2()?,
            "increment4" => self.increment4()?,
            "increment5" => self.increment5()?,
            "increment7" => self.increment7()?,
            _ => return Err(unknown_method(method)),
        }
        Ok(vec![])
    }
}

/// View, pure and payable functions.
#[derive(Debug, Clone, BorshSerialize, BorshDeserialize)]
pub struct Functions5 {
    pub name: String,
}

impl Contract for Functions5 {
    const NAME: &'static str = "Functions5";

    fn abi() -> ContractAbi {
        ContractAbi::new(Self::NAME)
            .method(MethodAbi::getter("name", ParamType::String))
            .method(MethodAbi::view("getName").returns(ParamType::String))
            .method(
                MethodAbi::pure("add")
                    .input("a", ParamType::Uint256)
                    .input("b", ParamType::Uint256)
                    .returns(ParamType::Uint256),
            )
            .method(MethodAbi::payable("pay"))
            .method(MethodAbi::view("balance").returns(ParamType::Uint256))
    }

    fn construct(_env: &mut Env<'_>, _args: Args<'_>) -> Result<Self, Revert> {
        Ok(Self {
            name: "Example 5".to_string(),
        })
    }

    fn execute(&mut self, env: &mut Env<'_>, method: &str, args: Args<'_>) -> Result<Vec<Value>, Revert> {
        match method {
            "name" | "getName" => Ok(vec![self.name.clone().into()]),
            "add" => {
                let sum = args.uint(0)?.checked_add(&args.uint(1)?).ok_or_else(Revert::silent)?;
                Ok(vec![sum.into()])
            }
            "pay" => Ok(vec![]),
            "balance" => Ok(vec![env.self_balance().into()]),
            _ => Err(unknown_method(method)),
        }
    }
}

/// Function modifiers guarding writes.
#[derive(Debug, Clone, BorshSerialize, BorshDeserialize)]
pub struct Functions6 {
    pub owner: Address,
    pub name: String,
}

impl Functions6 {
    fn only_owner(&self, env: &Env<'_>) -> Result<(), Revert> {
        require(env.sender() == self.owner, "Caller must be owner")
    }

    fn name_changed(&self, name: &str) -> Result<(), Revert> {
        require(self.name != name, "Name unchanged")
    }
}

impl Contract for Functions6 {
    const NAME: &'static str = "Functions6";

    fn abi() -> ContractAbi {
        ContractAbi::new(Self::NAME)
            .method(MethodAbi::getter("owner", ParamType::Address))
            .method(MethodAbi::getter("name", ParamType::String))
            .method(MethodAbi::nonpayable("setName1").input("_name", ParamType::String))
            .method(MethodAbi::nonpayable("setName2").input("_name", ParamType::String))
    }

    fn construct(env: &mut Env<'_>, _args: Args<'_>) -> Result<Self, Revert> {
        Ok(Self {
            owner: env.sender(),
            name: "Example 6".to_string(),
        })
    }

    fn execute(&mut self, env: &mut Env<'_>, method: &str, args: Args<'_>) -> Result<Vec<Value>, Revert> {
        match method {
            "owner" => Ok(vec![self.owner.into()]),
            "name" => Ok(vec![self.name.clone().into()]),
            "setName1" => {
                let name = args.string(0)?;
                self.only_owner(env)?;
                self.name_changed(&name)?;
                self.name = name;
                Ok(vec![])
            }
            "setName2" => {
                let name = args.string(0)?;
                self.only_owner(env)?;
                self.name = name;
                Ok(vec![])
            }
            _ => Err(unknown_method(method)),
        }
    }
}

/// Return values, default returns and events on writes.
#[derive(Debug, Clone, BorshSerialize, BorshDeserialize)]
pub struct Functions7 {
    pub name: String,
}

impl Functions7 {
    const NEW_NAME: &'static str = "New name";

    fn get_name1(&self) -> String {
        "Example 7".to_string()
    }

    fn get_name4(&self) -> String {
        "Another name".to_string()
    }

    fn get_name6(&self) -> (String, String) {
        (self.get_name1(), Self::NEW_NAME.to_string())
    }

    fn set_name2(&mut self) -> String {
        self.name = Self::NEW_NAME.to_string();
        self.name.clone()
    }
}

impl Contract for Functions7 {
    const NAME: &'static str = "Functions7";

    fn abi() -> ContractAbi {
        ContractAbi::new(Self::NAME)
            .method(MethodAbi::getter("name", ParamType::String))
            .method(MethodAbi::pure("getName1").returns(ParamType::String))
            .method(MethodAbi::pure("getName2").returns(ParamType::String))
            .method(MethodAbi::pure("getName3").returns(ParamType::String))
            .method(MethodAbi::pure("getName4").output("anotherName", ParamType::String))
            .method(MethodAbi::pure("getName5").returns(ParamType::String))
            .method(
                MethodAbi::pure("getName6")
                    .output("name1", ParamType::String)
                    .output("name2", ParamType::String),
            )
            .method(
                MethodAbi::pure("getName7")
                    .returns(ParamType::String)
                    .returns(ParamType::String),
            )
            .method(MethodAbi::nonpayable("setName1"))
            .method(MethodAbi::nonpayable("setName2").internal().returns(ParamType::String))
            .method(MethodAbi::nonpayable("setName3"))
            .event(EventAbi::new("NameChanged").input("name", ParamType::String))
    }

    fn construct(_env: &mut Env<'_>, _args: Args<'_>) -> Result<Self, Revert> {
        Ok(Self {
            name: "Example 7".to_string(),
        })
    }

    fn execute(&mut self, env: &mut Env<'_>, method: &str, _args: Args<'_>) -> Result<Vec<Value>, Revert> {
        match method {
            "name" => Ok(vec![self.name.clone().into()]),
            "getName1" => Ok(vec![self.get_name1().into()]),
            // declares a string return but never assigns one
            "getName2" => Ok(vec![]),
            "getName3" => Ok(vec![self.get_name1().into()]),
            "getName4" => Ok(vec![self.get_name4().into()]),
            "getName5" => {
                let name = self.get_name4();
                Ok(vec![name.into()])
            }
            "getName6" => {
                let (first, second) = self.get_name6();
                Ok(vec![first.into(), second.into()])
            }
            "getName7" => {
                let (first, second) = self.get_name6();
                Ok(vec![first.into(), second.into()])
            }
            "setName1" => {
                self.name = Self::NEW_NAME.to_string();
                env.emit("NameChanged", vec![self.name.clone().into()]);
                Ok(vec![])
            }
            "setName3" => {
                let name = self.set_name2();
                env.emit("NameChanged", vec![name.into()]);
                Ok(vec![])
            }
            _ => Err(unknown_method(method)),
        }
    }
}
