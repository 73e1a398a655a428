//! Contract ABI: the callable surface of a contract and the rules the ledger
//! enforces before dispatching into it.

use primer_types::{ParamType, Value};
use std::fmt;

use crate::error::VmError;

/// Who may invoke a method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    External,
    Internal,
    Private,
}

impl Visibility {
    /// Whether a transaction or read from outside the contract may target it.
    pub fn is_externally_callable(self) -> bool {
        matches!(self, Visibility::Public | Visibility::External)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Visibility::Public => "public",
            Visibility::External => "external",
            Visibility::Internal => "internal",
            Visibility::Private => "private",
        };
        f.write_str(s)
    }
}

/// What a method may do to ledger state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mutability {
    Pure,
    View,
    NonPayable,
    Payable,
}

impl Mutability {
    pub fn is_read_only(self) -> bool {
        matches!(self, Mutability::Pure | Mutability::View)
    }

    pub fn is_payable(self) -> bool {
        self == Mutability::Payable
    }
}

impl fmt::Display for Mutability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mutability::Pure => "pure",
            Mutability::View => "view",
            Mutability::NonPayable => "nonpayable",
            Mutability::Payable => "payable",
        };
        f.write_str(s)
    }
}

/// A named, typed input or output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: ParamType,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: ParamType) -> Self {
        Self { name: name.into(), ty }
    }
}

fn check_args(method: &str, inputs: &[Param], args: &[Value]) -> Result<(), VmError> {
    if inputs.len() != args.len() {
        return Err(VmError::InvalidArguments {
            method: method.to_string(),
            reason: format!("expected {} argument(s), got {}", inputs.len(), args.len()),
        });
    }
    for (i, (param, arg)) in inputs.iter().zip(args).enumerate() {
        if param.ty != arg.param_type() {
            return Err(VmError::InvalidArguments {
                method: method.to_string(),
                reason: format!(
                    "argument {} ({}) expects {}, got {}",
                    i,
                    param.name,
                    param.ty,
                    arg.param_type()
                ),
            });
        }
    }
    Ok(())
}

/// Method description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodAbi {
    pub name: String,
    pub inputs: Vec<Param>,
    pub outputs: Vec<Param>,
    pub visibility: Visibility,
    pub mutability: Mutability,
}

impl MethodAbi {
    pub fn new(name: impl Into<String>, visibility: Visibility, mutability: Mutability) -> Self {
        Self {
            name: name.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            visibility,
            mutability,
        }
    }

    pub fn view(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Public, Mutability::View)
    }

    pub fn pure(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Public, Mutability::Pure)
    }

    pub fn nonpayable(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Public, Mutability::NonPayable)
    }

    pub fn payable(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Public, Mutability::Payable)
    }

    /// Getter generated for a public state variable.
    pub fn getter(name: impl Into<String>, ty: ParamType) -> Self {
        Self::view(name).returns(ty)
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn external(self) -> Self {
        self.with_visibility(Visibility::External)
    }

    pub fn internal(self) -> Self {
        self.with_visibility(Visibility::Internal)
    }

    pub fn private(self) -> Self {
        self.with_visibility(Visibility::Private)
    }

    pub fn input(mut self, name: impl Into<String>, ty: ParamType) -> Self {
        self.inputs.push(Param::new(name, ty));
        self
    }

    pub fn output(mut self, name: impl Into<String>, ty: ParamType) -> Self {
        self.outputs.push(Param::new(name, ty));
        self
    }

    /// Unnamed output.
    pub fn returns(self, ty: ParamType) -> Self {
        self.output("", ty)
    }

    pub fn check_args(&self, args: &[Value]) -> Result<(), VmError> {
        check_args(&self.name, &self.inputs, args)
    }

    /// Fill outputs the method did not return with their zero values and
    /// check the rest against the declared types.
    pub fn normalize_outputs(&self, mut values: Vec<Value>) -> Result<Vec<Value>, VmError> {
        if values.len() > self.outputs.len() {
            return Err(VmError::InvalidReturn {
                method: self.name.clone(),
                reason: format!(
                    "declared {} output(s), returned {}",
                    self.outputs.len(),
                    values.len()
                ),
            });
        }
        for (param, value) in self.outputs.iter().zip(&values) {
            if param.ty != value.param_type() {
                return Err(VmError::InvalidReturn {
                    method: self.name.clone(),
                    reason: format!("{} declared as {}, returned {}", param.name, param.ty, value.param_type()),
                });
            }
        }
        values.extend(self.outputs[values.len()..].iter().map(|p| p.ty.zero_value()));
        Ok(values)
    }

    /// `name(type,type)`
    pub fn signature(&self) -> String {
        let types: Vec<String> = self.inputs.iter().map(|p| p.ty.to_string()).collect();
        format!("{}({})", self.name, types.join(","))
    }
}

/// Constructor description. Contracts without an explicit constructor get
/// the default: no inputs, not payable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstructorAbi {
    pub inputs: Vec<Param>,
    pub payable: bool,
}

impl ConstructorAbi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(mut self, name: impl Into<String>, ty: ParamType) -> Self {
        self.inputs.push(Param::new(name, ty));
        self
    }

    pub fn payable(mut self) -> Self {
        self.payable = true;
        self
    }

    pub fn check_args(&self, args: &[Value]) -> Result<(), VmError> {
        check_args("constructor", &self.inputs, args)
    }
}

/// Event description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventAbi {
    pub name: String,
    pub inputs: Vec<Param>,
}

impl EventAbi {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inputs: Vec::new(),
        }
    }

    pub fn input(mut self, name: impl Into<String>, ty: ParamType) -> Self {
        self.inputs.push(Param::new(name, ty));
        self
    }
}

/// Full ABI of a contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractAbi {
    pub name: String,
    pub constructor: ConstructorAbi,
    pub methods: Vec<MethodAbi>,
    pub events: Vec<EventAbi>,
    /// Private state variables: no getter exists, reading one is a visibility error.
    pub private_state: Vec<String>,
}

impl ContractAbi {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constructor: ConstructorAbi::default(),
            methods: Vec::new(),
            events: Vec::new(),
            private_state: Vec::new(),
        }
    }

    pub fn constructor(mut self, constructor: ConstructorAbi) -> Self {
        self.constructor = constructor;
        self
    }

    pub fn method(mut self, method: MethodAbi) -> Self {
        self.methods.push(method);
        self
    }

    pub fn event(mut self, event: EventAbi) -> Self {
        self.events.push(event);
        self
    }

    pub fn private_state(mut self, name: impl Into<String>) -> Self {
        self.private_state.push(name.into());
        self
    }

    pub fn find_method(&self, name: &str) -> Option<&MethodAbi> {
        self.methods.iter().find(|m| m.name == name)
    }

    pub fn find_event(&self, name: &str) -> Option<&EventAbi> {
        self.events.iter().find(|e| e.name == name)
    }

    /// Resolve a method for a call from outside the contract.
    pub fn resolve(&self, name: &str) -> Result<&MethodAbi, VmError> {
        match self.find_method(name) {
            Some(method) if method.visibility.is_externally_callable() => Ok(method),
            Some(method) => Err(VmError::Visibility {
                contract: self.name.clone(),
                method: name.to_string(),
                visibility: method.visibility,
            }),
            None if self.private_state.iter().any(|s| s == name) => Err(VmError::Visibility {
                contract: self.name.clone(),
                method: name.to_string(),
                visibility: Visibility::Private,
            }),
            None => Err(VmError::UnknownMethod {
                contract: self.name.clone(),
                method: name.to_string(),
            }),
        }
    }

    /// Methods callable from outside, in declaration order.
    pub fn external_methods(&self) -> impl Iterator<Item = &MethodAbi> {
        self.methods
            .iter()
            .filter(|m| m.visibility.is_externally_callable())
    }
}
