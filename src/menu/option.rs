//! Data model for registered menu options: parameter descriptors, argument values
//! and the option itself.

use crate::error::{MenuError, Result};
use std::collections::HashMap;
use std::fmt;

/// Callable attached to a menu option.
///
/// Returning `Err(menu_kit::exit())` terminates the run loop.
pub type Action = Box<dyn Fn(&Args) -> anyhow::Result<()>>;

/// Declared semantic type of a parameter, used to coerce raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Str,
    Int,
    Float,
    Bool,
    /// Comma-separated list of strings.
    List,
    Char,
}

/// A coerced argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<String>),
    Char(char),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{}", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Bool(b) => write!(f, "{}", b),
            Value::List(items) => write!(f, "{}", items.join(", ")),
            Value::Char(c) => write!(f, "{}", c),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

/// Describes one parameter of an action: its name, optional default and optional type.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub default: Option<Value>,
    pub kind: Option<ParamKind>,
}

impl Param {
    /// An untyped parameter without a default. Input is passed through as a string.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            kind: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn typed(mut self, kind: ParamKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Text shown when asking for this parameter, e.g. `size [5]: `.
    pub fn prompt(&self) -> String {
        match &self.default {
            Some(default) => format!("{} [{}]: ", self.name, default),
            None => format!("{}: ", self.name),
        }
    }
}

/// Named arguments handed to an action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    values: HashMap<String, Value>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arguments made only of the parameters' defaults, as when nothing is prompted.
    pub fn defaults(params: &[Param]) -> Self {
        let mut args = Self::new();
        for param in params {
            if let Some(default) = &param.default {
                args.insert(&param.name, default.clone());
            }
        }
        args
    }

    pub fn insert(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn require(&self, name: &str) -> Result<&Value> {
        self.get(name)
            .ok_or_else(|| MenuError::MissingArgument(name.to_string()))
    }

    /// The argument rendered as text, whatever its type.
    pub fn str(&self, name: &str) -> Result<String> {
        self.require(name).map(Value::to_string)
    }

    /// Integer argument. A raw string that parses is accepted too.
    pub fn int(&self, name: &str) -> Result<i64> {
        match self.require(name)? {
            Value::Int(i) => Ok(*i),
            Value::Str(s) => s.trim().parse().map_err(|_| not_a(name, "integer", s)),
            other => Err(not_a(name, "integer", &other.to_string())),
        }
    }

    /// Float argument. Integers and parsable strings are accepted too.
    pub fn float(&self, name: &str) -> Result<f64> {
        match self.require(name)? {
            Value::Float(x) => Ok(*x),
            Value::Int(i) => Ok(*i as f64),
            Value::Str(s) => s.trim().parse().map_err(|_| not_a(name, "number", s)),
            other => Err(not_a(name, "number", &other.to_string())),
        }
    }

    pub fn bool(&self, name: &str) -> Result<bool> {
        match self.require(name)? {
            Value::Bool(b) => Ok(*b),
            other => Err(not_a(name, "boolean", &other.to_string())),
        }
    }

    /// List argument. A scalar value is returned as a one-element list.
    pub fn list(&self, name: &str) -> Result<Vec<String>> {
        match self.require(name)? {
            Value::List(items) => Ok(items.clone()),
            other => Ok(vec![other.to_string()]),
        }
    }
}

fn not_a(name: &str, expected: &str, got: &str) -> MenuError {
    MenuError::Action(std::sync::Arc::new(anyhow::anyhow!(
        "argument '{}' is not a valid {}: {:?}",
        name,
        expected,
        got
    )))
}

/// A registered, named, invokable unit of menu functionality.
pub struct MenuOption {
    names: Vec<String>,
    help: String,
    params: Vec<Param>,
    action: Action,
}

impl MenuOption {
    pub(crate) fn new(names: Vec<String>, help: String, params: Vec<Param>, action: Action) -> Self {
        Self {
            names,
            help,
            params,
            action,
        }
    }

    /// The first name the option was registered under.
    pub fn primary(&self) -> &str {
        &self.names[0]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Every name except the primary one.
    pub fn aliases(&self) -> &[String] {
        &self.names[1..]
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub(crate) fn call(&self, args: &Args) -> anyhow::Result<()> {
        (self.action)(args)
    }
}

impl fmt::Debug for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuOption")
            .field("names", &self.names)
            .field("help", &self.help)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
