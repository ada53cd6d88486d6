//! Small interactive command-line menus.
//!
//! Options are registered under one or more case-insensitive names and are
//! picked by number, by name or by an unambiguous name prefix. Declared
//! parameters can be prompted for and coerced before the option runs.

pub mod cli;
pub mod error;
pub mod menu;

pub use error::{exit, Exit, MenuError, Result};
pub use menu::{Menu, MenuConfig, OptionSpec, Param, ParamKind, RunStatus, Value};
