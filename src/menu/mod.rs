//! Interactive numbered menus.
//!
//! Includes:
//! - `registry`: option registration and case-insensitive lookup.
//! - `resolve`: choice resolution by ordinal, exact name or unambiguous prefix.
//! - `invoke` / `coerce`: argument prompting and best-effort type coercion.
//! - `runner`: the `Menu` type and its run loop.

mod coerce;
mod invoke;
mod option;
mod prompt;
mod registry;
mod resolve;
mod runner;

pub use coerce::*;
pub use invoke::*;
pub use option::*;
pub use prompt::*;
pub use registry::*;
pub use resolve::*;
pub use runner::*;
