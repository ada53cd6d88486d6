//! Handles the demo binary's Command Line Interface (CLI).
//!
//! Includes parsing arguments into a `MenuConfig` and registering the demo
//! options (greeting, addition, shape drawing, screen clearing), plus the
//! Ctrl+C handler that ends the program the same way the quit option does.

mod args;
mod demo;
mod signal;

pub use args::*;
pub use demo::*;
pub use signal::*;
