//! Errors raised while registering, resolving and running menu options.
//!
//! Actions report failures as `anyhow::Error`; the run loop turns them into
//! `MenuError::Action`, unless the error already is a `MenuError` (for example
//! a `MissingArgument` from an `Args` getter), which is unwrapped as-is.
//! The [`Exit`] marker travels the same path but ends the loop instead of
//! being reported.

use std::sync::Arc;
use thiserror::Error;

/// The primary error enumeration for everything the menu can fail with.
#[derive(Error, Debug, Clone)]
pub enum MenuError {
    /// A required parameter was left empty at its prompt.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// Error related to reading the console or writing the menu.
    #[error("I/O Error: {0}")]
    Io(Arc<std::io::Error>),

    /// Error raised by a registered action's own body.
    #[error("{0}")]
    Action(Arc<anyhow::Error>),

    /// Invalid menu configuration, detected at registration time.
    #[error("Config Error: {0}")]
    Config(String),

    /// The interrupt handler could not be installed.
    #[error("Signal Error: {0}")]
    Signal(Arc<ctrlc::Error>),
}

/// A specialized `Result` type using the crate's `MenuError`.
pub type Result<T> = std::result::Result<T, MenuError>;

/// Marker error an action returns to terminate the run loop.
///
/// Not a failure: the loop prints its farewell and reports
/// [`RunStatus::Exited`](crate::menu::RunStatus::Exited).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("exit requested")]
pub struct Exit;

/// Shorthand for `Err(exit())` inside an action.
pub fn exit() -> anyhow::Error {
    Exit.into()
}

impl MenuError {
    /// Whether this error carries the [`Exit`] marker rather than a real failure.
    pub fn is_exit(&self) -> bool {
        matches!(self, MenuError::Action(err) if err.downcast_ref::<Exit>().is_some())
    }
}

// --- From implementations ---

impl From<std::io::Error> for MenuError {
    fn from(err: std::io::Error) -> Self {
        MenuError::Io(Arc::new(err))
    }
}

impl From<ctrlc::Error> for MenuError {
    fn from(err: ctrlc::Error) -> Self {
        MenuError::Signal(Arc::new(err))
    }
}

impl From<anyhow::Error> for MenuError {
    fn from(err: anyhow::Error) -> Self {
        // A MenuError that travelled through an action keeps its own variant.
        match err.downcast::<MenuError>() {
            Ok(menu_err) => menu_err,
            Err(err) => MenuError::Action(Arc::new(err)),
        }
    }
}
