//! Collects arguments for an option and calls its action.

use super::coerce::coerce;
use super::option::{Args, MenuOption};
use super::prompt::Prompter;
use crate::error::{MenuError, Result};
use tracing::{debug, info};

/// Prompts for each declared parameter in order and builds the named arguments.
///
/// Empty input keeps the parameter's default; empty input for a parameter
/// without one fails with `MissingArgument`. End of input counts as empty.
pub fn collect_args<P: Prompter + ?Sized>(option: &MenuOption, prompter: &mut P) -> Result<Args> {
    let mut args = Args::defaults(option.params());

    for param in option.params() {
        let raw = prompter.ask(&param.prompt())?.unwrap_or_default();
        let raw = raw.trim();

        if raw.is_empty() {
            if param.default.is_some() {
                debug!(param = %param.name, "Using default");
                continue;
            }
            return Err(MenuError::MissingArgument(param.name.clone()));
        }

        args.insert(&param.name, coerce(raw, param.kind));
    }

    Ok(args)
}

/// Runs `option`, prompting for its arguments first when `ask_args` is set.
///
/// Without prompting the action only sees its parameters' defaults.
pub fn invoke<P: Prompter + ?Sized>(option: &MenuOption, prompter: &mut P, ask_args: bool) -> Result<()> {
    let args = if ask_args {
        collect_args(option, prompter)?
    } else {
        Args::defaults(option.params())
    };

    info!(option = option.primary(), args = args.len(), "Invoking option");
    option.call(&args).map_err(MenuError::from)
}
