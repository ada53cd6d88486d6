//! Maps one line of user input to a registered option.

use super::option::MenuOption;
use super::registry::Registry;
use std::rc::Rc;
use tracing::debug;

/// Outcome of resolving a menu choice.
#[derive(Debug, Clone)]
pub enum Resolution {
    Found(Rc<MenuOption>),
    /// Prefix matched several options; carries their sorted primary names.
    Ambiguous(Vec<String>),
    NotFound,
}

impl Resolution {
    pub fn option(&self) -> Option<&Rc<MenuOption>> {
        match self {
            Resolution::Found(option) => Some(option),
            _ => None,
        }
    }
}

/// Resolves `input` by ordinal, then exact name, then unambiguous name prefix.
///
/// Empty input yields `NotFound`; the run loop re-prompts before getting here.
pub fn resolve(registry: &Registry, input: &str) -> Resolution {
    let choice = input.trim().to_lowercase();
    if choice.is_empty() {
        return Resolution::NotFound;
    }

    let resolution = if choice.chars().all(|c| c.is_ascii_digit()) {
        // Overflowing ordinals are simply out of range.
        choice
            .parse::<usize>()
            .ok()
            .and_then(|n| registry.lookup_by_ordinal(n))
            .map_or(Resolution::NotFound, |opt| Resolution::Found(Rc::clone(opt)))
    } else if let Some(option) = registry.lookup_by_name(&choice) {
        Resolution::Found(Rc::clone(option))
    } else {
        by_prefix(registry, &choice)
    };

    debug!(input = %choice, ?resolution, "Resolved menu choice");
    resolution
}

fn by_prefix(registry: &Registry, prefix: &str) -> Resolution {
    let mut matches: Vec<&Rc<MenuOption>> = Vec::new();
    for (name, option) in registry.entries() {
        if name.starts_with(prefix) && !matches.iter().any(|m| Rc::ptr_eq(m, option)) {
            matches.push(option);
        }
    }

    match matches.len() {
        0 => Resolution::NotFound,
        1 => Resolution::Found(Rc::clone(matches[0])),
        _ => {
            let mut primaries: Vec<String> =
                matches.iter().map(|m| m.primary().to_string()).collect();
            primaries.sort();
            Resolution::Ambiguous(primaries)
        },
    }
}
