//! Option registry: case-insensitive name lookup plus the display order.

use super::option::{Args, MenuOption, Param};
use crate::error::{exit, MenuError, Result};
use std::collections::HashMap;
use std::rc::Rc;
use tracing::debug;

/// Names the built-in quit option answers to.
pub const QUIT_NAMES: [&str; 3] = ["quit", "exit", "q"];

/// Describes an option before it is registered.
///
/// `ident` stands in for the action's own name and is used when no explicit
/// names are given. `doc` is the action's documentation, shown when no `help`
/// is set.
#[derive(Debug, Clone, Default)]
pub struct OptionSpec {
    ident: String,
    names: Vec<String>,
    help: Option<String>,
    doc: Option<String>,
    params: Vec<Param>,
}

impl OptionSpec {
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            ..Self::default()
        }
    }

    /// Adds one name. The first name added becomes the primary.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    pub fn names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Attaches the action and validates the names.
    pub fn build<F>(self, action: F) -> Result<MenuOption>
    where
        F: Fn(&Args) -> anyhow::Result<()> + 'static,
    {
        let raw = if self.names.is_empty() {
            vec![self.ident]
        } else {
            self.names
        };

        let mut names: Vec<String> = Vec::with_capacity(raw.len());
        for name in raw {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(MenuError::Config(
                    "option names must not be empty".to_string(),
                ));
            }
            if !names.iter().any(|n| n.to_lowercase() == name.to_lowercase()) {
                names.push(name);
            }
        }

        let help = self
            .help
            .or_else(|| self.doc.map(|d| d.trim().to_string()))
            .unwrap_or_default();

        Ok(MenuOption::new(names, help, self.params, Box::new(action)))
    }
}

/// Lowercased name → option mapping plus first-registration order.
pub struct Registry {
    by_name: HashMap<String, Rc<MenuOption>>,
    order: Vec<Rc<MenuOption>>,
}

impl Registry {
    /// A registry holding only the built-in quit option.
    pub fn new() -> Self {
        let mut registry = Self {
            by_name: HashMap::new(),
            order: Vec::new(),
        };
        registry.register_builtin_quit();
        registry
    }

    fn register_builtin_quit(&mut self) {
        let quit = OptionSpec::new("quit")
            .names(QUIT_NAMES)
            .help("Exit the program")
            .build(|_| Err(exit()));
        // Static names, never empty.
        if let Ok(quit) = quit {
            self.register(Rc::new(quit));
        }
    }

    /// Stores `option` under each of its names. Later registrations win on
    /// name collisions; the order keeps each option once, by identity.
    pub fn register(&mut self, option: Rc<MenuOption>) {
        for name in option.names() {
            if let Some(previous) = self.by_name.insert(name.to_lowercase(), Rc::clone(&option)) {
                if !Rc::ptr_eq(&previous, &option) {
                    debug!(name = %name, shadowed = previous.primary(), "Name re-registered");
                }
            }
        }

        if !self.order.iter().any(|o| Rc::ptr_eq(o, &option)) {
            debug!(primary = option.primary(), position = self.order.len() + 1, "Option registered");
            self.order.push(option);
        }
    }

    /// Exact, case-insensitive name lookup.
    pub fn lookup_by_name(&self, name: &str) -> Option<&Rc<MenuOption>> {
        self.by_name.get(&name.to_lowercase())
    }

    /// 1-based position in display order.
    pub fn lookup_by_ordinal(&self, n: usize) -> Option<&Rc<MenuOption>> {
        n.checked_sub(1).and_then(|idx| self.order.get(idx))
    }

    /// Options in display order.
    pub fn all_options(&self) -> &[Rc<MenuOption>] {
        &self.order
    }

    /// Every registered (lowercased) name with the option it maps to.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Rc<MenuOption>)> {
        self.by_name.iter().map(|(name, opt)| (name.as_str(), opt))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
