//! The menu itself: configuration, registration entry point and the run loop.

use super::invoke::invoke;
use super::option::{Args, MenuOption};
use super::prompt::{Prompter, Stdio, CLEAR_SCREEN};
use super::registry::{OptionSpec, Registry};
use super::resolve::{resolve, Resolution};
use crate::error::{MenuError, Result};
use colored::*;
use std::io::Write;
use std::rc::Rc;
use tracing::{error, info, warn};

/// Prompt shown when asking for a menu choice.
pub const CHOICE_PROMPT: &str = "Choose option (number or name):\n> ";

/// Printed whenever the menu terminates on the user's request.
pub const FAREWELL: &str = "Exiting...";

const RULE_WIDTH: usize = 40;

/// Menu-wide settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuConfig {
    pub title: String,
    /// Prompt for each declared parameter before invoking an option.
    pub ask_args: bool,
    /// Clear the screen before every render.
    pub clear_screen: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            title: "Main Menu".to_string(),
            ask_args: false,
            clear_screen: false,
        }
    }
}

impl MenuConfig {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn ask_args(mut self, ask_args: bool) -> Self {
        self.ask_args = ask_args;
        self
    }

    pub fn clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }
}

/// How a call to [`Menu::run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Single-shot mode ran one option successfully.
    Completed,
    /// Single-shot mode could not resolve the choice.
    Unresolved,
    /// Quit was chosen, an action asked to exit, or input ended.
    Exited,
}

/// An interactive numbered menu.
pub struct Menu {
    config: MenuConfig,
    registry: Registry,
}

impl Menu {
    pub fn new(config: MenuConfig) -> Self {
        Self {
            config,
            registry: Registry::new(),
        }
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Registers `action` under the names in `spec`.
    pub fn option<F>(&mut self, spec: OptionSpec, action: F) -> Result<Rc<MenuOption>>
    where
        F: Fn(&Args) -> anyhow::Result<()> + 'static,
    {
        let option = Rc::new(spec.build(action)?);
        self.registry.register(Rc::clone(&option));
        Ok(option)
    }

    /// Resolves a choice against this menu's options.
    pub fn resolve(&self, input: &str) -> Resolution {
        resolve(&self.registry, input)
    }

    /// Runs on standard input and output.
    pub fn run(&self, looping: bool) -> Result<RunStatus> {
        self.run_with(&mut Stdio::new(), looping)
    }

    /// Runs on the given console.
    ///
    /// In looping mode failures are displayed and the loop continues. In
    /// single-shot mode one choice is resolved: an unresolved choice returns
    /// `Unresolved`, an action error is displayed and then returned.
    pub fn run_with<T: Prompter + Write>(&self, term: &mut T, looping: bool) -> Result<RunStatus> {
        info!(title = %self.config.title, looping, options = self.registry.len(), "Starting menu");

        loop {
            if self.config.clear_screen {
                write!(term, "{}", CLEAR_SCREEN)?;
            }
            self.render(term)?;

            let Some(line) = term.ask(CHOICE_PROMPT)? else {
                return farewell(term);
            };
            let choice = line.trim();
            if choice.is_empty() {
                continue;
            }

            let option = match self.resolve(choice) {
                Resolution::Found(option) => option,
                Resolution::Ambiguous(names) => {
                    writeln!(term, "\n{}", format!("⚠️  Ambiguous: {}", names.join(", ")).yellow())?;
                    writeln!(term, "\n{}\n", "❌ Invalid choice. Try again.".red())?;
                    if !looping {
                        return Ok(RunStatus::Unresolved);
                    }
                    continue;
                },
                Resolution::NotFound => {
                    writeln!(term, "\n{}\n", "❌ Invalid choice. Try again.".red())?;
                    if !looping {
                        return Ok(RunStatus::Unresolved);
                    }
                    continue;
                },
            };

            match invoke(&option, term, self.config.ask_args) {
                Ok(()) => {
                    writeln!(term)?;
                    if !looping {
                        return Ok(RunStatus::Completed);
                    }
                },
                Err(e) if e.is_exit() => return farewell(term),
                Err(e) => {
                    error!(option = option.primary(), "Option failed: {:?}", e);
                    writeln!(term, "\n{}\n", format!("❌ Error: {}", e).red())?;
                    if !looping {
                        return Err(e);
                    }
                },
            }
        }
    }

    /// Writes the numbered option list.
    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(out, "\n{}", rule)?;
        writeln!(out, "  {}", self.config.title.cyan().bold())?;
        writeln!(out, "{}", rule)?;

        for (i, option) in self.registry.all_options().iter().enumerate() {
            writeln!(out, "  {}", render_line(i + 1, option))?;
        }

        writeln!(out, "{}\n", rule)?;
        Ok(())
    }
}

/// One menu line without indentation, e.g. `2. hello (hi) — Say hello`.
pub fn render_line(ordinal: usize, option: &MenuOption) -> String {
    let mut line = format!("{}. {}", ordinal, option.primary());
    if !option.aliases().is_empty() {
        line.push_str(&format!(" ({})", option.aliases().join(", ")));
    }
    if !option.help().is_empty() {
        line.push_str(&format!(" — {}", option.help()));
    }
    line
}

fn farewell<W: Write + ?Sized>(out: &mut W) -> Result<RunStatus> {
    warn!("Menu terminated by user");
    writeln!(out, "\n{}", FAREWELL.green()).map_err(MenuError::from)?;
    Ok(RunStatus::Exited)
}
