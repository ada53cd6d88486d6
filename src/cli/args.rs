use crate::menu::MenuConfig;
use clap::Parser;
use std::env;
use tracing::debug;

/// Interactive menu demo: pick options by number, name or name prefix
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Title shown above the options (env: MENU_TITLE)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Do not prompt for option arguments; options use their defaults (env: MENU_ASK_ARGS=false)
    #[arg(long)]
    pub no_args: bool,

    /// Clear the screen before showing the menu (env: MENU_CLEAR_SCREEN)
    #[arg(short, long)]
    pub clear_screen: bool,

    /// Resolve and run a single choice instead of looping
    #[arg(long)]
    pub once: bool,
}

impl Cli {
    /// Builds the menu configuration, letting flags override environment variables.
    pub fn config(&self) -> MenuConfig {
        self.config_from(|key| env::var(key).ok())
    }

    fn config_from<F>(&self, lookup: F) -> MenuConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let title = self
            .title
            .clone()
            .or_else(|| lookup("MENU_TITLE"))
            .unwrap_or_else(|| "My App".to_string());

        let ask_args = !self.no_args && lookup("MENU_ASK_ARGS").map_or(true, |v| is_truthy(&v));
        let clear_screen =
            self.clear_screen || lookup("MENU_CLEAR_SCREEN").is_some_and(|v| is_truthy(&v));

        let config = MenuConfig::default()
            .title(title)
            .ask_args(ask_args)
            .clear_screen(clear_screen);
        debug!(?config, "Resolved menu configuration");
        config
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}
