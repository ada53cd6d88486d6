use crate::error::Result;
use crate::menu::FAREWELL;
use colored::*;
use std::io::Write;
use tracing::warn;

/// Installs a Ctrl+C handler that prints the farewell and exits with status 0.
///
/// The handler runs on its own thread, so it fires even while the menu is
/// blocked reading a line.
pub fn setup_ctrlc_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        warn!("Interrupted");
        let mut stdout = std::io::stdout();
        let _ = writeln!(stdout, "\n{}", FAREWELL.green());
        let _ = stdout.flush();
        std::process::exit(0);
    })?;
    Ok(())
}
