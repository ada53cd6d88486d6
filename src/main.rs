use clap::Parser;
use colored::*;
use menu_kit::cli::{register_demo, setup_ctrlc_handler, Cli};
use menu_kit::{Menu, Result, RunStatus};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the menu on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let mut menu = Menu::new(cli.config());
    if let Err(e) = register_demo(&mut menu) {
        error!("Failed to register demo options: {:?}", e);
        println!("{}", "Error: Failed to build the menu. Check logs.".red());
        return Err(e);
    }
    info!(options = menu.registry().len(), "Menu ready");

    setup_ctrlc_handler()?;

    match menu.run(!cli.once)? {
        RunStatus::Exited => info!("Exited by user"),
        status => info!(?status, "Menu finished"),
    }

    Ok(())
}
