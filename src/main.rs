//! Signup wizard CLI

use clap::Parser;
use signup_wizard::cli::{Cli, Commands};
use signup_wizard::errors::to_exit_code;
use signup_wizard::schemas::WizardConfig;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> signup_wizard::Result<()> {
    let root = signup_wizard::fs::resolve_cwd(cli.cwd.as_deref());
    let config: WizardConfig = signup_wizard::config::load_config(&root, cli.config.as_deref())?;

    let mut logging = signup_wizard::logging::init_logging(
        &config,
        &root,
        cli.is_tui_mode(),
        cli.verbose,
        cli.quiet,
    )?;

    let result = match cli.command {
        Some(Commands::Run {
            route,
            carry_forward,
        }) => {
            signup_wizard::cli::commands::run::run(&config, route.as_deref(), carry_forward).await
        }
        Some(Commands::Routes { json }) => signup_wizard::cli::commands::routes::run(json).await,
        Some(Commands::Validate {
            route,
            fields,
            json,
        }) => signup_wizard::cli::commands::validate::run(&route, &fields, json).await,
        None => signup_wizard::cli::commands::run::run(&config, None, false).await,
    };

    // Flush buffered lines before checking the file
    drop(logging._guard.take());
    if let Some(notice) = logging.session_notice() {
        eprintln!("{}", notice);
    }

    result
}
