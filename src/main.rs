//! FinAura - Personal Finance Terminal Dashboard
//!
//! A terminal client for the FinAura backend: spending dashboard,
//! AI financial-therapist chat, and the roommate/gigs tools panel.
//!
//! ## Usage
//!
//! ```bash
//! # Start the dashboard (expects the backend on 127.0.0.1:8000)
//! finaura
//!
//! # Point at a hosted backend
//! finaura --api-url https://finaura.example.com
//!
//! # With verbose logging
//! finaura -v
//! ```

use std::io::Write;
use std::panic;
use std::process::ExitCode;

use clap::Parser;
use finaura_core::{AppConfig, LogGuard, init_logging};
use finaura_tui::App;
use tracing::{error, info};

/// FinAura terminal dashboard.
///
/// Renders the spending dashboard, financial-therapist chat, and
/// roommate/gig tools against a remote FinAura backend.
#[derive(Parser, Debug)]
#[command(name = "finaura")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging (increases log level)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Directory for log files (defaults to ~/.finaura/logs/)
    #[arg(long)]
    log_dir: Option<std::path::PathBuf>,

    /// Base URL of the FinAura backend (overrides FINAURA_API_URL and config file)
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match setup_logging(&cli) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            return ExitCode::from(1);
        }
    };

    // Install panic hook to ensure terminal cleanup
    install_panic_hook();

    let config = match AppConfig::load(cli.api_url.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };

    info!(api_base_url = %config.api_base_url, "Starting FinAura dashboard");

    match run_app(config) {
        Ok(()) => {
            info!("FinAura dashboard exited normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("FinAura dashboard error: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Install a panic hook that restores the terminal before printing the panic message.
///
/// Even if the application panics while in raw mode with the alternate screen
/// enabled, the terminal is restored so the user can see the panic message.
fn install_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

/// Restore terminal to its normal state.
fn restore_terminal() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();

    let _ = crossterm::terminal::disable_raw_mode();

    crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen)?;
    crossterm::execute!(stdout, crossterm::cursor::Show)?;

    stdout.flush()?;

    Ok(())
}

/// Set up logging based on CLI arguments.
fn setup_logging(cli: &Cli) -> finaura_core::Result<LogGuard> {
    let debug = cli.verbose > 0;
    init_logging(cli.log_dir.clone(), debug)
}

/// Run the TUI application on its own tokio runtime.
///
/// The render loop itself is synchronous; the runtime only services the
/// dashboard fetch and chat send futures spawned by the app.
fn run_app(config: finaura_core::AppConfig) -> finaura_tui::AppResult<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let mut app = App::new(config, runtime.handle().clone())?;
    app.run()
}
