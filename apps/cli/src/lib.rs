//! # Ferretería CLI Library
//!
//! Console front end for the hardware-store inventory. `main.rs` only calls
//! [`run`]; everything else lives here so it can be tested without a
//! terminal.
//!
//! ## Module Organization
//! ```text
//! ferreteria_cli/
//! ├── lib.rs          ◄─── You are here (arguments, logging, startup)
//! ├── config.rs       ◄─── AppConfig (defaults, TOML file, FERRETERIA_* env)
//! ├── console.rs      ◄─── Prompting over BufRead / Write
//! ├── menu.rs         ◄─── Menu state machine
//! ├── commands/
//! │   ├── mod.rs      ◄─── Shared failure reporting
//! │   ├── product.rs  ◄─── Crear Material, Actualizar Precio
//! │   ├── stock.rs    ◄─── Ingresar Stock, Registrar Venta
//! │   └── report.rs   ◄─── Mostrar Productos, Mostrar Categorías
//! └── error.rs        ◄─── CliError
//! ```
//!
//! ## Startup Sequence
//! 1. Parse command line arguments
//! 2. Load configuration
//! 3. Initialize tracing (stderr)
//! 4. Create an empty inventory
//! 5. Run the menu on stdin / stdout

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod menu;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ferreteria_store::Inventory;

use config::AppConfig;
use console::Console;
use error::{CliError, CliResult};

/// Help text for `-h` / `--help` and usage errors.
pub const USAGE: &str = "\
Usage: ferreteria [OPTIONS]

Options:
  -c, --config <PATH>  TOML configuration file
  -h, --help           Show this help message

Environment:
  FERRETERIA_*         Override any configuration key (e.g. FERRETERIA_NAME_WIDTH=30)
  RUST_LOG             Override the log filter";

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config_path: Option<PathBuf>,
    pub show_help: bool,
}

impl CliArgs {
    /// Parses arguments, excluding the program name.
    pub fn parse<I>(args: I) -> CliResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    let path = args
                        .next()
                        .ok_or_else(|| CliError::Usage(format!("{} requires a path", arg)))?;
                    parsed.config_path = Some(PathBuf::from(path));
                }
                "--help" | "-h" => parsed.show_help = true,
                other => return Err(CliError::Usage(format!("Unknown argument: {}", other))),
            }
        }

        Ok(parsed)
    }
}

/// Runs the application on the process's stdin and stdout.
pub fn run() -> anyhow::Result<()> {
    let args = CliArgs::parse(std::env::args().skip(1))?;
    if args.show_help {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = AppConfig::load(args.config_path.as_deref())
        .map_err(CliError::from)
        .context("Failed to load configuration")?;

    init_tracing(&config.log_level);
    info!(store = %config.store_name, "Starting inventory session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    let mut inventory = Inventory::new();

    let end = menu::run_session(&mut console, &mut inventory, &config)
        .context("Console session failed")?;

    info!(
        ?end,
        products = inventory.products().len(),
        "Session finished"
    );
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. Output goes to stderr so it
/// never mixes with the menu.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// =============================================================================
// Unit Tests
// =============================================================================
