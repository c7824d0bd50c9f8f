//! # Ferretería Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          ferreteria (binary)                            │
//! │                                                                         │
//! │  main.rs ────► ferreteria_cli::run()                                    │
//! │                   │                                                     │
//! │                   ├── CliArgs::parse        (--config, --help)          │
//! │                   ├── AppConfig::load       (defaults, TOML, env)       │
//! │                   ├── init_tracing          (stderr)                    │
//! │                   └── menu::run_session     (stdin / stdout)            │
//! │                                                                         │
//! │  Exit status: 0 on Salir or end of input, non-zero on usage, config     │
//! │  or console I/O errors.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

fn main() -> anyhow::Result<()> {
    ferreteria_cli::run()
}
