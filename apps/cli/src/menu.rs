//! # Menu Loop
//!
//! The interactive session as a small state machine.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Session States                                  │
//! │                                                                         │
//! │            ┌──────────────────┐   invalid choice                        │
//! │   start ──►│  AwaitingChoice  │◄───────────────┐                        │
//! │            └────────┬─────────┘                │                        │
//! │                     │ "1".."7"                 │                        │
//! │                     ▼                          │                        │
//! │            ┌──────────────────┐   1..6 done    │                        │
//! │            │   Dispatching    │────────────────┘                        │
//! │            └────────┬─────────┘                                         │
//! │                     │ 7 (Salir)  or  EOF at any prompt                  │
//! │                     ▼                                                   │
//! │            ┌──────────────────┐                                         │
//! │            │     Finished     │  terminal                               │
//! │            └──────────────────┘                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::{debug, info, warn};

use ferreteria_store::Inventory;

use crate::commands::{product, report, stock};
use crate::config::AppConfig;
use crate::console::Console;
use crate::error::{CliError, CliResult};

const CHOICE_PROMPT: &str = "Ingrese el número de la opción deseada: ";
const FAREWELL: &str = "Saliendo del sistema. ¡Hasta luego!";

/// One of the seven menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateProduct,
    Restock,
    UpdatePrice,
    RecordSale,
    ShowProducts,
    ShowCategories,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order.
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::CreateProduct,
        MenuChoice::Restock,
        MenuChoice::UpdatePrice,
        MenuChoice::RecordSale,
        MenuChoice::ShowProducts,
        MenuChoice::ShowCategories,
        MenuChoice::Exit,
    ];

    /// Number typed to select this option.
    pub fn number(&self) -> u8 {
        match self {
            MenuChoice::CreateProduct => 1,
            MenuChoice::Restock => 2,
            MenuChoice::UpdatePrice => 3,
            MenuChoice::RecordSale => 4,
            MenuChoice::ShowProducts => 5,
            MenuChoice::ShowCategories => 6,
            MenuChoice::Exit => 7,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::CreateProduct => "Crear Material",
            MenuChoice::Restock => "Ingresar Stock",
            MenuChoice::UpdatePrice => "Actualizar Precio",
            MenuChoice::RecordSale => "Registrar Venta",
            MenuChoice::ShowProducts => "Mostrar Productos",
            MenuChoice::ShowCategories => "Mostrar Categorías",
            MenuChoice::Exit => "Salir",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        MenuChoice::ALL
            .iter()
            .copied()
            .find(|choice| choice.number().to_string() == trimmed)
            .ok_or_else(|| CliError::InvalidMenuChoice(s.to_string()))
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Option 7 was chosen.
    Exit,
    /// Standard input ran out.
    InputClosed,
}

/// Menu loop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuState {
    AwaitingChoice,
    Dispatching(MenuChoice),
    Finished(SessionEnd),
}

/// Prints the menu block.
pub fn print_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store_name: &str,
) -> CliResult<()> {
    console.line(&format!("\n--- {} ---", store_name))?;
    console.line("Seleccione una opción:")?;
    for choice in MenuChoice::ALL {
        console.line(&format!("{}. {}", choice.number(), choice.label()))?;
    }
    Ok(())
}

/// Runs the menu until the operator exits or input ends.
///
/// Only console failures (`CliError::Io`) come back as `Err`; every business
/// error is printed and the menu is shown again.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
    config: &AppConfig,
) -> CliResult<SessionEnd> {
    let layout = config.layout();
    let mut state = MenuState::AwaitingChoice;

    loop {
        let step = match state {
            MenuState::AwaitingChoice => await_choice(console, &config.store_name),
            MenuState::Dispatching(choice) => {
                debug!(option = choice.number(), "Dispatching menu option");
                let outcome = match choice {
                    MenuChoice::CreateProduct => product::create_product(console, inventory),
                    MenuChoice::Restock => stock::restock(console, inventory),
                    MenuChoice::UpdatePrice => product::update_price(console, inventory),
                    MenuChoice::RecordSale => stock::record_sale(console, inventory),
                    MenuChoice::ShowProducts => report::show_products(console, inventory, &layout),
                    MenuChoice::ShowCategories => report::show_categories(console, inventory),
                    MenuChoice::Exit => console.notice(FAREWELL),
                };
                outcome.map(|()| match choice {
                    MenuChoice::Exit => MenuState::Finished(SessionEnd::Exit),
                    _ => MenuState::AwaitingChoice,
                })
            }
            MenuState::Finished(end) => return Ok(end),
        };

        state = match step {
            Ok(next) => next,
            Err(CliError::InputClosed) => {
                info!("Input closed, ending session");
                MenuState::Finished(SessionEnd::InputClosed)
            }
            Err(err) => return Err(err),
        };
    }
}

/// Shows the menu and reads one choice.
fn await_choice<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store_name: &str,
) -> CliResult<MenuState> {
    print_menu(console, store_name)?;
    let input = console.read_line(CHOICE_PROMPT)?;

    match input.parse::<MenuChoice>() {
        Ok(choice) => Ok(MenuState::Dispatching(choice)),
        Err(err) => {
            warn!(input = %input, "Invalid menu choice");
            console.notice(&format!("{}.", err))?;
            Ok(MenuState::AwaitingChoice)
        }
    }
}
