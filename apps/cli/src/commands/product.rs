//! # Product Commands
//!
//! Menu options 1 (Crear Material) and 3 (Actualizar Precio).

use std::io::{BufRead, Write};

use ferreteria_core::validation::{parse_code, parse_price, parse_quantity};
use ferreteria_core::NewProduct;
use ferreteria_store::Inventory;

use super::report_failure;
use crate::console::Console;
use crate::error::CliResult;

/// Registers a new product.
///
/// All five fields are asked for before the code is checked, so a duplicate
/// is reported only after the operator has typed everything.
pub fn create_product<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> CliResult<()> {
    let code = console.prompt_parsed(
        "Ingrese el código del producto (número entero): ",
        parse_code,
    )?;
    let name = console.read_line("Ingrese el nombre del producto: ")?;
    let category = console.read_line("Ingrese la categoría del producto: ")?;
    let price = console.prompt_parsed("Ingrese el precio del producto: ", parse_price)?;
    let stock = console.prompt_parsed("Ingrese la cantidad en stock: ", parse_quantity)?;

    let new = NewProduct {
        code,
        name,
        category,
        price,
        stock,
    };

    match inventory.create_product(new) {
        Ok(product) => {
            let message = format!("Producto '{}' agregado exitosamente.", product.name);
            console.notice(&message)
        }
        Err(err) => report_failure(console, &err),
    }
}

/// Replaces a product's price.
pub fn update_price<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> CliResult<()> {
    let code = console.prompt_parsed(
        "Ingrese el código del producto para actualizar el precio: ",
        parse_code,
    )?;
    let price = console.prompt_parsed("Ingrese el nuevo precio: ", parse_price)?;

    match inventory.update_price(code, price) {
        Ok(product) => {
            let message = format!("Precio de '{}' actualizado a {}", product.name, product.price);
            console.notice(&message)
        }
        Err(err) => report_failure(console, &err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferreteria_core::Money;
    use std::io::Cursor;

    fn run<F>(script: &str, inventory: &mut Inventory, command: F) -> String
    where
        F: Fn(&mut Console<Cursor<Vec<u8>>, Vec<u8>>, &mut Inventory) -> CliResult<()>,
    {
        let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        command(&mut console, inventory).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_create_product() {
        let mut inventory = Inventory::new();
        let output = run(
            "1\nMartillo\nHerramientas\n1500.00\n10\n",
            &mut inventory,
            create_product,
        );

        assert!(output.contains("Producto 'Martillo' agregado exitosamente."));
        let product = inventory.products().get(1).unwrap();
        assert_eq!(product.price, Money::from_cents(150_000));
        assert_eq!(product.stock, 10);
        assert!(inventory.categories().contains("Herramientas"));
    }

    #[test]
    fn test_create_duplicate_names_the_code() {
        let mut inventory = Inventory::new();
        let script = "1\nMartillo\nHerramientas\n1500.00\n10\n";
        run(script, &mut inventory, create_product);
        let output = run(script, &mut inventory, create_product);

        assert!(output.contains("ya existe un producto con el código 1"));
        assert_eq!(inventory.products().len(), 1);
    }

    #[test]
    fn test_create_reprompts_bad_price() {
        let mut inventory = Inventory::new();
        let output = run(
            "4\nSerrucho\nHerramientas\nbarato\n99.9\n3\n",
            &mut inventory,
            create_product,
        );

        assert!(output.contains("Intente nuevamente."));
        assert_eq!(
            inventory.products().get(4).unwrap().price,
            Money::from_cents(9_990)
        );
    }

    #[test]
    fn test_update_price() {
        let mut inventory = Inventory::new();
        run("1\nMartillo\nHerramientas\n1500\n10\n", &mut inventory, create_product);

        let output = run("1\n1750.5\n", &mut inventory, update_price);
        assert!(output.contains("Precio de 'Martillo' actualizado a $1750.50"));
    }

    #[test]
    fn test_update_price_unknown_code() {
        let mut inventory = Inventory::new();
        let output = run("8\n10\n", &mut inventory, update_price);
        assert!(output.contains("Producto con código 8 no encontrado."));
    }
}
