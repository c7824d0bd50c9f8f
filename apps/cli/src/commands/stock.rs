//! # Stock Commands
//!
//! Menu options 2 (Ingresar Stock) and 4 (Registrar Venta).

use std::io::{BufRead, Write};

use ferreteria_core::validation::{parse_code, parse_quantity};
use ferreteria_store::Inventory;

use super::report_failure;
use crate::console::Console;
use crate::error::CliResult;

/// Adds units to a product's stock.
pub fn restock<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> CliResult<()> {
    let code = console.prompt_parsed(
        "Ingrese el código del producto para agregar stock: ",
        parse_code,
    )?;
    let quantity = console.prompt_parsed("Ingrese la cantidad a agregar: ", parse_quantity)?;

    match inventory.restock(code, quantity) {
        Ok(product) => {
            let message = format!(
                "Stock de '{}' actualizado. Nuevo stock: {}",
                product.name, product.stock
            );
            console.notice(&message)
        }
        Err(err) => report_failure(console, &err),
    }
}

/// Records a sale, lowering stock.
///
/// ## User Workflow
/// ```text
/// Ingrese el código del producto vendido: 1
/// Ingrese la cantidad vendida: 3
///      │
///      ▼
/// Venta registrada. Nuevo stock de 'Martillo': 2
/// Total de la venta: $4500.00
/// ```
pub fn record_sale<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> CliResult<()> {
    let code = console.prompt_parsed("Ingrese el código del producto vendido: ", parse_code)?;
    let quantity = console.prompt_parsed("Ingrese la cantidad vendida: ", parse_quantity)?;

    match inventory.record_sale(code, quantity) {
        Ok(receipt) => {
            console.blank()?;
            console.line(&format!(
                "Venta registrada. Nuevo stock de '{}': {}",
                receipt.name, receipt.remaining_stock
            ))?;
            if let Some(total) = receipt.total {
                console.line(&format!("Total de la venta: {}", total))?;
            }
            console.blank()
        }
        Err(err) => report_failure(console, &err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferreteria_core::{Money, NewProduct};
    use std::io::Cursor;

    fn inventory_with_hammer(stock: i64) -> Inventory {
        let mut inventory = Inventory::new();
        inventory
            .create_product(NewProduct {
                code: 1,
                name: "Martillo".to_string(),
                category: "Herramientas".to_string(),
                price: Money::from_cents(150_000),
                stock,
            })
            .unwrap();
        inventory
    }

    fn run<F>(script: &str, inventory: &mut Inventory, command: F) -> String
    where
        F: Fn(&mut Console<Cursor<Vec<u8>>, Vec<u8>>, &mut Inventory) -> CliResult<()>,
    {
        let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        command(&mut console, inventory).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_restock() {
        let mut inventory = inventory_with_hammer(10);
        let output = run("1\n15\n", &mut inventory, restock);

        assert!(output.contains("Stock de 'Martillo' actualizado. Nuevo stock: 25"));
        assert_eq!(inventory.products().get(1).unwrap().stock, 25);
    }

    #[test]
    fn test_restock_unknown_code() {
        let mut inventory = inventory_with_hammer(10);
        let output = run("2\n15\n", &mut inventory, restock);

        assert!(output.contains("Producto con código 2 no encontrado."));
        assert_eq!(inventory.products().get(1).unwrap().stock, 10);
    }

    #[test]
    fn test_sale_then_oversell() {
        let mut inventory = inventory_with_hammer(5);

        let output = run("1\n3\n", &mut inventory, record_sale);
        assert!(output.contains("Venta registrada. Nuevo stock de 'Martillo': 2"));
        assert!(output.contains("Total de la venta: $4500.00"));

        let output = run("1\n10\n", &mut inventory, record_sale);
        assert!(output.contains("Stock insuficiente para el producto 'Martillo'"));
        assert_eq!(inventory.products().get(1).unwrap().stock, 2);
    }

    #[test]
    fn test_sale_with_unrepresentable_total() {
        let mut inventory = Inventory::new();
        inventory
            .create_product(NewProduct {
                code: 1,
                name: "Torno".to_string(),
                category: "Maquinaria".to_string(),
                price: Money::from_cents(i64::MAX / 2),
                stock: 5,
            })
            .unwrap();

        let output = run("1\n3\n", &mut inventory, record_sale);
        assert!(output.contains("Venta registrada. Nuevo stock de 'Torno': 2"));
        assert!(!output.contains("Total de la venta"));
    }

    #[test]
    fn test_sale_reprompts_bad_quantity() {
        let mut inventory = inventory_with_hammer(5);
        let output = run("1\ntres\n3\n", &mut inventory, record_sale);

        assert!(output.contains("Intente nuevamente."));
        assert_eq!(inventory.products().get(1).unwrap().stock, 2);
    }
}
