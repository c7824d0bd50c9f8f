//! # Report Module
//!
//! Renders the product catalog and the category list as fixed-width text.
//!
//! Everything here is a pure function returning lines; printing is the
//! caller's job.
//!
//! ## Catalog Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ Código     Nombre                    Categoría                 Precio … │
//! │ -----------------------------------------------------------------       │
//! │ 1          Martillo                  Herramientas              $1500.00 │
//! │ 2          Destornillador de punta p Herramientas manuales de  $350.00  │
//! │            hillips extra largo       precisión                          │
//! │            ▲                                                            │
//! │            └── continuation row: code / price / stock left blank        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Widths count characters, not bytes, so accented names line up.

use crate::money::Money;
use crate::types::Product;

/// Title printed above the catalog table.
pub const CATALOG_TITLE: &str = "--- Catálogo de Productos ---";

/// Title printed above the category list.
pub const CATEGORIES_TITLE: &str = "--- Categorías de Productos ---";

/// Printed instead of the category list when no category exists yet.
pub const NO_CATEGORIES: &str = "No hay categorías registradas.";

/// Length of the dashed line under the header.
pub const SEPARATOR_WIDTH: usize = 65;

/// Width the price amount is padded to, after the `$`.
const PRICE_AMOUNT_WIDTH: usize = 9;

// =============================================================================
// Layout
// =============================================================================

/// Column widths of the catalog table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    pub code_width: usize,
    /// Also the chunk size names are wrapped at.
    pub name_width: usize,
    /// Also the chunk size categories are wrapped at.
    pub category_width: usize,
    pub price_width: usize,
    pub stock_width: usize,
}

impl Default for TableLayout {
    fn default() -> Self {
        TableLayout {
            code_width: 10,
            name_width: 25,
            category_width: 25,
            price_width: 20,
            stock_width: 10,
        }
    }
}

// =============================================================================
// Rows
// =============================================================================

/// One printed line of the catalog, as unpadded cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportRow {
    pub code: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub stock: String,
}

impl ReportRow {
    /// The header row.
    pub fn header() -> Self {
        ReportRow {
            code: "Código".to_string(),
            name: "Nombre".to_string(),
            category: "Categoría".to_string(),
            price: "Precio".to_string(),
            stock: "Stock".to_string(),
        }
    }

    /// Checks whether this row continues the previous product.
    pub fn is_continuation(&self) -> bool {
        self.code.is_empty()
    }
}

/// Splits `text` into pieces of at most `width` characters.
///
/// Always returns at least one piece: an empty string yields `[""]`, so a
/// product with an empty name still gets its first row.
///
/// ```rust
/// use ferreteria_core::report::chunk_chars;
///
/// assert_eq!(chunk_chars("abcde", 2), vec!["ab", "cd", "e"]);
/// assert_eq!(chunk_chars("", 25), vec![""]);
/// ```
pub fn chunk_chars(text: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }

    chars
        .chunks(width.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Formats the price cell: `$` then the 2-decimal amount left-justified to 9.
///
/// ```rust
/// use ferreteria_core::money::Money;
/// use ferreteria_core::report::price_cell;
///
/// assert_eq!(price_cell(Money::from_cents(150_000)), "$1500.00  ");
/// ```
pub fn price_cell(price: Money) -> String {
    format!("${:<width$}", price.amount_string(), width = PRICE_AMOUNT_WIDTH)
}

/// Builds the catalog rows, ordered by ascending code.
///
/// ## Algorithm
/// ```text
/// for product in sorted_by_code(products):
///     names      = chunk_chars(name, name_width)
///     categories = chunk_chars(category, category_width)
///     row 0      = code | names[0] | categories[0] | price | stock
///     row i > 0  = ""   | names[i] | categories[i] | ""    | ""
///     (missing pieces are empty strings)
/// ```
pub fn product_rows<'a, I>(products: I, layout: &TableLayout) -> Vec<ReportRow>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut sorted: Vec<&Product> = products.into_iter().collect();
    sorted.sort_by_key(|product| product.code);

    let mut rows = Vec::with_capacity(sorted.len());
    for product in sorted {
        let names = chunk_chars(&product.name, layout.name_width);
        let categories = chunk_chars(&product.category, layout.category_width);
        let height = names.len().max(categories.len());

        for i in 0..height {
            let name = names.get(i).cloned().unwrap_or_default();
            let category = categories.get(i).cloned().unwrap_or_default();

            rows.push(if i == 0 {
                ReportRow {
                    code: product.code.to_string(),
                    name,
                    category,
                    price: price_cell(product.price),
                    stock: product.stock.to_string(),
                }
            } else {
                ReportRow {
                    name,
                    category,
                    ..ReportRow::default()
                }
            });
        }
    }

    rows
}

/// Pads a row's cells to the layout widths, one space between columns.
pub fn format_row(row: &ReportRow, layout: &TableLayout) -> String {
    format!(
        "{:<cw$} {:<nw$} {:<kw$} {:<pw$} {:<sw$}",
        row.code,
        row.name,
        row.category,
        row.price,
        row.stock,
        cw = layout.code_width,
        nw = layout.name_width,
        kw = layout.category_width,
        pw = layout.price_width,
        sw = layout.stock_width,
    )
}

// =============================================================================
// Full Views
// =============================================================================

/// Renders the whole catalog: title, header, separator, then product rows.
pub fn render_product_table<'a, I>(products: I, layout: &TableLayout) -> Vec<String>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut lines = vec![
        CATALOG_TITLE.to_string(),
        format_row(&ReportRow::header(), layout),
        "-".repeat(SEPARATOR_WIDTH),
    ];
    lines.extend(
        product_rows(products, layout)
            .iter()
            .map(|row| format_row(row, layout)),
    );
    lines
}

/// Renders the category list, or the "no categories" line when empty.
pub fn render_categories<'a, I>(categories: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let items: Vec<String> = categories
        .into_iter()
        .map(|category| format!("- {}", category))
        .collect();

    if items.is_empty() {
        return vec![NO_CATEGORIES.to_string()];
    }

    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(CATEGORIES_TITLE.to_string());
    lines.extend(items);
    lines
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NewProduct;
    use chrono::Utc;

    fn product(code: i64, name: &str, category: &str, cents: i64, stock: i64) -> Product {
        Product::from_new(
            NewProduct {
                code,
                name: name.to_string(),
                category: category.to_string(),
                price: Money::from_cents(cents),
                stock,
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_chunk_chars_counts_characters() {
        assert_eq!(chunk_chars("ñandú", 2), vec!["ña", "nd", "ú"]);
        assert_eq!(chunk_chars(&"a".repeat(25), 25).len(), 1);
        assert_eq!(chunk_chars(&"a".repeat(26), 25).len(), 2);
    }

    #[test]
    fn test_header_line() {
        let line = format_row(&ReportRow::header(), &TableLayout::default());
        assert!(line.starts_with("Código     Nombre"));
        assert_eq!(line.chars().count(), 10 + 25 + 25 + 20 + 10 + 4);
    }

    #[test]
    fn test_single_row_layout() {
        let layout = TableLayout::default();
        let hammer = product(1, "Martillo", "Herramientas", 150_000, 10);
        let rows = product_rows([&hammer], &layout);

        assert_eq!(rows.len(), 1);
        assert_eq!(
            format_row(&rows[0], &layout),
            format!(
                "{:<10} {:<25} {:<25} {:<20} {:<10}",
                "1", "Martillo", "Herramientas", "$1500.00  ", "10"
            )
        );
    }

    #[test]
    fn test_long_name_wraps_with_blank_continuation_cells() {
        let layout = TableLayout::default();
        let name = "Destornillador de punta phillips extra largo";
        let screwdriver = product(7, name, "Herramientas", 35_000, 3);
        let rows = product_rows([&screwdriver], &layout);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Destornillador de punta p");
        assert_eq!(rows[0].category, "Herramientas");
        assert_eq!(rows[1].name, "hillips extra largo");
        assert_eq!(rows[1].category, "");
        assert!(rows[1].is_continuation());
        assert_eq!(rows[1].price, "");
        assert_eq!(rows[1].stock, "");
    }

    #[test]
    fn test_category_longer_than_name_drives_row_count() {
        let layout = TableLayout::default();
        let p = product(3, "Tornillo", &"c".repeat(60), 10, 1);
        let rows = product_rows([&p], &layout);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].name, "");
        assert_eq!(rows[2].category, "c".repeat(10));
    }

    #[test]
    fn test_empty_name_still_produces_a_row() {
        let layout = TableLayout::default();
        let p = product(9, "", "", 0, 0);
        let rows = product_rows([&p], &layout);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].code, "9");
        assert_eq!(rows[0].price, "$0.00     ");
    }

    #[test]
    fn test_rows_sorted_by_code() {
        let layout = TableLayout::default();
        let a = product(30, "C", "x", 1, 1);
        let b = product(-2, "A", "x", 1, 1);
        let c = product(5, "B", "x", 1, 1);
        let codes: Vec<String> = product_rows([&a, &b, &c], &layout)
            .into_iter()
            .map(|row| row.code)
            .collect();

        assert_eq!(codes, vec!["-2", "5", "30"]);
    }

    #[test]
    fn test_render_product_table_frame() {
        let lines = render_product_table(std::iter::empty(), &TableLayout::default());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CATALOG_TITLE);
        assert_eq!(lines[2], "-".repeat(65));
    }

    #[test]
    fn test_render_categories() {
        assert_eq!(render_categories(std::iter::empty()), vec![NO_CATEGORIES]);

        let lines = render_categories(["Herramientas", "Pinturas"]);
        assert_eq!(
            lines,
            vec![CATEGORIES_TITLE, "- Herramientas", "- Pinturas"]
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: first rows come out in ascending code order whatever
            /// the input order, and continuation rows never carry a code.
            #[test]
            fn rows_follow_ascending_code(
                entries in proptest::collection::hash_map(
                    any::<i64>(),
                    ".{0,60}",
                    0..20,
                )
            ) {
                let products: Vec<Product> = entries
                    .iter()
                    .map(|(code, name)| product(*code, name, "cat", 100, 1))
                    .collect();
                let rows = product_rows(&products, &TableLayout::default());

                let codes: Vec<i64> = rows
                    .iter()
                    .filter(|row| !row.is_continuation())
                    .map(|row| row.code.parse().unwrap())
                    .collect();

                let mut expected: Vec<i64> = entries.keys().copied().collect();
                expected.sort();
                prop_assert_eq!(codes, expected);
            }

            /// Property: every product yields ceil(max(len)/width) rows, minimum one.
            #[test]
            fn row_count_matches_longest_field(name in ".{0,80}", category in ".{0,80}") {
                let p = product(1, &name, &category, 1, 1);
                let rows = product_rows([&p], &TableLayout::default());

                let height = |s: &str| s.chars().count().div_ceil(25).max(1);
                prop_assert_eq!(rows.len(), height(name.as_str()).max(height(category.as_str())));
            }
        }
    }
}
