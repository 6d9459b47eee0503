use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::id_format;

/// One data unit within a table row. Holds raw display text, which may
/// contain embedded whitespace, newlines and quote characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Cell { text: text.into() }
    }
}

/// An ordered group of cells. Header and data rows use the same shape;
/// the export layer does not distinguish between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Row { cells }
    }

    /// Convenience constructor for building a row from plain strings.
    pub fn from_texts<S: AsRef<str>>(texts: &[S]) -> Self {
        Row {
            cells: texts.iter().map(|t| Cell::new(t.as_ref())).collect(),
        }
    }
}

/// An ordered sequence of rows. The table is a transient, read-only view
/// built by the calling UI context just before export and discarded after.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new() -> Self {
        Table { rows: Vec::new() }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One inventory item as shown in the product listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub code: String,
    pub name: String,
    pub unit: String,
    pub stock: f64,
    pub min_stock: f64,
    pub updated_at: DateTime<Utc>,
}

impl ProductRecord {
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }
}

/// Builds the exportable view of a product listing: one header row followed
/// by one data row per product, stock quantities in display format.
pub fn products_to_table(products: &[ProductRecord]) -> Table {
    let mut table = Table::new();
    table.push_row(Row::from_texts(&["Kode", "Nama", "Satuan", "Stok", "Stok Min"]));
    for product in products {
        let stock = id_format::format_decimal(product.stock, 2);
        let min_stock = id_format::format_decimal(product.min_stock, 2);
        table.push_row(Row::from_texts(&[
            product.code.as_str(),
            product.name.as_str(),
            product.unit.as_str(),
            stock.as_str(),
            min_stock.as_str(),
        ]));
    }
    table
}
