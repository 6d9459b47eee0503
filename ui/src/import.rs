// Product CSV import: the inbound counterpart of the table export. Files
// are semicolon-delimited with Indonesian number formatting, one product
// per line under a header row.

use anyhow::{anyhow, Result};
use chrono::Utc;
use csv::{ReaderBuilder, StringRecord};
use shared::models::ProductRecord;
use shared::utils::id_format;
use std::fs::File;
use std::io::BufReader;

pub struct ProductCsvImporter;

impl ProductCsvImporter {
    // CSV Header: Kode;Nama;Satuan;Stok;StokMin
    // Example row: P001;Pensil 2B;pcs;1.250,00;100,00
    pub fn load_products_from_csv(file_path: &str) -> Result<Vec<ProductRecord>> {
        let file = File::open(file_path)
            .map_err(|e| anyhow!("Failed to open CSV file '{}': {}", file_path, e))?;
        let mut rdr = ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(true)
            .from_reader(BufReader::new(file));

        let headers = rdr.headers()?.clone();
        let mut products = Vec::new();

        for (idx, result) in rdr.records().enumerate() {
            let record =
                result.map_err(|e| anyhow!("Error reading CSV record at line {}: {}", idx + 2, e))?;
            let line = idx + 2; // 1-based, after the header row

            let code = Self::get_field(&record, &headers, "Kode")
                .ok_or_else(|| anyhow!("Missing 'Kode' field in CSV record at line {}", line))?;
            let name = Self::get_field(&record, &headers, "Nama")
                .ok_or_else(|| anyhow!("Missing 'Nama' field in CSV record at line {}", line))?;
            let unit = Self::get_field(&record, &headers, "Satuan").unwrap_or("pcs");
            let stock_str = Self::get_field(&record, &headers, "Stok")
                .ok_or_else(|| anyhow!("Missing 'Stok' field in CSV record at line {}", line))?;
            let min_stock_str = Self::get_field(&record, &headers, "StokMin")
                .ok_or_else(|| anyhow!("Missing 'StokMin' field in CSV record at line {}", line))?;

            let stock = id_format::parse_decimal(stock_str)
                .map_err(|e| anyhow!("Error parsing 'Stok' at line {}: {}", line, e))?;
            let min_stock = id_format::parse_decimal(min_stock_str)
                .map_err(|e| anyhow!("Error parsing 'StokMin' at line {}: {}", line, e))?;

            products.push(ProductRecord {
                code: code.to_string(),
                name: name.to_string(),
                unit: unit.to_string(),
                stock,
                min_stock,
                updated_at: Utc::now(),
            });
        }

        tracing::info!(file_path, count = products.len(), "Products imported");
        Ok(products)
    }

    // Looks a field up by header name so column reordering does not break
    // the import.
    fn get_field<'a>(
        record: &'a StringRecord,
        headers: &StringRecord,
        name: &str,
    ) -> Option<&'a str> {
        headers
            .iter()
            .position(|header| header == name)
            .and_then(|pos| record.get(pos))
    }
}
