// Demo binary: wires the helper layer together end to end. Builds a small
// product listing, registers it as a named table and exports it to the
// configured directory, reporting through the logging surface.

use anyhow::Context;
use chrono::Utc;
use shared::models::{products_to_table, ProductRecord};
use std::time::Duration;
use ui::config::AppConfig;
use ui::export::{dated_filename, FileDownloadSink, TableExporter, TableRegistry};
use ui::shortcuts::ShortcutRegistry;
use ui::surface::{LoggingSurface, Toast, UiSurface};

fn sample_products() -> Vec<ProductRecord> {
    vec![
        ProductRecord {
            code: "P001".to_string(),
            name: "Pensil 2B".to_string(),
            unit: "pcs".to_string(),
            stock: 1250.0,
            min_stock: 100.0,
            updated_at: Utc::now(),
        },
        ProductRecord {
            code: "P002".to_string(),
            name: "Buku Tulis, A5".to_string(),
            unit: "lusin".to_string(),
            stock: 35.5,
            min_stock: 12.0,
            updated_at: Utc::now(),
        },
    ]
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = AppConfig::load_default().context("Failed to load default configuration")?;
    tracing::info!(version = %config.version, "Configuration loaded");

    let shortcuts = ShortcutRegistry::from_config(&config.shortcuts)
        .context("Invalid shortcut bindings in configuration")?;
    tracing::info!(bindings = shortcuts.len(), "Shortcuts registered");

    let mut registry = TableRegistry::new();
    registry.insert("products", products_to_table(&sample_products()));

    let mut sink = FileDownloadSink::new(&config.export.directory);
    let filename = dated_filename("produk", &config.export.filename_date_format);
    TableExporter::export_by_id(&registry, "products", &filename, &mut sink)?;

    let mut surface = LoggingSurface::default();
    surface.show_toast(
        Toast::success(format!("Data produk diekspor ke {}", filename))
            .with_duration(Duration::from_millis(config.toast.duration_ms)),
    );

    Ok(())
}
