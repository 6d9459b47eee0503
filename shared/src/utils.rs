// Number and currency formatting shared by import, export and display code.

/// Indonesian number format handling: `.` as thousand separator and `,` as
/// decimal separator, currency amounts prefixed with `Rp`.
pub mod id_format {
    use anyhow::{anyhow, Result};
    use std::str::FromStr;

    /// Parses decimals like "1.234,56" or "123,45" into f64.
    pub fn parse_decimal(s: &str) -> Result<f64> {
        let normalized = s
            .trim()
            .replace('.', "") // Remove thousand separators
            .replace(',', "."); // Replace decimal separator

        f64::from_str(&normalized).map_err(|e| anyhow!("Failed to parse decimal '{}': {}", s, e))
    }

    /// Formats a value with `decimals` fractional digits, grouped thousands
    /// and a comma decimal separator, e.g. 1234.5 -> "1.234,50".
    pub fn format_decimal(value: f64, decimals: usize) -> String {
        let formatted = format!("{:.decimals$}", value.abs(), decimals = decimals);
        let (int_part, frac_part) = match formatted.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (formatted.as_str(), None),
        };

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (idx, ch) in int_part.chars().enumerate() {
            if idx > 0 && (int_part.len() - idx) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        let sign = if value < 0.0 { "-" } else { "" };
        match frac_part {
            Some(frac) => format!("{}{},{}", sign, grouped, frac),
            None => format!("{}{}", sign, grouped),
        }
    }

    /// Currency display as used across the application, e.g. "Rp 15.000,00".
    pub fn format_currency(value: f64) -> String {
        format!("Rp {}", format_decimal(value, 2))
    }

}
