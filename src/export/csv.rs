//! CSV export of rainfall entries
//!
//! Output is tuned for spreadsheet applications set to a French locale:
//! `;` as delimiter, a UTF-8 byte-order mark up front, `\n` between lines and
//! no trailing newline. Rows are written in the order given.

use chrono::{Local, NaiveDate};

use crate::models::RainfallEntry;

/// UTF-8 byte-order mark, so spreadsheets pick the right encoding
pub const BOM: char = '\u{FEFF}';

/// Field delimiter
pub const DELIMITER: &str = ";";

/// Column labels of the header line
pub const HEADERS: [&str; 4] = ["Date", "Quantité (mm)", "Localisation", "Notes"];

/// Render entries to the full CSV text, BOM included
pub fn render(entries: &[RainfallEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(HEADERS.join(DELIMITER));

    for entry in entries {
        let row = [
            entry.date.clone(),
            format_amount(entry.amount),
            // location and notes columns are reserved and always blank
            escape_field(""),
            escape_field(""),
        ];
        lines.push(row.join(DELIMITER));
    }

    let mut out = String::new();
    out.push(BOM);
    out.push_str(&lines.join("\n"));
    out
}

/// Quote a field if it holds a delimiter, a quote or a line break
///
/// Inner double quotes are doubled. Empty input stays empty.
pub fn escape_field(field: &str) -> String {
    if field.is_empty() {
        return String::new();
    }

    let needs_quoting = field.contains(DELIMITER)
        || field.contains('"')
        || field.contains('\n')
        || field.contains('\r');

    if needs_quoting {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Export file name for today's local date
pub fn filename() -> String {
    filename_for(Local::now().date_naive())
}

/// Export file name for a given day: `pluvio-export-YYYY-MM-DD.csv`
pub fn filename_for(date: NaiveDate) -> String {
    format!("pluvio-export-{}.csv", date.format("%Y-%m-%d"))
}

/// Shortest decimal form of an amount, no fixed padding (`10`, `5.5`, `0`)
///
/// Magnitudes below `1e-6` or from `1e21` up switch to exponent notation
/// (`5e-7`, `1e+21`).
fn format_amount(amount: f64) -> String {
    // -0.0 would otherwise print as "-0"
    let amount = if amount == 0.0 { 0.0 } else { amount };

    let magnitude = amount.abs();
    if amount != 0.0 && (magnitude < 1e-6 || magnitude >= 1e21) {
        let text = format!("{:e}", amount);
        return match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => text,
        };
    }

    amount.to_string()
}
