//! Rainfall entry display formatting
//!
//! Table and detail views of entries for terminal output.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::RainfallEntry;

/// Shown instead of a table when there is nothing to list
pub const EMPTY_TABLE: &str = "Aucune donnée enregistrée";

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Quantité (mm)")]
    amount: String,
}

/// Format an entry's date with a strftime pattern, falling back to the raw text
pub fn format_date(entry: &RainfallEntry, date_format: &str) -> String {
    entry
        .calendar_date()
        .map(|d| d.format(date_format).to_string())
        .unwrap_or_else(|| entry.date.clone())
}

/// Amount with one decimal and its unit, e.g. `12.5 mm`
pub fn format_amount(amount: f64) -> String {
    format!("{:.1} mm", amount)
}

/// Format entries as a table, in the order given
pub fn format_entry_table(entries: &[RainfallEntry], date_format: &str) -> String {
    if entries.is_empty() {
        return EMPTY_TABLE.to_string();
    }

    let rows = entries.iter().map(|entry| EntryRow {
        date: format_date(entry, date_format),
        amount: format_amount(entry.amount),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::single(1), Alignment::right());
    table.to_string()
}

/// Format one entry's details
pub fn format_entry_details(entry: &RainfallEntry, date_format: &str) -> String {
    let mut output = String::new();

    if let Some(id) = entry.id {
        output.push_str(&format!("Entrée :    #{}\n", id));
    }
    output.push_str(&format!(
        "Date :      {} ({})\n",
        format_date(entry, date_format),
        entry.date
    ));
    output.push_str(&format!("Quantité :  {}\n", format_amount(entry.amount)));
    output.push_str(&format!(
        "Créée le :  {}\n",
        entry.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
