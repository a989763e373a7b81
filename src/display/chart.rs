//! Text chart of rainfall over time
//!
//! One horizontal bar per entry, oldest first, scaled so the wettest day
//! spans the configured width.

use crate::models::RainfallEntry;

use super::entry::format_amount;

/// Shown instead of a chart when there is nothing to plot
pub const EMPTY_CHART: &str = "Aucune donnée à afficher";

const TITLE: &str = "Évolution de la pluviométrie";
const BAR: char = '█';

/// Number of bar cells for `amount` when `max` fills `width`
fn bar_len(amount: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || amount <= 0.0 {
        return 0;
    }
    ((amount / max) * width as f64).round() as usize
}

/// Render entries as a bar chart
///
/// `entries` is expected in repository order (most recent first); the chart
/// reads top to bottom from oldest to newest.
pub fn format_rainfall_chart(entries: &[RainfallEntry], width: usize) -> String {
    if entries.is_empty() {
        return EMPTY_CHART.to_string();
    }

    let max = entries.iter().map(|e| e.amount).fold(0.0_f64, f64::max);

    let mut output = String::new();
    output.push_str(TITLE);
    output.push('\n');

    for entry in entries.iter().rev() {
        let label = entry
            .calendar_date()
            .map(|d| d.format("%d/%m").to_string())
            .unwrap_or_else(|| entry.date.clone());
        let filled = bar_len(entry.amount, max, width).min(width);

        output.push_str(&format!(
            "{:>5} │{}{} {}\n",
            label,
            BAR.to_string().repeat(filled),
            " ".repeat(width - filled),
            format_amount(entry.amount)
        ));
    }

    output
}
