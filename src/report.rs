//! Human-readable rendering of forecast results.

use crate::core::ForecastResult;

/// Render a forecast as a Markdown report.
///
/// Pure function over an assembled result. The layout — summary block,
/// six-row hourly table, seven-row weekly table — and the column labels
/// are part of the contract with downstream consumers.
pub fn render_report(result: &ForecastResult) -> String {
    let mut out = String::new();

    out.push_str("# Forecast Summary - Next 7 Days\n\n");
    out.push_str(&format!(
        "- **Good Days**: {}  \n",
        result.summary.good_days
    ));
    out.push_str(&format!(
        "- **Moderate Days**: {}  \n",
        result.summary.moderate_days
    ));
    out.push_str(&format!(
        "- **Average Quality**: {}  \n\n",
        result.summary.average_category
    ));

    out.push_str("---\n\n");

    out.push_str("## Hourly Forecast - Today\n\n");
    out.push_str("| Hour | Code | Description |\n");
    out.push_str("|------|------|-------------|\n");
    for hour in &result.hourly {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            hour.hour_label, hour.severity_code, hour.description
        ));
    }

    out.push_str("\n---\n\n");

    out.push_str("## Weekly Trend\n\n");
    out.push_str("| Day | PM2.5 | Trend |\n");
    out.push_str("|-----|-------|-------|\n");
    for day in &result.weekly {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            day.day_label,
            day.pm25,
            day.trend_arrow.as_str()
        ));
    }

    out
}
