//! Renderers for the three export formats.

use footprint::config::{DAYS_PER_YEAR, MONTHS_PER_YEAR, PRODUCT_NAME, REFERENCE_AVERAGE_KG};
use footprint::export_format::ExportFormat;
use footprint::result::{format_tons, round_half_up};
use footprint::Category;

use crate::report_data::ReportData;

pub fn render(data: &ReportData, format: ExportFormat) -> Result<String, serde_json::Error> {
    match format {
        ExportFormat::Json => to_json(data),
        ExportFormat::Csv => Ok(to_csv(data)),
        ExportFormat::Text => Ok(to_text(data)),
    }
}

pub fn to_json(data: &ReportData) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}

/// One row per category, then Total, Goal and Progress rows.
pub fn to_csv(data: &ReportData) -> String {
    let mut rows = vec!["Category,Emissions (kg CO₂),Percentage of Total".to_string()];

    for category in Category::ALL {
        rows.push(format!(
            "{},{},{}%",
            category.label(),
            data.breakdown.get(category),
            data.share_percent(category)
        ));
    }

    rows.push(format!("Total,{},100%", data.total));
    rows.push(format!("Goal,{},", data.goal));
    rows.push(format!("Progress,{}%,", data.progress));

    rows.join("\n")
}

pub fn to_text(data: &ReportData) -> String {
    let total = data.total as f64;
    let direction = if data.progress > 0 {
        "better than"
    } else {
        "worse than"
    };

    let mut breakdown = String::new();
    for category in Category::ALL {
        breakdown.push_str(&format!(
            "{}: {} tons ({}%)\n",
            category.label(),
            format_tons(data.breakdown.get(category) as f64),
            data.share_percent(category)
        ));
    }

    format!(
        "{PRODUCT_NAME} Carbon Footprint Report
Generated on: {date}

YOUR CARBON FOOTPRINT SUMMARY
----------------------------
Total Emissions: {total_tons} tons CO₂
Annual Goal: {goal_tons} tons CO₂
Progress: {progress}% {direction} target

EMISSIONS BREAKDOWN
------------------
{breakdown}
ADDITIONAL METRICS
-----------------
Daily Average: {daily} kg CO₂
Monthly Average: {monthly} kg CO₂
Compared to US Average: {compared}% of average

Thank you for using {PRODUCT_NAME} to monitor your carbon footprint!",
        date = data.date.format("%-m/%-d/%Y"),
        total_tons = format_tons(total),
        goal_tons = format_tons(data.goal as f64),
        progress = data.progress,
        daily = round_half_up(total / DAYS_PER_YEAR),
        monthly = round_half_up(total / MONTHS_PER_YEAR),
        compared = round_half_up(total / REFERENCE_AVERAGE_KG * 100.0),
    )
}
