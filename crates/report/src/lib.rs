pub mod export;
pub mod formats;
pub mod report_data;
mod report_plugin;

pub use export::{export_report, file_name, ExportError};
pub use report_data::ReportData;
pub use report_plugin::{ExportReportEvent, ExportSettings, LastExport, ReportExported, ReportPlugin};
