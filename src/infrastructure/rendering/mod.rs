mod chart;
mod pdf_report;

pub use chart::{render_bar_chart, CHART_HEIGHT_PX, CHART_WIDTH_PX};
pub use pdf_report::{excerpt, PdfReportRenderer};
