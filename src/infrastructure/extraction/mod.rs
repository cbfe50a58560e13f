mod composite;
mod csv_adapter;
mod json_adapter;
mod pdf_adapter;
mod plain_text_adapter;
mod xlsx_adapter;

pub use composite::CompositeExtractor;
pub use csv_adapter::CsvAdapter;
pub use json_adapter::JsonAdapter;
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
pub use xlsx_adapter::XlsxAdapter;
