use maloy::domain::{
    sanitize_filename, CellValue, Column, DataTable, ExtractedContent, FileKind,
};

#[test]
fn given_known_extensions_when_parsing_then_kind_is_resolved_case_insensitively() {
    assert_eq!(FileKind::from_extension("csv"), Some(FileKind::Csv));
    assert_eq!(FileKind::from_extension("XLSX"), Some(FileKind::Xlsx));
    assert_eq!(FileKind::from_extension("Json"), Some(FileKind::Json));
    assert_eq!(FileKind::from_extension("pdf"), Some(FileKind::Pdf));
    assert_eq!(FileKind::from_extension("txt"), Some(FileKind::Txt));
    assert_eq!(FileKind::from_extension("exe"), None);
}

#[test]
fn given_filenames_when_reading_extension_then_lowercased_suffix_is_returned() {
    assert_eq!(FileKind::extension_of("Data.CSV"), Some("csv".to_string()));
    assert_eq!(
        FileKind::extension_of("archive.tar.gz"),
        Some("gz".to_string())
    );
    assert_eq!(FileKind::extension_of("noextension"), None);
    assert_eq!(FileKind::extension_of("trailingdot."), None);
}

#[test]
fn given_hostile_filename_when_sanitizing_then_path_components_are_stripped() {
    assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
    assert_eq!(sanitize_filename("C:\\temp\\report.csv"), "report.csv");
    assert_eq!(sanitize_filename("my report!.csv"), "my_report_.csv");
    assert_eq!(sanitize_filename("..."), "upload");
    assert_eq!(sanitize_filename(""), "upload");
}

#[test]
fn given_all_number_column_when_checking_then_column_is_numeric() {
    let column = Column::new(
        "a",
        vec![
            CellValue::Number(1.0),
            CellValue::Null,
            CellValue::Number(2.5),
        ],
    );
    assert!(column.is_numeric());
}

#[test]
fn given_mixed_column_when_checking_then_column_is_not_numeric() {
    let column = Column::new(
        "a",
        vec![CellValue::Number(1.0), CellValue::Text("x".to_string())],
    );
    assert!(!column.is_numeric());
}

#[test]
fn given_all_null_column_when_checking_then_column_is_not_numeric() {
    let column = Column::new("a", vec![CellValue::Null, CellValue::Null]);
    assert!(!column.is_numeric());
}

#[test]
fn given_mixed_table_when_listing_numeric_columns_then_indices_follow_column_order() {
    let table = DataTable::new(vec![
        Column::new("name", vec![CellValue::Text("x".to_string())]),
        Column::new("a", vec![CellValue::Number(1.0)]),
        Column::new("b", vec![CellValue::Number(2.0)]),
    ]);
    assert_eq!(table.numeric_columns(), vec![1, 2]);
}

#[test]
fn given_two_by_two_table_when_flattening_then_headers_and_rows_align() {
    let table = DataTable::new(vec![
        Column::new("a", vec![CellValue::Number(1.0), CellValue::Number(3.0)]),
        Column::new("b", vec![CellValue::Number(2.0), CellValue::Number(4.0)]),
    ]);
    assert_eq!(table.to_display_string(), "a  b\n1  2\n3  4");
}

#[test]
fn given_whole_numbers_when_displaying_then_no_trailing_fraction_is_printed() {
    assert_eq!(CellValue::Number(3.0).to_string(), "3");
    assert_eq!(CellValue::Number(3.5).to_string(), "3.5");
    assert_eq!(CellValue::Null.to_string(), "");
}

#[test]
fn given_text_content_when_flattening_then_raw_text_is_returned() {
    let content = ExtractedContent::Text("hello world".to_string());
    assert_eq!(content.flattened(), "hello world");
    assert!(content.table().is_none());
    assert!(content.extraction_note().is_none());
}

#[test]
fn given_failed_content_when_flattening_then_reason_is_visible() {
    let content = ExtractedContent::Failed {
        reason: "broken xref table".to_string(),
    };
    assert!(content.flattened().contains("broken xref table"));
    let note = content.extraction_note().unwrap();
    assert!(note.contains("broken xref table"));
}
