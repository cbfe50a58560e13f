use maloy::application::ports::{ContentExtractor, ExtractError};
use maloy::domain::{CellValue, Document, ExtractedContent, FileKind};
use maloy::infrastructure::extraction::{
    CompositeExtractor, CsvAdapter, JsonAdapter, PdfAdapter, PlainTextAdapter, XlsxAdapter,
};

fn document(filename: &str, kind: FileKind, size: usize) -> Document {
    Document::new(filename.to_string(), kind, size as u64)
}

#[tokio::test]
async fn given_well_formed_csv_when_extracting_then_table_has_typed_columns() {
    let data = b"name,score\nalice,10\nbob,12.5\n";
    let doc = document("scores.csv", FileKind::Csv, data.len());

    let content = CsvAdapter::new().extract(data, &doc).await.unwrap();

    let table = content.table().expect("csv should produce a table");
    assert_eq!(table.columns().len(), 2);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.columns()[0].name, "name");
    assert_eq!(table.columns()[1].values[0], CellValue::Number(10.0));
    assert_eq!(table.numeric_columns(), vec![1]);
}

#[tokio::test]
async fn given_csv_with_empty_cells_when_extracting_then_blanks_become_nulls() {
    let data = b"a,b\n1,\n2,3\n";
    let doc = document("gaps.csv", FileKind::Csv, data.len());

    let content = CsvAdapter::new().extract(data, &doc).await.unwrap();

    let table = content.table().unwrap();
    assert_eq!(table.columns()[1].values[0], CellValue::Null);
    // Nulls do not break numeric inference.
    assert_eq!(table.numeric_columns(), vec![0, 1]);
}

#[tokio::test]
async fn given_ragged_csv_when_extracting_then_malformed_error_is_returned() {
    let data = b"a,b\n1\n";
    let doc = document("ragged.csv", FileKind::Csv, data.len());

    let result = CsvAdapter::new().extract(data, &doc).await;

    assert!(matches!(
        result,
        Err(ExtractError::Malformed { kind: "csv", .. })
    ));
}

#[tokio::test]
async fn given_json_record_array_when_extracting_then_columns_follow_key_order() {
    let data = br#"[{"name":"alice","score":10},{"name":"bob","score":12}]"#;
    let doc = document("scores.json", FileKind::Json, data.len());

    let content = JsonAdapter::new().extract(data, &doc).await.unwrap();

    let table = content.table().unwrap();
    assert_eq!(table.columns()[0].name, "name");
    assert_eq!(table.columns()[1].name, "score");
    assert_eq!(table.columns()[1].values[1], CellValue::Number(12.0));
}

#[tokio::test]
async fn given_json_object_of_arrays_when_extracting_then_columns_are_taken_directly() {
    let data = br#"{"a":[1,2],"b":["x","y"]}"#;
    let doc = document("columns.json", FileKind::Json, data.len());

    let content = JsonAdapter::new().extract(data, &doc).await.unwrap();

    let table = content.table().unwrap();
    assert_eq!(table.columns().len(), 2);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.numeric_columns(), vec![0]);
}

#[tokio::test]
async fn given_json_records_with_missing_keys_when_extracting_then_gaps_are_null() {
    let data = br#"[{"a":1},{"a":2,"b":"x"}]"#;
    let doc = document("sparse.json", FileKind::Json, data.len());

    let content = JsonAdapter::new().extract(data, &doc).await.unwrap();

    let table = content.table().unwrap();
    assert_eq!(table.columns()[1].values[0], CellValue::Null);
}

#[tokio::test]
async fn given_scalar_json_when_extracting_then_malformed_error_is_returned() {
    let data = b"42";
    let doc = document("scalar.json", FileKind::Json, data.len());

    let result = JsonAdapter::new().extract(data, &doc).await;

    assert!(matches!(
        result,
        Err(ExtractError::Malformed { kind: "json", .. })
    ));
}

#[tokio::test]
async fn given_well_formed_xlsx_when_extracting_then_table_uses_workbook_types() {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "name").unwrap();
    sheet.write_string(0, 1, "score").unwrap();
    sheet.write_string(1, 0, "alice").unwrap();
    sheet.write_number(1, 1, 10.0).unwrap();
    sheet.write_string(2, 0, "bob").unwrap();
    sheet.write_number(2, 1, 12.5).unwrap();
    let data = workbook.save_to_buffer().unwrap();

    let doc = document("scores.xlsx", FileKind::Xlsx, data.len());
    let content = XlsxAdapter::new().extract(&data, &doc).await.unwrap();

    let table = content.table().unwrap();
    assert_eq!(table.columns().len(), 2);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.columns()[1].values[1], CellValue::Number(12.5));
    assert_eq!(table.numeric_columns(), vec![1]);
}

#[tokio::test]
async fn given_garbage_bytes_when_extracting_xlsx_then_malformed_error_is_returned() {
    let data = b"this is not a zip archive";
    let doc = document("broken.xlsx", FileKind::Xlsx, data.len());

    let result = XlsxAdapter::new().extract(data, &doc).await;

    assert!(matches!(
        result,
        Err(ExtractError::Malformed { kind: "xlsx", .. })
    ));
}

#[tokio::test]
async fn given_valid_utf8_when_extracting_txt_then_full_text_is_returned() {
    let data = b"hello world";
    let doc = document("hello.txt", FileKind::Txt, data.len());

    let content = PlainTextAdapter.extract(data, &doc).await.unwrap();

    assert_eq!(content, ExtractedContent::Text("hello world".to_string()));
    assert_eq!(content.flattened(), "hello world");
}

#[tokio::test]
async fn given_invalid_utf8_when_extracting_txt_then_malformed_error_is_returned() {
    let data: &[u8] = &[0xFF, 0xFE, 0xFD];
    let doc = document("broken.txt", FileKind::Txt, data.len());

    let result = PlainTextAdapter.extract(data, &doc).await;

    assert!(matches!(
        result,
        Err(ExtractError::Malformed { kind: "txt", .. })
    ));
}

#[tokio::test]
async fn given_unparseable_pdf_when_extracting_then_failure_is_tagged_not_raised() {
    let data = b"definitely not a pdf";
    let doc = document("broken.pdf", FileKind::Pdf, data.len());

    let content = PdfAdapter::new().extract(data, &doc).await.unwrap();

    match &content {
        ExtractedContent::Failed { reason } => assert!(!reason.is_empty()),
        other => panic!("expected tagged failure, got {:?}", other),
    }
    // The failure stays visible downstream.
    assert!(content.flattened().contains("Error extracting text from PDF"));
    assert!(content.extraction_note().is_some());
}

#[tokio::test]
async fn given_mismatched_kind_when_extracting_then_adapter_rejects_the_document() {
    let data = b"a,b\n1,2\n";
    let doc = document("scores.csv", FileKind::Csv, data.len());

    let result = XlsxAdapter::new().extract(data, &doc).await;

    assert!(matches!(result, Err(ExtractError::UnsupportedFileType(_))));
}

#[tokio::test]
async fn given_composite_extractor_when_extracting_then_dispatch_follows_file_kind() {
    let extractor = CompositeExtractor::with_defaults();

    let csv = b"a,b\n1,2\n";
    let csv_doc = document("t.csv", FileKind::Csv, csv.len());
    assert!(extractor.extract(csv, &csv_doc).await.unwrap().table().is_some());

    let txt = b"plain";
    let txt_doc = document("t.txt", FileKind::Txt, txt.len());
    assert_eq!(
        extractor.extract(txt, &txt_doc).await.unwrap(),
        ExtractedContent::Text("plain".to_string())
    );
}
