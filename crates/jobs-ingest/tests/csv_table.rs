//! CSV loading tests over temp files.

use std::io::Write;

use jobs_ingest::{IngestError, read_csv_table};
use jobs_model::CellValue;
use tempfile::NamedTempFile;

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write csv");
    file
}

#[test]
fn reads_headers_and_rows() {
    let file = write_csv("col1,col2\n1,2\n3,4\n");
    let table = read_csv_table(file.path()).expect("read csv");

    assert_eq!(table.columns, vec!["col1".to_string(), "col2".to_string()]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].id, 0);
    assert_eq!(table.rows[1].id, 1);
}

#[test]
fn infers_column_types_over_the_whole_column() {
    let file = write_csv(
        "Rating,Founded,Company Name\n\
         3.5,1999,TestCorp\n\
         -1,-1,Other Inc\n",
    );
    let table = read_csv_table(file.path()).expect("read csv");

    // Ratings mix 3.5 and -1, so the column is float and the sentinel
    // arrives as Float(-1.0); founded is all-integer.
    assert_eq!(table.rows[0].get("Rating"), Some(&CellValue::Float(3.5)));
    assert_eq!(table.rows[1].get("Rating"), Some(&CellValue::Float(-1.0)));
    assert_eq!(table.rows[1].get("Founded"), Some(&CellValue::Int(-1)));
    assert_eq!(
        table.rows[0].get("Company Name"),
        Some(&CellValue::text("TestCorp"))
    );
}

#[test]
fn empty_cells_become_missing() {
    let file = write_csv("a,b\n1,\n,x\n");
    let table = read_csv_table(file.path()).expect("read csv");

    assert_eq!(table.rows[0].get("b"), Some(&CellValue::Missing));
    assert_eq!(table.rows[1].get("a"), Some(&CellValue::Missing));
    // Column a stays integer despite the gap.
    assert_eq!(table.rows[0].get("a"), Some(&CellValue::Int(1)));
}

#[test]
fn numbers_in_a_text_column_stay_text() {
    let file = write_csv("size\n10000+ employees\n51\n");
    let table = read_csv_table(file.path()).expect("read csv");

    assert_eq!(
        table.rows[1].get("size"),
        Some(&CellValue::text("51")),
        "mixed column must not be partially numeric"
    );
}

#[test]
fn header_whitespace_is_collapsed() {
    let file = write_csv("  Job   Title \nData Scientist\n");
    let table = read_csv_table(file.path()).expect("read csv");
    assert_eq!(table.columns, vec!["Job Title".to_string()]);
}

#[test]
fn empty_file_is_an_error() {
    let file = write_csv("");
    let err = read_csv_table(file.path()).expect_err("empty file");
    assert!(matches!(err, IngestError::Empty(_)));
}
