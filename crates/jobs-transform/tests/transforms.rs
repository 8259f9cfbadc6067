//! Table-level extraction tests.

use jobs_model::{CellValue, Row, Table};
use jobs_transform::{
    Bounds, TransformError, extract_headquarters_columns, extract_location_columns,
    extract_num_competitors, extract_revenue_columns, extract_revenue_range,
    extract_salary_columns,
};
use proptest::prelude::{ProptestConfig, any, proptest};

fn table_of(column: &str, values: Vec<CellValue>) -> Table {
    let mut table = Table::new(vec![column.to_string()]);
    for (id, value) in values.into_iter().enumerate() {
        let mut row = Row::new(id);
        row.set(column, value);
        table.push_row(row);
    }
    table
}

#[test]
fn revenue_parsing_table() {
    let cases = [
        (
            "$5 to $10 million (USD)",
            Bounds {
                low: Some(5_000_000.0),
                high: Some(10_000_000.0),
            },
        ),
        (
            "$10+ billion (USD)",
            Bounds {
                low: Some(10_000_000_000.0),
                high: None,
            },
        ),
        (
            "Less than $1 million (USD)",
            Bounds {
                low: Some(0.0),
                high: Some(1_000_000.0),
            },
        ),
        ("N/A", Bounds::MISSING),
    ];
    for (text, expected) in cases {
        assert_eq!(
            extract_revenue_range(&CellValue::text(text)),
            expected,
            "input: {text}"
        );
    }
    assert_eq!(extract_revenue_range(&CellValue::Missing), Bounds::MISSING);
}

#[test]
fn revenue_columns_replace_source() {
    let table = table_of(
        "revenue",
        vec![
            CellValue::text("$2 to $5 billion (USD)"),
            CellValue::Missing,
        ],
    );
    let out = extract_revenue_columns(&table, "revenue").expect("extract");

    assert!(!out.has_column("revenue"));
    assert_eq!(
        out.columns,
        vec!["min_revenue".to_string(), "max_revenue".to_string()]
    );
    assert_eq!(
        out.rows[0].get("min_revenue"),
        Some(&CellValue::Float(2_000_000_000.0))
    );
    assert_eq!(
        out.rows[0].get("max_revenue"),
        Some(&CellValue::Float(5_000_000_000.0))
    );
    assert_eq!(out.rows[1].get("min_revenue"), Some(&CellValue::Missing));
    assert_eq!(out.rows[1].get("max_revenue"), Some(&CellValue::Missing));
}

#[test]
fn salary_roundtrip_on_well_formed_text() {
    let table = table_of("salary_estimate", vec![CellValue::text("$40K-$80K")]);
    let out = extract_salary_columns(&table, "salary_estimate").expect("extract");

    assert!(!out.has_column("salary_estimate"));
    assert_eq!(out.rows[0].get("salary_min"), Some(&CellValue::Int(40_000)));
    assert_eq!(out.rows[0].get("salary_max"), Some(&CellValue::Int(80_000)));
}

#[test]
fn malformed_salary_fails_per_row_not_per_table() {
    let table = table_of(
        "salary_estimate",
        vec![
            CellValue::text("$50K-$90K (Glassdoor est.)"),
            CellValue::text("not a salary"),
        ],
    );
    let out = extract_salary_columns(&table, "salary_estimate").expect("extract");

    // Well-formed row still extracted.
    assert_eq!(out.rows[0].get("salary_min"), Some(&CellValue::Int(50_000)));
    assert_eq!(out.rows[0].get("salary_max"), Some(&CellValue::Int(90_000)));
    // Malformed row degrades to missing bounds for the validator to report.
    assert_eq!(out.rows[1].get("salary_min"), Some(&CellValue::Missing));
    assert_eq!(out.rows[1].get("salary_max"), Some(&CellValue::Missing));
}

#[test]
fn location_split() {
    let table = table_of(
        "location",
        vec![CellValue::text("San Francisco, CA"), CellValue::text("Remote")],
    );
    let out = extract_location_columns(&table, "location").expect("extract");

    assert!(!out.has_column("location"));
    assert_eq!(
        out.rows[0].get("location_city"),
        Some(&CellValue::text("San Francisco"))
    );
    assert_eq!(
        out.rows[0].get("location_state"),
        Some(&CellValue::text("CA"))
    );
    assert_eq!(
        out.rows[1].get("location_city"),
        Some(&CellValue::text("Remote"))
    );
    assert_eq!(out.rows[1].get("location_state"), Some(&CellValue::Missing));
}

#[test]
fn headquarters_split_uses_own_column_names() {
    let table = table_of("headquarters", vec![CellValue::text("Chicago, IL")]);
    let out = extract_headquarters_columns(&table, "headquarters").expect("extract");

    assert_eq!(
        out.rows[0].get("headquarters_city"),
        Some(&CellValue::text("Chicago"))
    );
    assert_eq!(
        out.rows[0].get("headquarters_state"),
        Some(&CellValue::text("IL"))
    );
}

#[test]
fn competitor_count() {
    let table = table_of(
        "competitors",
        vec![
            CellValue::text("Competitor A, Competitor B"),
            CellValue::text("Competitor C"),
            CellValue::Missing,
        ],
    );
    let out = extract_num_competitors(&table, "competitors").expect("extract");

    assert_eq!(out.rows[0].get("num_competitors"), Some(&CellValue::Int(2)));
    assert_eq!(out.rows[1].get("num_competitors"), Some(&CellValue::Int(1)));
    assert_eq!(out.rows[2].get("num_competitors"), Some(&CellValue::Missing));
}

#[test]
fn missing_source_column_is_an_error() {
    let table = table_of("other", vec![CellValue::Missing]);
    let err = extract_num_competitors(&table, "competitors").expect_err("missing column");
    assert!(matches!(err, TransformError::ColumnNotFound(c) if c == "competitors"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // Totality: extraction never panics and always returns a pair, for any
    // string whatsoever.
    #[test]
    fn revenue_extraction_is_total(text in any::<String>()) {
        let _ = extract_revenue_range(&CellValue::Text(text));
    }

    #[test]
    fn unmatched_text_yields_missing_pair(text in "[a-z ]{0,20}") {
        // No '$' anywhere, so no pattern can match.
        let bounds = extract_revenue_range(&CellValue::Text(text));
        assert_eq!(bounds, Bounds::MISSING);
    }
}
