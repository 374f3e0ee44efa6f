// File: crates/scatter-core/tests/ingest.rs
// Purpose: Validate CSV ingest: column resolution, rejection policy, errors.

use scatter_core::{load_csv_reader, DataError};

#[test]
fn loads_basic_rows_in_order() {
    let csv = "\
state,abbr,income,healthcare
Alabama,AL,42830,18.9
Alaska,AK,71583,17.0
";
    let (points, report) = load_csv_reader(csv.as_bytes()).unwrap();
    assert_eq!(report.rows, 2);
    assert_eq!(report.rejected, 0);
    assert_eq!(points[0].abbr, "AL");
    assert_eq!(points[0].income, 42830.0);
    assert_eq!(points[1].abbr, "AK");
    assert_eq!(points[1].healthcare, 17.0);
}

#[test]
fn resolves_header_aliases_case_insensitively() {
    let csv = "\
State_Abbr,Median_Income,Healthcare
TX,54727,22.1
";
    let (points, _) = load_csv_reader(csv.as_bytes()).unwrap();
    assert_eq!(points[0].abbr, "TX");
    assert_eq!(points[0].income, 54727.0);
}

#[test]
fn extra_columns_are_ignored() {
    let csv = "\
id,state,abbr,poverty,income,healthcare,obesity
1,Alabama,AL,19.3,42830,18.9,33.5
";
    let (points, report) = load_csv_reader(csv.as_bytes()).unwrap();
    assert_eq!(report.rows, 1);
    assert_eq!(points[0].healthcare, 18.9);
}

#[test]
fn malformed_rows_are_rejected_not_propagated() {
    let csv = "\
abbr,income,healthcare
AL,42830,18.9
AK,not-a-number,17.0
AZ,49774,
OK,47529,17.7
";
    let (points, report) = load_csv_reader(csv.as_bytes()).unwrap();
    assert_eq!(report.rows, 2);
    assert_eq!(report.rejected, 2);
    // Survivors keep source order; no NaN reaches the dataset.
    assert_eq!(points[0].abbr, "AL");
    assert_eq!(points[1].abbr, "OK");
    assert!(points.iter().all(|p| p.income.is_finite() && p.healthcare.is_finite()));
}

#[test]
fn missing_column_is_a_typed_error() {
    let csv = "\
abbr,income
AL,42830
";
    match load_csv_reader(csv.as_bytes()) {
        Err(DataError::MissingColumn(col)) => assert_eq!(col, "healthcare"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn all_rows_rejected_is_empty_error() {
    let csv = "\
abbr,income,healthcare
AL,x,y
AK,,
";
    match load_csv_reader(csv.as_bytes()) {
        Err(DataError::Empty { rejected }) => assert_eq!(rejected, 2),
        other => panic!("expected Empty, got {other:?}"),
    }
}
