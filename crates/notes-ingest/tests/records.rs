//! Tests for DataFrame → record conversion.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use notes_ingest::{IngestError, admissions_from_frame, notes_from_frame};
use notes_model::AdmissionType;

fn frame(columns: Vec<(&str, Vec<Option<&str>>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| Series::new(name.into(), values).into_column())
        .collect();
    DataFrame::new(cols).unwrap()
}

fn note_frame(text: Vec<Option<&str>>) -> DataFrame {
    let rows = text.len();
    let ids: Vec<String> = (1..=rows).map(|id| id.to_string()).collect();
    frame(vec![
        ("ROW_ID", ids.iter().map(|id| Some(id.as_str())).collect()),
        ("SUBJECT_ID", vec![Some("100"); rows]),
        ("HADM_ID", vec![Some("1"); rows]),
        ("CHARTDATE", vec![Some("2151-08-04"); rows]),
        ("CATEGORY", vec![Some("Discharge summary"); rows]),
        ("DESCRIPTION", vec![Some("Report"); rows]),
        ("TEXT", text),
    ])
}

#[test]
fn converts_note_rows() {
    let df = note_frame(vec![Some("Admission Date: ..."), None, Some("")]);
    let notes = notes_from_frame(&df).expect("convert notes");

    assert_eq!(notes.len(), 3);
    assert_eq!(notes[0].row_id, 1);
    assert_eq!(notes[0].subject_id, Some(100));
    assert_eq!(notes[0].admission_id, Some(1));
    assert_eq!(
        notes[0].chart_date.map(|d| d.to_string()),
        Some("2151-08-04".to_string())
    );
    assert_eq!(notes[0].category, "Discharge summary");
    assert_eq!(notes[0].text.as_deref(), Some("Admission Date: ..."));
    assert_eq!(notes[1].text, None);
    assert_eq!(notes[2].text, None);
}

#[test]
fn missing_admission_id_is_kept_as_none() {
    let mut df = note_frame(vec![Some("text")]);
    df.replace("HADM_ID", Series::new("HADM_ID".into(), vec![None::<&str>]))
        .unwrap();
    let notes = notes_from_frame(&df).expect("convert notes");
    assert_eq!(notes[0].admission_id, None);
}

#[test]
fn missing_text_column_is_a_schema_error() {
    let df = frame(vec![
        ("ROW_ID", vec![Some("1")]),
        ("SUBJECT_ID", vec![Some("100")]),
        ("HADM_ID", vec![Some("1")]),
        ("CHARTDATE", vec![Some("2151-08-04")]),
        ("CATEGORY", vec![Some("Discharge summary")]),
        ("DESCRIPTION", vec![Some("Report")]),
    ]);
    let err = notes_from_frame(&df).unwrap_err();
    match err {
        IngestError::MissingColumn { table, column } => {
            assert_eq!(table, "NOTEEVENTS");
            assert_eq!(column, "TEXT");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_identifiers_drop_their_row() {
    let mut df = note_frame(vec![Some("a"), Some("b"), Some("c"), Some("d")]);
    df.replace(
        "ROW_ID",
        Series::new(
            "ROW_ID".into(),
            vec![Some("1"), None, Some("3"), Some("4")],
        ),
    )
    .unwrap();
    df.replace(
        "SUBJECT_ID",
        Series::new(
            "SUBJECT_ID".into(),
            vec![Some("100"), Some("100"), Some("abc"), Some("100")],
        ),
    )
    .unwrap();
    df.replace(
        "HADM_ID",
        Series::new(
            "HADM_ID".into(),
            vec![Some("1"), Some("1"), Some("1"), Some("1.5")],
        ),
    )
    .unwrap();

    let notes = notes_from_frame(&df).expect("convert notes");

    let row_ids: Vec<i64> = notes.iter().map(|note| note.row_id).collect();
    assert_eq!(row_ids, vec![1]);
}

#[test]
fn unparseable_chart_date_reads_as_missing() {
    let mut df = note_frame(vec![Some("report"), Some("nursing")]);
    df.replace(
        "CATEGORY",
        Series::new(
            "CATEGORY".into(),
            vec![Some("Discharge summary"), Some("Nursing")],
        ),
    )
    .unwrap();
    df.replace(
        "CHARTDATE",
        Series::new(
            "CHARTDATE".into(),
            vec![Some("2151-08-04"), Some("08/04/2151")],
        ),
    )
    .unwrap();

    let notes = notes_from_frame(&df).expect("bad dates are not fatal");

    assert_eq!(notes.len(), 2);
    assert!(notes[0].chart_date.is_some());
    assert_eq!(notes[1].chart_date, None);
    assert_eq!(notes[1].category, "Nursing");
}

#[test]
fn malformed_admission_ids_are_skipped() {
    let df = frame(vec![
        ("HADM_ID", vec![Some("1"), Some("n/a")]),
        ("ADMISSION_TYPE", vec![Some("ELECTIVE"), Some("NEWBORN")]),
    ]);
    let admissions = admissions_from_frame(&df).expect("convert admissions");
    assert_eq!(admissions.len(), 1);
    assert_eq!(admissions[0].admission_id, 1);
}

#[test]
fn numeric_columns_are_accepted() {
    let df = DataFrame::new(vec![
        Series::new("HADM_ID".into(), vec![10i64, 11, 12]).into_column(),
        Series::new(
            "ADMISSION_TYPE".into(),
            vec![Some("EMERGENCY"), Some("NEWBORN"), None],
        )
        .into_column(),
    ])
    .unwrap();
    let admissions = admissions_from_frame(&df).expect("convert admissions");

    assert_eq!(admissions.len(), 3);
    assert_eq!(admissions[0].admission_id, 10);
    assert_eq!(admissions[0].admission_type, AdmissionType::Emergency);
    assert!(admissions[1].admission_type.is_newborn());
    assert_eq!(admissions[2].admission_type, AdmissionType::Unknown);
}

#[test]
fn admissions_without_id_are_skipped() {
    let df = frame(vec![
        ("HADM_ID", vec![Some("1"), None]),
        ("ADMISSION_TYPE", vec![Some("ELECTIVE"), Some("URGENT")]),
    ]);
    let admissions = admissions_from_frame(&df).expect("convert admissions");
    assert_eq!(admissions.len(), 1);
    assert_eq!(admissions[0].admission_type, AdmissionType::Elective);
}
