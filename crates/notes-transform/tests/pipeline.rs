//! Tests for the filtering stage driver.

use chrono::NaiveDate;

use notes_model::{AdmissionRecord, AdmissionType, FilterOptions, NoteRecord};
use notes_transform::{filter_admissions, filter_notes};

fn raw_note(row_id: i64, admission_id: Option<i64>, description: &str, text: Option<&str>) -> NoteRecord {
    NoteRecord {
        row_id,
        subject_id: Some(100),
        admission_id,
        chart_date: NaiveDate::from_ymd_opt(2151, 8, 4),
        category: "Discharge summary".to_string(),
        description: description.to_string(),
        text: text.map(str::to_string),
    }
}

fn admission(admission_id: i64, admission_type: AdmissionType) -> AdmissionRecord {
    AdmissionRecord {
        admission_id,
        admission_type,
    }
}

#[test]
fn newborn_admissions_are_removed() {
    let notes = vec![
        raw_note(1, Some(1), "Report", Some("adult")),
        raw_note(2, Some(2), "Report", Some("newborn")),
    ];
    let admissions = vec![
        admission(1, AdmissionType::Emergency),
        admission(2, AdmissionType::Newborn),
    ];

    let outcome = filter_notes(notes, &admissions, &FilterOptions::default());

    assert!(outcome.notes.iter().all(|note| note.admission_id != 2));
    assert_eq!(outcome.notes.len(), 1);
}

#[test]
fn filter_requires_text_admission_and_category() {
    let mut nursing = raw_note(4, Some(1), "Report", Some("nursing note"));
    nursing.category = "Nursing".to_string();
    let mut lowercase = raw_note(5, Some(1), "Report", Some("lowercase category"));
    lowercase.category = "discharge summary".to_string();
    let notes = vec![
        raw_note(1, Some(1), "Report", Some("kept")),
        raw_note(2, None, "Report", Some("no admission")),
        raw_note(3, Some(1), "Report", None),
        nursing,
        lowercase,
        raw_note(6, Some(9), "Report", Some("unknown admission")),
    ];
    let admissions = vec![admission(1, AdmissionType::Unknown)];

    let kept = filter_admissions(notes, &admissions);

    let ids: Vec<i64> = kept.iter().map(|note| note.row_id).collect();
    assert_eq!(ids, vec![1]);
    assert_eq!(kept[0].text, "kept");
}

#[test]
fn full_text_mode_keeps_consolidated_text() {
    let notes = vec![
        raw_note(1, Some(1), "Report", Some("Chief Complaint: cough")),
        raw_note(2, Some(2), "Report", Some("No labelled sections here")),
    ];
    let admissions = vec![
        admission(1, AdmissionType::Elective),
        admission(2, AdmissionType::Urgent),
    ];

    let outcome = filter_notes(notes, &admissions, &FilterOptions::default());

    assert_eq!(outcome.notes.len(), 2);
    assert_eq!(outcome.notes[1].text, "No labelled sections here");
    assert!(outcome.notes.iter().all(|note| note.sections.is_none()));
    assert_eq!(outcome.counts.raw_notes, 2);
    assert_eq!(outcome.counts.discharge_notes, 2);
    assert_eq!(outcome.counts.consolidated, 2);
    assert_eq!(outcome.counts.admission_text, None);
}

#[test]
fn admission_only_mode_reduces_and_drops() {
    let notes = vec![
        raw_note(1, Some(1), "Report", Some("Chief Complaint: cough\n\nPlan: home")),
        raw_note(2, Some(2), "Report", Some("No labelled sections here")),
    ];
    let admissions = vec![
        admission(1, AdmissionType::Elective),
        admission(2, AdmissionType::Urgent),
    ];
    let options = FilterOptions {
        admission_only: true,
    };

    let outcome = filter_notes(notes, &admissions, &options);

    assert_eq!(outcome.notes.len(), 1);
    assert!(outcome.notes[0].text.starts_with("CHIEF COMPLAINT: cough\n\n"));
    assert!(outcome.notes[0].sections.is_some());
    assert_eq!(outcome.counts.consolidated, 2);
    assert_eq!(outcome.counts.admission_text, Some(1));
}
