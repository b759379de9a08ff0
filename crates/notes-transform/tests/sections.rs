//! Tests for section extraction and admission-text reduction.

use notes_model::{ConsolidatedNote, Section};
use notes_transform::{extract_sections, reduce_to_admission_text};

const FULL_NOTE: &str = "Admission Date: [**2151-7-16**]

Chief Complaint: Chest pain

History of Present Illness: 70M with exertional angina.

Past Medical History: HTN, DM2

Medications on Admission: Aspirin 81 mg daily

Allergies: Penicillins

Physical Exam: Afebrile, RRR

Family History: Father with MI

Social History: Former smoker

Brief Hospital Course: CABG x3";

fn consolidated(admission_id: i64, text: &str) -> ConsolidatedNote {
    ConsolidatedNote {
        admission_id,
        subject_id: 100,
        row_id: admission_id,
        chart_date: None,
        text: text.to_string(),
        sections: None,
    }
}

#[test]
fn extracts_all_sections() {
    let sections = extract_sections(FULL_NOTE);

    assert_eq!(sections.get(Section::ChiefComplaint), "Chest pain");
    assert_eq!(
        sections.get(Section::PresentIllness),
        "70M with exertional angina."
    );
    assert_eq!(sections.get(Section::MedicalHistory), "HTN, DM2");
    assert_eq!(sections.get(Section::MedicationAdm), "Aspirin 81 mg daily");
    assert_eq!(sections.get(Section::Allergies), "Penicillins");
    assert_eq!(sections.get(Section::PhysicalExam), "Afebrile, RRR");
    assert_eq!(sections.get(Section::FamilyHistory), "Father with MI");
    assert_eq!(sections.get(Section::SocialHistory), "Former smoker");
}

#[test]
fn rebuilt_text_lists_sections_in_order() {
    let reduced = reduce_to_admission_text(vec![consolidated(1, FULL_NOTE)]);

    assert_eq!(reduced.len(), 1);
    insta::assert_snapshot!(reduced[0].text.as_str(), @r"
CHIEF COMPLAINT: Chest pain

PRESENT ILLNESS: 70M with exertional angina.

MEDICAL HISTORY: HTN, DM2

MEDICATIONS ON ADMISSION: Aspirin 81 mg daily

ALLERGIES: Penicillins

PHYSICAL EXAM: Afebrile, RRR

FAMILY HISTORY: Father with MI

SOCIAL HISTORY: Former smoker
");
}

#[test]
fn missing_sections_keep_their_label() {
    let reduced = reduce_to_admission_text(vec![consolidated(
        1,
        "Chief Complaint: Fever\n\nDischarge Diagnosis: UTI",
    )]);

    assert_eq!(reduced.len(), 1);
    let text = &reduced[0].text;
    assert!(text.starts_with("CHIEF COMPLAINT: Fever\n\nPRESENT ILLNESS: \n\n"));
    assert!(text.ends_with("\n\nSOCIAL HISTORY: "));
    assert_eq!(text.matches("\n\n").count(), 7);

    let sections = reduced[0].sections.as_ref().expect("sections attached");
    assert_eq!(sections.get(Section::ChiefComplaint), "Fever");
    assert_eq!(sections.get(Section::Allergies), "");
}

#[test]
fn reduction_is_stable_on_rebuilt_text() {
    let first = reduce_to_admission_text(vec![consolidated(1, FULL_NOTE)]);
    let again = reduce_to_admission_text(first.clone());

    assert_eq!(again.len(), 1);
    assert_eq!(again[0].text, first[0].text);
    assert_eq!(again[0].sections, first[0].sections);
}

#[test]
fn reduction_is_stable_with_empty_sections() {
    let first = reduce_to_admission_text(vec![consolidated(
        1,
        "Chief Complaint: Fever\n\nDischarge Diagnosis: UTI",
    )]);
    let again = reduce_to_admission_text(first.clone());

    assert_eq!(again.len(), 1);
    assert_eq!(again[0].text, first[0].text);
    assert_eq!(again[0].sections, first[0].sections);
    let sections = again[0].sections.as_ref().expect("sections attached");
    assert_eq!(sections.get(Section::PresentIllness), "");
    assert_eq!(sections.get(Section::SocialHistory), "");
}

#[test]
fn reduction_is_stable_when_only_history_is_present() {
    let first = reduce_to_admission_text(vec![consolidated(
        1,
        "Past Medical History: COPD\n\nSocial History: lives alone",
    )]);
    let again = reduce_to_admission_text(first.clone());

    assert_eq!(again[0].text, first[0].text);
    let sections = again[0].sections.as_ref().expect("sections attached");
    assert_eq!(sections.get(Section::MedicalHistory), "COPD");
    assert_eq!(sections.get(Section::FamilyHistory), "");
    assert_eq!(sections.get(Section::SocialHistory), "lives alone");
}

#[test]
fn notes_without_admission_sections_are_dropped() {
    let notes = vec![
        consolidated(1, "Discharge Diagnosis: CHF\n\nAllergies: none"),
        consolidated(2, "Patient discharged home."),
        consolidated(3, "Past Medical History: COPD"),
    ];

    let reduced = reduce_to_admission_text(notes);

    let ids: Vec<i64> = reduced.iter().map(|n| n.admission_id).collect();
    assert_eq!(ids, vec![3]);
}
