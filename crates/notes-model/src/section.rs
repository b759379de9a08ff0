//! Clinical note sections known at admission time.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// The closed set of sections extracted from discharge summaries.
///
/// Declaration order is the order used when rendering admission text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Section {
    ChiefComplaint,
    PresentIllness,
    MedicalHistory,
    MedicationAdm,
    Allergies,
    PhysicalExam,
    FamilyHistory,
    SocialHistory,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::ChiefComplaint,
        Section::PresentIllness,
        Section::MedicalHistory,
        Section::MedicationAdm,
        Section::Allergies,
        Section::PhysicalExam,
        Section::FamilyHistory,
        Section::SocialHistory,
    ];

    /// Sections whose presence indicates the note describes the admission reason.
    pub const ADMISSION_INDICATIVE: [Section; 3] = [
        Section::ChiefComplaint,
        Section::PresentIllness,
        Section::MedicalHistory,
    ];

    /// Column key, e.g. `CHIEF_COMPLAINT`.
    pub fn key(self) -> &'static str {
        match self {
            Section::ChiefComplaint => "CHIEF_COMPLAINT",
            Section::PresentIllness => "PRESENT_ILLNESS",
            Section::MedicalHistory => "MEDICAL_HISTORY",
            Section::MedicationAdm => "MEDICATION_ADM",
            Section::Allergies => "ALLERGIES",
            Section::PhysicalExam => "PHYSICAL_EXAM",
            Section::FamilyHistory => "FAMILY_HISTORY",
            Section::SocialHistory => "SOCIAL_HISTORY",
        }
    }

    /// Label searched for in narrative text (without the trailing colon).
    pub fn source_label(self) -> &'static str {
        match self {
            Section::ChiefComplaint => "chief complaint",
            Section::PresentIllness => "present illness",
            Section::MedicalHistory => "medical history",
            Section::MedicationAdm => "medications on admission",
            Section::Allergies => "allergies",
            Section::PhysicalExam => "physical exam",
            Section::FamilyHistory => "family history",
            Section::SocialHistory => "social history",
        }
    }

    /// Uppercase label written in front of the section in rebuilt text.
    ///
    /// Each display label contains its source label, so rebuilt text can be
    /// extracted again.
    pub fn display_label(self) -> &'static str {
        match self {
            Section::ChiefComplaint => "CHIEF COMPLAINT",
            Section::PresentIllness => "PRESENT ILLNESS",
            Section::MedicalHistory => "MEDICAL HISTORY",
            Section::MedicationAdm => "MEDICATIONS ON ADMISSION",
            Section::Allergies => "ALLERGIES",
            Section::PhysicalExam => "PHYSICAL EXAM",
            Section::FamilyHistory => "FAMILY HISTORY",
            Section::SocialHistory => "SOCIAL HISTORY",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Section {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Section::ALL
            .into_iter()
            .find(|section| section.key().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownSection(trimmed.to_string()))
    }
}

/// Extracted text per section. Sections that were not found read as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSet {
    values: BTreeMap<Section, String>,
}

impl SectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, section: Section, value: impl Into<String>) {
        self.values.insert(section, value.into());
    }

    pub fn get(&self, section: Section) -> &str {
        self.values.get(&section).map_or("", String::as_str)
    }

    /// True when at least one admission-indicative section is non-empty.
    pub fn describes_admission(&self) -> bool {
        Section::ADMISSION_INDICATIVE
            .iter()
            .any(|section| !self.get(*section).is_empty())
    }

    /// Render all eight sections as `"<LABEL>: <value>"` blocks in fixed
    /// order, separated by blank lines. Missing sections keep their label.
    pub fn render(&self) -> String {
        Section::ALL
            .iter()
            .map(|section| format!("{}: {}", section.display_label(), self.get(*section)))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
