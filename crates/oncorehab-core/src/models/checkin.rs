// ABOUTME: Same-day symptom check-in with red flags and pain locations
// ABOUTME: Symptom scores use a 0-10 scale where higher means worse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Red-flag symptoms that stop exercise for the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RedFlag {
    /// Chest pain
    ChestPain,
    /// Fainting or near-fainting
    Fainting,
    /// Severe breathlessness at rest
    SevereBreathlessnessRest,
    /// Fever or signs of infection
    FeverInfection,
    /// Uncontrolled vomiting
    UncontrolledVomiting,
    /// New neurological symptoms
    NewNeuroSymptoms,
    /// Sudden severe swelling
    SuddenSwellingSevere,
    /// Any other urgent medical concern
    OtherMedicalUrgent,
}

impl RedFlag {
    /// Every red flag, in reporting order
    pub const ALL: [Self; 8] = [
        Self::ChestPain,
        Self::Fainting,
        Self::SevereBreathlessnessRest,
        Self::FeverInfection,
        Self::UncontrolledVomiting,
        Self::NewNeuroSymptoms,
        Self::SuddenSwellingSevere,
        Self::OtherMedicalUrgent,
    ];

    /// Wire name of the flag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ChestPain => "CHEST_PAIN",
            Self::Fainting => "FAINTING",
            Self::SevereBreathlessnessRest => "SEVERE_BREATHLESSNESS_REST",
            Self::FeverInfection => "FEVER_INFECTION",
            Self::UncontrolledVomiting => "UNCONTROLLED_VOMITING",
            Self::NewNeuroSymptoms => "NEW_NEURO_SYMPTOMS",
            Self::SuddenSwellingSevere => "SUDDEN_SWELLING_SEVERE",
            Self::OtherMedicalUrgent => "OTHER_MEDICAL_URGENT",
        }
    }
}

/// Where the patient reports pain today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PainLocation {
    /// Shoulder
    Shoulder,
    /// Neck
    Neck,
    /// Back
    Back,
    /// Hip
    Hip,
    /// Knee
    Knee,
    /// Foot or ankle
    Foot,
    /// Elsewhere
    Other,
}

/// Today's self-reported check-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinInput {
    /// Day the plan is for
    #[serde(rename = "dateISO")]
    pub date: NaiveDate,
    /// Fatigue, 0-10
    #[serde(rename = "fatigue010")]
    pub fatigue: u8,
    /// Pain, 0-10
    #[serde(rename = "pain010")]
    pub pain: u8,
    /// Nausea, 0-10
    #[serde(rename = "nausea010", default, skip_serializing_if = "Option::is_none")]
    pub nausea: Option<u8>,
    /// Sleep disturbance, 0-10 (higher means worse sleep)
    #[serde(rename = "sleep010", default, skip_serializing_if = "Option::is_none")]
    pub sleep: Option<u8>,
    /// Pain locations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pain_locations: Vec<PainLocation>,
    /// Red flags answered in the check-in; absent keys mean "no"
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub red_flags: BTreeMap<RedFlag, bool>,
}

impl CheckinInput {
    /// Check-in with only the required fields set
    #[must_use]
    pub const fn new(date: NaiveDate, fatigue: u8, pain: u8) -> Self {
        Self {
            date,
            fatigue,
            pain,
            nausea: None,
            sleep: None,
            pain_locations: Vec::new(),
            red_flags: BTreeMap::new(),
        }
    }

    /// Whether the given red flag was answered "yes"
    #[must_use]
    pub fn has_red_flag(&self, flag: RedFlag) -> bool {
        self.red_flags.get(&flag).copied().unwrap_or(false)
    }

    /// Whether pain was reported at the given location
    #[must_use]
    pub fn reports_pain_at(&self, location: PainLocation) -> bool {
        self.pain_locations.contains(&location)
    }
}
