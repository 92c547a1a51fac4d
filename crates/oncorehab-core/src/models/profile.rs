// ABOUTME: Standing patient safety profile, preferences, and treatment timeline
// ABOUTME: Supplied per request and never mutated by the planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::exercise::Equipment;

/// Treatment phase of the patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TreatmentPhase {
    /// Before treatment starts
    Prehab,
    /// During active treatment
    InTreatment,
    /// After treatment ends
    PostTreatment,
}

/// Lymphatic load risk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LymphLoadRisk {
    /// Low risk (default when unreported)
    #[default]
    Low,
    /// Moderate risk
    Moderate,
    /// High risk, only lymph-safe exercises are allowed
    High,
}

/// Post-operative shoulder risk and affected side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShoulderRisk {
    /// No shoulder restriction (default when unreported)
    #[default]
    None,
    /// Left shoulder
    Left,
    /// Right shoulder
    Right,
    /// Both shoulders
    Bilateral,
}

impl ShoulderRisk {
    /// Whether any shoulder restriction applies
    #[must_use]
    pub const fn is_at_risk(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Bone health risk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoneRisk {
    /// No known bone risk (default when unreported)
    #[default]
    None,
    /// Low bone risk
    Low,
    /// High bone risk
    High,
}

/// Peripheral neuropathy risk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NeuropathyRisk {
    /// No neuropathy (default when unreported)
    #[default]
    None,
    /// Mild neuropathy
    Mild,
    /// Moderate neuropathy, balance demand is capped
    Moderate,
    /// High neuropathy, balance demand is capped
    High,
}

impl NeuropathyRisk {
    /// Whether high balance-demand work must be excluded
    #[must_use]
    pub const fn caps_balance(self) -> bool {
        matches!(self, Self::Moderate | Self::High)
    }
}

/// Standing safety profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyProfile {
    /// Treatment phase
    pub phase: TreatmentPhase,
    /// Lymphatic load risk
    #[serde(default)]
    pub lymph_load_risk: LymphLoadRisk,
    /// Post-operative shoulder risk
    #[serde(default)]
    pub post_op_shoulder_risk: ShoulderRisk,
    /// Bone risk
    #[serde(default)]
    pub bone_risk: BoneRisk,
    /// Neuropathy risk
    #[serde(default)]
    pub neuropathy_risk: NeuropathyRisk,
}

impl SafetyProfile {
    /// Profile with the given phase and no additional risks
    #[must_use]
    pub const fn for_phase(phase: TreatmentPhase) -> Self {
        Self {
            phase,
            lymph_load_risk: LymphLoadRisk::Low,
            post_op_shoulder_risk: ShoulderRisk::None,
            bone_risk: BoneRisk::None,
            neuropathy_risk: NeuropathyRisk::None,
        }
    }
}

/// Patient preferences relevant to planning
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Equipment the patient has at home; `None` means "not declared"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_available: Option<Vec<Equipment>>,
}

/// Treatment timeline facts used for early-stage detection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentTimeline {
    /// Date of the most recent surgery
    #[serde(
        rename = "surgeryDateISO",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub surgery_date: Option<NaiveDate>,
    /// Week within the current chemotherapy cycle (1-based)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chemo_week: Option<u32>,
}

/// Per-request user input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Opaque user identifier
    pub user_id: String,
    /// Standing safety profile
    pub safety: SafetyProfile,
    /// Preferences
    #[serde(default)]
    pub preferences: UserPreferences,
    /// Treatment timeline
    #[serde(default)]
    pub treatment: TreatmentTimeline,
}
