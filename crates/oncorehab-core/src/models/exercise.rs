// ABOUTME: Exercise catalog entry model with clinical classification enums
// ABOUTME: Type, region, intensity, equipment, stage, phase, balance and safety flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::profile::TreatmentPhase;
use crate::serde_flags::deserialize_yes_no;

/// Exercise modality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExerciseType {
    /// Breathing and relaxation work
    Breathing,
    /// Range-of-motion and mobility work
    Mobility,
    /// Resistance or strength work
    Strength,
    /// Any modality the engine does not plan for (cardio, balance drills, etc.)
    #[serde(other)]
    Other,
}

impl ExerciseType {
    /// Canonical upper-case label used in explanations
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breathing => "BREATHING",
            Self::Mobility => "MOBILITY",
            Self::Strength => "STRENGTH",
            Self::Other => "OTHER",
        }
    }
}

/// Body region an exercise primarily loads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BodyRegion {
    /// Shoulders, arms, neck and upper back
    Upper,
    /// Hips, knees, ankles and feet
    Lower,
    /// Trunk and lower back
    Core,
    /// Whole-body movements
    FullBody,
    /// Unclassified region
    #[serde(other)]
    Other,
}

impl BodyRegion {
    /// Canonical upper-case label used in explanations
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upper => "UPPER",
            Self::Lower => "LOWER",
            Self::Core => "CORE",
            Self::FullBody => "FULL_BODY",
            Self::Other => "OTHER",
        }
    }
}

/// Intensity tier, ordered from lightest to heaviest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntensityTier {
    /// Very low intensity
    VeryLow,
    /// Low intensity
    Low,
    /// Moderate intensity
    Moderate,
    /// High intensity, never selectable by the planner
    High,
}

/// Equipment an exercise requires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Equipment {
    /// No equipment (catalog value `NONE`)
    #[serde(rename = "NONE")]
    Bodyweight,
    /// Resistance band
    #[serde(rename = "BAND")]
    Band,
    /// Light dumbbells
    #[serde(rename = "DB_LIGHT")]
    DumbbellLight,
    /// Medium dumbbells
    #[serde(rename = "DB_MED")]
    DumbbellMedium,
    /// A sturdy chair
    #[serde(rename = "CHAIR")]
    Chair,
    /// Anything else the catalog lists
    #[serde(other, rename = "OTHER")]
    Other,
}

/// Recovery stage an exercise is appropriate for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecoveryStage {
    /// Early recovery (first weeks after surgery or at cycle start)
    Early,
    /// Mid recovery
    Mid,
    /// Late recovery
    Late,
    /// Any stage
    All,
}

impl RecoveryStage {
    /// Sort priority for the post-filter catalog order (earlier stages first)
    #[must_use]
    pub const fn priority(stage: Option<Self>) -> u8 {
        match stage {
            Some(Self::Early) => 0,
            Some(Self::Mid) => 1,
            Some(Self::Late) => 2,
            Some(Self::All) | None => 3,
        }
    }
}

/// Treatment phases an exercise is tagged for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhaseApplicability {
    /// Any phase
    All,
    /// Before treatment starts
    Prehab,
    /// During active treatment
    InTreatment,
    /// After treatment ends
    PostTreatment,
}

impl PhaseApplicability {
    /// Whether this tag admits the given treatment phase
    #[must_use]
    pub const fn admits(self, phase: TreatmentPhase) -> bool {
        matches!(
            (self, phase),
            (Self::All, _)
                | (Self::Prehab, TreatmentPhase::Prehab)
                | (Self::InTreatment, TreatmentPhase::InTreatment)
                | (Self::PostTreatment, TreatmentPhase::PostTreatment)
        )
    }
}

/// Balance demand of an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BalanceDemand {
    /// Seated or fully supported
    Low,
    /// Standing with support nearby
    Moderate,
    /// Unsupported or single-leg
    High,
}

/// Normalized movement pattern label (e.g. `SQUAT`, `SUPPORTED_MARCH`)
///
/// Patterns are free-form catalog strings; they are trimmed and upper-cased on
/// the way in so that matching and diversity tracking are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct MovementPattern(String);

impl MovementPattern {
    /// Create a normalized pattern
    #[must_use]
    pub fn new(pattern: impl AsRef<str>) -> Self {
        Self(pattern.as_ref().trim().to_uppercase())
    }

    /// Normalized pattern text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the pattern equals one of the given labels
    #[must_use]
    pub fn is_one_of(&self, labels: &[&str]) -> bool {
        labels.iter().any(|label| self.0 == *label)
    }

    /// Whether the pattern contains any of the given fragments
    #[must_use]
    pub fn contains_any(&self, fragments: &[&str]) -> bool {
        fragments.iter().any(|fragment| self.0.contains(fragment))
    }

    /// Empty patterns carry no diversity information
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for MovementPattern {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<MovementPattern> for String {
    fn from(value: MovementPattern) -> Self {
        value.0
    }
}

/// Exercise catalog entry
///
/// Reference data owned by the catalog; the planner only reads it. Missing
/// classification fields are permissive (an exercise without an intensity tier
/// passes the intensity cap) except for the safety flags, which must be
/// explicitly marked safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Stable catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Modality
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub exercise_type: Option<ExerciseType>,
    /// Primary body region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<BodyRegion>,
    /// Intensity tier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity_tier: Option<IntensityTier>,
    /// Required equipment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Equipment>,
    /// Movement pattern label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movement_pattern: Option<MovementPattern>,
    /// Recovery stage applicability
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<RecoveryStage>,
    /// Treatment phase applicability
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<PhaseApplicability>,
    /// Balance demand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_demand: Option<BalanceDemand>,
    /// Explicitly marked safe under high lymphatic load risk
    #[serde(default, deserialize_with = "deserialize_yes_no")]
    pub lymph_safe: bool,
    /// Explicitly marked safe after shoulder surgery
    #[serde(default, deserialize_with = "deserialize_yes_no")]
    pub post_op_shoulder_safe: bool,
    /// Free-form tags, including `MARKER_*` calibration tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Exercise {
    /// Whether the exercise has the given modality
    #[must_use]
    pub fn is_type(&self, exercise_type: ExerciseType) -> bool {
        self.exercise_type == Some(exercise_type)
    }

    /// Whether the exercise carries the given tag (case-insensitive)
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.trim().eq_ignore_ascii_case(tag))
    }

    /// Movement pattern text, empty when the catalog has none
    #[must_use]
    pub fn pattern_str(&self) -> &str {
        self.movement_pattern
            .as_ref()
            .map_or("", MovementPattern::as_str)
    }
}

/// Builder for `Exercise` catalog entries
///
/// # Examples
///
/// ```rust
/// use oncorehab_core::models::{ExerciseBuilder, ExerciseType, IntensityTier};
///
/// let exercise = ExerciseBuilder::new("s1", "Chair Squat")
///     .exercise_type(ExerciseType::Strength)
///     .intensity(IntensityTier::Low)
///     .pattern("squat")
///     .build();
///
/// assert_eq!(exercise.pattern_str(), "SQUAT");
/// ```
#[derive(Debug, Clone)]
pub struct ExerciseBuilder {
    exercise: Exercise,
}

impl ExerciseBuilder {
    /// Creates a new `ExerciseBuilder` with required fields
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            exercise: Exercise {
                id: id.into(),
                name: name.into(),
                exercise_type: None,
                region: None,
                intensity_tier: None,
                equipment: None,
                movement_pattern: None,
                stage: None,
                phase: None,
                balance_demand: None,
                lymph_safe: false,
                post_op_shoulder_safe: false,
                tags: Vec::new(),
            },
        }
    }

    /// Sets the modality
    #[must_use]
    pub const fn exercise_type(mut self, value: ExerciseType) -> Self {
        self.exercise.exercise_type = Some(value);
        self
    }

    /// Sets the body region
    #[must_use]
    pub const fn region(mut self, value: BodyRegion) -> Self {
        self.exercise.region = Some(value);
        self
    }

    /// Sets the intensity tier
    #[must_use]
    pub const fn intensity(mut self, value: IntensityTier) -> Self {
        self.exercise.intensity_tier = Some(value);
        self
    }

    /// Sets the required equipment
    #[must_use]
    pub const fn equipment(mut self, value: Equipment) -> Self {
        self.exercise.equipment = Some(value);
        self
    }

    /// Sets the movement pattern
    #[must_use]
    pub fn pattern(mut self, value: impl AsRef<str>) -> Self {
        self.exercise.movement_pattern = Some(MovementPattern::new(value));
        self
    }

    /// Sets the recovery stage
    #[must_use]
    pub const fn stage(mut self, value: RecoveryStage) -> Self {
        self.exercise.stage = Some(value);
        self
    }

    /// Sets the phase applicability
    #[must_use]
    pub const fn phase(mut self, value: PhaseApplicability) -> Self {
        self.exercise.phase = Some(value);
        self
    }

    /// Sets the balance demand
    #[must_use]
    pub const fn balance(mut self, value: BalanceDemand) -> Self {
        self.exercise.balance_demand = Some(value);
        self
    }

    /// Marks the exercise lymph-safe (or not)
    #[must_use]
    pub const fn lymph_safe(mut self, value: bool) -> Self {
        self.exercise.lymph_safe = value;
        self
    }

    /// Marks the exercise post-op shoulder safe (or not)
    #[must_use]
    pub const fn shoulder_safe(mut self, value: bool) -> Self {
        self.exercise.post_op_shoulder_safe = value;
        self
    }

    /// Adds a catalog tag
    #[must_use]
    pub fn tag(mut self, value: impl Into<String>) -> Self {
        self.exercise.tags.push(value.into());
        self
    }

    /// Builds the final `Exercise`
    #[must_use]
    pub fn build(self) -> Exercise {
        self.exercise
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_row_deserializes_with_mixed_flag_styles() {
        let row = r#"{
            "id": "b2",
            "name": "Supported March",
            "type": "MOBILITY",
            "region": "LOWER",
            "intensity_tier": "LOW",
            "equipment": "CHAIR",
            "movement_pattern": "supported_march",
            "balance_demand": "LOW",
            "lymph_safe": "YES",
            "post_op_shoulder_safe": false
        }"#;
        let exercise: Exercise = serde_json::from_str(row).unwrap();
        assert!(exercise.is_type(ExerciseType::Mobility));
        assert_eq!(exercise.equipment, Some(Equipment::Chair));
        assert_eq!(exercise.pattern_str(), "SUPPORTED_MARCH");
        assert!(exercise.lymph_safe);
        assert!(!exercise.post_op_shoulder_safe);
    }

    #[test]
    fn test_unknown_type_and_equipment_fall_back_to_other() {
        let row = r#"{"id":"x","name":"Bike","type":"CARDIO","equipment":"BIKE"}"#;
        let exercise: Exercise = serde_json::from_str(row).unwrap();
        assert_eq!(exercise.exercise_type, Some(ExerciseType::Other));
        assert_eq!(exercise.equipment, Some(Equipment::Other));
    }

    #[test]
    fn test_phase_applicability() {
        assert!(PhaseApplicability::All.admits(TreatmentPhase::Prehab));
        assert!(PhaseApplicability::InTreatment.admits(TreatmentPhase::InTreatment));
        assert!(!PhaseApplicability::Prehab.admits(TreatmentPhase::PostTreatment));
    }

    #[test]
    fn test_stage_priority_orders_early_first() {
        assert!(
            RecoveryStage::priority(Some(RecoveryStage::Early))
                < RecoveryStage::priority(Some(RecoveryStage::Late))
        );
        assert_eq!(
            RecoveryStage::priority(None),
            RecoveryStage::priority(Some(RecoveryStage::All))
        );
    }

    #[test]
    fn test_pattern_matching_helpers() {
        let pattern = MovementPattern::new(" single_leg_balance ");
        assert!(pattern.contains_any(&["SINGLE"]));
        assert!(!pattern.is_one_of(&["SQUAT", "LUNGE"]));
        assert!(MovementPattern::new("").is_empty());
    }
}
