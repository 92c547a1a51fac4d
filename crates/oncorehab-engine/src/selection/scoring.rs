// ABOUTME: Pure candidate scoring for ordinary blocks with marker-driven adjustments
// ABOUTME: Type, region, and RESET intensity bonuses plus sit-to-stand, march, and shoulder rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::{MarkerAdjustmentWeights, ScoringWeights, SitToStandThresholds};
use oncorehab_core::models::{
    BalanceDemand, BodyRegion, Exercise, ExerciseType, IntensityTier, LatestMarkers, MarkerKey,
    MarkerRating, MarkerSide, PainLocation, PlanVariant,
};

const LOADED_LOWER_BODY_PATTERNS: &[&str] = &["SQUAT", "LUNGE", "STEP_UP"];
const HINGE_PATTERNS: &[&str] = &["HIP_HINGE", "BRIDGE", "GLUTE"];
const SUPPORTED_FRAGMENTS: &[&str] = &["SUPPORTED", "BILATERAL"];
const SINGLE_LEG_FRAGMENTS: &[&str] = &["SINGLE"];
const OVERHEAD_FRAGMENTS: &[&str] = &["OVERHEAD", "PRESS"];
const PULL_FRAGMENTS: &[&str] = &["ROW", "PULL"];

/// Movement focus of an ordinary block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockFocus {
    /// Warm-in, breathing reset and cool-down; mobility work is the fallback
    Breathing,
    /// Range-of-motion work
    Mobility,
    /// Resistance work
    Strength,
}

impl BlockFocus {
    /// Derive the focus from a block key
    #[must_use]
    pub fn from_block_key(block_key: &str) -> Self {
        let key = block_key.trim().to_ascii_uppercase();
        match key.as_str() {
            "WARM_IN" | "BREATH_RESET" | "COOLDOWN" => Self::Breathing,
            _ if key.contains("MOBILITY") => Self::Mobility,
            _ if key.contains("STRENGTH") => Self::Strength,
            _ => Self::Mobility,
        }
    }

    /// Exercise type that earns the type-match bonus
    #[must_use]
    pub const fn desired_type(self) -> ExerciseType {
        match self {
            Self::Breathing => ExerciseType::Breathing,
            Self::Mobility => ExerciseType::Mobility,
            Self::Strength => ExerciseType::Strength,
        }
    }

    /// Whether an exercise may be placed in a block with this focus
    #[must_use]
    pub fn admits(self, exercise: &Exercise) -> bool {
        match self {
            Self::Breathing => {
                exercise.is_type(ExerciseType::Breathing) || exercise.is_type(ExerciseType::Mobility)
            }
            Self::Mobility | Self::Strength => exercise.is_type(self.desired_type()),
        }
    }
}

/// Adaptations derived from the latest marker results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkerAdjustments {
    /// Sit-to-stand felt HARD or comfortable reps were at or below the limit
    pub sit_to_stand_limited: bool,
    /// Sit-to-stand felt EASY at the top of the comfortable-reps scale
    pub progression_allowed: bool,
    /// Supported march felt HARD
    pub march_hard: bool,
    /// Side that needed support during the march, when known
    pub march_side: Option<MarkerSide>,
    /// Shoulder raise felt HARD
    pub shoulder_hard: bool,
}

impl MarkerAdjustments {
    /// Interpret the latest marker results
    #[must_use]
    pub fn from_latest(latest: &LatestMarkers, thresholds: &SitToStandThresholds) -> Self {
        let mut adjustments = Self::default();

        if let Some(sts) = latest.get(&MarkerKey::SitToStand) {
            adjustments.sit_to_stand_limited = sts.rating == MarkerRating::Hard
                || sts
                    .comfortable_reps
                    .is_some_and(|reps| reps <= thresholds.limited_reps_lte);
            adjustments.progression_allowed = !adjustments.sit_to_stand_limited
                && sts.rating == MarkerRating::Easy
                && sts.comfortable_reps == Some(thresholds.comfortable_reps_max);
        }

        if let Some(march) = latest.get(&MarkerKey::SupportedMarch) {
            if march.rating == MarkerRating::Hard {
                adjustments.march_hard = true;
                adjustments.march_side = march.side.filter(|side| *side != MarkerSide::NotSure);
            }
        }

        adjustments.shoulder_hard = latest
            .get(&MarkerKey::ShoulderRaise)
            .is_some_and(|shoulder| shoulder.rating == MarkerRating::Hard);

        adjustments
    }

    /// Whether any marker changed selection behavior
    #[must_use]
    pub const fn any(&self) -> bool {
        self.sit_to_stand_limited || self.progression_allowed || self.march_hard || self.shoulder_hard
    }
}

/// Body regions targeted by today's pain locations, deduplicated in first-seen order
#[must_use]
pub fn region_targets(pain_locations: &[PainLocation]) -> Vec<BodyRegion> {
    let mut regions = Vec::new();
    for location in pain_locations {
        let mapped: &[BodyRegion] = match location {
            PainLocation::Shoulder | PainLocation::Neck => &[BodyRegion::Upper],
            PainLocation::Back => &[BodyRegion::Core, BodyRegion::Upper],
            PainLocation::Knee | PainLocation::Hip | PainLocation::Foot => &[BodyRegion::Lower],
            PainLocation::Other => &[],
        };
        for region in mapped {
            if !regions.contains(region) {
                regions.push(*region);
            }
        }
    }
    regions
}

/// Everything scoring needs besides the exercise itself
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    /// Today's plan variant
    pub variant: PlanVariant,
    /// Regions targeted by reported pain
    pub region_targets: &'a [BodyRegion],
    /// Marker-driven adaptations
    pub markers: &'a MarkerAdjustments,
    /// Base weights
    pub weights: &'a ScoringWeights,
    /// Marker adjustment weights
    pub adjustments: &'a MarkerAdjustmentWeights,
}

/// Score a candidate for a block wanting `desired`
///
/// Only marker adjustments can make a score negative.
#[must_use]
pub fn score_exercise(exercise: &Exercise, desired: ExerciseType, ctx: &ScoringContext<'_>) -> i32 {
    let weights = ctx.weights;
    let adjust = ctx.adjustments;
    let mut score = 0;

    if exercise.is_type(desired) {
        score += weights.type_match;
    }
    if exercise
        .region
        .is_some_and(|region| ctx.region_targets.contains(&region))
    {
        score += weights.region_match;
    }
    if ctx.variant == PlanVariant::Reset && exercise.intensity_tier == Some(IntensityTier::VeryLow) {
        score += weights.reset_very_low_bonus;
    }

    let Some(pattern) = exercise.movement_pattern.as_ref() else {
        return score + type_only_adjustments(exercise, ctx);
    };

    if ctx.markers.sit_to_stand_limited {
        if pattern.is_one_of(LOADED_LOWER_BODY_PATTERNS) {
            score += adjust.loaded_lower_body_penalty;
        }
        if pattern.is_one_of(HINGE_PATTERNS) {
            score += adjust.hinge_bonus;
        }
        if pattern.contains_any(SUPPORTED_FRAGMENTS) {
            score += adjust.supported_bonus;
        }
    }

    if ctx.markers.march_hard {
        if pattern.contains_any(SINGLE_LEG_FRAGMENTS) {
            score += adjust.single_leg_penalty;
        }
        if pattern.contains_any(SUPPORTED_FRAGMENTS) {
            score += adjust.supported_bonus;
        }
    }

    if ctx.markers.shoulder_hard {
        if pattern.contains_any(OVERHEAD_FRAGMENTS) {
            score += adjust.overhead_penalty;
        }
        if pattern.contains_any(PULL_FRAGMENTS) {
            score += adjust.pull_bonus;
        }
    }

    score + type_only_adjustments(exercise, ctx)
}

/// Adjustments that do not depend on the movement pattern
fn type_only_adjustments(exercise: &Exercise, ctx: &ScoringContext<'_>) -> i32 {
    let mut score = 0;
    if ctx.markers.progression_allowed && exercise.is_type(ExerciseType::Strength) {
        score += ctx.adjustments.progression_bonus;
    }
    if ctx.markers.march_hard && exercise.balance_demand == Some(BalanceDemand::High) {
        score += ctx.adjustments.high_balance_penalty;
    }
    score
}
