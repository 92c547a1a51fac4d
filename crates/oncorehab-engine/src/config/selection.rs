// ABOUTME: Exercise selection rule table: scoring weights and marker adaptation thresholds
// ABOUTME: Weights are additive points applied during candidate ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Candidate ranking and marker adaptation rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionRules {
    /// Base scoring weights
    pub weights: ScoringWeights,
    /// Adjustments driven by the latest marker results
    pub marker_adjustments: MarkerAdjustmentWeights,
    /// Sit-to-stand comfortable-reps thresholds
    pub sit_to_stand: SitToStandThresholds,
    /// Maximum number of selection reasons reported
    pub max_selection_reasons: usize,
}

/// Points awarded while ranking candidates for a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Exercise type matches the block's desired type
    pub type_match: i32,
    /// Exercise region matches a region targeted by reported pain
    pub region_match: i32,
    /// VERY_LOW intensity on a RESET day
    pub reset_very_low_bonus: i32,
}

/// Signed points applied when a marker indicates limitation or readiness
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerAdjustmentWeights {
    /// Squat, lunge and step-up patterns when sit-to-stand is limited
    pub loaded_lower_body_penalty: i32,
    /// Hinge, bridge and glute patterns when sit-to-stand is limited
    pub hinge_bonus: i32,
    /// Supported or bilateral patterns when a lower-body marker is limited
    pub supported_bonus: i32,
    /// Strength exercises when sit-to-stand progression is allowed
    pub progression_bonus: i32,
    /// HIGH balance demand when the march marker was HARD
    pub high_balance_penalty: i32,
    /// Single-leg patterns when the march marker was HARD
    pub single_leg_penalty: i32,
    /// Overhead and press patterns when the shoulder marker was HARD
    pub overhead_penalty: i32,
    /// Row and pull patterns when the shoulder marker was HARD
    pub pull_bonus: i32,
}

/// Sit-to-stand comfortable-reps interpretation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitToStandThresholds {
    /// Comfortable reps at or below this count as limited
    pub limited_reps_lte: u8,
    /// Top of the comfortable-reps scale; EASY at this value allows progression
    pub comfortable_reps_max: u8,
}

impl Default for SelectionRules {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            marker_adjustments: MarkerAdjustmentWeights::default(),
            sit_to_stand: SitToStandThresholds::default(),
            max_selection_reasons: 3,
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            type_match: 5,
            region_match: 3,
            reset_very_low_bonus: 2,
        }
    }
}

impl Default for MarkerAdjustmentWeights {
    fn default() -> Self {
        Self {
            loaded_lower_body_penalty: -4,
            hinge_bonus: 2,
            supported_bonus: 2,
            progression_bonus: 2,
            high_balance_penalty: -4,
            single_leg_penalty: -3,
            overhead_penalty: -4,
            pull_bonus: 2,
        }
    }
}

impl Default for SitToStandThresholds {
    fn default() -> Self {
        Self {
            limited_reps_lte: 2,
            comfortable_reps_max: 5,
        }
    }
}
