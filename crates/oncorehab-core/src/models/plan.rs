// ABOUTME: Daily plan output model: status, variant, blocks, doses, and explanation
// ABOUTME: Serialized with camelCase keys for the caller that persists and renders it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Safety gate classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SafetyStatus {
    /// No concerns
    Green,
    /// Elevated symptoms
    Amber,
    /// Red flag present, recovery only
    Red,
}

/// Capacity band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CapacityBand {
    /// Low capacity
    Low,
    /// Medium capacity
    Med,
    /// High capacity
    High,
}

/// Overall plan intensity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanVariant {
    /// Recovery-only plan
    Reset,
    /// Lighter plan
    Easier,
    /// Standard plan
    Main,
}

impl PlanVariant {
    /// Every variant
    pub const ALL: [Self; 3] = [Self::Reset, Self::Easier, Self::Main];

    /// Wire name of the variant
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reset => "RESET",
            Self::Easier => "EASIER",
            Self::Main => "MAIN",
        }
    }
}

impl fmt::Display for PlanVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prescribed dose for one exercise instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDose {
    /// Number of sets (at least one)
    pub sets: u8,
    /// Repetitions per set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u16>,
    /// Seconds per set for timed work
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds: Option<u16>,
    /// Rest between sets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<u16>,
    /// Maximum rating of perceived exertion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpe_cap: Option<u8>,
}

/// One exercise placed in a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    /// Catalog id
    pub exercise_id: String,
    /// Display name
    pub name: String,
    /// Prescribed dose
    pub dose: WorkoutDose,
}

/// Named group of exercises serving one intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutBlock {
    /// Template key, e.g. `STRENGTH_PRIMARY`
    pub block_key: String,
    /// Display title
    pub title: String,
    /// Why this block exists
    pub intent: String,
    /// Ordered exercises
    pub exercises: Vec<WorkoutExercise>,
}

/// Human-readable account of how the plan was produced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explainability {
    /// One-line summary
    pub summary: String,
    /// Safety gate reasons
    pub safety_reasons: Vec<String>,
    /// Capacity drivers
    pub capacity_drivers: Vec<String>,
    /// Narrative sentence for the chosen variant
    pub plan_why: String,
    /// Every named constraint applied, deduplicated in first-seen order
    pub constraints_applied: Vec<String>,
    /// Top selection reasons
    pub selection_reasons: Vec<String>,
}

/// Generation metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanMeta {
    /// Rule-table version
    pub version: String,
    /// Generation timestamp, RFC 3339 UTC with milliseconds
    #[serde(rename = "generatedAtISO")]
    pub generated_at: String,
}

/// Full planner response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayPlanOutput {
    /// Day the plan is for
    #[serde(rename = "dateISO")]
    pub date: NaiveDate,
    /// Safety gate status
    pub safety_status: SafetyStatus,
    /// Chosen variant
    pub recommended_variant: PlanVariant,
    /// Capacity score, 0-100
    pub capacity_score: u8,
    /// Capacity band
    pub capacity_band: CapacityBand,
    /// Plan blocks
    pub blocks: Vec<WorkoutBlock>,
    /// Explanation
    pub explain: Explainability,
    /// Metadata
    pub meta: PlanMeta,
}

impl TodayPlanOutput {
    /// Iterate over every exercise in every block
    pub fn exercises(&self) -> impl Iterator<Item = &WorkoutExercise> {
        self.blocks.iter().flat_map(|block| block.exercises.iter())
    }
}
