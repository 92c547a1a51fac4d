// ABOUTME: Compact plan summary for history views and clinician dashboards
// ABOUTME: Condenses status, capacity, variant, marker snapshot, constraints, and top reasons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use oncorehab_core::models::{
    CapacityBand, LatestMarkers, MarkerKey, MarkerResult, PlanVariant, SafetyStatus,
    TodayPlanOutput,
};
use serde::{Deserialize, Serialize};

/// Marker results that informed the plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerSnapshot {
    /// Sit-to-stand result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sit_to_stand: Option<MarkerResult>,
    /// Supported march result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_march: Option<MarkerResult>,
    /// Shoulder raise result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shoulder_raise: Option<MarkerResult>,
}

/// One-glance view of a generated plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    /// Plan date
    #[serde(rename = "dateISO")]
    pub date: chrono::NaiveDate,
    /// Gate status
    pub safety_status: SafetyStatus,
    /// Capacity score
    pub capacity_score: u8,
    /// Capacity band
    pub capacity_band: CapacityBand,
    /// Variant chosen
    pub recommended_variant: PlanVariant,
    /// Total exercises across all blocks
    pub exercise_count: usize,
    /// Marker results used
    pub markers: MarkerSnapshot,
    /// Constraints applied
    pub constraints_applied: Vec<String>,
    /// Selection reasons, already capped by the plan's explain payload
    pub top_reasons: Vec<String>,
}

/// Summarize a plan, optionally with the marker results that fed it
#[must_use]
pub fn summarize_plan(plan: &TodayPlanOutput, latest: Option<&LatestMarkers>) -> PlanSummary {
    let marker = |key: MarkerKey| latest.and_then(|markers| markers.get(&key)).cloned();

    PlanSummary {
        date: plan.date,
        safety_status: plan.safety_status,
        capacity_score: plan.capacity_score,
        capacity_band: plan.capacity_band,
        recommended_variant: plan.recommended_variant,
        exercise_count: plan.exercises().count(),
        markers: MarkerSnapshot {
            sit_to_stand: marker(MarkerKey::SitToStand),
            supported_march: marker(MarkerKey::SupportedMarch),
            shoulder_raise: marker(MarkerKey::ShoulderRaise),
        },
        constraints_applied: plan.explain.constraints_applied.clone(),
        top_reasons: plan.explain.selection_reasons.clone(),
    }
}
