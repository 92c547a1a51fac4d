// ABOUTME: Shared test utilities and fixtures for planner integration tests
// ABOUTME: Provides quiet logging, a fixed clock, a reference catalog, and request builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `oncorehab_planner`

use chrono::{NaiveDate, TimeZone, Utc};
use oncorehab_planner::models::{
    BalanceDemand, BodyRegion, CheckinInput, Equipment, Exercise, ExerciseBuilder, ExerciseType,
    IntensityTier, MarkerKey, MarkerResult, MarkerSignals, SafetyProfile, TodayPlanOutput,
    TodayPlanRequest, TreatmentPhase, TreatmentTimeline, UserPreferences, UserProfile,
};
use oncorehab_planner::{FixedClock, RuleTables, TodayPlanEngine, TodayPlanService};
use std::collections::HashSet;
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls verbosity; default to WARN for quiet tests
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Check-in date used by every fixture
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

/// Clock frozen at 2025-03-01T07:00:00Z
pub fn fixed_clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2025, 3, 1, 7, 0, 0).unwrap())
}

/// Engine with default rules and a frozen clock
pub fn fixed_engine() -> TodayPlanEngine<FixedClock> {
    init_test_logging();
    TodayPlanEngine::with_clock(fixed_clock(), RuleTables::default())
}

/// Service with default rules and a frozen clock
pub fn fixed_service() -> TodayPlanService<FixedClock> {
    TodayPlanService::new(fixed_engine())
}

fn safe(builder: ExerciseBuilder) -> ExerciseBuilder {
    builder.lymph_safe(true).shoulder_safe(true)
}

/// Reference catalog spanning every modality, region and risk flag
pub fn reference_catalog() -> Vec<Exercise> {
    vec![
        safe(ExerciseBuilder::new("b1", "Box Breathing"))
            .exercise_type(ExerciseType::Breathing)
            .region(BodyRegion::Core)
            .intensity(IntensityTier::VeryLow)
            .equipment(Equipment::Bodyweight)
            .pattern("BREATH_HOLD")
            .build(),
        safe(ExerciseBuilder::new("b2", "Diaphragmatic Breathing"))
            .exercise_type(ExerciseType::Breathing)
            .region(BodyRegion::Core)
            .intensity(IntensityTier::VeryLow)
            .equipment(Equipment::Bodyweight)
            .pattern("DIAPHRAGM")
            .build(),
        safe(ExerciseBuilder::new("m1", "Cat Cow"))
            .exercise_type(ExerciseType::Mobility)
            .region(BodyRegion::Core)
            .intensity(IntensityTier::Low)
            .pattern("SPINAL_FLEXION")
            .build(),
        safe(ExerciseBuilder::new("m2", "Seated Hip Circles"))
            .exercise_type(ExerciseType::Mobility)
            .region(BodyRegion::Lower)
            .intensity(IntensityTier::Low)
            .equipment(Equipment::Chair)
            .pattern("HIP_CIRCLE")
            .build(),
        safe(ExerciseBuilder::new("m3", "Wall Slide"))
            .exercise_type(ExerciseType::Mobility)
            .region(BodyRegion::Upper)
            .intensity(IntensityTier::Low)
            .pattern("WALL_SLIDE")
            .tag("MARKER_SHOULDER_RAISE")
            .build(),
        safe(ExerciseBuilder::new("mm", "Supported March"))
            .exercise_type(ExerciseType::Mobility)
            .region(BodyRegion::Lower)
            .intensity(IntensityTier::Low)
            .equipment(Equipment::Chair)
            .balance(BalanceDemand::Low)
            .pattern("SUPPORTED_MARCH")
            .tag("MARKER_SUPPORTED_MARCH")
            .build(),
        ExerciseBuilder::new("hb", "Single Leg Balance Reach")
            .exercise_type(ExerciseType::Mobility)
            .region(BodyRegion::Lower)
            .intensity(IntensityTier::Moderate)
            .balance(BalanceDemand::High)
            .pattern("SINGLE_LEG_BALANCE")
            .lymph_safe(true)
            .build(),
        safe(ExerciseBuilder::new("s1", "Chair Sit to Stand"))
            .exercise_type(ExerciseType::Strength)
            .region(BodyRegion::Lower)
            .intensity(IntensityTier::Moderate)
            .equipment(Equipment::Chair)
            .pattern("SQUAT")
            .tag("MARKER_SIT_TO_STAND")
            .build(),
        safe(ExerciseBuilder::new("s2", "Glute Bridge"))
            .exercise_type(ExerciseType::Strength)
            .region(BodyRegion::Lower)
            .intensity(IntensityTier::Low)
            .pattern("BRIDGE")
            .build(),
        ExerciseBuilder::new("s3", "Wall Push")
            .exercise_type(ExerciseType::Strength)
            .region(BodyRegion::Upper)
            .intensity(IntensityTier::Moderate)
            .pattern("PUSH")
            .build(),
        safe(ExerciseBuilder::new("s4", "Band Row"))
            .exercise_type(ExerciseType::Strength)
            .region(BodyRegion::Upper)
            .intensity(IntensityTier::Moderate)
            .equipment(Equipment::Band)
            .pattern("ROW")
            .build(),
        ExerciseBuilder::new("jump", "Jump Squat")
            .exercise_type(ExerciseType::Strength)
            .region(BodyRegion::Lower)
            .intensity(IntensityTier::High)
            .pattern("SQUAT")
            .build(),
    ]
}

/// Post-treatment user with default risks
pub fn user() -> UserProfile {
    UserProfile {
        user_id: "test-user".into(),
        safety: SafetyProfile::for_phase(TreatmentPhase::PostTreatment),
        preferences: UserPreferences::default(),
        treatment: TreatmentTimeline::default(),
    }
}

/// Request over the reference catalog with the given symptoms
pub fn request(fatigue: u8, pain: u8) -> TodayPlanRequest {
    request_with_catalog(fatigue, pain, reference_catalog())
}

/// Request with an explicit catalog
pub fn request_with_catalog(fatigue: u8, pain: u8, exercises: Vec<Exercise>) -> TodayPlanRequest {
    TodayPlanRequest {
        user: user(),
        checkin: CheckinInput::new(today(), fatigue, pain),
        exercises,
        marker_signals: MarkerSignals::default(),
    }
}

/// Attach a marker result to a request
pub fn with_marker(
    mut request: TodayPlanRequest,
    key: MarkerKey,
    result: MarkerResult,
) -> TodayPlanRequest {
    request.marker_signals.latest.insert(key, result);
    request
}

/// Catalog entries selected into a plan
pub fn selected<'a>(plan: &TodayPlanOutput, catalog: &'a [Exercise]) -> Vec<&'a Exercise> {
    plan.exercises()
        .map(|picked| {
            catalog
                .iter()
                .find(|exercise| exercise.id == picked.exercise_id)
                .unwrap()
        })
        .collect()
}

/// Whether any movement pattern appears more than once in a plan
pub fn has_repeated_pattern(plan: &TodayPlanOutput, catalog: &[Exercise]) -> bool {
    let mut seen = HashSet::new();
    selected(plan, catalog)
        .into_iter()
        .map(Exercise::pattern_str)
        .filter(|pattern| !pattern.is_empty())
        .any(|pattern| !seen.insert(pattern))
}
