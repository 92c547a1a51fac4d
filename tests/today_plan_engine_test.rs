// ABOUTME: Integration tests for the today-plan decision pipeline
// ABOUTME: Covers determinism, safety dominance, pain and lymph exclusion, diversity, and fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    fixed_engine, has_repeated_pattern, reference_catalog, request, request_with_catalog, selected,
};
use oncorehab_planner::constraints;
use oncorehab_planner::models::{
    CapacityBand, ExerciseBuilder, ExerciseType, IntensityTier, LymphLoadRisk, NeuropathyRisk,
    PlanVariant, RecoveryStage, RedFlag, SafetyStatus,
};

#[test]
fn test_identical_requests_produce_identical_json() {
    let engine = fixed_engine();
    let req = request(3, 2);

    let first = serde_json::to_string(&engine.generate(&req)).unwrap();
    let second = serde_json::to_string(&engine.generate(&req)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_moderate_day_builds_main_plan() {
    let plan = fixed_engine().generate(&request(3, 2));

    assert_eq!(plan.safety_status, SafetyStatus::Green);
    assert_eq!(plan.capacity_score, 77);
    assert_eq!(plan.capacity_band, CapacityBand::High);
    assert_eq!(plan.recommended_variant, PlanVariant::Main);

    let keys: Vec<&str> = plan.blocks.iter().map(|b| b.block_key.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "WARM_IN",
            "MARKER_SIT_TO_STAND",
            "MARKER_SUPPORTED_MARCH",
            "MOBILITY",
            "STRENGTH_PRIMARY",
            "COOLDOWN"
        ]
    );

    let ids: Vec<&str> = plan.exercises().map(|e| e.exercise_id.as_str()).collect();
    assert_eq!(ids, vec!["b1", "s1", "mm", "m1", "m2", "s2", "s3", "b2"]);

    assert_eq!(
        plan.explain.constraints_applied,
        vec![constraints::INTENSITY_CAP, constraints::EQUIPMENT_FILTER]
    );
    assert_eq!(plan.explain.summary, "Plan MAIN, capacity 77");
    assert_eq!(
        plan.explain.capacity_drivers,
        vec!["Fatigue influenced capacity", "Pain influenced capacity"]
    );
    assert!(plan.explain.selection_reasons.len() <= 3);
}

#[test]
fn test_symptom_free_day_still_lists_supplied_drivers() {
    let mut req = request(0, 0);
    req.checkin.sleep = Some(0);
    let plan = fixed_engine().generate(&req);

    assert_eq!(plan.capacity_score, 100);
    assert_eq!(
        plan.explain.capacity_drivers,
        vec![
            "Fatigue influenced capacity",
            "Pain influenced capacity",
            "Sleep influenced capacity"
        ]
    );
}

#[test]
fn test_red_flag_dominates_high_capacity() {
    for flag in RedFlag::ALL {
        let mut req = request(0, 0);
        req.checkin.red_flags.insert(flag, true);
        let plan = fixed_engine().generate(&req);

        assert_eq!(plan.safety_status, SafetyStatus::Red);
        assert_eq!(plan.recommended_variant, PlanVariant::Reset);
        assert_eq!(plan.capacity_band, CapacityBand::High);
        assert!(plan
            .explain
            .safety_reasons
            .iter()
            .any(|reason| reason.contains(flag.as_str())));
    }
}

#[test]
fn test_red_flag_reset_plan_uses_gentle_blocks() {
    let mut req = request(3, 2);
    req.checkin.red_flags.insert(RedFlag::ChestPain, true);
    let plan = fixed_engine().generate(&req);

    let keys: Vec<&str> = plan.blocks.iter().map(|b| b.block_key.as_str()).collect();
    assert_eq!(keys, vec!["BREATH_RESET", "MOBILITY_GENTLE", "COOLDOWN"]);
    assert_eq!(
        plan.explain.plan_why,
        "Recovery-focused based on safety and symptoms."
    );
    for exercise in plan.exercises() {
        assert_eq!(exercise.dose.sets, 1);
        assert!(exercise.dose.seconds.is_some());
    }
}

#[test]
fn test_severe_pain_excludes_strength_and_high_intensity() {
    for pain in 7..=10 {
        let catalog = reference_catalog();
        let plan = fixed_engine().generate(&request(2, pain));

        for exercise in selected(&plan, &catalog) {
            assert!(!exercise.is_type(ExerciseType::Strength), "{}", exercise.id);
            assert_ne!(exercise.intensity_tier, Some(IntensityTier::High));
        }
        assert!(plan
            .explain
            .constraints_applied
            .contains(&constraints::HIGH_PAIN_FILTER.to_owned()));
    }
}

#[test]
fn test_high_lymph_risk_selects_only_lymph_safe() {
    let catalog = reference_catalog();
    let mut req = request(3, 2);
    req.user.safety.lymph_load_risk = LymphLoadRisk::High;
    let plan = fixed_engine().generate(&req);

    assert!(!plan.blocks.is_empty());
    for exercise in selected(&plan, &catalog) {
        assert!(exercise.lymph_safe, "{} is not lymph-safe", exercise.id);
    }
    assert!(plan
        .explain
        .constraints_applied
        .contains(&constraints::LYMPH_SAFE_REQUIRED.to_owned()));
}

#[test]
fn test_neuropathy_caps_balance_demand() {
    let mut req = request(3, 2);
    req.user.safety.neuropathy_risk = NeuropathyRisk::Moderate;
    let plan = fixed_engine().generate(&req);

    assert!(plan.exercises().all(|e| e.exercise_id != "hb"));
    assert!(plan
        .explain
        .constraints_applied
        .contains(&constraints::BALANCE_CAPPED.to_owned()));
}

#[test]
fn test_patterns_only_repeat_when_flagged() {
    let catalog = reference_catalog();
    for (fatigue, pain) in [(0, 0), (3, 2), (5, 4), (8, 3), (2, 8)] {
        let plan = fixed_engine().generate(&request_with_catalog(fatigue, pain, catalog.clone()));
        let flagged = plan
            .explain
            .constraints_applied
            .contains(&constraints::PATTERN_REPEATED.to_owned());
        assert!(!has_repeated_pattern(&plan, &catalog) || flagged);
    }
}

#[test]
fn test_small_pool_repeats_pattern_and_flags_it() {
    let catalog = vec![
        ExerciseBuilder::new("a", "Arm Circles Forward")
            .exercise_type(ExerciseType::Mobility)
            .pattern("ARM_CIRCLE")
            .build(),
        ExerciseBuilder::new("b", "Arm Circles Backward")
            .exercise_type(ExerciseType::Mobility)
            .pattern("ARM_CIRCLE")
            .build(),
    ];
    let plan = fixed_engine().generate(&request_with_catalog(3, 2, catalog.clone()));

    assert!(has_repeated_pattern(&plan, &catalog));
    assert!(plan
        .explain
        .constraints_applied
        .contains(&constraints::PATTERN_REPEATED.to_owned()));
}

#[test]
fn test_strength_only_catalog_with_severe_pain_falls_back() {
    let catalog = vec![
        ExerciseBuilder::new("sq", "Goblet Squat")
            .exercise_type(ExerciseType::Strength)
            .intensity(IntensityTier::Moderate)
            .build(),
        ExerciseBuilder::new("jj", "Jumping Jacks")
            .exercise_type(ExerciseType::Mobility)
            .intensity(IntensityTier::High)
            .build(),
        ExerciseBuilder::new("dl", "Deadlift")
            .exercise_type(ExerciseType::Strength)
            .intensity(IntensityTier::High)
            .build(),
    ];
    let plan = fixed_engine().generate(&request_with_catalog(3, 8, catalog));

    assert_eq!(plan.recommended_variant, PlanVariant::Reset);
    assert!(plan.blocks.is_empty());
    assert_eq!(plan.explain.plan_why, constraints::INSUFFICIENT_EXERCISES);
    assert!(plan
        .explain
        .constraints_applied
        .contains(&constraints::INSUFFICIENT_EXERCISES.to_owned()));
}

#[test]
fn test_untyped_catalog_keeps_variant_with_no_blocks() {
    let catalog = vec![ExerciseBuilder::new("x", "Mystery Move").build()];
    let plan = fixed_engine().generate(&request_with_catalog(1, 1, catalog));

    assert_eq!(plan.recommended_variant, PlanVariant::Main);
    assert!(plan.blocks.is_empty());
    assert_ne!(plan.explain.plan_why, constraints::INSUFFICIENT_EXERCISES);
    assert_eq!(plan.explain.summary, format!("Plan MAIN, capacity {}", plan.capacity_score));
    assert!(plan
        .explain
        .constraints_applied
        .contains(&constraints::NO_MATCHING_BLOCKS.to_owned()));
    assert!(!plan
        .explain
        .constraints_applied
        .contains(&constraints::INSUFFICIENT_EXERCISES.to_owned()));
}

#[test]
fn test_early_recovery_keeps_only_early_stage_work() {
    let mut catalog = reference_catalog();
    catalog.push(
        ExerciseBuilder::new("late", "Aardvark Crawl")
            .exercise_type(ExerciseType::Mobility)
            .intensity(IntensityTier::Low)
            .stage(RecoveryStage::Late)
            .build(),
    );
    let mut req = request_with_catalog(1, 1, catalog);
    req.user.treatment.surgery_date = common::today().pred_opt();
    let plan = fixed_engine().generate(&req);

    assert!(plan.exercises().all(|e| e.exercise_id != "late"));
    assert!(plan
        .explain
        .constraints_applied
        .contains(&constraints::EARLY_STAGE_FILTER.to_owned()));
}

#[test]
fn test_batch_matches_sequential_generation() {
    let engine = fixed_engine();
    let requests: Vec<_> = (0..=10).map(|level| request(level, 10 - level)).collect();

    let batch = engine.generate_batch(&requests);
    let sequential: Vec<_> = requests.iter().map(|r| engine.generate(r)).collect();
    assert_eq!(batch, sequential);
}
