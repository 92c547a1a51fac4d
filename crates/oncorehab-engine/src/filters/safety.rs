// ABOUTME: Clinical safety filters applied to the catalog before selection
// ABOUTME: Phase, early stage, intensity, equipment, lymph, shoulder, and balance constraints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{catalog_order, FilterOutcome};
use crate::config::{EarlyStageWindow, FilterRules};
use crate::constraints;
use chrono::NaiveDate;
use oncorehab_core::models::{
    BalanceDemand, Equipment, Exercise, LymphLoadRisk, PlanVariant, RecoveryStage,
    TreatmentTimeline, UserProfile,
};
use tracing::debug;

/// Whether the patient is inside the early recovery window on `today`
///
/// Early means within `post_surgery_days` after surgery (inclusive, never
/// before it) or within the first `chemo_week_max` weeks of a chemo cycle.
#[must_use]
pub fn is_early_stage(
    treatment: &TreatmentTimeline,
    today: NaiveDate,
    window: &EarlyStageWindow,
) -> bool {
    let post_surgery = treatment.surgery_date.is_some_and(|surgery| {
        let days = (today - surgery).num_days();
        (0..=window.post_surgery_days).contains(&days)
    });
    let early_chemo = treatment
        .chemo_week
        .is_some_and(|week| (1..=window.chemo_week_max).contains(&week));
    post_surgery || early_chemo
}

/// Apply every clinical safety filter and order the survivors
///
/// Outside the early window the pool is ordered by recovery stage
/// (EARLY, MID, LATE, then ALL or unspecified); in every case ties fall back
/// to catalog order.
#[must_use]
pub fn apply_safety_filters<'a>(
    catalog: &'a [Exercise],
    user: &UserProfile,
    today: NaiveDate,
    variant: PlanVariant,
    rules: &FilterRules,
) -> FilterOutcome<'a> {
    let safety = &user.safety;
    let mut outcome = FilterOutcome::new(catalog.iter().collect());

    outcome.retain_tracked(constraints::PHASE_FILTER, |exercise| {
        exercise.phase.is_none_or(|phase| phase.admits(safety.phase))
    });

    let early = is_early_stage(&user.treatment, today, &rules.early_stage);
    if early {
        outcome.retain_tracked(constraints::EARLY_STAGE_FILTER, |exercise| {
            matches!(
                exercise.stage,
                None | Some(RecoveryStage::All | RecoveryStage::Early)
            )
        });
    }

    let caps = rules.intensity_caps.get(variant);
    outcome.retain_tracked(constraints::INTENSITY_CAP, |exercise| {
        exercise
            .intensity_tier
            .is_none_or(|tier| caps.contains(&tier))
    });

    let allowed_equipment = user
        .preferences
        .equipment_available
        .as_deref()
        .filter(|declared| !declared.is_empty())
        .unwrap_or(&rules.default_equipment);
    outcome.retain_tracked(constraints::EQUIPMENT_FILTER, |exercise| {
        exercise.equipment.is_none_or(|equipment| {
            equipment == Equipment::Bodyweight || allowed_equipment.contains(&equipment)
        })
    });

    if safety.lymph_load_risk == LymphLoadRisk::High {
        outcome.retain_tracked(constraints::LYMPH_SAFE_REQUIRED, |exercise| {
            exercise.lymph_safe
        });
    }

    if safety.post_op_shoulder_risk.is_at_risk() {
        outcome.retain_tracked(constraints::SHOULDER_SAFETY_FILTER, |exercise| {
            exercise.post_op_shoulder_safe
        });
    }

    if safety.neuropathy_risk.caps_balance() {
        outcome.retain_tracked(constraints::BALANCE_CAPPED, |exercise| {
            exercise.balance_demand != Some(BalanceDemand::High)
        });
    }

    if early {
        outcome.exercises.sort_by(|a, b| catalog_order(a, b));
    } else {
        outcome.exercises.sort_by(|a, b| {
            RecoveryStage::priority(a.stage)
                .cmp(&RecoveryStage::priority(b.stage))
                .then_with(|| catalog_order(a, b))
        });
    }

    debug!(
        remaining = outcome.exercises.len(),
        removed = catalog.len() - outcome.exercises.len(),
        early_stage = early,
        "Applied safety filters"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use oncorehab_core::models::{
        ExerciseBuilder, IntensityTier, NeuropathyRisk, PhaseApplicability, SafetyProfile,
        ShoulderRisk, TreatmentPhase, UserPreferences,
    };

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn user(safety: SafetyProfile) -> UserProfile {
        UserProfile {
            user_id: "u1".into(),
            safety,
            preferences: UserPreferences::default(),
            treatment: TreatmentTimeline::default(),
        }
    }

    fn ids(outcome: &FilterOutcome<'_>) -> Vec<String> {
        outcome.exercises.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn test_early_stage_window_boundaries() {
        let window = EarlyStageWindow::default();
        let mut timeline = TreatmentTimeline::default();
        assert!(!is_early_stage(&timeline, today(), &window));

        timeline.surgery_date = Some(today());
        assert!(is_early_stage(&timeline, today(), &window));

        timeline.surgery_date = today().checked_sub_days(Days::new(42));
        assert!(is_early_stage(&timeline, today(), &window));

        timeline.surgery_date = today().checked_sub_days(Days::new(43));
        assert!(!is_early_stage(&timeline, today(), &window));

        timeline.surgery_date = today().checked_add_days(Days::new(1));
        assert!(!is_early_stage(&timeline, today(), &window));

        timeline.surgery_date = None;
        timeline.chemo_week = Some(2);
        assert!(is_early_stage(&timeline, today(), &window));
        timeline.chemo_week = Some(0);
        assert!(!is_early_stage(&timeline, today(), &window));
    }

    #[test]
    fn test_high_intensity_never_survives() {
        let catalog = vec![
            ExerciseBuilder::new("hi", "Jump Squat")
                .intensity(IntensityTier::High)
                .build(),
            ExerciseBuilder::new("lo", "Seated March")
                .intensity(IntensityTier::Low)
                .build(),
        ];
        let profile = user(SafetyProfile::for_phase(TreatmentPhase::PostTreatment));
        for variant in PlanVariant::ALL {
            let outcome =
                apply_safety_filters(&catalog, &profile, today(), variant, &FilterRules::default());
            assert_eq!(ids(&outcome), vec!["lo"]);
            assert_eq!(outcome.constraints_applied, vec![constraints::INTENSITY_CAP]);
        }
    }

    #[test]
    fn test_constraint_only_reported_when_something_removed() {
        let catalog = vec![ExerciseBuilder::new("a", "Diaphragmatic Breathing").build()];
        let mut safety = SafetyProfile::for_phase(TreatmentPhase::InTreatment);
        safety.lymph_load_risk = LymphLoadRisk::High;
        safety.neuropathy_risk = NeuropathyRisk::High;
        let profile = user(safety);

        let outcome = apply_safety_filters(
            &catalog,
            &profile,
            today(),
            PlanVariant::Main,
            &FilterRules::default(),
        );
        assert_eq!(outcome.constraints_applied, vec![constraints::LYMPH_SAFE_REQUIRED]);
        assert!(outcome.exercises.is_empty());
    }

    #[test]
    fn test_phase_shoulder_and_balance_filters() {
        let catalog = vec![
            ExerciseBuilder::new("prehab", "Prehab Walk")
                .phase(PhaseApplicability::Prehab)
                .shoulder_safe(true)
                .build(),
            ExerciseBuilder::new("wall", "Wall Slide")
                .shoulder_safe(true)
                .build(),
            ExerciseBuilder::new("press", "Overhead Press").build(),
            ExerciseBuilder::new("balance", "Single Leg Stand")
                .shoulder_safe(true)
                .balance(BalanceDemand::High)
                .build(),
        ];
        let mut safety = SafetyProfile::for_phase(TreatmentPhase::PostTreatment);
        safety.post_op_shoulder_risk = ShoulderRisk::Left;
        safety.neuropathy_risk = NeuropathyRisk::Moderate;

        let outcome = apply_safety_filters(
            &catalog,
            &user(safety),
            today(),
            PlanVariant::Main,
            &FilterRules::default(),
        );
        assert_eq!(ids(&outcome), vec!["wall"]);
        assert_eq!(
            outcome.constraints_applied,
            vec![
                constraints::PHASE_FILTER,
                constraints::SHOULDER_SAFETY_FILTER,
                constraints::BALANCE_CAPPED
            ]
        );
    }

    #[test]
    fn test_equipment_defaults_and_declared_list() {
        let catalog = vec![
            ExerciseBuilder::new("band", "Band Row")
                .equipment(Equipment::Band)
                .build(),
            ExerciseBuilder::new("chair", "Chair Squat")
                .equipment(Equipment::Chair)
                .build(),
            ExerciseBuilder::new("free", "Breathing")
                .equipment(Equipment::Bodyweight)
                .build(),
        ];
        let rules = FilterRules::default();
        let mut profile = user(SafetyProfile::for_phase(TreatmentPhase::PostTreatment));

        let outcome = apply_safety_filters(&catalog, &profile, today(), PlanVariant::Main, &rules);
        assert_eq!(ids(&outcome), vec!["free", "chair"]);

        profile.preferences.equipment_available = Some(vec![Equipment::Band]);
        let outcome = apply_safety_filters(&catalog, &profile, today(), PlanVariant::Main, &rules);
        assert_eq!(ids(&outcome), vec!["band", "free"]);
    }

    #[test]
    fn test_early_stage_drops_later_stages_and_orders_by_name() {
        let catalog = vec![
            ExerciseBuilder::new("late", "Alpha Lunge")
                .stage(RecoveryStage::Late)
                .build(),
            ExerciseBuilder::new("b", "Breathing")
                .stage(RecoveryStage::Early)
                .build(),
            ExerciseBuilder::new("a", "Ankle Pumps").build(),
        ];
        let mut profile = user(SafetyProfile::for_phase(TreatmentPhase::PostTreatment));
        profile.treatment.surgery_date = today().checked_sub_days(Days::new(10));

        let outcome = apply_safety_filters(
            &catalog,
            &profile,
            today(),
            PlanVariant::Reset,
            &FilterRules::default(),
        );
        assert_eq!(ids(&outcome), vec!["a", "b"]);
        assert_eq!(outcome.constraints_applied, vec![constraints::EARLY_STAGE_FILTER]);
    }

    #[test]
    fn test_stage_priority_ordering_outside_early_window() {
        let catalog = vec![
            ExerciseBuilder::new("all", "Aardvark Stretch").build(),
            ExerciseBuilder::new("late", "Banded Row")
                .stage(RecoveryStage::Late)
                .build(),
            ExerciseBuilder::new("early", "Zebra Breathing")
                .stage(RecoveryStage::Early)
                .build(),
        ];
        let profile = user(SafetyProfile::for_phase(TreatmentPhase::PostTreatment));
        let outcome = apply_safety_filters(
            &catalog,
            &profile,
            today(),
            PlanVariant::Main,
            &FilterRules::default(),
        );
        assert_eq!(ids(&outcome), vec!["early", "late", "all"]);
    }
}
