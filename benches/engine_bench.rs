// ABOUTME: Criterion benchmarks for the today-plan engine
// ABOUTME: Measures single-plan latency across catalog sizes and parallel batch throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the today-plan engine.
//!
//! Measures plan generation over synthetic catalogs of increasing size and
//! batch generation across many patients.

#![allow(clippy::missing_docs_in_private_items, clippy::unwrap_used, missing_docs)]

use chrono::{NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use oncorehab_planner::models::{
    BodyRegion, CheckinInput, Exercise, ExerciseBuilder, ExerciseType, IntensityTier, MarkerKey,
    MarkerRating, MarkerResult, MarkerSignals, SafetyProfile, TodayPlanRequest, TreatmentPhase,
    TreatmentTimeline, UserPreferences, UserProfile,
};
use oncorehab_planner::{FixedClock, RuleTables, TodayPlanEngine};

const TYPES: [ExerciseType; 3] = [
    ExerciseType::Breathing,
    ExerciseType::Mobility,
    ExerciseType::Strength,
];
const REGIONS: [BodyRegion; 3] = [BodyRegion::Upper, BodyRegion::Lower, BodyRegion::Core];
const TIERS: [IntensityTier; 3] = [
    IntensityTier::VeryLow,
    IntensityTier::Low,
    IntensityTier::Moderate,
];

/// Synthetic catalog with a handful of distinct movement patterns
fn generate_catalog(size: usize) -> Vec<Exercise> {
    (0..size)
        .map(|index| {
            ExerciseBuilder::new(format!("ex-{index}"), format!("Exercise {index}"))
                .exercise_type(TYPES[index % TYPES.len()])
                .region(REGIONS[index % REGIONS.len()])
                .intensity(TIERS[index % TIERS.len()])
                .pattern(format!("PATTERN_{}", index % 17))
                .lymph_safe(index % 2 == 0)
                .shoulder_safe(index % 3 != 0)
                .build()
        })
        .collect()
}

fn request_for(user_index: usize, exercises: Vec<Exercise>) -> TodayPlanRequest {
    let fatigue = u8::try_from(user_index % 8).unwrap();
    let pain = u8::try_from(user_index % 5).unwrap();
    let mut marker_signals = MarkerSignals::default();
    if user_index % 2 == 0 {
        marker_signals
            .latest
            .insert(MarkerKey::SitToStand, MarkerResult::rated(MarkerRating::Hard));
    }
    TodayPlanRequest {
        user: UserProfile {
            user_id: format!("bench-user-{user_index}"),
            safety: SafetyProfile::for_phase(TreatmentPhase::PostTreatment),
            preferences: UserPreferences::default(),
            treatment: TreatmentTimeline::default(),
        },
        checkin: CheckinInput::new(
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            fatigue,
            pain,
        ),
        exercises,
        marker_signals,
    }
}

fn engine() -> TodayPlanEngine<FixedClock> {
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 3, 1, 7, 0, 0).unwrap());
    TodayPlanEngine::with_clock(clock, RuleTables::default())
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let engine = engine();

    for size in [12_usize, 120, 1_200] {
        let request = request_for(2, generate_catalog(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("catalog", size), &request, |b, request| {
            b.iter(|| engine.generate(black_box(request)));
        });
    }

    group.finish();
}

fn bench_generate_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_batch");
    group.sample_size(30);
    let engine = engine();
    let catalog = generate_catalog(240);

    for patients in [10_usize, 100] {
        let requests: Vec<TodayPlanRequest> = (0..patients)
            .map(|index| request_for(index, catalog.clone()))
            .collect();
        group.throughput(Throughput::Elements(patients as u64));
        group.bench_with_input(
            BenchmarkId::new("patients", patients),
            &requests,
            |b, requests| {
                b.iter(|| engine.generate_batch(black_box(requests)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_generate, bench_generate_batch);
criterion_main!(benches);
