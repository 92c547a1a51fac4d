// ABOUTME: Severe-pain filter removing strength and high-intensity exercises
// ABOUTME: Applies only when reported pain meets the configured severe threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::FilterOutcome;
use crate::constraints;
use oncorehab_core::models::{Exercise, ExerciseType, IntensityTier};

/// Remove STRENGTH and HIGH intensity work when `pain >= severe_pain_gte`
#[must_use]
pub fn apply_pain_filter(
    pool: Vec<&Exercise>,
    pain: u8,
    severe_pain_gte: u8,
) -> FilterOutcome<'_> {
    let mut outcome = FilterOutcome::new(pool);
    if pain >= severe_pain_gte {
        outcome.retain_tracked(constraints::HIGH_PAIN_FILTER, |exercise| {
            !exercise.is_type(ExerciseType::Strength)
                && exercise.intensity_tier != Some(IntensityTier::High)
        });
    }
    outcome
}
