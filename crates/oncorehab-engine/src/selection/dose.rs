// ABOUTME: Dose assignment for selected exercises
// ABOUTME: Variant doses for ordinary blocks, a fixed single-set dose for marker checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::DoseRules;
use oncorehab_core::models::{PlanVariant, WorkoutDose};

/// Dose for ordinary blocks in `variant`
#[must_use]
pub fn variant_dose(variant: PlanVariant, rules: &DoseRules) -> WorkoutDose {
    (*rules.variants.get(variant)).into()
}

/// Dose for marker check blocks
#[must_use]
pub fn marker_check_dose(rules: &DoseRules) -> WorkoutDose {
    rules.marker_check.into()
}

/// Drop one set, never below one
#[must_use]
pub const fn reduce_sets(dose: WorkoutDose) -> WorkoutDose {
    WorkoutDose {
        sets: if dose.sets > 1 { dose.sets - 1 } else { 1 },
        ..dose
    }
}
