// ABOUTME: Two-pass exercise selection filling marker blocks first, then ordinary blocks
// ABOUTME: Enforces id uniqueness and pattern diversity, records selection and marker reasons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::blocks::BlockKind;
use super::dose::{marker_check_dose, reduce_sets, variant_dose};
use super::scoring::{score_exercise, BlockFocus, MarkerAdjustments, ScoringContext};
use crate::config::{BlockTemplate, DoseRules};
use crate::constraints;
use crate::filters::catalog_order;
use oncorehab_core::models::{
    Exercise, MarkerKey, MarkerSide, WorkoutBlock, WorkoutDose, WorkoutExercise,
};
use std::collections::HashSet;
use tracing::debug;

/// Inputs to block filling
#[derive(Debug, Clone, Copy)]
pub struct SelectionInput<'a> {
    /// Resolved blocks in template order
    pub blocks: &'a [&'a BlockTemplate],
    /// Filtered, ordered pool
    pub pool: &'a [&'a Exercise],
    /// Scoring context for ordinary blocks
    pub scoring: ScoringContext<'a>,
    /// Dose caps
    pub doses: &'a DoseRules,
    /// Cap on generic type/region reasons
    pub max_selection_reasons: usize,
}

/// Filled blocks with the reasons behind them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionResult {
    /// Non-empty blocks in template order
    pub blocks: Vec<WorkoutBlock>,
    /// Marker reasons first, then generic match reasons
    pub selection_reasons: Vec<String>,
    /// Constraints raised during selection
    pub constraints_applied: Vec<String>,
}

/// Ids and movement patterns already placed in the plan
#[derive(Debug, Default)]
struct UsageTracker<'a> {
    ids: HashSet<&'a str>,
    patterns: HashSet<&'a str>,
}

impl<'a> UsageTracker<'a> {
    fn is_used(&self, exercise: &Exercise) -> bool {
        self.ids.contains(exercise.id.as_str())
    }

    fn repeats_pattern(&self, exercise: &Exercise) -> bool {
        let pattern = exercise.pattern_str();
        !pattern.is_empty() && self.patterns.contains(pattern)
    }

    fn register(&mut self, exercise: &'a Exercise) {
        self.ids.insert(exercise.id.as_str());
        let pattern = exercise.pattern_str();
        if !pattern.is_empty() {
            self.patterns.insert(pattern);
        }
    }
}

/// Fill every block from the pool
#[must_use]
pub fn select_exercises(input: &SelectionInput<'_>) -> SelectionResult {
    let mut usage = UsageTracker::default();
    let mut picks: Vec<Vec<WorkoutExercise>> = vec![Vec::new(); input.blocks.len()];
    let mut generic_reasons = Vec::new();
    let mut constraints_applied = Vec::new();

    let marker_dose = marker_check_dose(input.doses);
    for (slot, template) in input.blocks.iter().enumerate() {
        if let BlockKind::Marker(marker) = BlockKind::of(template) {
            if let Some(exercise) = pick_marker(input.pool, marker, &usage) {
                if usage.repeats_pattern(exercise) {
                    constraints_applied.push(constraints::PATTERN_REPEATED.to_owned());
                }
                usage.register(exercise);
                picks[slot].push(workout_exercise(exercise, marker_dose));
            }
        }
    }

    let markers = input.scoring.markers;
    let base_dose = variant_dose(input.scoring.variant, input.doses);
    for (slot, template) in input.blocks.iter().enumerate() {
        let BlockKind::Focus(focus) = BlockKind::of(template) else {
            continue;
        };
        let dose = if focus == BlockFocus::Strength && markers.sit_to_stand_limited {
            reduce_sets(base_dose)
        } else {
            base_dose
        };

        let filled = fill_block(input, template, focus, &mut usage);
        if filled.repeated_pattern {
            constraints_applied.push(constraints::PATTERN_REPEATED.to_owned());
        }
        for exercise in filled.exercises {
            if generic_reasons.len() < input.max_selection_reasons {
                if let Some(reason) = match_reason(exercise, focus, &input.scoring) {
                    generic_reasons.push(reason);
                }
            }
            picks[slot].push(workout_exercise(exercise, dose));
        }
    }

    let marker_reasons = marker_reasons(markers);
    if !marker_reasons.is_empty() {
        constraints_applied.push(constraints::MARKER_ADAPTATION.to_owned());
    }

    let blocks: Vec<WorkoutBlock> = input
        .blocks
        .iter()
        .zip(picks)
        .filter(|(_, exercises)| !exercises.is_empty())
        .map(|(template, exercises)| WorkoutBlock {
            block_key: template.block_key.clone(),
            title: template.title.clone(),
            intent: template.intent.clone(),
            exercises,
        })
        .collect();

    debug!(
        blocks = blocks.len(),
        requested_blocks = input.blocks.len(),
        marker_adapted = markers.any(),
        "Selected exercises"
    );

    SelectionResult {
        blocks,
        selection_reasons: marker_reasons.into_iter().chain(generic_reasons).collect(),
        constraints_applied,
    }
}

struct FilledBlock<'a> {
    exercises: Vec<&'a Exercise>,
    repeated_pattern: bool,
}

/// Rank candidates for one block and take up to `count`, preferring new patterns
///
/// Marker penalties only push a candidate down the ranking; a penalized
/// exercise still fills a slot when nothing better is left.
fn fill_block<'a>(
    input: &SelectionInput<'a>,
    template: &BlockTemplate,
    focus: BlockFocus,
    usage: &mut UsageTracker<'a>,
) -> FilledBlock<'a> {
    let desired = focus.desired_type();
    let mut candidates: Vec<(i32, &'a Exercise)> = input
        .pool
        .iter()
        .copied()
        .filter(|exercise| focus.admits(exercise))
        .map(|exercise| (score_exercise(exercise, desired, &input.scoring), exercise))
        .collect();
    candidates.sort_by(|(score_a, a), (score_b, b)| {
        score_b.cmp(score_a).then_with(|| catalog_order(a, b))
    });

    let mut selected = Vec::with_capacity(template.count);
    for &(_, exercise) in &candidates {
        if selected.len() >= template.count {
            break;
        }
        if usage.is_used(exercise) || usage.repeats_pattern(exercise) {
            continue;
        }
        usage.register(exercise);
        selected.push(exercise);
    }

    let mut repeated_pattern = false;
    for &(_, exercise) in &candidates {
        if selected.len() >= template.count {
            break;
        }
        if usage.is_used(exercise) {
            continue;
        }
        usage.register(exercise);
        selected.push(exercise);
        repeated_pattern = true;
    }

    FilledBlock {
        exercises: selected,
        repeated_pattern,
    }
}

/// Best tagged exercise for a marker, else the best name match
fn pick_marker<'a>(
    pool: &[&'a Exercise],
    marker: MarkerKey,
    usage: &UsageTracker<'_>,
) -> Option<&'a Exercise> {
    let available: Vec<&'a Exercise> = pool
        .iter()
        .copied()
        .filter(|exercise| !usage.is_used(exercise))
        .collect();

    available
        .iter()
        .copied()
        .filter(|exercise| exercise.has_tag(marker.tag()))
        .min_by(|a, b| catalog_order(a, b))
        .or_else(|| {
            available
                .iter()
                .copied()
                .filter(|exercise| name_matches(&exercise.name, marker.name_hints()))
                .min_by(|a, b| catalog_order(a, b))
        })
}

fn name_matches(name: &str, hints: &[&str]) -> bool {
    let normalized = name.to_uppercase().replace(['-', '_'], " ");
    hints.iter().any(|hint| normalized.contains(hint))
}

fn workout_exercise(exercise: &Exercise, dose: WorkoutDose) -> WorkoutExercise {
    WorkoutExercise {
        exercise_id: exercise.id.clone(),
        name: exercise.name.clone(),
        dose,
    }
}

/// "Type match: X, Region match: Y" for whichever parts applied
fn match_reason(
    exercise: &Exercise,
    focus: BlockFocus,
    ctx: &ScoringContext<'_>,
) -> Option<String> {
    let mut parts = Vec::new();
    if exercise.is_type(focus.desired_type()) {
        parts.push(format!("Type match: {}", focus.desired_type().as_str()));
    }
    if let Some(region) = exercise
        .region
        .filter(|region| ctx.region_targets.contains(region))
    {
        parts.push(format!("Region match: {}", region.as_str()));
    }
    (!parts.is_empty()).then(|| parts.join(", "))
}

fn marker_reasons(markers: &MarkerAdjustments) -> Vec<String> {
    let mut reasons = Vec::new();
    if markers.sit_to_stand_limited {
        reasons.push("Lower-body load adjusted based on comfortable reps today.".to_owned());
    }
    if markers.progression_allowed {
        reasons.push("Strength progression allowed based on comfortable tolerance.".to_owned());
    }
    if markers.march_hard {
        if let Some(side) = markers.march_side {
            reasons.push(match side {
                MarkerSide::Both => "Extra support for both sides today.".to_owned(),
                _ => format!("Extra support for {} side today.", side.label()),
            });
        }
        reasons.push(
            "Prioritised supported balance work due to march marker feedback.".to_owned(),
        );
    }
    if markers.shoulder_hard {
        reasons.push("Reduced shoulder loading after marker move felt HARD.".to_owned());
    }
    reasons
}
