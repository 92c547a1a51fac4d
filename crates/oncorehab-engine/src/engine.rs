// ABOUTME: Today-plan engine orchestrating the full decision pipeline
// ABOUTME: Gate, capacity, variant, filters, selection, and explanation with an injected clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::capacity::{compute_capacity, CapacityResult};
use crate::clock::{Clock, SystemClock};
use crate::config::RuleTables;
use crate::constraints;
use crate::explain::build_explainability;
use crate::filters::{apply_pain_filter, apply_safety_filters};
use crate::safety_gate::{evaluate_safety_gate, SafetyGateResult};
use crate::selection::{
    needs_shoulder_marker, region_targets, resolve_blocks, select_exercises, MarkerAdjustments,
    ScoringContext, SelectionInput,
};
use crate::variant::resolve_variant;
use chrono::{NaiveDate, SecondsFormat};
use oncorehab_core::models::{PlanMeta, PlanVariant, TodayPlanOutput, TodayPlanRequest};
use rayon::prelude::*;
use tracing::{debug, info, info_span};

/// Deterministic daily plan engine
///
/// Holds only immutable rule tables and a clock, so one engine can serve
/// any number of requests concurrently.
#[derive(Debug, Clone)]
pub struct TodayPlanEngine<C: Clock = SystemClock> {
    clock: C,
    rules: RuleTables,
}

impl Default for TodayPlanEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TodayPlanEngine {
    /// Create an engine with the global rule tables and the system clock
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(RuleTables::global().clone())
    }

    /// Create an engine with explicit rule tables and the system clock
    #[must_use]
    pub const fn with_rules(rules: RuleTables) -> Self {
        Self {
            clock: SystemClock,
            rules,
        }
    }
}

impl<C: Clock> TodayPlanEngine<C> {
    /// Create an engine with explicit rule tables and clock
    #[must_use]
    pub const fn with_clock(clock: C, rules: RuleTables) -> Self {
        Self { clock, rules }
    }

    /// Rule tables in use
    #[must_use]
    pub const fn rules(&self) -> &RuleTables {
        &self.rules
    }

    /// Generate today's plan
    ///
    /// The request is assumed to have passed
    /// [`validate_request`](crate::validation::validate_request). Every
    /// outcome, including an empty safe pool, is a plan.
    #[must_use]
    pub fn generate(&self, request: &TodayPlanRequest) -> TodayPlanOutput {
        let span = info_span!(
            "today_plan",
            user_id = %request.user.user_id,
            date = %request.checkin.date
        );
        let _guard = span.enter();

        let rules = &self.rules;
        let checkin = &request.checkin;

        let gate = evaluate_safety_gate(checkin, &rules.safety);
        let capacity = compute_capacity(checkin, &rules.capacity);
        let variant = resolve_variant(gate.status, capacity.band);
        debug!(
            status = ?gate.status,
            score = capacity.score,
            band = ?capacity.band,
            variant = %variant,
            "Resolved safety, capacity and variant"
        );

        let safety = apply_safety_filters(
            &request.exercises,
            &request.user,
            checkin.date,
            variant,
            &rules.filters,
        );
        let mut constraints_applied = safety.constraints_applied;
        let pain = apply_pain_filter(safety.exercises, checkin.pain, rules.filters.severe_pain_gte);
        constraints_applied.extend(pain.constraints_applied);
        let pool = pain.exercises;

        if pool.is_empty() {
            info!("No safe exercises remain after filtering");
            return self.insufficient_plan(checkin.date, &gate, &capacity, constraints_applied);
        }

        let templates = rules.templates.get(variant);
        let blocks = resolve_blocks(templates, needs_shoulder_marker(&request.user, checkin));
        let markers = MarkerAdjustments::from_latest(
            &request.marker_signals.latest,
            &rules.selection.sit_to_stand,
        );
        let regions = region_targets(&checkin.pain_locations);

        let selection = select_exercises(&SelectionInput {
            blocks: &blocks,
            pool: &pool,
            scoring: ScoringContext {
                variant,
                region_targets: &regions,
                markers: &markers,
                weights: &rules.selection.weights,
                adjustments: &rules.selection.marker_adjustments,
            },
            doses: &rules.doses,
            max_selection_reasons: rules.selection.max_selection_reasons,
        });
        constraints_applied.extend(selection.constraints_applied);

        if selection.blocks.is_empty() {
            info!(pool = pool.len(), "No block matched the safe pool");
            constraints_applied.push(constraints::NO_MATCHING_BLOCKS.to_owned());
        }

        let explain = build_explainability(
            variant,
            &gate,
            &capacity,
            &constraints_applied,
            &selection.selection_reasons,
            rules.selection.max_selection_reasons,
        );

        info!(
            variant = %variant,
            blocks = selection.blocks.len(),
            "Generated today plan"
        );

        TodayPlanOutput {
            date: checkin.date,
            safety_status: gate.status,
            recommended_variant: variant,
            capacity_score: capacity.score,
            capacity_band: capacity.band,
            blocks: selection.blocks,
            explain,
            meta: self.meta(),
        }
    }

    /// Generate plans for many requests in parallel, preserving input order
    #[must_use]
    pub fn generate_batch(&self, requests: &[TodayPlanRequest]) -> Vec<TodayPlanOutput> {
        requests
            .par_iter()
            .map(|request| self.generate(request))
            .collect()
    }

    fn insufficient_plan(
        &self,
        date: NaiveDate,
        gate: &SafetyGateResult,
        capacity: &CapacityResult,
        mut constraints_applied: Vec<String>,
    ) -> TodayPlanOutput {
        constraints_applied.push(constraints::INSUFFICIENT_EXERCISES.to_owned());
        let mut explain = build_explainability(
            PlanVariant::Reset,
            gate,
            capacity,
            &constraints_applied,
            &[],
            self.rules.selection.max_selection_reasons,
        );
        constraints::INSUFFICIENT_EXERCISES.clone_into(&mut explain.plan_why);

        TodayPlanOutput {
            date,
            safety_status: gate.status,
            recommended_variant: PlanVariant::Reset,
            capacity_score: capacity.score,
            capacity_band: capacity.band,
            blocks: Vec::new(),
            explain,
            meta: self.meta(),
        }
    }

    fn meta(&self) -> PlanMeta {
        PlanMeta {
            version: self.rules.version.clone(),
            generated_at: self
                .clock
                .now()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
