// ABOUTME: Explainability payload assembly for a generated plan
// ABOUTME: Summary line, gate reasons, capacity drivers, variant narrative, constraints, reasons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::capacity::CapacityResult;
use crate::safety_gate::SafetyGateResult;
use oncorehab_core::models::{Explainability, PlanVariant};

/// Narrative sentence for a variant
#[must_use]
pub const fn plan_why(variant: PlanVariant) -> &'static str {
    match variant {
        PlanVariant::Reset => "Recovery-focused based on safety and symptoms.",
        PlanVariant::Easier => "Lighter plan based on how you\u{2019}re feeling today.",
        PlanVariant::Main => "Maintaining steady progress with a main plan.",
    }
}

/// Build the explanation for a plan
///
/// `constraints` may contain duplicates; the first occurrence of each is
/// kept. `selection_reasons` must already be in priority order.
#[must_use]
pub fn build_explainability(
    variant: PlanVariant,
    gate: &SafetyGateResult,
    capacity: &CapacityResult,
    constraints: &[String],
    selection_reasons: &[String],
    max_selection_reasons: usize,
) -> Explainability {
    let mut constraints_applied: Vec<String> = Vec::with_capacity(constraints.len());
    for constraint in constraints {
        if !constraints_applied.contains(constraint) {
            constraints_applied.push(constraint.clone());
        }
    }

    Explainability {
        summary: format!("Plan {}, capacity {}", variant.as_str(), capacity.score),
        safety_reasons: gate.reasons.clone(),
        capacity_drivers: capacity.drivers.clone(),
        plan_why: plan_why(variant).to_owned(),
        constraints_applied,
        selection_reasons: selection_reasons
            .iter()
            .take(max_selection_reasons)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oncorehab_core::models::{CapacityBand, SafetyStatus};

    #[test]
    fn test_explain_dedups_constraints_and_caps_reasons() {
        let gate = SafetyGateResult {
            status: SafetyStatus::Amber,
            reasons: vec!["High pain".into()],
        };
        let capacity = CapacityResult {
            score: 55,
            band: CapacityBand::Med,
            drivers: vec!["Pain influenced capacity".into()],
        };
        let constraints = vec!["Phase filter".to_owned(), "A".into(), "Phase filter".into()];
        let reasons: Vec<String> = (0..5).map(|i| format!("r{i}")).collect();

        let explain = build_explainability(
            PlanVariant::Easier,
            &gate,
            &capacity,
            &constraints,
            &reasons,
            3,
        );
        assert_eq!(explain.summary, "Plan EASIER, capacity 55");
        assert_eq!(explain.constraints_applied, vec!["Phase filter", "A"]);
        assert_eq!(explain.selection_reasons, vec!["r0", "r1", "r2"]);
        assert_eq!(explain.plan_why, plan_why(PlanVariant::Easier));
        assert_eq!(explain.safety_reasons, vec!["High pain"]);
    }
}
