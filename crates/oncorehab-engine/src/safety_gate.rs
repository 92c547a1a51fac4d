// ABOUTME: Safety gate classifying today's check-in as GREEN, AMBER, or RED
// ABOUTME: Any configured red flag wins; otherwise fatigue or pain thresholds raise AMBER
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::SafetyRules;
use oncorehab_core::models::{CheckinInput, SafetyStatus};
use serde::{Deserialize, Serialize};

/// Reason recorded when fatigue meets the amber threshold
pub const HIGH_FATIGUE_REASON: &str = "High fatigue";
/// Reason recorded when pain meets the amber threshold
pub const HIGH_PAIN_REASON: &str = "High pain";

/// Gate status with the reasons that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyGateResult {
    /// Overall status
    pub status: SafetyStatus,
    /// Human-readable reasons, empty when GREEN
    pub reasons: Vec<String>,
}

/// Evaluate the safety gate for a check-in
///
/// Red flags are checked in rule order and every true flag is reported.
/// Amber thresholds are only consulted when no red flag is raised.
#[must_use]
pub fn evaluate_safety_gate(checkin: &CheckinInput, rules: &SafetyRules) -> SafetyGateResult {
    let red_reasons: Vec<String> = rules
        .red_flags_immediate
        .iter()
        .filter(|flag| checkin.has_red_flag(**flag))
        .map(|flag| format!("Red flag: {}", flag.as_str()))
        .collect();

    if !red_reasons.is_empty() {
        return SafetyGateResult {
            status: SafetyStatus::Red,
            reasons: red_reasons,
        };
    }

    let mut reasons = Vec::new();
    if checkin.fatigue >= rules.amber.fatigue_gte {
        reasons.push(HIGH_FATIGUE_REASON.to_owned());
    }
    if checkin.pain >= rules.amber.pain_gte {
        reasons.push(HIGH_PAIN_REASON.to_owned());
    }

    let status = if reasons.is_empty() {
        SafetyStatus::Green
    } else {
        SafetyStatus::Amber
    };
    SafetyGateResult { status, reasons }
}
