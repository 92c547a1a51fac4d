// ABOUTME: Safety gate rule table: immediate red flags and amber symptom thresholds
// ABOUTME: Red flags force RED; amber thresholds are meet-or-exceed on the 0-10 scale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use oncorehab_core::models::RedFlag;
use serde::{Deserialize, Serialize};

/// Safety gate rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyRules {
    /// Red flags that stop exercise for the day, in reporting order
    pub red_flags_immediate: Vec<RedFlag>,
    /// Symptom thresholds that raise the gate to AMBER
    pub amber: AmberThresholds,
}

/// Meet-or-exceed thresholds for an AMBER gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmberThresholds {
    /// Fatigue at or above this value is AMBER
    pub fatigue_gte: u8,
    /// Pain at or above this value is AMBER
    pub pain_gte: u8,
}

impl Default for SafetyRules {
    fn default() -> Self {
        Self {
            red_flags_immediate: RedFlag::ALL.to_vec(),
            amber: AmberThresholds::default(),
        }
    }
}

impl Default for AmberThresholds {
    fn default() -> Self {
        Self {
            fatigue_gte: 7,
            pain_gte: 6,
        }
    }
}
