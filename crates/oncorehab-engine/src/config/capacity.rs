// ABOUTME: Capacity scoring rule table: base score, symptom weights, and band thresholds
// ABOUTME: Each symptom point subtracts its weight from the base before clamping to 0-100
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Capacity scoring rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapacityRules {
    /// Score before any symptom penalty
    pub base: f64,
    /// Per-point symptom penalties
    pub weights: CapacityWeights,
    /// Band cut-offs
    pub bands: BandThresholds,
}

/// Penalty subtracted per symptom point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapacityWeights {
    /// Fatigue weight
    pub fatigue: f64,
    /// Pain weight
    pub pain: f64,
    /// Nausea weight, applied only when nausea is reported
    pub nausea: f64,
    /// Sleep disturbance weight, applied only when sleep is reported
    pub sleep: f64,
}

/// Meet-or-exceed cut-offs for capacity bands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandThresholds {
    /// Scores at or above this are HIGH
    pub high_gte: u8,
    /// Scores at or above this (and below HIGH) are MED
    pub med_gte: u8,
}

impl Default for CapacityRules {
    fn default() -> Self {
        Self {
            base: 100.0,
            weights: CapacityWeights::default(),
            bands: BandThresholds::default(),
        }
    }
}

impl Default for CapacityWeights {
    fn default() -> Self {
        Self {
            fatigue: 5.0,
            pain: 4.0,
            nausea: 3.0,
            sleep: 2.0,
        }
    }
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            high_gte: 70,
            med_gte: 40,
        }
    }
}
