// ABOUTME: Hard-constraint rule table: early-stage window, intensity caps, equipment, pain
// ABOUTME: HIGH intensity is never listed in any variant cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use oncorehab_core::models::{Equipment, IntensityTier};
use serde::{Deserialize, Serialize};

use super::PerVariant;

/// Safety and pain filter rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterRules {
    /// Recovery window in which only early-stage exercises are allowed
    pub early_stage: EarlyStageWindow,
    /// Allowed intensity tiers per plan variant
    pub intensity_caps: PerVariant<Vec<IntensityTier>>,
    /// Equipment allowed when the patient declared none
    pub default_equipment: Vec<Equipment>,
    /// Pain at or above this value removes strength and high-intensity work
    pub severe_pain_gte: u8,
}

/// Early recovery window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EarlyStageWindow {
    /// Days after surgery (inclusive) that count as early stage
    pub post_surgery_days: i64,
    /// Chemotherapy cycle weeks (1-based, inclusive) that count as early stage
    pub chemo_week_max: u32,
}

impl Default for FilterRules {
    fn default() -> Self {
        Self {
            early_stage: EarlyStageWindow::default(),
            intensity_caps: PerVariant {
                reset: vec![IntensityTier::VeryLow, IntensityTier::Low],
                easier: vec![IntensityTier::Low, IntensityTier::Moderate],
                main: vec![
                    IntensityTier::VeryLow,
                    IntensityTier::Low,
                    IntensityTier::Moderate,
                ],
            },
            default_equipment: vec![Equipment::Bodyweight, Equipment::Chair],
            severe_pain_gte: 7,
        }
    }
}

impl Default for EarlyStageWindow {
    fn default() -> Self {
        Self {
            post_surgery_days: 42,
            chemo_week_max: 2,
        }
    }
}
