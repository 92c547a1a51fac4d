// ABOUTME: Block template and dose tables for each plan variant
// ABOUTME: Templates list blocks in output order; doses cap sets, reps, time, and effort
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use oncorehab_core::models::WorkoutDose;
use serde::{Deserialize, Serialize};

use super::PerVariant;

/// One block slot in a variant's session template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockTemplate {
    /// Stable key; `MARKER_*` keys are marker check blocks
    pub block_key: String,
    /// Patient-facing title
    pub title: String,
    /// Patient-facing intent
    pub intent: String,
    /// Number of exercises requested
    pub count: usize,
}

impl BlockTemplate {
    /// Create a template slot
    pub fn new(
        block_key: impl Into<String>,
        title: impl Into<String>,
        intent: impl Into<String>,
        count: usize,
    ) -> Self {
        Self {
            block_key: block_key.into(),
            title: title.into(),
            intent: intent.into(),
            count,
        }
    }
}

/// Dose caps as written in the rule document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoseCap {
    /// Sets per exercise
    pub sets: u8,
    /// Repetitions per set
    #[serde(default)]
    pub reps: Option<u16>,
    /// Seconds per set
    #[serde(default)]
    pub seconds: Option<u16>,
    /// Rest between sets
    #[serde(default)]
    pub rest_seconds: Option<u16>,
    /// Effort cap on the 0-10 RPE scale
    #[serde(default)]
    pub rpe_cap: Option<u8>,
}

impl From<DoseCap> for WorkoutDose {
    fn from(cap: DoseCap) -> Self {
        Self {
            sets: cap.sets,
            reps: cap.reps,
            seconds: cap.seconds,
            rest_seconds: cap.rest_seconds,
            rpe_cap: cap.rpe_cap,
        }
    }
}

/// Doses per variant plus the fixed marker-check dose
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoseRules {
    /// Dose for ordinary blocks, per variant
    pub variants: PerVariant<DoseCap>,
    /// Dose for marker check blocks in any variant
    pub marker_check: DoseCap,
}

impl Default for DoseRules {
    fn default() -> Self {
        Self {
            variants: PerVariant {
                reset: DoseCap {
                    sets: 1,
                    reps: None,
                    seconds: Some(60),
                    rest_seconds: Some(30),
                    rpe_cap: Some(3),
                },
                easier: DoseCap {
                    sets: 2,
                    reps: Some(8),
                    seconds: None,
                    rest_seconds: Some(60),
                    rpe_cap: Some(5),
                },
                main: DoseCap {
                    sets: 2,
                    reps: Some(10),
                    seconds: None,
                    rest_seconds: Some(60),
                    rpe_cap: Some(6),
                },
            },
            marker_check: DoseCap {
                sets: 1,
                reps: Some(5),
                seconds: None,
                rest_seconds: Some(60),
                rpe_cap: Some(4),
            },
        }
    }
}

/// Default session templates
pub fn default_templates() -> PerVariant<Vec<BlockTemplate>> {
    let warm_in = BlockTemplate::new(
        "WARM_IN",
        "Warm-in",
        "Ease into movement with breathing and gentle activation",
        1,
    );
    let sit_to_stand = BlockTemplate::new(
        "MARKER_SIT_TO_STAND",
        "Marker check: sit to stand",
        "Check lower-body tolerance for today",
        1,
    );
    let march = BlockTemplate::new(
        "MARKER_SUPPORTED_MARCH",
        "Marker check: supported march",
        "Check balance and stepping confidence for today",
        1,
    );
    let shoulder = BlockTemplate::new(
        "MARKER_SHOULDER_RAISE",
        "Marker check: shoulder raise",
        "Check shoulder comfort for today",
        1,
    );
    let cooldown = BlockTemplate::new(
        "COOLDOWN",
        "Cool-down",
        "Finish calm and notice how you feel",
        1,
    );

    PerVariant {
        reset: vec![
            BlockTemplate::new(
                "BREATH_RESET",
                "Breathing reset",
                "Settle with slow, comfortable breathing",
                1,
            ),
            BlockTemplate::new(
                "MOBILITY_GENTLE",
                "Gentle mobility",
                "Keep joints moving without adding load",
                2,
            ),
            cooldown.clone(),
        ],
        easier: vec![
            warm_in.clone(),
            sit_to_stand.clone(),
            shoulder.clone(),
            BlockTemplate::new("MOBILITY", "Mobility", "Restore comfortable range of motion", 2),
            BlockTemplate::new(
                "STRENGTH_LIGHT",
                "Light strength",
                "Maintain strength at an easy effort",
                1,
            ),
            cooldown.clone(),
        ],
        main: vec![
            warm_in,
            sit_to_stand,
            march,
            shoulder,
            BlockTemplate::new("MOBILITY", "Mobility", "Restore comfortable range of motion", 2),
            BlockTemplate::new(
                "STRENGTH_PRIMARY",
                "Strength",
                "Build strength within today's effort cap",
                2,
            ),
            cooldown,
        ],
    }
}
