// ABOUTME: Capacity scoring from today's symptoms on a 0-100 scale
// ABOUTME: Weighted symptom penalties are subtracted from a base, rounded, clamped, and banded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::CapacityRules;
use oncorehab_core::models::{CapacityBand, CheckinInput};
use serde::{Deserialize, Serialize};

/// Driver recorded whenever fatigue is supplied
pub const FATIGUE_DRIVER: &str = "Fatigue influenced capacity";
/// Driver recorded whenever pain is supplied
pub const PAIN_DRIVER: &str = "Pain influenced capacity";
/// Driver recorded whenever nausea is supplied
pub const NAUSEA_DRIVER: &str = "Nausea influenced capacity";
/// Driver recorded whenever sleep is supplied
pub const SLEEP_DRIVER: &str = "Sleep influenced capacity";

/// Capacity score, band and contributing symptoms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityResult {
    /// Rounded score in `0..=100`
    pub score: u8,
    /// Band derived from the score
    pub band: CapacityBand,
    /// One entry per supplied symptom, in fatigue, pain, nausea, sleep order
    pub drivers: Vec<String>,
}

/// Compute today's capacity
///
/// Fatigue and pain always contribute; nausea and sleep only when reported.
/// Every contributing symptom is listed as a driver, even at zero.
#[must_use]
pub fn compute_capacity(checkin: &CheckinInput, rules: &CapacityRules) -> CapacityResult {
    let weights = &rules.weights;
    let contributions = [
        (Some(checkin.fatigue), weights.fatigue, FATIGUE_DRIVER),
        (Some(checkin.pain), weights.pain, PAIN_DRIVER),
        (checkin.nausea, weights.nausea, NAUSEA_DRIVER),
        (checkin.sleep, weights.sleep, SLEEP_DRIVER),
    ];

    let mut raw = rules.base;
    let mut drivers = Vec::new();
    for (value, weight, driver) in contributions {
        let Some(value) = value else { continue };
        raw -= f64::from(value) * weight;
        drivers.push(driver.to_owned());
    }

    let score = raw.round().clamp(0.0, 100.0) as u8;
    CapacityResult {
        score,
        band: band_for(score, rules),
        drivers,
    }
}

/// Band for a score using meet-or-exceed cut-offs
#[must_use]
pub const fn band_for(score: u8, rules: &CapacityRules) -> CapacityBand {
    if score >= rules.bands.high_gte {
        CapacityBand::High
    } else if score >= rules.bands.med_gte {
        CapacityBand::Med
    } else {
        CapacityBand::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn checkin(fatigue: u8, pain: u8) -> CheckinInput {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        CheckinInput::new(date, fatigue, pain)
    }

    #[test]
    fn test_no_symptoms_scores_base() {
        let result = compute_capacity(&checkin(0, 0), &CapacityRules::default());
        assert_eq!(result.score, 100);
        assert_eq!(result.band, CapacityBand::High);
        assert_eq!(result.drivers, vec![FATIGUE_DRIVER, PAIN_DRIVER]);
    }

    #[test]
    fn test_zero_optional_symptom_still_listed() {
        let mut input = checkin(0, 0);
        input.nausea = Some(0);
        let result = compute_capacity(&input, &CapacityRules::default());
        assert_eq!(result.score, 100);
        assert_eq!(result.drivers, vec![FATIGUE_DRIVER, PAIN_DRIVER, NAUSEA_DRIVER]);
    }

    #[test]
    fn test_moderate_day_is_high_band() {
        let result = compute_capacity(&checkin(3, 2), &CapacityRules::default());
        assert_eq!(result.score, 77);
        assert_eq!(result.band, CapacityBand::High);
        assert_eq!(result.drivers, vec![FATIGUE_DRIVER, PAIN_DRIVER]);
    }

    #[test]
    fn test_optional_symptoms_contribute_when_present() {
        let mut input = checkin(4, 4);
        input.nausea = Some(5);
        input.sleep = Some(5);
        let result = compute_capacity(&input, &CapacityRules::default());
        // 100 - 20 - 16 - 15 - 10
        assert_eq!(result.score, 39);
        assert_eq!(result.band, CapacityBand::Low);
        assert_eq!(result.drivers.len(), 4);
    }

    #[test]
    fn test_score_clamps_at_zero() {
        let mut input = checkin(10, 10);
        input.nausea = Some(10);
        input.sleep = Some(10);
        let result = compute_capacity(&input, &CapacityRules::default());
        assert_eq!(result.score, 0);
        assert_eq!(result.band, CapacityBand::Low);
    }

    #[test]
    fn test_band_boundaries_are_inclusive() {
        let rules = CapacityRules::default();
        assert_eq!(band_for(rules.bands.high_gte, &rules), CapacityBand::High);
        assert_eq!(band_for(rules.bands.high_gte - 1, &rules), CapacityBand::Med);
        assert_eq!(band_for(rules.bands.med_gte, &rules), CapacityBand::Med);
        assert_eq!(band_for(rules.bands.med_gte - 1, &rules), CapacityBand::Low);
    }
}
