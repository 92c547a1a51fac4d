// ABOUTME: Plan variant resolution from safety status and capacity band
// ABOUTME: RED always resolves to RESET; otherwise the band picks MAIN, EASIER, or RESET
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use oncorehab_core::models::{CapacityBand, PlanVariant, SafetyStatus};

/// Pick today's plan variant
#[must_use]
pub const fn resolve_variant(status: SafetyStatus, band: CapacityBand) -> PlanVariant {
    match (status, band) {
        (SafetyStatus::Red, _) | (_, CapacityBand::Low) => PlanVariant::Reset,
        (_, CapacityBand::Med) => PlanVariant::Easier,
        (_, CapacityBand::High) => PlanVariant::Main,
    }
}
