// ABOUTME: Names of constraints reported in a plan's explainability payload
// ABOUTME: Each filter or selection rule that changed the plan reports one of these
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Exercises not applicable to the treatment phase were removed
pub const PHASE_FILTER: &str = "Phase filter";
/// Non-early-stage exercises were removed during early recovery
pub const EARLY_STAGE_FILTER: &str = "Early stage recovery filter";
/// Exercises above the variant's intensity cap were removed
pub const INTENSITY_CAP: &str = "Intensity cap by plan variant";
/// Exercises needing unavailable equipment were removed
pub const EQUIPMENT_FILTER: &str = "Equipment availability filter";
/// Exercises not marked lymph-safe were removed
pub const LYMPH_SAFE_REQUIRED: &str = "Lymph-safe required";
/// Exercises not marked shoulder-safe were removed
pub const SHOULDER_SAFETY_FILTER: &str = "Post-op shoulder safety filter";
/// HIGH balance-demand exercises were removed
pub const BALANCE_CAPPED: &str = "Balance demand capped";
/// Strength and HIGH intensity exercises were removed for severe pain
pub const HIGH_PAIN_FILTER: &str = "High pain filter";
/// A block reused a movement pattern because the pool ran short
pub const PATTERN_REPEATED: &str = "Movement pattern repeated due to limited pool";
/// Selection was adjusted from marker results
pub const MARKER_ADAPTATION: &str = "Marker-based adaptation applied";
/// No exercise survived the filters
pub const INSUFFICIENT_EXERCISES: &str = "Insufficient safe exercises available today.";
/// Safe exercises remained but none fit any block of the variant
pub const NO_MATCHING_BLOCKS: &str = "No safe exercise matched today's blocks";
