// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Symptom scale limits, plan schema version, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat list. Tunable clinical thresholds do not live here; they belong to the
//! engine rule tables.

/// Self-reported symptom scale
pub mod symptom_scale {
    /// Lowest value on the 0-10 symptom scale
    pub const MIN: u8 = 0;
    /// Highest value on the 0-10 symptom scale
    pub const MAX: u8 = 10;
}

/// Plan output schema
pub mod plan_schema {
    /// Schema version stamped into `meta.version` when rules carry none
    pub const DEFAULT_VERSION: &str = "v1";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Planner service name
    pub const ONCOREHAB_PLANNER: &str = "oncorehab-planner";
}

/// Catalog tag prefixes
pub mod tags {
    /// Prefix shared by marker block keys and marker catalog tags
    pub const MARKER_PREFIX: &str = "MARKER_";
}
