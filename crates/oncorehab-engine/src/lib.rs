// ABOUTME: Daily plan decision engine for oncology rehabilitation
// ABOUTME: Public entry point exposing the engine, rule tables, validation, and summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Oncorehab Engine
//!
//! Produces one personalised, safety-checked exercise plan for a patient's
//! day. The pipeline runs in a fixed order:
//!
//! 1. Safety gate (GREEN / AMBER / RED)
//! 2. Capacity score and band
//! 3. Plan variant (RESET / EASIER / MAIN)
//! 4. Clinical safety filters, then the severe-pain filter
//! 5. Empty-pool fallback to a RESET plan with no blocks
//! 6. Block assembly and exercise selection with marker adaptation
//! 7. Explainability
//!
//! The engine holds no mutable state and performs no I/O. All thresholds,
//! templates and doses come from [`config::RuleTables`].

/// Capacity score and band
pub mod capacity;
/// Time source for plan metadata
pub mod clock;
/// Rule tables and loading
pub mod config;
/// Constraint names reported in explanations
pub mod constraints;
/// Pipeline orchestration
pub mod engine;
/// Explanation assembly
pub mod explain;
/// Catalog filtering
pub mod filters;
/// Safety gate
pub mod safety_gate;
/// Block assembly and exercise selection
pub mod selection;
/// Plan summaries
pub mod summary;
/// Request validation
pub mod validation;
/// Variant resolution
pub mod variant;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, RuleTables};
pub use engine::TodayPlanEngine;
pub use summary::{summarize_plan, MarkerSnapshot, PlanSummary};
pub use validation::validate_request;
