// ABOUTME: Main library entry point for the oncology rehabilitation daily planner
// ABOUTME: Re-exports the engine and core types alongside the service and logging layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Oncorehab Planner
//!
//! Turns a patient's daily check-in, safety profile, exercise catalog and
//! latest marker results into one deterministic, explainable exercise plan.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use oncorehab_planner::{RenderOptions, TodayPlanService};
//!
//! # fn example(body: &str) -> oncorehab_planner::AppResult<()> {
//! let service = TodayPlanService::default();
//! let plan_json = service.plan_json(body, RenderOptions::default())?;
//! println!("{plan_json}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Crates
//!
//! - `oncorehab-core`: request and plan models, errors, constants
//! - `oncorehab-engine`: rule tables and the decision pipeline

/// Structured logging setup
pub mod logging;

/// Validating request service
pub mod service;

pub use oncorehab_core::errors::{AppError, AppResult, ErrorCode};
pub use oncorehab_core::models;
pub use oncorehab_engine::constraints;
pub use oncorehab_engine::{
    summarize_plan, validate_request, Clock, ConfigError, FixedClock, PlanSummary, RuleTables,
    SystemClock, TodayPlanEngine,
};
pub use service::{RenderOptions, TodayPlanService};
