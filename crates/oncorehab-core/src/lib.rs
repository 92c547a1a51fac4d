// ABOUTME: Core types and constants for the oncology rehabilitation planner
// ABOUTME: Foundation crate with domain models, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Oncorehab Core
//!
//! Foundation crate providing shared types and constants for the daily
//! rehabilitation planner. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Scale limits, plan schema version and fixed narrative strings
//! - **models**: Catalog exercises, safety profile, check-in, markers, and plan output
//! - **serde_flags**: Lenient deserializers for catalog safety flags

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Exercise, SafetyProfile, CheckinInput, TodayPlanOutput, etc.)
pub mod models;

/// Serde helpers for YES/NO style catalog flags
pub mod serde_flags;
