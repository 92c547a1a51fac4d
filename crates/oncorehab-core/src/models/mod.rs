// ABOUTME: Core data models for the daily rehabilitation planner
// ABOUTME: Re-exports catalog, profile, check-in, marker, request, and plan output types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Every entity is created fresh per invocation from request input and
//! released after the response is returned. The planner owns no persistent
//! state; the catalog and marker history arrive as read-only snapshots.
//!
//! ## Core Models
//!
//! - `Exercise`: catalog entry with clinical classification
//! - `UserProfile` / `SafetyProfile`: standing risk state
//! - `CheckinInput`: today's self-report
//! - `MarkerSignals`: latest marker movement results
//! - `TodayPlanRequest` / `TodayPlanOutput`: engine input and output

mod checkin;
mod exercise;
mod markers;
mod plan;
mod profile;
mod request;

pub use checkin::{CheckinInput, PainLocation, RedFlag};
pub use exercise::{
    BalanceDemand, BodyRegion, Equipment, Exercise, ExerciseBuilder, ExerciseType, IntensityTier,
    MovementPattern, PhaseApplicability, RecoveryStage,
};
pub use markers::{LatestMarkers, MarkerKey, MarkerRating, MarkerResult, MarkerSide, MarkerSignals};
pub use plan::{
    CapacityBand, Explainability, PlanMeta, PlanVariant, SafetyStatus, TodayPlanOutput,
    WorkoutBlock, WorkoutDose, WorkoutExercise,
};
pub use profile::{
    BoneRisk, LymphLoadRisk, NeuropathyRisk, SafetyProfile, ShoulderRisk, TreatmentPhase,
    TreatmentTimeline, UserPreferences, UserProfile,
};
pub use request::TodayPlanRequest;
