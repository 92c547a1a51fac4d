// ABOUTME: Request validation performed before the engine runs
// ABOUTME: Rejects out-of-scale symptoms, empty or malformed catalogs, and inconsistent dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::RuleTables;
use oncorehab_core::constants::symptom_scale;
use oncorehab_core::errors::{AppError, AppResult};
use oncorehab_core::models::TodayPlanRequest;
use std::collections::HashSet;

/// Validate a request for the engine
///
/// # Errors
///
/// Returns `MissingRequiredField` for empty identifiers or catalog, and
/// `ValueOutOfRange` for symptom scores, marker reps, or a surgery date
/// after the check-in date.
pub fn validate_request(request: &TodayPlanRequest, rules: &RuleTables) -> AppResult<()> {
    if request.user.user_id.trim().is_empty() {
        return Err(AppError::missing_field("user.userId"));
    }

    let checkin = &request.checkin;
    let symptoms = [
        ("checkin.fatigue010", Some(checkin.fatigue)),
        ("checkin.pain010", Some(checkin.pain)),
        ("checkin.nausea010", checkin.nausea),
        ("checkin.sleep010", checkin.sleep),
    ];
    for (field, value) in symptoms {
        if let Some(value) = value {
            if !(symptom_scale::MIN..=symptom_scale::MAX).contains(&value) {
                return Err(AppError::out_of_range(
                    field,
                    format!(
                        "{field} must be between {} and {}, got {value}",
                        symptom_scale::MIN,
                        symptom_scale::MAX
                    ),
                ));
            }
        }
    }

    if let Some(surgery) = request.user.treatment.surgery_date {
        if surgery > checkin.date {
            return Err(AppError::out_of_range(
                "user.treatment.surgeryDateISO",
                format!(
                    "surgery date {surgery} is after check-in date {}",
                    checkin.date
                ),
            ));
        }
    }

    if request.exercises.is_empty() {
        return Err(AppError::missing_field("exercises"));
    }
    let mut seen = HashSet::with_capacity(request.exercises.len());
    for exercise in &request.exercises {
        if exercise.id.trim().is_empty() {
            return Err(AppError::missing_field("exercises[].id"));
        }
        if exercise.name.trim().is_empty() {
            return Err(AppError::missing_field("exercises[].name"));
        }
        if !seen.insert(exercise.id.as_str()) {
            return Err(AppError::invalid_input(format!(
                "duplicate exercise id '{}'",
                exercise.id
            )));
        }
    }

    let reps_max = rules.selection.sit_to_stand.comfortable_reps_max;
    for (marker, result) in &request.marker_signals.latest {
        if result.comfortable_reps.is_some_and(|reps| reps > reps_max) {
            return Err(AppError::out_of_range(
                "markerSignals.latest.comfortableReps",
                format!(
                    "{} comfortable reps must be at most {reps_max}",
                    marker.as_str()
                ),
            ));
        }
    }

    Ok(())
}
