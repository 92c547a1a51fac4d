// ABOUTME: Hard-constraint filters that narrow the catalog to today's safe pool
// ABOUTME: Filters borrow catalog entries and record a constraint whenever they remove one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise pool filtering.
//!
//! Filters never relax: each step can only shrink the pool it receives.

mod pain;
mod safety;

pub use pain::apply_pain_filter;
pub use safety::{apply_safety_filters, is_early_stage};

use oncorehab_core::models::Exercise;
use std::cmp::Ordering;

/// Surviving exercises with the constraints that removed the rest
#[derive(Debug, Clone, Default)]
pub struct FilterOutcome<'a> {
    /// Remaining pool, in ranking order
    pub exercises: Vec<&'a Exercise>,
    /// Constraint names, in the order they were applied
    pub constraints_applied: Vec<String>,
}

impl<'a> FilterOutcome<'a> {
    pub(crate) const fn new(exercises: Vec<&'a Exercise>) -> Self {
        Self {
            exercises,
            constraints_applied: Vec::new(),
        }
    }

    /// Keep exercises matching `keep`, recording `constraint` if any were removed
    pub(crate) fn retain_tracked<F>(&mut self, constraint: &str, keep: F)
    where
        F: Fn(&Exercise) -> bool,
    {
        let before = self.exercises.len();
        self.exercises.retain(|exercise| keep(exercise));
        if self.exercises.len() < before {
            self.constraints_applied.push(constraint.to_owned());
        }
    }
}

/// Catalog tie-break order: case-insensitive name, then name, then id
pub(crate) fn catalog_order(a: &Exercise, b: &Exercise) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}
