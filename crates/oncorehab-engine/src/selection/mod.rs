// ABOUTME: Block assembly and deterministic exercise selection for a plan variant
// ABOUTME: Resolves templates, scores candidates with marker adaptation, and assigns doses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise selection.
//!
//! Marker check blocks are filled first so marker movements are not consumed
//! by earlier ordinary blocks; ordinary blocks are then filled in template
//! order. Output always keeps template order.

mod blocks;
mod dose;
mod exercises;
mod scoring;

pub use blocks::{needs_shoulder_marker, resolve_blocks, BlockKind};
pub use dose::{marker_check_dose, reduce_sets, variant_dose};
pub use exercises::{select_exercises, SelectionInput, SelectionResult};
pub use scoring::{region_targets, score_exercise, BlockFocus, MarkerAdjustments, ScoringContext};
