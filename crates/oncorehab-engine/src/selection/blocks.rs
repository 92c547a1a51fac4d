// ABOUTME: Template resolution into concrete blocks for today's session
// ABOUTME: Classifies blocks as marker checks or ordinary focus blocks and gates the shoulder marker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::scoring::BlockFocus;
use crate::config::BlockTemplate;
use oncorehab_core::models::{CheckinInput, MarkerKey, PainLocation, UserProfile};

/// What a block is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// A single marker movement check
    Marker(MarkerKey),
    /// Ordinary block with a movement focus
    Focus(BlockFocus),
}

impl BlockKind {
    /// Classify a template by its block key
    #[must_use]
    pub fn of(template: &BlockTemplate) -> Self {
        MarkerKey::from_block_key(&template.block_key).map_or_else(
            || Self::Focus(BlockFocus::from_block_key(&template.block_key)),
            Self::Marker,
        )
    }
}

/// Whether the shoulder-raise marker is clinically relevant today
#[must_use]
pub fn needs_shoulder_marker(user: &UserProfile, checkin: &CheckinInput) -> bool {
    user.safety.post_op_shoulder_risk.is_at_risk()
        || checkin.reports_pain_at(PainLocation::Shoulder)
}

/// Template blocks for today, dropping marker blocks that are not relevant
#[must_use]
pub fn resolve_blocks(
    templates: &[BlockTemplate],
    include_shoulder_marker: bool,
) -> Vec<&BlockTemplate> {
    templates
        .iter()
        .filter(|template| {
            include_shoulder_marker
                || BlockKind::of(template) != BlockKind::Marker(MarkerKey::ShoulderRaise)
        })
        .collect()
}
