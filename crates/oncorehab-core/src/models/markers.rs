// ABOUTME: Marker movement calibration results (sit-to-stand, supported march, shoulder raise)
// ABOUTME: Latest rating, comfortable reps, and affected side per marker movement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Standardized marker movements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarkerKey {
    /// Sit to stand from a chair
    SitToStand,
    /// Supported march in place
    SupportedMarch,
    /// Shoulder raise
    ShoulderRaise,
}

impl MarkerKey {
    /// Every marker movement
    pub const ALL: [Self; 3] = [Self::SitToStand, Self::SupportedMarch, Self::ShoulderRaise];

    /// Wire name of the marker
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SitToStand => "SIT_TO_STAND",
            Self::SupportedMarch => "SUPPORTED_MARCH",
            Self::ShoulderRaise => "SHOULDER_RAISE",
        }
    }

    /// Catalog tag (and block key) for this marker, e.g. `MARKER_SIT_TO_STAND`
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::SitToStand => "MARKER_SIT_TO_STAND",
            Self::SupportedMarch => "MARKER_SUPPORTED_MARCH",
            Self::ShoulderRaise => "MARKER_SHOULDER_RAISE",
        }
    }

    /// Upper-case name fragments used when no exercise carries the tag
    #[must_use]
    pub const fn name_hints(self) -> &'static [&'static str] {
        match self {
            Self::SitToStand => &["SIT TO STAND"],
            Self::SupportedMarch => &["MARCH"],
            Self::ShoulderRaise => &["SHOULDER", "WALL SLIDE"],
        }
    }

    /// Parse a marker block key such as `MARKER_SHOULDER_RAISE`
    #[must_use]
    pub fn from_block_key(block_key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|marker| marker.tag().eq_ignore_ascii_case(block_key.trim()))
    }
}

/// How the marker movement felt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarkerRating {
    /// Comfortable
    Easy,
    /// Manageable
    Ok,
    /// Difficult
    Hard,
}

/// Side affected during the marker movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarkerSide {
    /// Left side
    Left,
    /// Right side
    Right,
    /// Both sides
    Both,
    /// Patient was unsure
    NotSure,
}

impl MarkerSide {
    /// Lower-case label used in explanations
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Both => "both",
            Self::NotSure => "not sure",
        }
    }
}

/// Latest result for one marker movement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerResult {
    /// Felt difficulty
    pub rating: MarkerRating,
    /// Reps completed comfortably
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comfortable_reps: Option<u8>,
    /// Side affected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<MarkerSide>,
}

impl MarkerResult {
    /// Result with only a rating
    #[must_use]
    pub const fn rated(rating: MarkerRating) -> Self {
        Self {
            rating,
            comfortable_reps: None,
            side: None,
        }
    }
}

/// Latest marker result per marker movement
pub type LatestMarkers = BTreeMap<MarkerKey, MarkerResult>;

/// Marker calibration signals supplied with a request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerSignals {
    /// Latest result per marker
    #[serde(default)]
    pub latest: LatestMarkers,
}
