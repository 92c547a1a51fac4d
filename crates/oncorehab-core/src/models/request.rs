// ABOUTME: Planner request envelope combining user, check-in, catalog, and markers
// ABOUTME: One immutable document per invocation; the catalog is a read-only snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::checkin::CheckinInput;
use super::exercise::Exercise;
use super::markers::MarkerSignals;
use super::profile::UserProfile;

/// Request for today's plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayPlanRequest {
    /// User profile
    pub user: UserProfile,
    /// Today's check-in
    pub checkin: CheckinInput,
    /// Catalog snapshot
    pub exercises: Vec<Exercise>,
    /// Marker calibration signals
    #[serde(default)]
    pub marker_signals: MarkerSignals,
}
