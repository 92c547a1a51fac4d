// ABOUTME: Today-plan service wrapping validation, engine execution, and JSON rendering
// ABOUTME: The boundary where raw request documents become plans or structured errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Request handling around [`TodayPlanEngine`].
//!
//! The engine assumes validated input; this layer enforces that contract and
//! turns malformed documents into [`AppError`]s instead of plans.

use oncorehab_core::errors::{AppError, AppResult};
use oncorehab_core::models::{TodayPlanOutput, TodayPlanRequest};
use oncorehab_engine::{
    summarize_plan, validate_request, Clock, PlanSummary, SystemClock, TodayPlanEngine,
};
use serde::Serialize;
use tracing::warn;

/// Output shape for rendered responses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit a [`PlanSummary`] instead of the full plan
    pub summary: bool,
    /// Pretty-print the JSON
    pub pretty: bool,
}

/// Validating front door to the plan engine
#[derive(Debug, Clone)]
pub struct TodayPlanService<C: Clock = SystemClock> {
    engine: TodayPlanEngine<C>,
}

impl Default for TodayPlanService {
    fn default() -> Self {
        Self::new(TodayPlanEngine::new())
    }
}

impl<C: Clock> TodayPlanService<C> {
    /// Wrap an engine
    #[must_use]
    pub const fn new(engine: TodayPlanEngine<C>) -> Self {
        Self { engine }
    }

    /// Engine behind this service
    #[must_use]
    pub const fn engine(&self) -> &TodayPlanEngine<C> {
        &self.engine
    }

    /// Validate a request and generate its plan
    ///
    /// # Errors
    ///
    /// Returns the validation error when the request is malformed
    pub fn plan(&self, request: &TodayPlanRequest) -> AppResult<TodayPlanOutput> {
        validate_request(request, self.engine.rules()).inspect_err(|err| {
            warn!(
                user_id = %request.user.user_id,
                code = ?err.code,
                "Rejected today-plan request: {}",
                err.message
            );
        })?;
        Ok(self.engine.generate(request))
    }

    /// Validate and plan, returning the plan with its summary
    ///
    /// # Errors
    ///
    /// Returns the validation error when the request is malformed
    pub fn plan_with_summary(
        &self,
        request: &TodayPlanRequest,
    ) -> AppResult<(TodayPlanOutput, PlanSummary)> {
        let plan = self.plan(request)?;
        let summary = summarize_plan(&plan, Some(&request.marker_signals.latest));
        Ok((plan, summary))
    }

    /// Parse a JSON request document
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` when the document does not match the
    /// request schema
    pub fn parse_request(body: &str) -> AppResult<TodayPlanRequest> {
        serde_json::from_str(body).map_err(AppError::from)
    }

    /// Parse, validate, plan and render a JSON request document
    ///
    /// # Errors
    ///
    /// Returns an error when the document cannot be parsed, fails
    /// validation, or the response cannot be serialized
    pub fn plan_json(&self, body: &str, options: RenderOptions) -> AppResult<String> {
        let request = Self::parse_request(body)?;
        if options.summary {
            let (_, summary) = self.plan_with_summary(&request)?;
            render(&summary, options.pretty)
        } else {
            render(&self.plan(&request)?, options.pretty)
        }
    }
}

fn render<T: Serialize>(value: &T, pretty: bool) -> AppResult<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}
