// ABOUTME: Rule tables for the daily plan engine with unified validation and loading
// ABOUTME: Loads defaults or a YAML/JSON rules file, applies env overrides, then validates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Rule Table Configuration
//!
//! Every clinical threshold, weight, template and dose the engine uses lives
//! here, so a plan is fully determined by the request plus these tables.
//!
//! # Module Structure
//!
//! - `safety` - Red flags and amber thresholds
//! - `capacity` - Base score, symptom weights, band cut-offs
//! - `filters` - Early-stage window, intensity caps, equipment defaults, severe pain
//! - `selection` - Scoring weights and marker adaptation thresholds
//! - `templates` - Session templates and dose caps per variant
//!
//! # Loading
//!
//! `RuleTables::load()` starts from the built-in tables, or from the file named
//! by `ONCOREHAB_RULES_PATH` (YAML, which also accepts JSON), applies the
//! `ONCOREHAB_*` environment overrides and validates the result.

pub mod capacity;
pub mod error;
pub mod filters;
pub mod safety;
pub mod selection;
pub mod templates;

pub use capacity::{BandThresholds, CapacityRules, CapacityWeights};
pub use error::ConfigError;
pub use filters::{EarlyStageWindow, FilterRules};
pub use safety::{AmberThresholds, SafetyRules};
pub use selection::{
    MarkerAdjustmentWeights, ScoringWeights, SelectionRules, SitToStandThresholds,
};
pub use templates::{default_templates, BlockTemplate, DoseCap, DoseRules};

use oncorehab_core::constants::{plan_schema, symptom_scale, tags};
use oncorehab_core::models::{IntensityTier, MarkerKey, PlanVariant};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::iter;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{info, warn};

/// Environment variable naming a rules file
pub const RULES_PATH_ENV: &str = "ONCOREHAB_RULES_PATH";

/// Most sets an EASIER or MAIN dose may prescribe; one reduction must reach a single set
const MAX_VARIANT_SETS: u8 = 2;

/// Global rule tables singleton
static RULE_TABLES: OnceLock<RuleTables> = OnceLock::new();

/// One value per plan variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerVariant<T> {
    /// RESET value
    pub reset: T,
    /// EASIER value
    pub easier: T,
    /// MAIN value
    pub main: T,
}

impl<T> PerVariant<T> {
    /// Value for a variant
    pub const fn get(&self, variant: PlanVariant) -> &T {
        match variant {
            PlanVariant::Reset => &self.reset,
            PlanVariant::Easier => &self.easier,
            PlanVariant::Main => &self.main,
        }
    }

    /// Iterate `(variant, value)` pairs in RESET, EASIER, MAIN order
    pub fn iter(&self) -> impl Iterator<Item = (PlanVariant, &T)> {
        PlanVariant::ALL
            .into_iter()
            .map(move |variant| (variant, self.get(variant)))
    }
}

/// Complete rule set for the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleTables {
    /// Rules version reported in `meta.version`
    pub version: String,
    /// Safety gate rules
    pub safety: SafetyRules,
    /// Capacity scoring rules
    pub capacity: CapacityRules,
    /// Hard-constraint filter rules
    pub filters: FilterRules,
    /// Ranking and marker adaptation rules
    pub selection: SelectionRules,
    /// Session templates per variant
    pub templates: PerVariant<Vec<BlockTemplate>>,
    /// Dose caps
    pub doses: DoseRules,
}

impl Default for RuleTables {
    fn default() -> Self {
        Self {
            version: plan_schema::DEFAULT_VERSION.to_owned(),
            safety: SafetyRules::default(),
            capacity: CapacityRules::default(),
            filters: FilterRules::default(),
            selection: SelectionRules::default(),
            templates: default_templates(),
            doses: DoseRules::default(),
        }
    }
}

impl RuleTables {
    /// Get the global rule tables
    pub fn global() -> &'static Self {
        RULE_TABLES.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load rule tables: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load rule tables from the optional rules file and environment
    ///
    /// # Errors
    ///
    /// Returns an error if the rules file cannot be read or parsed, an
    /// environment override is malformed, or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let rules = match env::var(RULES_PATH_ENV) {
            Ok(path) => {
                info!(path = %path, "Loading rule tables from file");
                Self::parse_file(Path::new(&path))?
            }
            Err(_) => Self::default(),
        };

        let rules = rules.apply_env_overrides()?;
        rules.validate()?;
        Ok(rules)
    }

    /// Load and validate rule tables from a YAML or JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let rules = Self::parse_file(path)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Parse and validate rule tables from YAML or JSON text
    ///
    /// Sections omitted from the document keep their built-in values.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not match the rule schema or
    /// validation fails
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let rules: Self = serde_yaml::from_str(text)?;
        rules.validate()?;
        Ok(rules)
    }

    fn parse_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }

    /// Validate thresholds, weights, templates and doses
    ///
    /// # Errors
    ///
    /// Returns the first violated rule
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version.trim().is_empty() {
            return Err(ConfigError::MissingField("version"));
        }
        self.validate_safety()?;
        self.validate_capacity()?;
        self.validate_filters()?;
        self.validate_selection()?;
        self.validate_templates()?;
        self.validate_doses()
    }

    fn validate_safety(&self) -> Result<(), ConfigError> {
        let amber = &self.safety.amber;
        if amber.fatigue_gte > symptom_scale::MAX || amber.pain_gte > symptom_scale::MAX {
            return Err(ConfigError::ValueOutOfRange(
                "Amber thresholds must be within the 0-10 symptom scale",
            ));
        }
        Ok(())
    }

    fn validate_capacity(&self) -> Result<(), ConfigError> {
        let capacity = &self.capacity;
        if !(0.0..=100.0).contains(&capacity.base) {
            return Err(ConfigError::ValueOutOfRange(
                "Capacity base must be between 0 and 100",
            ));
        }

        let weights = &capacity.weights;
        let all_weights = [weights.fatigue, weights.pain, weights.nausea, weights.sleep];
        if all_weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::InvalidWeights(
                "Capacity weights must be finite and non-negative",
            ));
        }

        let bands = &capacity.bands;
        if bands.high_gte > 100 {
            return Err(ConfigError::ValueOutOfRange(
                "Capacity band thresholds must be at most 100",
            ));
        }
        if bands.med_gte >= bands.high_gte {
            return Err(ConfigError::InvalidRange("med_gte must be < high_gte"));
        }
        Ok(())
    }

    fn validate_filters(&self) -> Result<(), ConfigError> {
        let filters = &self.filters;
        if filters.severe_pain_gte > symptom_scale::MAX {
            return Err(ConfigError::ValueOutOfRange(
                "severe_pain_gte must be within the 0-10 symptom scale",
            ));
        }
        if filters.early_stage.post_surgery_days < 0 {
            return Err(ConfigError::ValueOutOfRange(
                "post_surgery_days must be non-negative",
            ));
        }
        if filters
            .intensity_caps
            .iter()
            .any(|(_, caps)| caps.contains(&IntensityTier::High))
        {
            return Err(ConfigError::InvalidRange(
                "HIGH intensity cannot be allowed for any plan variant",
            ));
        }
        Ok(())
    }

    fn validate_selection(&self) -> Result<(), ConfigError> {
        let weights = &self.selection.weights;
        if weights.type_match < 0 || weights.region_match < 0 || weights.reset_very_low_bonus < 0
        {
            return Err(ConfigError::InvalidWeights(
                "Base scoring weights must be non-negative",
            ));
        }

        let adjustments = &self.selection.marker_adjustments;
        let penalties = [
            adjustments.loaded_lower_body_penalty,
            adjustments.high_balance_penalty,
            adjustments.single_leg_penalty,
            adjustments.overhead_penalty,
        ];
        if penalties.iter().any(|p| *p > 0) {
            return Err(ConfigError::InvalidWeights(
                "Marker penalties must be zero or negative",
            ));
        }
        let bonuses = [
            adjustments.hinge_bonus,
            adjustments.supported_bonus,
            adjustments.progression_bonus,
            adjustments.pull_bonus,
        ];
        if bonuses.iter().any(|b| *b < 0) {
            return Err(ConfigError::InvalidWeights(
                "Marker bonuses must be zero or positive",
            ));
        }

        let sts = &self.selection.sit_to_stand;
        if sts.limited_reps_lte >= sts.comfortable_reps_max {
            return Err(ConfigError::InvalidRange(
                "limited_reps_lte must be < comfortable_reps_max",
            ));
        }
        if self.selection.max_selection_reasons == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_selection_reasons must be at least 1",
            ));
        }
        Ok(())
    }

    fn validate_templates(&self) -> Result<(), ConfigError> {
        for (_, blocks) in self.templates.iter() {
            if blocks.is_empty() {
                return Err(ConfigError::MissingField("templates"));
            }
            for block in blocks {
                if block.block_key.trim().is_empty() || block.title.trim().is_empty() {
                    return Err(ConfigError::MissingField("templates.block_key"));
                }
                if block.count == 0 {
                    return Err(ConfigError::ValueOutOfRange(
                        "Template block count must be at least 1",
                    ));
                }
                if block.block_key.starts_with(tags::MARKER_PREFIX)
                    && MarkerKey::from_block_key(&block.block_key).is_none()
                {
                    return Err(ConfigError::InvalidRange(
                        "Marker block keys must name a known marker movement",
                    ));
                }
            }
        }
        Ok(())
    }

    fn validate_doses(&self) -> Result<(), ConfigError> {
        let doses = self
            .doses
            .variants
            .iter()
            .map(|(_, dose)| dose)
            .chain(iter::once(&self.doses.marker_check));
        for dose in doses {
            if dose.sets == 0 {
                return Err(ConfigError::ValueOutOfRange("Dose sets must be at least 1"));
            }
            if dose.rpe_cap.is_some_and(|rpe| rpe > symptom_scale::MAX) {
                return Err(ConfigError::ValueOutOfRange(
                    "Dose RPE cap must be within 0-10",
                ));
            }
        }
        let variants = &self.doses.variants;
        if variants.easier.sets > MAX_VARIANT_SETS || variants.main.sets > MAX_VARIANT_SETS {
            return Err(ConfigError::ValueOutOfRange(
                "EASIER and MAIN doses allow at most 2 sets",
            ));
        }
        Ok(())
    }

    /// Apply `ONCOREHAB_*` environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "ONCOREHAB_AMBER_FATIGUE_GTE",
            &mut self.safety.amber.fatigue_gte,
        )?;
        Self::apply_env_var("ONCOREHAB_AMBER_PAIN_GTE", &mut self.safety.amber.pain_gte)?;
        Self::apply_env_var(
            "ONCOREHAB_SEVERE_PAIN_GTE",
            &mut self.filters.severe_pain_gte,
        )?;
        Self::apply_env_var("ONCOREHAB_CAPACITY_BASE", &mut self.capacity.base)?;
        Ok(self)
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }
}
