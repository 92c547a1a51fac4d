// ABOUTME: Configuration error types for rule-table validation and loading
// ABOUTME: Defines error variants for invalid ranges, weights, files, and documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for rule-table validation.

use oncorehab_core::errors::{AppError, ErrorCode};
use std::io;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., band threshold above 100)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Required configuration entry is missing
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Negative or otherwise unusable weights
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Value outside the permitted scale
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Rules file could not be read
    #[error("Failed to read rules file: {0}")]
    Io(#[from] io::Error),

    /// Rules document is not valid YAML/JSON for the rule schema
    #[error("Invalid rules document: {0}")]
    Document(#[from] serde_yaml::Error),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::InvalidRange(_)
            | ConfigError::MissingField(_)
            | ConfigError::InvalidWeights(_)
            | ConfigError::ValueOutOfRange(_) => ErrorCode::ConfigInvalid,
            ConfigError::Parse(_)
            | ConfigError::Io(_)
            | ConfigError::Document(_) => ErrorCode::ConfigError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
