// ABOUTME: Lenient deserializers for catalog safety flags
// ABOUTME: Accepts booleans or YES/NO strings so catalog exports from any tool load cleanly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Catalog safety flags are authored as either JSON booleans or `"YES"`/`"NO"`
//! strings. Both forms collapse into a plain `bool`; anything other than an
//! explicit yes is treated as "not marked safe".

use serde::de::{self, Deserializer, Visitor};
use std::fmt;

/// Deserialize a YES/NO or boolean flag, treating null and unknown strings as `false`
///
/// # Errors
///
/// Returns an error if the value is neither a boolean, a string, nor null
pub fn deserialize_yes_no<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(YesNoVisitor)
}

struct YesNoVisitor;

impl<'de> Visitor<'de> for YesNoVisitor {
    type Value = bool;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a boolean or a YES/NO string")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<bool, E> {
        Ok(value)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<bool, E> {
        Ok(value.trim().eq_ignore_ascii_case("YES") || value.trim().eq_ignore_ascii_case("TRUE"))
    }

    fn visit_none<E: de::Error>(self) -> Result<bool, E> {
        Ok(false)
    }

    fn visit_unit<E: de::Error>(self) -> Result<bool, E> {
        Ok(false)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<bool, D::Error> {
        deserializer.deserialize_any(Self)
    }
}
