//! JSON contract for the `/maze/health` and `/maze/generate` routes.
//!
//! This module owns request parsing and validation; serving HTTP is left to
//! whatever transport embeds the crate.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::GenerateError;
use crate::mazegen::{MazeRequest, MazeResult, generate_request};

/// Body of `POST /maze/generate`.
///
/// `rows` and `cols` stay loosely typed so that missing, fractional, and
/// negative values all surface as dimension errors rather than parse errors.
/// `seed` accepts any JSON number; see [`seed_key`] for how it becomes a key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub rows: Option<Value>,
    pub cols: Option<Value>,
    pub loop_ratio: Option<f64>,
    pub seed: Option<Value>,
}

impl GenerateRequest {
    pub fn from_json(body: &str) -> Result<Self, GenerateError> {
        serde_json::from_str(body)
            .map_err(|e| GenerateError::MalformedRequest { message: e.to_string() })
    }

    pub fn validate(&self) -> Result<MazeRequest, GenerateError> {
        let rows = dimension("rows", self.rows.as_ref())?;
        let cols = dimension("cols", self.cols.as_ref())?;
        let seed = seed_key(self.seed.as_ref())?;
        MazeRequest::new(rows, cols, seed, self.loop_ratio.unwrap_or(0.0))
    }
}

fn dimension(field: &'static str, value: Option<&Value>) -> Result<usize, GenerateError> {
    let Some(value) = value else {
        return Err(GenerateError::InvalidDimensions { field, message: "is required".to_string() });
    };
    whole_number(value)
        .and_then(|raw| usize::try_from(raw).ok())
        .filter(|&parsed| parsed > 0)
        .ok_or_else(|| GenerateError::InvalidDimensions {
            field,
            message: format!("must be a positive integer, got {value}"),
        })
}

/// Non-negative integral number, written either as `3` or `3.0`.
fn whole_number(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|&raw| raw.fract() == 0.0 && (0.0..u64::MAX as f64).contains(&raw))
            .map(|raw| raw as u64)
    })
}

/// Turns the request's `seed` into the generator key. `null` or absent means unseeded.
///
/// Integers keep their two's-complement bits, so `-1` and `18446744073709551615`
/// name the same maze, and `5.0` is the same seed as `5`. Other numbers key on
/// their IEEE-754 bits.
pub fn seed_key(value: Option<&Value>) -> Result<Option<u64>, GenerateError> {
    let Some(value) = value.filter(|value| !value.is_null()) else {
        return Ok(None);
    };
    let Some(number) = value.as_number() else {
        return Err(GenerateError::MalformedRequest {
            message: format!("seed must be a number, got {value}"),
        });
    };

    if let Some(key) = number.as_u64() {
        return Ok(Some(key));
    }
    if let Some(key) = number.as_i64() {
        return Ok(Some(key as u64));
    }
    let raw = number.as_f64().ok_or_else(|| GenerateError::MalformedRequest {
        message: format!("seed {number} is not representable"),
    })?;
    let key = if raw.fract() != 0.0 {
        raw.to_bits()
    } else if (0.0..u64::MAX as f64).contains(&raw) {
        raw as u64
    } else if (i64::MIN as f64..0.0).contains(&raw) {
        raw as i64 as u64
    } else {
        raw.to_bits()
    };
    Ok(Some(key))
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// `GET /maze/health`.
pub fn health() -> HealthStatus {
    HealthStatus { status: "ok" }
}

/// `POST /maze/generate`: parse, validate, generate.
pub fn handle_generate(body: &str) -> Result<MazeResult, GenerateError> {
    let request = GenerateRequest::from_json(body)?.validate()?;
    Ok(generate_request(&request))
}
