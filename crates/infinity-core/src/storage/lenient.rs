//! Tolerant decoding helpers for persisted documents.
//!
//! Older documents were written by a loosely typed frontend, so numbers may
//! arrive as strings (`"1200"`) or floats (`3600.0`). These helpers accept all
//! of those shapes.

use serde::de::{self, Deserializer};
use serde::Deserialize;

/// A JSON scalar that should be read as a number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Num {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Num {
    pub fn as_f64(&self) -> Option<f64> {
        let v = match self {
            Num::Int(n) => *n as f64,
            Num::Float(f) => *f,
            Num::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        v.is_finite().then_some(v)
    }

    /// Non-negative integer view; fractions are floored.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Num::Int(n) => u64::try_from(*n).ok(),
            _ => {
                let f = self.as_f64()?;
                (f >= 0.0).then(|| f.floor() as u64)
            }
        }
    }
}

/// Read an optional raw number as `u64`, falling back to `default` when it is
/// missing or unusable.
pub fn u64_or(raw: Option<&Num>, default: u64) -> u64 {
    raw.and_then(Num::as_u64).unwrap_or(default)
}

/// `deserialize_with` target for required non-negative integers.
pub fn number_u64<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
    let raw = Num::deserialize(d)?;
    raw.as_u64()
        .ok_or_else(|| de::Error::custom(format!("expected a non-negative number, got {raw:?}")))
}

/// `deserialize_with` target for required finite floats.
pub fn number_f64<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    let raw = Num::deserialize(d)?;
    raw.as_f64()
        .ok_or_else(|| de::Error::custom(format!("expected a number, got {raw:?}")))
}
