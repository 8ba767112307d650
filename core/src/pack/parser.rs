//! Token deserialization: one whitespace-delimited command token becomes a
//! raw pack.
//!
//! Accepted magnitude forms: `1000`, `1000w`, `1000W`, `1000万`, `10000000`,
//! `1500-500`. Accepted duration forms: `30`, `30s`, `30S`, `30秒`, `15+15s`.
//! Combined form: `800+55s`. Unitless values up to 90 read as seconds,
//! anything larger as a magnitude; magnitudes below 10,000 are given in
//! units of ten-thousand.

use std::str::FromStr;

use memchr::memchr;
use phf::phf_map;

use super::{Pack, PackError};
use crate::expr;

/// Accepted unit spellings collapse to one canonical marker each.
static UNIT_ALIASES: phf::Map<char, char> = phf_map! {
    'W' => 'w',
    '万' => 'w',
    'S' => 's',
    '秒' => 's',
};

const UNIT_SCALE: i64 = 10_000;

/// Magnitudes below the unit scale are given in units of ten-thousand.
fn auto_scale(d: i64) -> i64 {
    if d < UNIT_SCALE { d * UNIT_SCALE } else { d }
}

fn normalize(token: &str) -> String {
    token
        .chars()
        .map(|c| *UNIT_ALIASES.get(&c).unwrap_or(&c))
        .collect()
}

/// Exact `<int>+<int>s` form: damage plus seconds left on the clock.
fn parse_combined(token: &str) -> Option<(i64, i64)> {
    let plus = memchr(b'+', token.as_bytes())?;
    let magnitude = &token[..plus];
    let seconds = token[plus + 1..].strip_suffix('s')?;
    if magnitude.is_empty() || seconds.is_empty() {
        return None;
    }
    if !magnitude.bytes().all(|b| b.is_ascii_digit())
        || !seconds.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    Some((magnitude.parse().ok()?, seconds.parse().ok()?))
}

impl FromStr for Pack {
    type Err = PackError;

    fn from_str(token: &str) -> Result<Self, PackError> {
        let normalized = normalize(token);

        if let Some((d, t)) = parse_combined(&normalized) {
            return Pack::new(Some(auto_scale(d)), Some(t));
        }

        // duration only: strip the marker, evaluate the rest
        if normalized.contains('s') {
            let t = expr::eval(&normalized.replace('s', "")).map_err(|source| {
                PackError::Duration {
                    token: token.to_string(),
                    source,
                }
            })?;
            return Pack::new(None, Some(t));
        }

        // magnitude only: the unit marker stands for four zero digits
        if normalized.contains('w') {
            let d = expr::eval(&normalized.replace('w', "0000")).map_err(|source| {
                PackError::Magnitude {
                    token: token.to_string(),
                    source,
                }
            })?;
            return Pack::new(Some(auto_scale(d)), None);
        }

        // unitless: small values are seconds, everything else damage
        let value = expr::eval(&normalized).map_err(|source| PackError::Magnitude {
            token: token.to_string(),
            source,
        })?;
        if value <= 90 {
            Pack::new(None, Some(value))
        } else {
            Pack::new(Some(auto_scale(value)), None)
        }
    }
}
