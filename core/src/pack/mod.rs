//! Strike packs: the validated value objects one command token becomes.
//!
//! A raw [`Pack`] is whatever the parser could read out of a token. The
//! typed shapes ([`PackB`], [`PackDT`], [`PackE`]) narrow a raw pack to one
//! scenario role, each with its own validation.

use std::fmt;

use thiserror::Error;

use crate::expr::ExprError;

mod parser;


/// Raised whenever a token cannot become a valid pack.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PackError {
    #[error("no usable fields")]
    NoFields,

    #[error("magnitude [{0}] out of range")]
    MagnitudeRange(i64),

    #[error("duration [{0}] out of range")]
    DurationRange(i64),

    #[error("cannot read [{token}] as a magnitude: {source}")]
    Magnitude {
        token: String,
        #[source]
        source: ExprError,
    },

    #[error("cannot read [{token}] as a duration: {source}")]
    Duration {
        token: String,
        #[source]
        source: ExprError,
    },

    #[error("boss health entry is missing its magnitude")]
    MissingMagnitude,

    #[error("boss health entry cannot carry a duration ({0}s)")]
    UnexpectedDuration(i64),

    #[error("a finishing strike cannot leave exactly {0}s on the clock")]
    ReservedDuration(i64),

    #[error("expected refund entry is missing its duration")]
    MissingDuration,

    #[error("expected refund entry cannot carry a magnitude ({0})")]
    UnexpectedMagnitude(i64),

    #[error("expected refund must be at least 21s, got {0}s")]
    RefundTooSmall(i64),
}

/// Magnitudes are usually whole multiples of 10,000; render those as "w".
pub(crate) fn fmt_magnitude(d: i64) -> String {
    if d % 10_000 == 0 {
        format!("{}w", d / 10_000)
    } else {
        d.to_string()
    }
}

/// Untyped pack fresh out of the parser: a magnitude, a duration, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pack {
    pub d: Option<i64>,
    pub t: Option<i64>,
}

impl Pack {
    pub fn new(d: Option<i64>, t: Option<i64>) -> Result<Self, PackError> {
        let pack = Self { d, t };
        pack.verify()?;
        Ok(pack)
    }

    fn verify(&self) -> Result<(), PackError> {
        if self.d.is_none() && self.t.is_none() {
            return Err(PackError::NoFields);
        }
        if let Some(d) = self.d
            && d <= 0
        {
            return Err(PackError::MagnitudeRange(d));
        }
        if let Some(t) = self.t
            && !(1..=90).contains(&t)
        {
            return Err(PackError::DurationRange(t));
        }
        Ok(())
    }
}

/// Boss health: the total damage required to defeat the encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackB {
    pub d: i64,
}

impl TryFrom<&Pack> for PackB {
    type Error = PackError;

    fn try_from(pack: &Pack) -> Result<Self, PackError> {
        let Some(d) = pack.d else {
            return Err(PackError::MissingMagnitude);
        };
        if let Some(t) = pack.t {
            return Err(PackError::UnexpectedDuration(t));
        }
        Ok(Self { d })
    }
}

impl fmt::Display for PackB {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "boss health={}", fmt_magnitude(self.d))
    }
}

/// Damage dealt, optionally with time left on the clock when the boss died.
///
/// An absent magnitude means "killed outright"; a handler back-fills it with
/// the boss's health before any math runs. A strike cannot finish with
/// exactly 90s left, so that duration is rejected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackDT {
    pub d: Option<i64>,
    pub t: Option<i64>,
}

impl PackDT {
    /// One-time default fill for the "kill" form.
    pub fn fill_damage(&mut self, boss_health: i64) {
        if self.d.is_none() {
            self.d = Some(boss_health);
        }
    }

    /// The value part of the display form, without the field label.
    pub fn value_text(&self) -> String {
        let mut text = match self.d {
            None => "kill".to_string(),
            Some(d) => fmt_magnitude(d),
        };
        if let Some(t) = self.t {
            text.push_str(&format!(", {t}s left"));
        }
        text
    }
}

impl TryFrom<&Pack> for PackDT {
    type Error = PackError;

    fn try_from(pack: &Pack) -> Result<Self, PackError> {
        if let Some(t) = pack.t
            && t == 90
        {
            return Err(PackError::ReservedDuration(t));
        }
        Ok(Self {
            d: pack.d,
            t: pack.t,
        })
    }
}

impl fmt::Display for PackDT {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "damage={}", self.value_text())
    }
}

/// Refund target: how many bonus seconds the next attempt should receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackE {
    pub t: i64,
}

impl TryFrom<&Pack> for PackE {
    type Error = PackError;

    fn try_from(pack: &Pack) -> Result<Self, PackError> {
        if let Some(d) = pack.d {
            return Err(PackError::UnexpectedMagnitude(d));
        }
        let Some(t) = pack.t else {
            return Err(PackError::MissingDuration);
        };
        if t < 21 {
            return Err(PackError::RefundTooSmall(t));
        }
        Ok(Self { t })
    }
}

impl fmt::Display for PackE {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected refund={}s", self.t)
    }
}
