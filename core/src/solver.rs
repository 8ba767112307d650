//! The carry-over relation and its one-unknown solver.
//!
//! Every scenario reduces to `e = 110 - (90 - t) * b / d` with exactly one
//! quantity carrying the unknown, at most linearly. Multiplying through by
//! `d` turns the relation into `A*x + B = 0`, which is solved exactly over
//! rationals so the ceiling rounding matches the algebra.

use std::ops::{Add, Div, Mul, Neg, Sub};

/// Nudges threshold values off the integer grid (see [`LinExpr::just_above`]).
const EPSILON: Ratio = Ratio {
    num: 1,
    den: 100_000,
};

/// Exact rational. Kept reduced, denominator always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Ratio {
    num: i128,
    den: i128,
}

impl Ratio {
    const ZERO: Ratio = Ratio { num: 0, den: 1 };

    fn new(num: i128, den: i128) -> Self {
        debug_assert!(den != 0);
        let sign = if den < 0 { -1 } else { 1 };
        let g = gcd(num.unsigned_abs(), den.unsigned_abs()) as i128;
        Ratio {
            num: sign * (num / g),
            den: sign * (den / g),
        }
    }

    fn from_int(value: i128) -> Self {
        Ratio { num: value, den: 1 }
    }

    fn is_zero(self) -> bool {
        self.num == 0
    }

    /// Exact ceiling: `ceil(n/d) = -floor(-n/d)` with `d > 0`.
    fn ceil(self) -> i128 {
        -((-self.num).div_euclid(self.den))
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl Add for Ratio {
    type Output = Ratio;

    fn add(self, rhs: Ratio) -> Ratio {
        Ratio::new(self.num * rhs.den + rhs.num * self.den, self.den * rhs.den)
    }
}

impl Sub for Ratio {
    type Output = Ratio;

    fn sub(self, rhs: Ratio) -> Ratio {
        self + (-rhs)
    }
}

impl Mul for Ratio {
    type Output = Ratio;

    fn mul(self, rhs: Ratio) -> Ratio {
        Ratio::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl Div for Ratio {
    type Output = Ratio;

    fn div(self, rhs: Ratio) -> Ratio {
        Ratio::new(self.num * rhs.den, self.den * rhs.num)
    }
}

impl Neg for Ratio {
    type Output = Ratio;

    fn neg(self) -> Ratio {
        Ratio {
            num: -self.num,
            den: self.den,
        }
    }
}

/// At most linear in the unknown: `a*x + b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinExpr {
    a: Ratio,
    b: Ratio,
}

impl LinExpr {
    /// The bare unknown.
    pub fn x() -> Self {
        LinExpr {
            a: Ratio::from_int(1),
            b: Ratio::ZERO,
        }
    }

    pub fn num(value: i64) -> Self {
        LinExpr {
            a: Ratio::ZERO,
            b: Ratio::from_int(value as i128),
        }
    }

    /// `value + ε`: the threshold nudged off the integer grid, so a ceiling
    /// solve lands on the smallest integer strictly past it when needed.
    pub fn just_above(value: i64) -> Self {
        LinExpr {
            a: Ratio::ZERO,
            b: Ratio::from_int(value as i128) + EPSILON,
        }
    }

    /// Product, failing when the result would leave the linear space.
    fn checked_mul(self, rhs: LinExpr) -> Option<LinExpr> {
        if !self.a.is_zero() && !rhs.a.is_zero() {
            return None;
        }
        Some(LinExpr {
            a: self.a * rhs.b + rhs.a * self.b,
            b: self.b * rhs.b,
        })
    }
}

impl From<i64> for LinExpr {
    fn from(value: i64) -> Self {
        LinExpr::num(value)
    }
}

impl Add for LinExpr {
    type Output = LinExpr;

    fn add(self, rhs: LinExpr) -> LinExpr {
        LinExpr {
            a: self.a + rhs.a,
            b: self.b + rhs.b,
        }
    }
}

impl Sub for LinExpr {
    type Output = LinExpr;

    fn sub(self, rhs: LinExpr) -> LinExpr {
        LinExpr {
            a: self.a - rhs.a,
            b: self.b - rhs.b,
        }
    }
}

impl Mul<i64> for LinExpr {
    type Output = LinExpr;

    fn mul(self, rhs: i64) -> LinExpr {
        let k = Ratio::from_int(rhs as i128);
        LinExpr {
            a: self.a * k,
            b: self.b * k,
        }
    }
}

/// Solve `e = 110 - (90 - t) * b / d` for the unknown, rounding up.
///
/// Returns `None` when the unknown cancels out (no solution for it) or the
/// inputs leave the linear space.
pub fn solve_refund(
    e: impl Into<LinExpr>,
    b: impl Into<LinExpr>,
    d: impl Into<LinExpr>,
    t: impl Into<LinExpr>,
) -> Option<i64> {
    let (e, b, d, t) = (e.into(), b.into(), d.into(), t.into());

    // multiplied through by d: e*d - 110*d + (90 - t)*b = 0
    let refund_share = (LinExpr::num(90) - t).checked_mul(b)?;
    let relation = e.checked_mul(d)? - d * 110 + refund_share;

    if relation.a.is_zero() {
        return None;
    }
    i64::try_from(((-relation.b) / relation.a).ceil()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refund_at_exact_boundary() {
        // damage equals health with 70s left: 110 - 20 = 90
        assert_eq!(solve_refund(LinExpr::x(), 7_000_000, 7_000_000, 70), Some(90));
    }

    #[test]
    fn refund_with_double_damage() {
        // 110 - 90/2 = 65
        assert_eq!(solve_refund(LinExpr::x(), 7_000_000, 14_000_000, 0), Some(65));
    }

    #[test]
    fn threshold_damage_feeds_back_to_full_refund() {
        let boss = 15_000_000;
        let needed = solve_refund(LinExpr::just_above(89), boss, LinExpr::x(), 0);
        assert_eq!(needed, Some(64_285_745));
        let refund = solve_refund(LinExpr::x(), boss, needed.unwrap(), 0);
        assert_eq!(refund.map(|r| r.min(90)), Some(90));
    }

    #[test]
    fn unknown_in_health_term() {
        let needed = solve_refund(
            LinExpr::just_above(89),
            LinExpr::num(7_000_000) - LinExpr::x(),
            7_000_000,
            0,
        );
        assert_eq!(needed, Some(5_366_668));
    }

    #[test]
    fn monotonic_in_damage() {
        let boss = 7_000_000;
        let mut last = i64::MIN;
        for damage in (7_000_000..=21_000_000).step_by(500_000) {
            let refund = solve_refund(LinExpr::x(), boss, damage, 0).unwrap();
            assert!(refund >= last, "refund dropped at damage {damage}");
            last = refund;
        }
    }

    #[test]
    fn no_unknown_means_no_solution() {
        assert_eq!(solve_refund(90, 7_000_000, 7_000_000, 70), None);
    }

    #[test]
    fn ceiling_is_exact_on_integers() {
        // 110 - 90*(7/10) = 47 exactly; float math would wobble here
        assert_eq!(solve_refund(LinExpr::x(), 7_000_000, 10_000_000, 0), Some(47));
    }
}
