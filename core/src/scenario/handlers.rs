//! One handler per pack-shape interpretation.
//!
//! A handler owns a fixed shape: it re-validates the raw packs against that
//! shape and yields an empty block when they do not fit, so the dispatcher
//! can try every interpretation for a given token count.

use crate::output::{Output, OutputFlag};
use crate::pack::{Pack, PackB, PackDT, PackE, fmt_magnitude};
use crate::solver::{LinExpr, solve_refund};

/// A full refund needs the clock value strictly past 89s.
const FULL_REFUND_THRESHOLD: i64 = 89;

fn fmt_solution(solution: Option<i64>) -> String {
    match solution {
        Some(value) => value.to_string(),
        None => "no solution".to_string(),
    }
}

/// Refund seconds never exceed the 90s clock.
fn capped(solution: Option<i64>) -> Option<i64> {
    solution.map(|s| s.min(90))
}

/// Boss health alone: damage needed on the i-th of up to four equal strikes
/// to reach the full-refund threshold.
pub(super) fn boss_only(packs: &[Pack]) -> Output {
    let [raw] = packs else {
        return Output::empty();
    };
    let Ok(boss) = PackB::try_from(raw) else {
        return Output::empty();
    };

    let mut lines = vec![
        boss.to_string(),
        "strikes / damage for a full refund".to_string(),
    ];
    for i in 1..=4i64 {
        let health_left = LinExpr::num(boss.d) - LinExpr::x() * (i - 1);
        let needed = solve_refund(
            LinExpr::just_above(FULL_REFUND_THRESHOLD),
            health_left,
            LinExpr::x(),
            0,
        );
        lines.push(format!("{i} \t {}", fmt_solution(needed)));
    }
    Output::new(OutputFlag::Succeed, lines.join("\n"))
}

/// Boss health plus one strike, timed or plain.
pub(super) fn boss_strike(packs: &[Pack]) -> Output {
    let [raw_b, raw_dt] = packs else {
        return Output::empty();
    };
    let Ok(boss) = PackB::try_from(raw_b) else {
        return Output::empty();
    };
    let Ok(mut strike) = PackDT::try_from(raw_dt) else {
        return Output::empty();
    };

    let mut lines = vec![boss.to_string(), strike.to_string()];

    match strike.t {
        None => {
            // plain damage, no clock: which order makes the pair whole?
            let Some(dealt) = strike.d else {
                return Output::empty();
            };
            if boss.d > dealt {
                let second = solve_refund(
                    LinExpr::just_above(FULL_REFUND_THRESHOLD),
                    boss.d - dealt,
                    LinExpr::x(),
                    0,
                );
                match second {
                    Some(v) if v >= boss.d => lines.push(format!(
                        "if {} goes first, the second strike needs {v} damage (more than the boss has) for a full refund",
                        fmt_magnitude(dealt)
                    )),
                    _ => lines.push(format!(
                        "if {} goes first, the second strike needs {} damage for a full refund",
                        fmt_magnitude(dealt),
                        fmt_solution(second)
                    )),
                }
                let first = solve_refund(
                    LinExpr::just_above(FULL_REFUND_THRESHOLD),
                    LinExpr::num(boss.d) - LinExpr::x(),
                    dealt,
                    0,
                );
                lines.push(format!(
                    "if {} goes second, the first strike needs {} damage for a full refund",
                    fmt_magnitude(dealt),
                    fmt_solution(first)
                ));
            } else {
                let refunded = capped(solve_refund(LinExpr::x(), boss.d, dealt, 0));
                lines.push(format!("refund {}s", fmt_solution(refunded)));
                if refunded.is_some_and(|r| r < 90) {
                    let pad = solve_refund(
                        LinExpr::just_above(FULL_REFUND_THRESHOLD),
                        LinExpr::num(boss.d) - LinExpr::x(),
                        dealt,
                        0,
                    );
                    lines.push(format!(
                        "adding {} damage first gives a full refund",
                        fmt_solution(pad)
                    ));
                }
            }
        }
        Some(seconds_left) => {
            if strike.d.is_none() {
                strike.fill_damage(boss.d);
                lines = vec![boss.to_string(), strike.to_string()];
            }
            let Some(dealt) = strike.d else {
                return Output::empty();
            };

            if boss.d > dealt {
                return Output::new(
                    OutputFlag::Error,
                    format!(
                        "invalid parameters: boss health [{}] exceeds finishing damage [{} with {}s left]",
                        boss.d, dealt, seconds_left
                    ),
                );
            }

            let refunded = capped(solve_refund(LinExpr::x(), boss.d, dealt, seconds_left));
            let used = 90 - seconds_left;
            lines.push(format!("used {used}s, refunded {}s", fmt_solution(refunded)));

            if refunded.is_some_and(|r| r < 90) {
                if dealt == boss.d {
                    // killing exactly on the number: can the refund carry
                    // the attempt into the next boss?
                    let carry = used + 1;
                    if refunded.is_some_and(|r| r >= carry) {
                        lines.push(format!(
                            "need {carry}s refunded to carry into the next boss, already enough"
                        ));
                    } else {
                        let extra = solve_refund(
                            LinExpr::just_above(used),
                            LinExpr::num(boss.d) - LinExpr::x(),
                            dealt,
                            seconds_left,
                        );
                        lines.push(format!(
                            "need {carry}s refunded to carry into the next boss, add {} more damage",
                            fmt_solution(extra)
                        ));
                    }
                }
                let pad = solve_refund(
                    LinExpr::just_above(FULL_REFUND_THRESHOLD),
                    LinExpr::num(boss.d) - LinExpr::x(),
                    dealt,
                    seconds_left,
                );
                lines.push(format!(
                    "adding {} damage first gives a full refund",
                    fmt_solution(pad)
                ));
            }
        }
    }
    Output::new(OutputFlag::Succeed, lines.join("\n"))
}

/// Boss health plus a refund target: damage per strike for up to three
/// strikes.
pub(super) fn boss_refund_target(packs: &[Pack]) -> Output {
    let [raw_b, raw_e] = packs else {
        return Output::empty();
    };
    let Ok(boss) = PackB::try_from(raw_b) else {
        return Output::empty();
    };
    let Ok(target) = PackE::try_from(raw_e) else {
        return Output::empty();
    };

    let mut lines = vec![
        boss.to_string(),
        target.to_string(),
        "strikes / damage needed".to_string(),
    ];
    for i in 1..=3i64 {
        let health_left = LinExpr::num(boss.d) - LinExpr::x() * (i - 1);
        let needed = solve_refund(
            LinExpr::just_above(target.t - 1),
            health_left,
            LinExpr::x(),
            0,
        );
        lines.push(format!("{i} \t {}", fmt_solution(needed)));
    }
    Output::new(OutputFlag::Succeed, lines.join("\n"))
}

/// Boss health plus two strikes, at most one of them timed.
pub(super) fn boss_two_strikes(packs: &[Pack]) -> Output {
    let [raw_b, raw_1, raw_2] = packs else {
        return Output::empty();
    };
    let Ok(boss) = PackB::try_from(raw_b) else {
        return Output::empty();
    };
    let Ok(first) = PackDT::try_from(raw_1) else {
        return Output::empty();
    };
    let Ok(second) = PackDT::try_from(raw_2) else {
        return Output::empty();
    };

    if first.t.is_some() && second.t.is_some() {
        return Output::empty();
    }
    if first.t.is_none() && second.t.is_none() {
        return two_plain_strikes(boss, first, second);
    }
    one_timed_strike(boss, first, second)
}

fn two_plain_strikes(boss: PackB, first: PackDT, second: PackDT) -> Output {
    let (Some(d1), Some(d2)) = (first.d, second.d) else {
        return Output::empty();
    };
    let smaller = d1.min(d2);
    let larger = d1.max(d2);
    let combined = smaller as i128 + larger as i128;

    let mut lines = vec![
        boss.to_string(),
        format!("{first} | {}", second.value_text()),
    ];

    if smaller >= boss.d {
        lines.push(
            "both strikes kill the boss on their own, nothing to combine, check the input"
                .to_string(),
        );
    } else if combined < boss.d as i128 {
        lines.push(format!("{} health remaining", boss.d as i128 - combined));
    } else {
        let smaller_first = capped(solve_refund(LinExpr::x(), boss.d - smaller, larger, 0));
        let larger_first = capped(solve_refund(LinExpr::x(), boss.d - larger, smaller, 0));
        if larger < boss.d {
            if smaller_first == larger_first {
                lines.push(format!("either order refunds {}s", fmt_solution(smaller_first)));
            } else {
                lines.push(format!(
                    "if [{}] goes first and [{}] second, refund {}s",
                    fmt_magnitude(smaller),
                    fmt_magnitude(larger),
                    fmt_solution(smaller_first)
                ));
                lines.push(format!(
                    "if [{}] goes first and [{}] second, refund {}s",
                    fmt_magnitude(larger),
                    fmt_magnitude(smaller),
                    fmt_solution(larger_first)
                ));
            }
        } else {
            lines.push(format!(
                "if [{}] goes first and [{}] second, refund {}s",
                fmt_magnitude(smaller),
                fmt_magnitude(larger),
                fmt_solution(smaller_first)
            ));
            lines.push(format!(
                "if [{}] goes alone and [{}] is skipped, refund {}s",
                fmt_magnitude(larger),
                fmt_magnitude(smaller),
                fmt_solution(larger_first)
            ));
        }
    }
    Output::new(OutputFlag::Succeed, lines.join("\n"))
}

fn one_timed_strike(boss: PackB, first: PackDT, second: PackDT) -> Output {
    // normalize order: plain strike first, timed strike second
    let (plain, mut timed) = if second.t.is_none() {
        (second, first)
    } else {
        (first, second)
    };
    timed.fill_damage(boss.d);

    let (Some(plain_d), Some(timed_d), Some(seconds_left)) = (plain.d, timed.d, timed.t) else {
        return Output::empty();
    };

    let mut lines = vec![
        boss.to_string(),
        format!("{plain} | {}", timed.value_text()),
    ];

    if plain_d >= boss.d {
        return Output::empty();
    }
    if timed_d < boss.d {
        lines.push("invalid parameters: boss health exceeds finishing damage".to_string());
    } else {
        let plain_first = capped(solve_refund(
            LinExpr::x(),
            boss.d - plain_d,
            timed_d,
            seconds_left,
        ));
        let timed_alone = capped(solve_refund(LinExpr::x(), boss.d, timed_d, seconds_left));
        if timed_alone == Some(90) {
            lines.push(format!(
                "[{}] alone already gives a full refund, skip [{}]",
                timed.value_text(),
                fmt_magnitude(plain_d)
            ));
        } else {
            lines.push(format!(
                "if [{}] goes first and [{}] second, refund {}s",
                fmt_magnitude(plain_d),
                timed.value_text(),
                fmt_solution(plain_first)
            ));
            lines.push(format!(
                "if [{}] goes alone and [{}] is skipped, refund {}s",
                timed.value_text(),
                fmt_magnitude(plain_d),
                fmt_solution(timed_alone)
            ));
        }
    }
    Output::new(OutputFlag::Succeed, lines.join("\n"))
}

/// Boss health, one strike, and a refund target.
pub(super) fn boss_strike_refund_target(packs: &[Pack]) -> Output {
    let [raw_b, raw_dt, raw_e] = packs else {
        return Output::empty();
    };
    let Ok(boss) = PackB::try_from(raw_b) else {
        return Output::empty();
    };
    let Ok(mut strike) = PackDT::try_from(raw_dt) else {
        return Output::empty();
    };
    let Ok(target) = PackE::try_from(raw_e) else {
        return Output::empty();
    };

    strike.fill_damage(boss.d);
    let Some(dealt) = strike.d else {
        return Output::empty();
    };

    if let Some(seconds_left) = strike.t
        && dealt < boss.d
    {
        return Output::new(
            OutputFlag::Error,
            format!(
                "invalid parameters: boss health [{}] exceeds finishing damage [{} with {}s left]",
                boss.d, dealt, seconds_left
            ),
        );
    }

    if dealt >= boss.d {
        let refunded = capped(solve_refund(
            LinExpr::x(),
            boss.d,
            dealt,
            strike.t.unwrap_or(0),
        ));
        let mut lines = vec![
            boss.to_string(),
            format!("{strike} (refunds {}s)", fmt_solution(refunded)),
        ];
        if refunded.is_some_and(|r| r >= target.t) {
            lines.push(format!("{target}, already satisfied"));
        } else {
            let extra = solve_refund(
                LinExpr::just_above(target.t - 1),
                LinExpr::num(boss.d) - LinExpr::x(),
                dealt,
                strike.t.unwrap_or(0),
            );
            lines.push(format!(
                "{target}, add {} more damage first",
                fmt_solution(extra)
            ));
        }
        Output::new(OutputFlag::Succeed, lines.join("\n"))
    } else {
        // plain strike short of the kill: pad before it or chase after it
        let mut lines = vec![boss.to_string(), strike.to_string(), target.to_string()];
        let before = solve_refund(
            LinExpr::just_above(target.t - 1),
            LinExpr::num(boss.d) - LinExpr::x(),
            dealt,
            0,
        );
        lines.push(format!(
            "if {} goes second, add {} damage first",
            fmt_magnitude(dealt),
            fmt_solution(before)
        ));
        let after = solve_refund(
            LinExpr::just_above(target.t - 1),
            boss.d - dealt,
            LinExpr::x(),
            0,
        );
        lines.push(format!(
            "if {} goes first, follow up with {} damage",
            fmt_magnitude(dealt),
            fmt_solution(after)
        ));
        Output::new(OutputFlag::Succeed, lines.join("\n"))
    }
}
