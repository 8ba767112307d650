use super::*;

fn reply(command: &str) -> String {
    calculate(command).to_text(false, "\n\n")
}

#[test]
fn boss_alone_lists_four_strike_counts() {
    let text = reply("1500");
    assert!(text.contains("boss health=1500w"), "{text}");
    assert!(text.contains("strikes / damage for a full refund"), "{text}");
    for needed in ["64285745", "12162164", "6716419", "4639176"] {
        assert!(text.contains(needed), "missing {needed} in {text}");
    }
}

#[test]
fn two_plain_strikes_report_both_orders() {
    let text = reply("700 400");
    assert!(text.contains(
        "if 400w goes first, the second strike needs 12857149 damage (more than the boss has) for a full refund"
    ), "{text}");
    assert!(
        text.contains("if 400w goes second, the first strike needs 6066668 damage for a full refund"),
        "{text}"
    );
}

#[test]
fn two_plain_strikes_close_partial() {
    let text = reply("700 650");
    assert!(text.contains("needs 2142859 damage for a full refund"), "{text}");
    assert!(text.contains("needs 5483335 damage for a full refund"), "{text}");
    assert!(!text.contains("more than the boss has"), "{text}");
}

#[test]
fn overkill_strike_reports_refund_and_pad() {
    let text = reply("400 700");
    assert!(text.contains("refund 59s"), "{text}");
    assert!(
        text.contains("adding 2366668 damage first gives a full refund"),
        "{text}"
    );
}

#[test]
fn timed_kill_defaults_damage_to_boss_health() {
    let text = reply("700 1s");
    assert!(text.contains("damage=700w, 1s left"), "{text}");
    assert!(text.contains("used 89s, refunded 21s"), "{text}");
    assert!(
        text.contains("need 90s refunded to carry into the next boss, add 5348316 more damage"),
        "{text}"
    );
    // a 1s refund target is below the 21s floor, so no target block appears
    assert!(!text.contains("strikes / damage needed"), "{text}");
}

#[test]
fn carry_threshold_already_met() {
    let text = reply("700 36s");
    assert!(text.contains("used 54s, refunded 56s"), "{text}");
    assert!(
        text.contains("need 55s refunded to carry into the next boss, already enough"),
        "{text}"
    );
    assert!(
        text.contains("adding 4277780 damage first gives a full refund"),
        "{text}"
    );
}

#[test]
fn timed_kill_at_full_refund_needs_nothing() {
    let text = reply("700 70s");
    assert!(text.contains("used 20s, refunded 90s"), "{text}");
    assert!(!text.contains("carry into the next boss"), "{text}");
    assert!(!text.contains("full refund"), "{text}");
}

#[test]
fn ninety_seconds_left_only_reads_as_refund_target() {
    // the strike shape rejects 90s left, but the bare token is still a
    // valid refund target
    let text = reply("700 90s");
    assert!(!text.contains("damage="), "{text}");
    assert!(text.contains("expected refund=90s"), "{text}");
    assert!(text.contains("30000015"), "{text}");
}

#[test]
fn boss_health_exceeding_finishing_damage_is_an_error() {
    let outputs = calculate("800 700+35s");
    assert_eq!(outputs.severity(), OutputFlag::Error);
    let text = outputs.to_text(false, "\n\n");
    assert!(
        text.contains("boss health [8000000] exceeds finishing damage [7000000 with 35s left]"),
        "{text}"
    );
}

#[test]
fn five_tokens_ask_for_arithmetic() {
    let outputs = calculate("1 2 3 4 5");
    assert_eq!(outputs.severity(), OutputFlag::Info);
    assert!(
        outputs
            .to_text(false, "\n\n")
            .contains("too many parameters, use arithmetic to reduce them")
    );
}

#[test]
fn bad_token_aborts_the_whole_command() {
    let outputs = calculate("700 0");
    assert_eq!(outputs.severity(), OutputFlag::Error);
    assert!(outputs.to_text(false, "\n\n").contains("cannot parse [0]"));
}

#[test]
fn empty_command_yields_no_blocks() {
    assert!(calculate("").is_empty());
}

#[test]
fn two_strikes_summing_short_report_remaining_health() {
    let text = reply("700 200 300");
    assert!(text.contains("2000000 health remaining"), "{text}");
}

#[test]
fn two_equal_orders_collapse_to_one_line() {
    let text = reply("700 300 400");
    assert!(text.contains("either order refunds 20s"), "{text}");
}

#[test]
fn larger_strike_alone_kills() {
    let text = reply("700 300 800");
    assert!(
        text.contains("if [300w] goes first and [800w] second, refund 65s"),
        "{text}"
    );
    assert!(
        text.contains("if [800w] goes alone and [300w] is skipped, refund 90s"),
        "{text}"
    );
}

#[test]
fn both_strikes_killing_alone_is_rejected() {
    let text = reply("700 698 699");
    assert!(!text.contains("both strikes kill the boss"), "{text}");
    let text = reply("700 800 900");
    assert!(
        text.contains("both strikes kill the boss on their own, nothing to combine, check the input"),
        "{text}"
    );
}

#[test]
fn timed_kill_alone_suffices() {
    let text = reply("700 300 80s");
    assert!(
        text.contains("[700w, 80s left] alone already gives a full refund, skip [300w]"),
        "{text}"
    );
}

#[test]
fn refund_target_already_satisfied() {
    let text = reply("700 900 30s");
    assert!(text.contains("refunds 40s"), "{text}");
    assert!(text.contains("expected refund=30s, already satisfied"), "{text}");
}

#[test]
fn refund_target_needs_more_damage() {
    let text = reply("700 900 50s");
    assert!(
        text.contains("expected refund=50s, add 900001 more damage first"),
        "{text}"
    );
}

#[test]
fn partial_strike_against_refund_target_reports_both_orders() {
    let text = reply("700 300 80s");
    assert!(text.contains("if 300w goes second, add 5966667 damage first"), "{text}");
    assert!(
        text.contains("if 300w goes first, follow up with 11612907 damage"),
        "{text}"
    );
}
