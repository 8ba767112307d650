//! Scenario selection: how many packs arrived decides which handlers run.

mod handlers;

#[cfg(test)]
mod tests;

use crate::output::{Output, OutputFlag, Outputs};
use crate::pack::Pack;

/// Shown when more tokens arrive than any scenario can take.
const TOO_MANY_PARAMETERS: &str = "too many parameters, use arithmetic to reduce them
example: boss health 1000w, strikes of 750w and 700w already landed, damage still needed for an 85s refund:
cal 1000-750 700 85s";

/// Run the calculator over one raw command string.
///
/// Tokens are whitespace-delimited; the first token that fails to parse
/// aborts the whole command. With a valid pack list, every handler whose
/// shape interpretation validates contributes one block to the reply.
pub fn calculate(command: &str) -> Outputs {
    let mut packs: Vec<Pack> = Vec::new();
    for token in command.split_whitespace() {
        match token.parse::<Pack>() {
            Ok(pack) => packs.push(pack),
            Err(err) => {
                return Outputs::from_entry(
                    OutputFlag::Error,
                    format!("cannot parse [{token}]: {err}"),
                );
            }
        }
    }
    tracing::debug!(count = packs.len(), "dispatching parsed packs");

    let mut outputs = Outputs::new();
    match packs.len() {
        0 => {}
        1 => outputs.push(handlers::boss_only(&packs)),
        2 => {
            outputs.push(handlers::boss_strike(&packs));
            outputs.push(handlers::boss_refund_target(&packs));
        }
        3 => {
            outputs.push(handlers::boss_two_strikes(&packs));
            outputs.push(handlers::boss_strike_refund_target(&packs));
        }
        _ => outputs.push(Output::new(OutputFlag::Info, TOO_MANY_PARAMETERS)),
    }
    outputs
}
