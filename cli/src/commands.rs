use std::io::Write;

use finisher_core::OutputFlag;

use crate::context::CliContext;

/// Token grammar crib sheet, shown when there is nothing else to say.
const HELP: &str = "\
boss carry-over calculator

tokens (whitespace separated, up to three):
  boss health   700 | 700w | 700W | 700万 | 1500-500   (values below 10000 scale by 10000)
  damage        same forms; the first token is always the boss
  time left     30 | 30s | 30S | 30秒 | 15+15s          (bare integers up to 90 read as seconds)
  combined      800+55s                                  (damage, then seconds left)

examples:
  cal 1500              damage per strike for a full refund
  cal 700 400           two plain strikes, both orders
  cal 700 750+20s       refund for a finishing strike with 20s left
  cal 700 300 80s       pad strike plus a timed kill
  cal 1000-750 700 85s  damage still needed for an 85s refund";

pub fn calculate(text: &str, ctx: &CliContext) {
    if text.trim().is_empty() {
        println!("{HELP}");
        return;
    }
    let outputs = finisher_core::calculate(text);
    let reply = outputs.to_text(ctx.config.show_severity_labels, &ctx.config.block_separator);
    if reply.is_empty() {
        println!("{HELP}");
    } else if outputs.severity() >= OutputFlag::Error {
        eprintln!("{reply}");
    } else {
        println!("{reply}");
    }
}

pub fn show_settings(ctx: &CliContext) {
    println!("show_severity_labels = {}", ctx.config.show_severity_labels);
    println!("block_separator = {:?}", ctx.config.block_separator);
}

pub fn exit() {
    write!(std::io::stdout(), "quitting...").expect("error exiting");
    std::io::stdout().flush().expect("error flushing stdout");
}
