use std::fmt::Display;

use colored::*;
use serde::Serialize;
use tracing::info;

pub const TOTAL_WIDTH: usize = 48;
pub const PRINT_TARGET: &str = "ipgen::print";

/// Decorative output. Routed through tracing so it lands on stderr next to
/// the logs and never mixes into piped results.
pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

/// A result line on stdout.
pub fn output<T: Display>(line: T) {
    println!("{line}");
}

pub fn json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
