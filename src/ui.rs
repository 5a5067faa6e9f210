//! Terminal output helpers for the CLI path.
//!
//! Pure display functions; no prompts, no state. The library core never
//! prints — everything user-visible flows through here from `main`.

use console::style;

use crate::outcome::Outcome;

/// Print an error message in red to stderr.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a success message with a green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print an invocation outcome: reason, message, and any created branches.
pub fn display_outcome(outcome: &Outcome) {
    if let Some(reason) = outcome.reason {
        display_status(&format!("Reason: {}", reason));
    }

    if outcome.succeeded {
        display_success(&outcome.message);
    } else {
        display_error(&outcome.message);
    }

    for (branch, tag) in &outcome.data {
        println!("  {} -> {}", style(branch).bold(), tag);
    }
}
