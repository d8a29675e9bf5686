// SPDX-License-Identifier: MIT OR Apache-2.0
//! Console-backed dialogs.

use shotsplit_core::Dialogs;
use std::io::{self, BufRead, Write};

/// Answers dialog prompts over stdin/stdout.
pub struct ConsoleDialogs;

impl Dialogs for ConsoleDialogs {
    fn confirm(&mut self, question: &str) -> bool {
        println!("{question}");
        print!("[y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim(), "y" | "Y" | "yes" | "Yes")
    }

    fn notify(&mut self, message: &str) {
        println!("{message}");
    }
}
