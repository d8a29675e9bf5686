// SPDX-License-Identifier: MIT OR Apache-2.0
//! User interaction surface.

use std::collections::VecDeque;

/// Synchronous, blocking user prompts.
///
/// The session never talks to a UI directly; it asks through this trait so
/// the pipeline runs the same against a host dialog, a console, or a script.
pub trait Dialogs {
    /// Ask a yes/no question
    fn confirm(&mut self, question: &str) -> bool;

    /// Show an informational message
    fn notify(&mut self, message: &str);
}

/// Scripted dialogs: answers come from a fixed queue, every prompt is
/// recorded. Unanswered questions default to "no".
#[derive(Debug, Default)]
pub struct ScriptedDialogs {
    answers: VecDeque<bool>,
    /// Questions asked so far
    pub questions: Vec<String>,
    /// Messages shown so far
    pub messages: Vec<String>,
}

impl ScriptedDialogs {
    /// Create with a queue of answers, consumed front to back
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            questions: Vec::new(),
            messages: Vec::new(),
        }
    }
}

impl Dialogs for ScriptedDialogs {
    fn confirm(&mut self, question: &str) -> bool {
        self.questions.push(question.to_string());
        self.answers.pop_front().unwrap_or(false)
    }

    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
