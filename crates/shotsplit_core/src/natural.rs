// SPDX-License-Identifier: MIT OR Apache-2.0
//! Alphanumeric-aware name ordering.

use std::cmp::Ordering;

/// Compare two names treating embedded digit runs as numbers, so that
/// `"Cam2"` sorts before `"Cam10"`.
///
/// Names are split into alternating non-digit/digit runs; digit runs compare
/// by numeric value (any length, leading zeros tolerated), non-digit runs
/// compare lexically. Equal keys stay in their original order under a stable
/// sort.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut lhs = Tokens::new(a);
    let mut rhs = Tokens::new(b);
    loop {
        match (lhs.next(), rhs.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match compare_tokens(x, y) {
                Ordering::Equal => {}
                ordering => return ordering,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Digits(&'a str),
    Text(&'a str),
}

struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let split = self
            .rest
            .find(|c: char| c.is_ascii_digit() != digits)
            .unwrap_or(self.rest.len());
        let (run, rest) = self.rest.split_at(split);
        self.rest = rest;
        Some(if digits {
            Token::Digits(run)
        } else {
            Token::Text(run)
        })
    }
}

fn compare_tokens(a: Token<'_>, b: Token<'_>) -> Ordering {
    match (a, b) {
        (Token::Digits(x), Token::Digits(y)) => compare_digits(x, y),
        (Token::Text(x), Token::Text(y)) => x.cmp(y),
        // A digit run sorts before text at the same position
        (Token::Digits(_), Token::Text(_)) => Ordering::Less,
        (Token::Text(_), Token::Digits(_)) => Ordering::Greater,
    }
}

fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    // Longer run of significant digits means larger number
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
