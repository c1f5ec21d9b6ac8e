//! Static safety screening for match patterns.
//!
//! `LIKE` and `REGEXP_MATCH` patterns are caller-supplied and evaluated
//! by a remote engine, so a hostile pattern is a denial-of-service
//! vector even though it can never inject syntax (the body is escaped
//! like any string literal). [`check_pattern`] rejects the classic
//! catastrophic-backtracking shapes before they leave this process:
//!
//! - patterns longer than [`MAX_PATTERN_LENGTH`](crate::limits::MAX_PATTERN_LENGTH) characters
//! - adjacent unbounded quantifiers: two `.*`/`.+` in a row, or three
//!   or more `\w*`/`\w+` in a row
//! - bounded repetitions with a count of [`REPETITION_THRESHOLD`] or more
//! - alternations whose branches are the same unbounded expression
//!   (`.*|.*`, `.+|.+`)
//! - parenthesis nesting deeper than [`MAX_PATTERN_DEPTH`](crate::limits::MAX_PATTERN_DEPTH) levels
//!
//! This is a textual heuristic, not a regex engine: it proves nothing
//! about evaluation cost, it only refuses the shapes known to blow up.
//! Ordinary anchors, classes, and single unbounded quantifiers pass
//! untouched.

use crate::error::{GaqlError, GaqlResult};
use crate::limits::{MAX_PATTERN_DEPTH, MAX_PATTERN_LENGTH};

/// Bounded repetitions at or above this count are rejected.
pub const REPETITION_THRESHOLD: u64 = 100;

/// Check whether a match pattern passes the safety screen.
pub fn is_pattern_safe(pattern: &str) -> bool {
    check_pattern(pattern).is_ok()
}

/// Screen a match pattern, raising a security error on the first
/// rejected construct.
pub fn check_pattern(pattern: &str) -> GaqlResult<()> {
    let length = pattern.chars().count();
    if length > MAX_PATTERN_LENGTH {
        return Err(GaqlError::security(
            format!("a pattern of at most {MAX_PATTERN_LENGTH} characters"),
            format!("{length} characters"),
        ));
    }

    // Grouping parens do not change what an alternation branch matches,
    // so flatten them before looking for duplicate unbounded branches.
    let flat: String = pattern.chars().filter(|c| !matches!(c, '(' | ')')).collect();
    if flat.contains(".*|.*") || flat.contains(".+|.+") {
        return Err(GaqlError::security(
            "a pattern without identical unbounded alternation branches",
            format!("'{pattern}'"),
        ));
    }

    scan(pattern)
}

/// Single pass over the pattern: tracks quantifier runs, repetition
/// counts, and nesting depth. Escapes are consumed as two-char tokens
/// so `\.` and `\\` are never mistaken for metacharacters.
fn scan(pattern: &str) -> GaqlResult<()> {
    let mut chars = pattern.chars().peekable();
    let mut depth: usize = 0;
    let mut dot_run: usize = 0;
    let mut word_run: usize = 0;

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if chars.peek() == Some(&'w') {
                    chars.next();
                    if matches!(chars.peek(), Some('*') | Some('+')) {
                        chars.next();
                        word_run += 1;
                        dot_run = 0;
                        if word_run >= 3 {
                            return Err(GaqlError::security(
                                "a pattern without consecutive unbounded quantifiers",
                                format!("'{pattern}'"),
                            ));
                        }
                        continue;
                    }
                    // bare \w: bounded, ends any run
                    dot_run = 0;
                    word_run = 0;
                    continue;
                }
                // any other escape is an opaque literal
                chars.next();
                dot_run = 0;
                word_run = 0;
            }
            '.' => {
                if matches!(chars.peek(), Some('*') | Some('+')) {
                    chars.next();
                    dot_run += 1;
                    word_run = 0;
                    if dot_run >= 2 {
                        return Err(GaqlError::security(
                            "a pattern without consecutive unbounded quantifiers",
                            format!("'{pattern}'"),
                        ));
                    }
                } else {
                    dot_run = 0;
                    word_run = 0;
                }
            }
            // Grouping is transparent to quantifier runs: `(.*)(.*)`
            // backtracks like `.*.*`.
            '(' => {
                depth += 1;
                if depth > MAX_PATTERN_DEPTH {
                    return Err(GaqlError::security(
                        format!("parenthesis nesting of at most {MAX_PATTERN_DEPTH} levels"),
                        format!("{depth} levels"),
                    ));
                }
            }
            ')' => {
                depth = depth.saturating_sub(1);
            }
            '{' => {
                let mut body = String::new();
                while let Some(&c2) = chars.peek() {
                    if c2 == '}' {
                        chars.next();
                        break;
                    }
                    body.push(c2);
                    chars.next();
                }
                check_repetition(&body)?;
                dot_run = 0;
                word_run = 0;
            }
            _ => {
                dot_run = 0;
                word_run = 0;
            }
        }
    }

    Ok(())
}

/// Reject `{n}`, `{n,}`, `{n,m}` bodies whose count reaches the
/// threshold. Bodies that are not repetition counts (`{abc}`) are
/// literals to the engine and pass through.
fn check_repetition(body: &str) -> GaqlResult<()> {
    if body.is_empty() || !body.chars().all(|c| c.is_ascii_digit() || c == ',') {
        return Ok(());
    }
    for part in body.split(',') {
        if part.is_empty() {
            continue;
        }
        match part.parse::<u64>() {
            Ok(n) if n < REPETITION_THRESHOLD => {}
            // too large, or too large to even parse
            _ => {
                return Err(GaqlError::security(
                    format!("repetition counts below {REPETITION_THRESHOLD}"),
                    format!("'{{{body}}}'"),
                ));
            }
        }
    }
    Ok(())
}
