//! Single roster line parsing
//!
//! Roster lines have no fixed column count. Each line is read as a token
//! stream anchored on the rightmost pay grade token (`E-4`, `O-3`, `W-2`):
//!
//! ```text
//! LAST FIRST [MIDDLE..] RANK PAY_GRADE [DESIGNATOR] PRD ARRIVED
//! ```
//!
//! Everything else is located relative to that anchor.

use crate::models::{MemberRecord, NO_DESIGNATOR};

/// Number of characters of an unparseable line quoted in diagnostics
pub const SNIPPET_LEN: usize = 30;

/// Placeholder for a missing name component
const UNKNOWN_NAME: &str = "Unknown";

/// Why a line did not produce a record
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFailure {
    /// The line had no tokens. Callers skip these silently.
    #[error("Line is empty")]
    Empty,

    /// No pay grade token anywhere on the line
    #[error("No pay grade found in line: {snippet}...")]
    NoAnchor { snippet: String },

    /// A pay grade was found but the surrounding fields could not be derived
    #[error("{0}")]
    Fault(String),
}

/// Check whether a token looks like a pay grade: `E-`, `O-` or `W-` followed
/// by at least one more character.
pub fn is_pay_grade(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(tier), Some('-'), Some(_)) => matches!(tier, 'E' | 'O' | 'W'),
        _ => false,
    }
}

/// Whitespace-split view of one roster line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterLine<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> RosterLine<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            tokens: line.split_whitespace().collect(),
        }
    }

    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Date the member arrived (last token)
    pub fn arrived(&self) -> Option<&'a str> {
        self.tokens.last().copied()
    }

    /// Projected rotation date (second-to-last token)
    pub fn prd(&self) -> Option<&'a str> {
        self.prd_index().map(|i| self.tokens[i])
    }

    fn prd_index(&self) -> Option<usize> {
        self.tokens.len().checked_sub(2)
    }

    /// Index of the rightmost pay grade token
    pub fn anchor_index(&self) -> Option<usize> {
        self.tokens.iter().rposition(|token| is_pay_grade(token))
    }

    /// Index of the designator slot, if a token sits between the anchor and the PRD
    pub fn designator_index(&self, anchor: usize) -> Option<usize> {
        match self.prd_index() {
            Some(prd) if anchor + 1 < prd => Some(anchor + 1),
            _ => None,
        }
    }
}

/// Parse one roster line into a member record
///
/// The record gets a fresh id on every call, so parsing the same line twice
/// yields two records that differ only in `id`.
pub fn parse_line(line: &str) -> Result<MemberRecord, ParseFailure> {
    let roster_line = RosterLine::new(line);
    if roster_line.is_empty() {
        return Err(ParseFailure::Empty);
    }

    let tokens = roster_line.tokens();
    let anchor = roster_line
        .anchor_index()
        .ok_or_else(|| ParseFailure::NoAnchor {
            snippet: line.chars().take(SNIPPET_LEN).collect(),
        })?;
    let pay_grade = tokens[anchor];

    let designator_token = roster_line.designator_index(anchor).map(|i| tokens[i]);

    let rank_index = anchor.checked_sub(1).ok_or_else(|| {
        ParseFailure::Fault(format!("no rank token before pay grade '{}'", pay_grade))
    })?;
    let rank = tokens[rank_index];
    let name = display_name(&tokens[..rank_index]);
    let designator = resolve_designator(pay_grade, designator_token);

    Ok(MemberRecord::new(rank, name, designator))
}

/// Build `"LAST, FIRST"` from the tokens before the rank.
/// Middle names and suffixes past the second token are dropped.
fn display_name(name_tokens: &[&str]) -> String {
    match name_tokens {
        [last, first, ..] => format!("{}, {}", last, first),
        [last] => format!("{}, {}", last, UNKNOWN_NAME),
        [] => format!("{}, {}", UNKNOWN_NAME, UNKNOWN_NAME),
    }
}

/// Enlisted grades never carry a designator; a stray token in that slot is noise.
fn resolve_designator<'a>(pay_grade: &str, candidate: Option<&'a str>) -> &'a str {
    if pay_grade.starts_with('E') {
        return NO_DESIGNATOR;
    }
    candidate.unwrap_or(NO_DESIGNATOR)
}
