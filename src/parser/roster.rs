use super::roster_line::{parse_line, ParseFailure};
use crate::models::MemberRecord;

/// A roster line that was dropped, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiagnostic {
    /// 1-indexed line number in the input file
    pub line_number: usize,
    pub message: String,
}

impl std::fmt::Display for LineDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line_number, self.message)
    }
}

/// Outcome of parsing a whole roster file
#[derive(Debug, Clone, Default)]
pub struct RosterParse {
    /// Parsed members, in file order
    pub members: Vec<MemberRecord>,
    /// One entry per dropped line
    pub diagnostics: Vec<LineDiagnostic>,
}

impl RosterParse {
    pub fn skipped(&self) -> usize {
        self.diagnostics.len()
    }
}

/// Parse every line of a roster file
///
/// The first line is treated as a column header and skipped when it contains
/// `header_marker`. Blank lines are skipped without a diagnostic. A line that
/// fails to parse is recorded in `diagnostics` and never stops the batch.
pub fn parse_roster(content: &str, header_marker: &str) -> RosterParse {
    let mut result = RosterParse::default();

    for (idx, line) in content.lines().enumerate() {
        if idx == 0 && is_header(line, header_marker) {
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Ok(member) => result.members.push(member),
            Err(ParseFailure::Empty) => {}
            Err(failure @ ParseFailure::NoAnchor { .. }) => {
                result.diagnostics.push(LineDiagnostic {
                    line_number: idx + 1,
                    message: failure.to_string(),
                });
            }
            Err(ParseFailure::Fault(fault)) => {
                result.diagnostics.push(LineDiagnostic {
                    line_number: idx + 1,
                    message: format!("Error parsing line: {} -> {}", line.trim(), fault),
                });
            }
        }
    }

    result
}

fn is_header(line: &str, header_marker: &str) -> bool {
    !header_marker.is_empty() && line.contains(header_marker)
}
