pub mod roster;
pub mod roster_line;

pub use roster::{parse_roster, LineDiagnostic, RosterParse};
pub use roster_line::{is_pay_grade, parse_line, ParseFailure, RosterLine, SNIPPET_LEN};
