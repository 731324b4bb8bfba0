//! Parse-line command - parse a single roster line and print the record

use crate::parser::parse_line;
use crate::Result;

pub fn run(line: &str) -> Result<()> {
    let record = parse_line(line)?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
