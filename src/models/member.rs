use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Designator carried by enlisted members and by officers with no code on file
pub const NO_DESIGNATOR: &str = "0000";

/// A single roster entry
///
/// Parsed records only populate `id`, `rank`, `name` and `designator`.
/// The date fields are filled in by the sample generators and are left out
/// of the JSON output when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    /// Unique record id
    pub id: Uuid,
    /// Rate or rank abbreviation (e.g. `IT2`, `LT`)
    pub rank: String,
    /// Display name, `"LAST, FIRST"`
    pub name: String,
    /// Four character designator, or `"0000"`
    pub designator: String,
    /// Detachment date (`MM/DD/YY`), transferred members only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detachment_date: Option<String>,
    /// Report date (`MM/DD/YY`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_reported: Option<String>,
}

impl MemberRecord {
    /// Create a record with a fresh random id and no dates
    pub fn new(
        rank: impl Into<String>,
        name: impl Into<String>,
        designator: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), rank, name, designator)
    }

    /// Create a record with a caller-supplied id
    pub fn with_id(
        id: Uuid,
        rank: impl Into<String>,
        name: impl Into<String>,
        designator: impl Into<String>,
    ) -> Self {
        Self {
            id,
            rank: rank.into(),
            name: name.into(),
            designator: designator.into(),
            detachment_date: None,
            date_reported: None,
        }
    }
}

/// The merged output document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterDocument {
    /// Members parsed from the roster file, in file order
    pub core_roster: Vec<MemberRecord>,
    /// Sample members detaching from the command
    pub transferred_members: Vec<MemberRecord>,
    /// Sample members expected to report
    pub prospective_gains: Vec<MemberRecord>,
}
