//! Members detaching from the command

use super::{display_name, format_date, random_id, ymd, DateWindow};
use crate::models::{MemberRecord, NO_DESIGNATOR};
use rand::seq::IndexedRandom;
use rand::Rng;

const RANKS: &[&str] = &["IT2", "BM3", "SN", "LTJG", "ENS", "OSSN", "FC2"];

const NAMES: &[(&str, &str)] = &[
    ("SMITH", "JOHN"),
    ("DOE", "JANE"),
    ("JOHNSON", "MICHAEL"),
    ("WILLIAMS", "SARAH"),
    ("BROWN", "DAVID"),
    ("DAVIS", "EMILY"),
    ("MILLER", "JAMES"),
];

const OFFICER_RANKS: &[&str] = &["LTJG", "ENS", "LT", "LCDR", "CDR"];

const OFFICER_DESIGNATORS: &[&str] = &["1110", "1160", "3100"];

/// Detachment dates fall in calendar year 2025
pub fn detachment_window() -> DateWindow {
    DateWindow::between(ymd(2025, 1, 1), ymd(2025, 12, 31))
}

/// Report dates fall in the 600 days from 2022-01-01
pub fn reported_window() -> DateWindow {
    DateWindow::starting_at(ymd(2022, 1, 1), 600)
}

/// Generate `count` transferred members
///
/// Ranks and names cycle through fixed lists. Officers get a designator
/// picked from the common officer codes; everyone else gets `"0000"`.
pub fn generate_transferred<R: Rng>(rng: &mut R, count: usize) -> Vec<MemberRecord> {
    let detachment = detachment_window();
    let reported = reported_window();

    (0..count)
        .map(|i| {
            let rank = RANKS[i % RANKS.len()].to_uppercase();
            let (last, first) = NAMES[i % NAMES.len()];

            let designator = if OFFICER_RANKS.contains(&rank.as_str()) {
                OFFICER_DESIGNATORS
                    .choose(rng)
                    .copied()
                    .unwrap_or(NO_DESIGNATOR)
            } else {
                NO_DESIGNATOR
            };

            let detachment_date = detachment.sample(rng);
            let date_reported = reported.sample(rng);

            let mut member =
                MemberRecord::with_id(random_id(rng), rank, display_name(last, first), designator);
            member.detachment_date = Some(format_date(detachment_date));
            member.date_reported = Some(format_date(date_reported));
            member
        })
        .collect()
}
