//! Members expected to report aboard

use super::{display_name, format_date, random_id, ymd, DateWindow};
use crate::models::{MemberRecord, NO_DESIGNATOR};
use rand::Rng;

const RANKS: &[&str] = &["ET3", "QMSN", "LT", "CPO", "BM1", "OS2", "GM3"];

const NAMES: &[(&str, &str)] = &[
    ("WILSON", "ROBERT"),
    ("MOORE", "JENNIFER"),
    ("TAYLOR", "WILLIAM"),
    ("ANDERSON", "LISA"),
    ("THOMAS", "RICHARD"),
    ("JACKSON", "MARY"),
    ("WHITE", "CHARLES"),
];

// CPO is an E-7 and stays enlisted.
const OFFICER_RANKS: &[&str] = &["LT", "ENS"];

const OFFICER_DESIGNATOR: &str = "1110";

/// Report dates run February 2026 through January 2027
pub fn reporting_window() -> DateWindow {
    DateWindow::between(ymd(2026, 2, 1), ymd(2027, 1, 31))
}

/// Generate `count` prospective gains
pub fn generate_prospective<R: Rng>(rng: &mut R, count: usize) -> Vec<MemberRecord> {
    let reporting = reporting_window();

    (0..count)
        .map(|i| {
            let rank = RANKS[i % RANKS.len()].to_uppercase();
            let (last, first) = NAMES[i % NAMES.len()];

            let designator = if OFFICER_RANKS.contains(&rank.as_str()) {
                OFFICER_DESIGNATOR
            } else {
                NO_DESIGNATOR
            };

            let date_reported = reporting.sample(rng);

            let mut member =
                MemberRecord::with_id(random_id(rng), rank, display_name(last, first), designator);
            member.date_reported = Some(format_date(date_reported));
            member
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_ranks_names_and_designators() {
        let mut rng = StdRng::seed_from_u64(1);
        let members = generate_prospective(&mut rng, 7);

        assert_eq!(members.len(), 7);
        assert_eq!(members[0].name, "WILSON, ROBERT");
        assert_eq!(members[2].rank, "LT");
        assert_eq!(members[2].designator, "1110");
        assert_eq!(members[3].rank, "CPO");
        assert_eq!(members[3].designator, "0000");
        assert_eq!(members[6].name, "WHITE, CHARLES");
    }

    #[test]
    fn test_no_detachment_date() {
        let mut rng = StdRng::seed_from_u64(2);
        for member in generate_prospective(&mut rng, 7) {
            assert!(member.detachment_date.is_none());
            assert!(member.date_reported.is_some());
        }
    }

    #[test]
    fn test_dates_within_window() {
        let mut rng = StdRng::seed_from_u64(3);
        let window = reporting_window();
        assert_eq!(window.end(), NaiveDate::from_ymd_opt(2027, 1, 31).unwrap());

        for member in generate_prospective(&mut rng, 100) {
            let date = NaiveDate::parse_from_str(
                member.date_reported.as_deref().unwrap(),
                crate::generator::DATE_FORMAT,
            )
            .unwrap();
            assert!(window.contains(date));
        }
    }

    #[test]
    fn test_ids_unique() {
        let mut rng = StdRng::seed_from_u64(4);
        let members = generate_prospective(&mut rng, 30);
        let ids: std::collections::HashSet<_> = members.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), 30);
    }

    #[test]
    fn test_seeded_output_reproducible() {
        let a = generate_prospective(&mut StdRng::seed_from_u64(8), 7);
        let b = generate_prospective(&mut StdRng::seed_from_u64(8), 7);
        assert_eq!(a, b);
    }
}
