//! Canonical over/under thresholds per stat.
//!
//! Every threshold sits exactly 0.5 below a round number so that a strict
//! greater-than comparison reads as "X or more" for integer-valued stats
//! (9.5 means "10 or more"). The lists are static and never mutated.

use crate::types::StatKey;

const YARDAGE: [f64; 5] = [9.5, 29.5, 49.5, 69.5, 99.5];
const TOUCHDOWNS: [f64; 5] = [0.5, 1.5, 2.5, 3.5, 4.5];
const CATCHES: [f64; 5] = [0.5, 2.5, 4.5, 6.5, 9.5];
const FANTASY: [f64; 5] = [9.5, 14.5, 19.5, 24.5, 29.5];

/// The canonical threshold list for a stat, ascending. Total over all
/// stats; a stat with no meaningful breakdown would yield an empty slice.
pub fn canonical_thresholds(key: StatKey) -> &'static [f64] {
    match key {
        StatKey::Completions => &[14.5, 19.5, 24.5, 29.5, 34.5],
        StatKey::Attempts => &[19.5, 24.5, 29.5, 34.5, 39.5],
        StatKey::PassingYards => &[149.5, 199.5, 249.5, 299.5, 349.5],
        StatKey::PassingTds => &TOUCHDOWNS,
        StatKey::Interceptions => &TOUCHDOWNS,
        StatKey::Carries => &[0.5, 1.5, 4.5, 7.5, 9.5],
        StatKey::RushingYards => &YARDAGE,
        StatKey::RushingTds => &TOUCHDOWNS,
        StatKey::Receptions => &CATCHES,
        StatKey::Targets => &CATCHES,
        StatKey::ReceivingYards => &YARDAGE,
        StatKey::ReceivingTds => &TOUCHDOWNS,
        StatKey::ReceivingFumbles => &[0.5, 1.5, 2.5],
        StatKey::FantasyPoints => &FANTASY,
        StatKey::FantasyPointsPpr => &FANTASY,
    }
}
