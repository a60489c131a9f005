//! Overlap queries between meetings, groups and whole candidate schedules.
//!
//! Overlap is reported as a magnitude in minutes rather than a boolean, so a
//! scorer can weight conflicts by severity. By default the academic `weeks`
//! sets are ignored: two meetings on disjoint weeks still collide when their
//! day and time coincide. [`WeekRule::SharedWeeksOnly`] opts into the
//! stricter reading.

use itertools::Itertools;

use crate::model::group::MeetingGroup;
use crate::model::meeting::{Meeting, ReservedBlock};
use crate::model::schedule::Schedule;
use crate::time::Minutes;

/// Whether disjoint academic week sets suppress a collision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WeekRule {
    /// Day and time alone decide; matches the original conflict behavior.
    #[default]
    IgnoreWeeks,
    /// A collision additionally requires at least one common week.
    SharedWeeksOnly,
}

impl Meeting {
    /// Minutes of overlap with `other`: 0 when the days differ, otherwise
    /// the length of the interval intersection. Symmetric.
    pub fn overlap_minutes(&self, other: &Meeting) -> Minutes {
        self.overlap_minutes_with(other, WeekRule::default())
    }

    pub fn overlap_minutes_with(&self, other: &Meeting, rule: WeekRule) -> Minutes {
        if self.day != other.day {
            return 0;
        }
        if rule == WeekRule::SharedWeeksOnly && !self.shares_week(other) {
            return 0;
        }
        let start = self.start.max(other.start).minutes();
        let end = self.end.min(other.end).minutes();
        Minutes::from(end.saturating_sub(start))
    }

    pub fn shares_week(&self, other: &Meeting) -> bool {
        self.weeks.intersection(&other.weeks).next().is_some()
    }
}

impl MeetingGroup {
    /// True iff any cross-pair of meetings overlaps. All-pairs check; groups
    /// are small (at most ~14 meetings).
    pub fn overlaps(&self, other: &MeetingGroup) -> bool {
        self.overlaps_with(other, WeekRule::default())
    }

    pub fn overlaps_with(&self, other: &MeetingGroup, rule: WeekRule) -> bool {
        self.meetings
            .iter()
            .cartesian_product(other.meetings.iter())
            .any(|(a, b)| a.overlap_minutes_with(b, rule) > 0)
    }

    /// Summed overlap minutes over all cross-pairs: the continuous penalty
    /// signal a scorer weights instead of a step function.
    pub fn overlap_severity(&self, other: &MeetingGroup) -> Minutes {
        self.overlap_severity_with(other, WeekRule::default())
    }

    pub fn overlap_severity_with(&self, other: &MeetingGroup, rule: WeekRule) -> Minutes {
        self.meetings
            .iter()
            .cartesian_product(other.meetings.iter())
            .map(|(a, b)| a.overlap_minutes_with(b, rule))
            .sum()
    }
}

impl Schedule<'_> {
    /// Summed severity over all distinct pairs of selected groups. O(k²) in
    /// the number of selected slots, which stays small.
    pub fn total_overlap_severity(&self) -> Minutes {
        self.total_overlap_severity_with(WeekRule::default())
    }

    pub fn total_overlap_severity_with(&self, rule: WeekRule) -> Minutes {
        self.groups()
            .combinations(2)
            .map(|pair| pair[0].overlap_severity_with(pair[1], rule))
            .sum()
    }

    /// Summed severity of selections against reserved blocks. Blocks are not
    /// paired with each other: block-block overlap is the same for every
    /// candidate and carries no signal.
    pub fn reserved_overlap_severity(&self, blocks: &[ReservedBlock]) -> Minutes {
        self.reserved_overlap_severity_with(blocks, WeekRule::default())
    }

    pub fn reserved_overlap_severity_with(&self, blocks: &[ReservedBlock], rule: WeekRule) -> Minutes {
        self.groups()
            .cartesian_product(blocks.iter())
            .map(|(group, block)| {
                group
                    .meetings
                    .iter()
                    .map(|m| m.overlap_minutes_with(&block.meeting, rule))
                    .sum::<Minutes>()
            })
            .sum()
    }

    /// True iff no pair of selected groups overlaps.
    pub fn is_clash_free(&self) -> bool {
        self.groups()
            .combinations(2)
            .all(|pair| !pair[0].overlaps(pair[1]))
    }
}
