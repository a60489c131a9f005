pub mod meeting {
    use std::collections::BTreeSet;

    use crate::record::{MeetingRecord, RecordError};
    use crate::time::{Minutes, TimeOfDay, Week, Weekday};

    pub type Label = String;
    pub type OfferingCode = String;
    /// Lower value = more important to keep free.
    pub type Priority = u32;

    /// Sentinel owning-offering code for reserved blocks.
    pub const RESERVED_OFFERING: &str = "BREAK";

    /// A single scheduled occurrence of a class activity. Constructed once
    /// from a catalog record, immutable thereafter.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Meeting {
        pub day: Weekday,
        pub start: TimeOfDay,
        pub end: TimeOfDay,
        pub weeks: BTreeSet<Week>,
        pub label: Label,
        pub offering: OfferingCode,
    }

    impl Meeting {
        /// Validates the record and builds the meeting, or rejects the whole
        /// record; a partially-valid meeting is never stored.
        pub fn from_record(record: &MeetingRecord, offering: &str) -> Result<Meeting, RecordError> {
            let day: Weekday = record.day.parse()?;
            let start = TimeOfDay::try_from(&record.start_time)?;
            let end = TimeOfDay::try_from(&record.end_time)?;
            if start >= end {
                return Err(RecordError::EndNotAfterStart { start, end });
            }
            Ok(Meeting {
                day,
                start,
                end,
                weeks: record.weeks.iter().copied().collect(),
                label: record.group_label.clone(),
                offering: offering.to_string(),
            })
        }

        /// True iff day, start and end are all equal; label, weeks and
        /// offering are ignored.
        pub fn same_timing(&self, other: &Meeting) -> bool {
            self.day == other.day && self.start == other.start && self.end == other.end
        }

        pub fn duration(&self) -> Minutes {
            Minutes::from(self.end.minutes() - self.start.minutes())
        }

        pub fn is_reserved(&self) -> bool {
            self.offering == RESERVED_OFFERING
        }
    }

    /// A fixed non-class period (lunch, prayer break). Plain composition:
    /// a meeting owned by the sentinel offering, plus an importance ranking
    /// the external scorer uses to decide which blocks may be overridden.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ReservedBlock {
        pub meeting: Meeting,
        pub priority: Priority,
    }

    impl ReservedBlock {
        pub fn new(mut meeting: Meeting, priority: Priority) -> ReservedBlock {
            meeting.offering = RESERVED_OFFERING.to_string();
            ReservedBlock { meeting, priority }
        }

        pub fn from_record(record: &MeetingRecord, priority: Priority) -> Result<ReservedBlock, RecordError> {
            let meeting = Meeting::from_record(record, RESERVED_OFFERING)?;
            Ok(ReservedBlock { meeting, priority })
        }

        /// Singleton group, so a block participates in overlap checks
        /// exactly like any class meeting.
        pub fn to_group(&self) -> super::group::MeetingGroup {
            self.meeting.clone().into()
        }
    }
}

pub mod group {
    use std::collections::HashSet;

    use log::trace;
    use thiserror::Error;

    use super::meeting::{Label, Meeting};
    use crate::record::{MeetingRecord, RecordError};

    #[derive(Debug, Clone, Error, PartialEq)]
    pub enum GroupingError {
        #[error("meeting `{label}` matches neither the group's timing nor its section")]
        UnrelatedMeeting { label: Label },
    }

    #[derive(Debug, Clone, Error, PartialEq)]
    pub enum BuildError {
        #[error(transparent)]
        Record(#[from] RecordError),
        #[error(transparent)]
        Grouping(#[from] GroupingError),
    }

    /// A set of meetings that are substitutable alternatives or paired
    /// occurrences of one activity. Exactly one grouping mode per group:
    /// either one stored meeting standing for several same-slot sections
    /// (the labels set carries them), or several stored meetings of one
    /// section at distinct slots. Built by insertion, then treated as
    /// immutable and selected as an atomic unit.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct MeetingGroup {
        pub labels: HashSet<Label>,
        pub meetings: Vec<Meeting>,
    }

    impl MeetingGroup {
        pub fn new() -> MeetingGroup {
            MeetingGroup::default()
        }

        /// Adds a meeting under the grouping rule. A meeting whose timing
        /// matches the representative merges into the label set; a meeting
        /// carrying the group's section label appends as a paired session.
        /// A meeting that differs in both is unrelated and rejected; the
        /// group is left unchanged.
        pub fn insert(&mut self, meeting: Meeting) -> Result<(), GroupingError> {
            if self.meetings.is_empty() {
                self.labels.insert(meeting.label.clone());
                self.meetings.push(meeting);
                return Ok(());
            }
            if meeting.same_timing(&self.meetings[0]) {
                trace!("section `{}` merged as same-slot alternative", meeting.label);
                self.labels.insert(meeting.label);
                return Ok(());
            }
            if self.meetings.iter().all(|m| m.label == meeting.label) {
                self.labels.insert(meeting.label.clone());
                self.meetings.push(meeting);
                return Ok(());
            }
            Err(GroupingError::UnrelatedMeeting { label: meeting.label })
        }

        /// The stored meeting whose timing stands for every label in a
        /// same-slot group.
        pub fn representative(&self) -> Option<&Meeting> {
            self.meetings.first()
        }

        pub fn len(&self) -> usize {
            self.meetings.len()
        }

        pub fn is_empty(&self) -> bool {
            self.meetings.is_empty()
        }

        /// Loader convenience: build one group straight from catalog records.
        pub fn from_records(offering: &str, records: &[MeetingRecord]) -> Result<MeetingGroup, BuildError> {
            let mut group = MeetingGroup::new();
            for record in records {
                group.insert(Meeting::from_record(record, offering)?)?;
            }
            Ok(group)
        }
    }

    impl From<Meeting> for MeetingGroup {
        fn from(meeting: Meeting) -> MeetingGroup {
            MeetingGroup {
                labels: HashSet::from([meeting.label.clone()]),
                meetings: vec![meeting],
            }
        }
    }
}

pub mod offering {
    use std::collections::BTreeMap;
    use std::fmt;

    use thiserror::Error;

    use super::group::MeetingGroup;
    use super::meeting::OfferingCode;

    /// The kind of class meeting an offering requires. Common categories are
    /// closed variants; anything else rides in `Other`.
    #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum Activity {
        Lecture,
        Tutorial,
        Laboratory,
        Other(String),
    }

    impl From<&str> for Activity {
        fn from(name: &str) -> Activity {
            match name.to_ascii_lowercase().as_str() {
                "lecture" | "lec" => Activity::Lecture,
                "tutorial" | "tut" => Activity::Tutorial,
                "laboratory" | "lab" => Activity::Laboratory,
                _ => Activity::Other(name.to_string()),
            }
        }
    }

    impl fmt::Display for Activity {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Activity::Lecture => f.write_str("Lecture"),
                Activity::Tutorial => f.write_str("Tutorial"),
                Activity::Laboratory => f.write_str("Laboratory"),
                Activity::Other(name) => f.write_str(name),
            }
        }
    }

    #[derive(Debug, Clone, Error, PartialEq)]
    pub enum OfferingError {
        #[error("offering `{code}` has no activity `{activity}`")]
        UnknownActivity { code: OfferingCode, activity: Activity },
    }

    /// A course's menu: for each activity category, the ordered alternatives
    /// the optimizer may pick from. Built by the loader, immutable once
    /// handed over. An activity entry is created by its first append, so a
    /// registered activity is never empty.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Offering {
        pub code: OfferingCode,
        options: BTreeMap<Activity, Vec<MeetingGroup>>,
    }

    impl Offering {
        pub fn new(code: impl Into<OfferingCode>) -> Offering {
            Offering {
                code: code.into(),
                options: BTreeMap::new(),
            }
        }

        pub fn add_alternative(&mut self, activity: Activity, group: MeetingGroup) {
            self.options.entry(activity).or_default().push(group);
        }

        pub fn alternatives_for(&self, activity: &Activity) -> Result<&[MeetingGroup], OfferingError> {
            self.options
                .get(activity)
                .map(Vec::as_slice)
                .ok_or_else(|| OfferingError::UnknownActivity {
                    code: self.code.clone(),
                    activity: activity.clone(),
                })
        }

        /// Registered activity categories in deterministic order, one genome
        /// slot each.
        pub fn activities(&self) -> impl Iterator<Item = &Activity> {
            self.options.keys()
        }
    }
}

pub mod schedule {
    use std::collections::HashMap;

    use log::debug;

    use super::group::MeetingGroup;
    use super::meeting::OfferingCode;
    use super::offering::Activity;

    /// One genome slot: the (offering, activity) pair an optimizer fills
    /// exactly once per candidate.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct Slot {
        pub offering: OfferingCode,
        pub activity: Activity,
    }

    /// A concrete candidate: one chosen group per slot. Selected groups are
    /// borrowed from their offerings, never copied; a schedule is owned by
    /// one evaluating worker while the groups stay shared read-only.
    #[derive(Debug, Clone, Default)]
    pub struct Schedule<'a> {
        selections: HashMap<Slot, &'a MeetingGroup>,
    }

    impl<'a> Schedule<'a> {
        pub fn new() -> Schedule<'a> {
            Schedule::default()
        }

        /// Records the choice for a slot, last write wins. Returns the
        /// displaced group so the caller can tell a re-selection from a
        /// first write.
        pub fn select(
            &mut self,
            offering: &str,
            activity: Activity,
            group: &'a MeetingGroup,
        ) -> Option<&'a MeetingGroup> {
            let slot = Slot {
                offering: offering.to_string(),
                activity,
            };
            if self.selections.contains_key(&slot) {
                debug!("slot ({}, {}) re-selected, last write wins", slot.offering, slot.activity);
            }
            self.selections.insert(slot, group)
        }

        pub fn selected(&self, offering: &str, activity: &Activity) -> Option<&'a MeetingGroup> {
            let slot = Slot {
                offering: offering.to_string(),
                activity: activity.clone(),
            };
            self.selections.get(&slot).copied()
        }

        /// Every currently selected group, for pairwise conflict scoring.
        pub fn groups(&self) -> impl Iterator<Item = &'a MeetingGroup> + '_ {
            self.selections.values().copied()
        }

        pub fn len(&self) -> usize {
            self.selections.len()
        }

        pub fn is_empty(&self) -> bool {
            self.selections.is_empty()
        }
    }
}
