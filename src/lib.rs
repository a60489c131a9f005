//! Constraint data model for a university course-timetabling tool.
//!
//! The crate represents individual class meetings, groups of interchangeable
//! meeting options, the menu of options a course offers, and a concrete
//! candidate schedule assembled from that menu. An external search process
//! builds candidate schedules from these pieces and uses the overlap queries
//! in [`conflict`] to find out whether two chosen options collide in time,
//! and by how many minutes.

pub mod conflict;
pub mod model;
pub mod record;
pub mod time;

pub use conflict::WeekRule;
pub use model::group::MeetingGroup;
pub use model::meeting::{Meeting, ReservedBlock};
pub use model::offering::{Activity, Offering};
pub use model::schedule::Schedule;
pub use record::MeetingRecord;
