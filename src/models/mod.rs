// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod activity;
pub mod calendar;
pub mod stats;
pub mod timeline;

pub use activity::{Activity, ActivityType, NewActivity};
pub use calendar::MonthCalendar;
pub use stats::JournalStats;
pub use timeline::TimelineDay;
