//! Grouping of a shelter's volunteer slots by date for the calendar view.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;

use crate::domain::entities::VolunteerSlot;

const WEEKDAYS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Slots sharing one date, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateGroup {
    pub date: NaiveDate,
    pub slots: Vec<VolunteerSlot>,
}

impl DateGroup {
    /// Badge text such as "1/10 (토)".
    pub fn label(&self) -> String {
        date_badge(self.date)
    }
}

/// Partitions `slots` by date.
///
/// Groups appear in first-seen order and dates are not sorted. Within a
/// group the input order is kept. Every slot lands in exactly one group.
pub fn group_by_date(slots: impl IntoIterator<Item = VolunteerSlot>) -> Vec<DateGroup> {
    let mut groups: Vec<DateGroup> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for slot in slots {
        match index.get(&slot.date) {
            Some(&i) => groups[i].slots.push(slot),
            None => {
                index.insert(slot.date, groups.len());
                groups.push(DateGroup {
                    date: slot.date,
                    slots: vec![slot],
                });
            }
        }
    }

    groups
}

/// "M/D (요일)" badge for a date.
pub fn date_badge(date: NaiveDate) -> String {
    let weekday = WEEKDAYS[date.weekday().num_days_from_sunday() as usize];
    format!("{}/{} ({})", date.month(), date.day(), weekday)
}
