//! Calendar-day grouping over timestamped records.
//!
//! History views group workouts (or individual sets) by the civil day they
//! occurred on. The time zone is always supplied by the caller so that the
//! grouping is deterministic: no system-locale lookup happens inside these
//! functions, and tests pin a fixed zone.

use jiff::{civil::Date, tz::TimeZone, Timestamp};
use std::collections::BTreeMap;

use crate::models::{WorkSet, Workout};

/// A record that occurred at a known instant.
pub trait Dated {
    /// The instant used for calendar grouping.
    fn occurred_at(&self) -> Timestamp;
}

impl Dated for Workout {
    fn occurred_at(&self) -> Timestamp {
        self.started_at
    }
}

impl Dated for WorkSet {
    fn occurred_at(&self) -> Timestamp {
        self.performed_at
    }
}

/// One calendar day of history, with its items in original relative order.
#[derive(Debug)]
pub struct DayGroup<'a, T> {
    /// The civil day in the caller's time zone
    pub day: Date,
    /// Items whose timestamp falls on that day, in input order
    pub items: Vec<&'a T>,
}

/// Groups items by the civil day of their timestamp in the given zone.
///
/// Days are returned descending (most recent first); within a day, items
/// keep their original relative order. Repeated calls over identical input
/// produce identical output.
pub fn group_by_day<'a, T: Dated>(items: &'a [T], tz: &TimeZone) -> Vec<DayGroup<'a, T>> {
    let mut days: BTreeMap<Date, Vec<&'a T>> = BTreeMap::new();
    for item in items {
        let day = item.occurred_at().to_zoned(tz.clone()).date();
        days.entry(day).or_default().push(item);
    }

    days.into_iter()
        .rev()
        .map(|(day, items)| DayGroup { day, items })
        .collect()
}
