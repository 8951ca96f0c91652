//! Groups deduplicated day rows into a year -> month -> day tree, folding
//! each day's linked events in by class.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::db::enums::EventClass;
use crate::model::calendar::{CalendarDay, Event};
use patro_core::types::CalendarSystem;

/// Everything known about a single day in the response tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayRecord {
    /// Linked tithi name; empty string when the day has none.
    pub tithi: String,
    /// Event-class names in link insertion order.
    pub event: Vec<String>,
    /// Panchangam entries in link insertion order.
    pub panchangam: Vec<String>,
    pub date: DayDates,
    pub public_holiday: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayDates {
    pub ad: DatePart,
    pub bs: DatePart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatePart {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

/// Nested year -> month -> day mapping. Keys are integers internally; the
/// external string-keyed shape is produced only at serialization time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayTree(BTreeMap<i32, BTreeMap<i32, BTreeMap<i32, DayRecord>>>);

impl DayTree {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of day records across all years and months.
    #[must_use]
    pub fn day_count(&self) -> usize {
        self.0
            .values()
            .flat_map(BTreeMap::values)
            .map(BTreeMap::len)
            .sum()
    }

    #[must_use]
    pub fn get(&self, year: i32, month: i32, day: i32) -> Option<&DayRecord> {
        self.0.get(&year)?.get(&month)?.get(&day)
    }

    /// ## Summary
    /// Serializes the tree with non-zero-padded decimal string keys, the
    /// shape external consumers expect.
    #[must_use]
    pub fn into_json(self) -> serde_json::Value {
        let years = self
            .0
            .into_iter()
            .map(|(year, months)| {
                let months = months
                    .into_iter()
                    .map(|(month, days)| {
                        let days = days
                            .into_iter()
                            .map(|(day, record)| {
                                (
                                    day.to_string(),
                                    serde_json::to_value(record)
                                        .unwrap_or(serde_json::Value::Null),
                                )
                            })
                            .collect::<serde_json::Map<_, _>>();
                        (month.to_string(), serde_json::Value::Object(days))
                    })
                    .collect::<serde_json::Map<_, _>>();
                (year.to_string(), serde_json::Value::Object(months))
            })
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(years)
    }
}

/// ## Summary
/// Builds the nested tree from deduplicated day rows with their linked
/// events preloaded. `key_system` selects whether the outer levels are keyed
/// by AD or BS components; the record body always carries both dates.
///
/// A day with no linked tithi keeps an empty tithi string rather than
/// failing.
#[must_use]
pub fn assemble(days: Vec<(CalendarDay, Vec<Event>)>, key_system: CalendarSystem) -> DayTree {
    let mut tree: BTreeMap<i32, BTreeMap<i32, BTreeMap<i32, DayRecord>>> = BTreeMap::new();

    for (day, events) in days {
        let key = day.date_in(key_system);
        let record = tree
            .entry(key.year)
            .or_default()
            .entry(key.month)
            .or_default()
            .entry(key.day)
            .or_insert_with(|| DayRecord {
                tithi: String::new(),
                event: Vec::new(),
                panchangam: Vec::new(),
                date: DayDates {
                    ad: DatePart {
                        year: day.ad_year,
                        month: day.ad_month,
                        day: day.ad_day,
                    },
                    bs: DatePart {
                        year: day.bs_year,
                        month: day.bs_month,
                        day: day.bs_day,
                    },
                },
                public_holiday: day.is_holiday,
            });

        for event in events {
            match event.event_class {
                EventClass::Tithi => record.tithi = event.event_name,
                EventClass::Event => record.event.push(event.event_name),
                EventClass::Panchangam => record.panchangam.push(event.event_name),
            }
        }
    }

    DayTree(tree)
}
