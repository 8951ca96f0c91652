use diesel::{pg::Pg, prelude::*};

use crate::db::schema;
use patro_core::types::{CalendarSystem, DayDate};

/// One calendar day carrying both its AD and BS representation.
///
/// Immutable once imported; the serving path never updates or deletes rows.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::calendar_day)]
#[diesel(check_for_backend(Pg))]
pub struct CalendarDay {
    pub id: i32,
    pub ad_serial: i32,
    pub bs_serial: i32,
    pub ad_year: i32,
    pub ad_month: i32,
    pub ad_day: i32,
    pub bs_year: i32,
    pub bs_month: i32,
    pub bs_day: i32,
    pub is_holiday: bool,
}

impl CalendarDay {
    /// ## Summary
    /// Projects this day into a single calendar system, selected once at
    /// entry so downstream code is written against one shape.
    #[must_use]
    pub const fn date_in(&self, system: CalendarSystem) -> DayDate {
        match system {
            CalendarSystem::Ad => DayDate {
                year: self.ad_year,
                month: self.ad_month,
                day: self.ad_day,
                serial: self.ad_serial,
            },
            CalendarSystem::Bs => DayDate {
                year: self.bs_year,
                month: self.bs_month,
                day: self.bs_day,
                serial: self.bs_serial,
            },
        }
    }
}

/// Insert struct for creating new calendar days during import.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::calendar_day)]
pub struct NewCalendarDay {
    pub ad_serial: i32,
    pub bs_serial: i32,
    pub ad_year: i32,
    pub ad_month: i32,
    pub ad_day: i32,
    pub bs_year: i32,
    pub bs_month: i32,
    pub bs_day: i32,
    pub is_holiday: bool,
}
