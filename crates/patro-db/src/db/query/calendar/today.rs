use chrono::Datelike;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::calendar_day;
use crate::error::DbResult;
use crate::model::calendar::CalendarDay;
use patro_core::error::CalendarQueryError;
use patro_core::types::{CalendarSystem, DateTriple};

/// The current wall-clock date in the Gregorian system.
#[must_use]
pub fn today_ad() -> DateTriple {
    let now = chrono::Local::now().date_naive();
    DateTriple::new(
        now.year(),
        i32::try_from(now.month()).unwrap_or(1),
        i32::try_from(now.day()).unwrap_or(1),
    )
}

/// ## Summary
/// Resolves "today" in the requested calendar system. The BS representation
/// is a reverse lookup of the wall-clock AD date through the day table; no
/// calendrical arithmetic is performed.
///
/// ## Errors
/// Returns [`CalendarQueryError::NoSuchDay`] when the wall-clock AD date is
/// not present in the dataset.
#[tracing::instrument(skip(conn))]
pub async fn today(conn: &mut DbConnection<'_>, system: CalendarSystem) -> DbResult<DateTriple> {
    let ad = today_ad();
    match system {
        CalendarSystem::Ad => Ok(ad),
        CalendarSystem::Bs => {
            let day: Option<CalendarDay> = calendar_day::table
                .filter(calendar_day::ad_year.eq(ad.year))
                .filter(calendar_day::ad_month.eq(ad.month))
                .filter(calendar_day::ad_day.eq(ad.day))
                .select(CalendarDay::as_select())
                .first(conn)
                .await
                .optional()?;

            let day = day.ok_or(CalendarQueryError::NoSuchDay {
                system: CalendarSystem::Ad,
                year: ad.year,
                month: ad.month,
                day: ad.day,
            })?;

            Ok(DateTriple::new(day.bs_year, day.bs_month, day.bs_day))
        }
    }
}
