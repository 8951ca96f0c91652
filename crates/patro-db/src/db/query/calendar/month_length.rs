use diesel::dsl::max;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::calendar_day;
use crate::error::DbResult;
use patro_core::error::CalendarQueryError;
use patro_core::types::CalendarSystem;

/// ## Summary
/// Returns the last valid day number recorded for the given month, which
/// varies per year in the BS system.
///
/// ## Errors
/// Returns [`CalendarQueryError::NoSuchMonth`] if the dataset holds no rows
/// for that (system, year, month); callers must guard or accept the error.
#[tracing::instrument(skip(conn))]
pub async fn days_in_month(
    conn: &mut DbConnection<'_>,
    system: CalendarSystem,
    year: i32,
    month: i32,
) -> DbResult<i32> {
    let last_day: Option<i32> = match system {
        CalendarSystem::Ad => {
            calendar_day::table
                .filter(calendar_day::ad_year.eq(year))
                .filter(calendar_day::ad_month.eq(month))
                .select(max(calendar_day::ad_day))
                .first(conn)
                .await?
        }
        CalendarSystem::Bs => {
            calendar_day::table
                .filter(calendar_day::bs_year.eq(year))
                .filter(calendar_day::bs_month.eq(month))
                .select(max(calendar_day::bs_day))
                .first(conn)
                .await?
        }
    };

    last_day
        .ok_or(CalendarQueryError::NoSuchMonth {
            system,
            year,
            month,
        })
        .map_err(Into::into)
}
