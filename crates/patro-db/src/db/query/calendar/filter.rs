//! Day-selection construction and execution.
//!
//! Translates a partial start date (0 = wildcard), an optional end date, and
//! the row-level filters into a validated selection over the day table, then
//! executes it in two steps: matching day ids first (joined through links and
//! events, deduplicated), then the ordered day rows.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::enums::EventClass;
use crate::db::query::calendar::month_length::days_in_month;
use crate::db::schema::{calendar_day, day_event, event};
use crate::error::DbResult;
use crate::model::calendar::{CalendarDay, DayEvent, Event};
use patro_core::constants::MAX_DAYS_IN_MONTH;
use patro_core::error::CalendarQueryError;
use patro_core::types::{CalendarSystem, DateTriple, DayFilters};

/// Date bounds of a validated selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayBounds {
    /// Closed range over the system serial, inclusive of both endpoints.
    Range { start_serial: i32, end_serial: i32 },
    /// Equality filters; `None` means the component is unconstrained.
    Point {
        year: Option<i32>,
        month: Option<i32>,
        day: Option<i32>,
    },
}

/// A fully validated day selection, ready to execute. Construction fails
/// atomically before any row is fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySelection {
    pub system: CalendarSystem,
    pub bounds: DayBounds,
    pub filters: DayFilters,
}

/// ## Summary
/// Validates range-mode months. Each bound must be unset (0) or within
/// `[1, 12]`; 0 selects the first month for the start and the last month for
/// the end.
///
/// ## Errors
/// Returns [`CalendarQueryError::InvalidMonth`] citing both supplied values.
pub(crate) fn resolve_range_months(
    start_month: i32,
    end_month: i32,
) -> Result<(i32, i32), CalendarQueryError> {
    let valid = |month: i32| (0..=12).contains(&month);
    if !valid(start_month) || !valid(end_month) {
        return Err(CalendarQueryError::InvalidMonth(format!(
            "\"{start_month}\" or \"{end_month}\" is not a valid month parameter; \
             for the range start \"0\" selects the first month of the year and \
             for the range end \"0\" selects the last month"
        )));
    }
    Ok((
        if start_month == 0 { 1 } else { start_month },
        if end_month == 0 { 12 } else { end_month },
    ))
}

/// ## Summary
/// Validates range-mode days against the resolved month lengths and encodes
/// the two normalized triples as serials. Day 0 selects the first day for
/// the start bound and the month's last recorded day for the end bound.
///
/// ## Errors
/// Returns [`CalendarQueryError::InvalidDay`] citing the offending values
/// and month lengths, or [`CalendarQueryError::InvalidRange`] when the
/// normalized end serial precedes the start serial.
pub(crate) fn resolve_range_bounds(
    start: DateTriple,
    end: DateTriple,
    start_month_len: i32,
    end_month_len: i32,
) -> Result<(i32, i32), CalendarQueryError> {
    if !(0..=start_month_len).contains(&start.day) || !(0..=end_month_len).contains(&end.day) {
        return Err(CalendarQueryError::InvalidDay(format!(
            "\"{start_day}\" or \"{end_day}\" is not a valid month day parameter; \
             range start month \"{start_month}\" has \"{start_month_len}\" days and \
             range end month \"{end_month}\" has \"{end_month_len}\" days; \
             for the range start \"0\" selects the first day of the month and \
             for the range end \"0\" selects the last day",
            start_day = start.day,
            end_day = end.day,
            start_month = start.month,
            end_month = end.month,
        )));
    }

    let start_day = if start.day == 0 { 1 } else { start.day };
    let end_day = if end.day == 0 { end_month_len } else { end.day };

    let start_serial = DateTriple::new(start.year, start.month, start_day).serial();
    let end_serial = DateTriple::new(end.year, end.month, end_day).serial();
    if end_serial < start_serial {
        return Err(CalendarQueryError::InvalidRange {
            start_serial,
            end_serial,
        });
    }
    Ok((start_serial, end_serial))
}

/// ## Summary
/// Validates a point-mode month. 0 lifts the constraint.
///
/// ## Errors
/// Returns [`CalendarQueryError::InvalidMonth`] for values outside `[1, 12]`.
pub(crate) fn validate_point_month(month: i32) -> Result<Option<i32>, CalendarQueryError> {
    match month {
        0 => Ok(None),
        1..=12 => Ok(Some(month)),
        other => Err(CalendarQueryError::InvalidMonth(format!(
            "\"{other}\" is not a valid month parameter; \
             use \"0\" to select all months or anything between \"1\" and \"12\""
        ))),
    }
}

/// ## Summary
/// Validates a point-mode day against the month's recorded length (or the
/// 31-day fallback when no month was given). 0 lifts the constraint.
///
/// ## Errors
/// Returns [`CalendarQueryError::InvalidDay`] citing the bound.
pub(crate) fn validate_point_day(
    day: i32,
    day_bound: i32,
) -> Result<Option<i32>, CalendarQueryError> {
    if day == 0 {
        return Ok(None);
    }
    if (1..=day_bound).contains(&day) {
        return Ok(Some(day));
    }
    Err(CalendarQueryError::InvalidDay(format!(
        "\"{day}\" is not a valid day parameter; \
         use \"0\" to select all days or anything between \"1\" and \"{day_bound}\" for the month"
    )))
}

/// ## Summary
/// Builds a validated day selection from a partial start date, optional end
/// date, and filter set. Range mode is entered when an end triple with a
/// non-zero year is supplied; otherwise the start components become
/// point/wildcard equality filters. Month lengths are resolved from the day
/// table, never computed.
///
/// ## Errors
/// Returns the validation error taxonomy (`InvalidRange`, `InvalidMonth`,
/// `InvalidDay`, `NoSuchMonth`) before any day row is fetched.
#[tracing::instrument(skip(conn, filters))]
pub async fn build_day_selection(
    conn: &mut DbConnection<'_>,
    system: CalendarSystem,
    start: DateTriple,
    filters: DayFilters,
    end: Option<DateTriple>,
) -> DbResult<DaySelection> {
    let filters = filters.normalized();

    let bounds = match end {
        Some(end) if end.year != 0 => {
            let (start_month, end_month) = resolve_range_months(start.month, end.month)?;
            let start_month_len = days_in_month(conn, system, start.year, start_month).await?;
            let end_month_len = days_in_month(conn, system, end.year, end_month).await?;
            let (start_serial, end_serial) = resolve_range_bounds(
                DateTriple::new(start.year, start_month, start.day),
                DateTriple::new(end.year, end_month, end.day),
                start_month_len,
                end_month_len,
            )?;
            DayBounds::Range {
                start_serial,
                end_serial,
            }
        }
        _ => {
            let year = (start.year != 0).then_some(start.year);
            let month = validate_point_month(start.month)?;
            let day_bound = match month {
                Some(month) => days_in_month(conn, system, start.year, month).await?,
                None => MAX_DAYS_IN_MONTH,
            };
            let day = validate_point_day(start.day, day_bound)?;
            DayBounds::Point { year, month, day }
        }
    };

    Ok(DaySelection {
        system,
        bounds,
        filters,
    })
}

/// ## Summary
/// Executes a validated selection and returns the matching day rows, ordered
/// by the selection system's serial.
///
/// Matching day ids are resolved first through the day/link/event join
/// (deduplicated, so a day with several linked events appears once), then
/// the rows are loaded by id. The tithi and search filters inspect the
/// individual joined events while the dedup keeps day identity intact.
///
/// ## Errors
/// Returns database errors if the queries fail.
#[tracing::instrument(skip(conn, selection))]
pub async fn find_matching_days(
    conn: &mut DbConnection<'_>,
    selection: &DaySelection,
) -> DbResult<Vec<CalendarDay>> {
    let mut id_query = calendar_day::table
        .inner_join(day_event::table.inner_join(event::table))
        .select(calendar_day::id)
        .distinct()
        .into_boxed();

    match selection.bounds {
        DayBounds::Range {
            start_serial,
            end_serial,
        } => {
            id_query = match selection.system {
                CalendarSystem::Ad => {
                    id_query.filter(calendar_day::ad_serial.between(start_serial, end_serial))
                }
                CalendarSystem::Bs => {
                    id_query.filter(calendar_day::bs_serial.between(start_serial, end_serial))
                }
            };
        }
        DayBounds::Point { year, month, day } => {
            if let Some(year) = year {
                id_query = match selection.system {
                    CalendarSystem::Ad => id_query.filter(calendar_day::ad_year.eq(year)),
                    CalendarSystem::Bs => id_query.filter(calendar_day::bs_year.eq(year)),
                };
            }
            if let Some(month) = month {
                id_query = match selection.system {
                    CalendarSystem::Ad => id_query.filter(calendar_day::ad_month.eq(month)),
                    CalendarSystem::Bs => id_query.filter(calendar_day::bs_month.eq(month)),
                };
            }
            if let Some(day) = day {
                id_query = match selection.system {
                    CalendarSystem::Ad => id_query.filter(calendar_day::ad_day.eq(day)),
                    CalendarSystem::Bs => id_query.filter(calendar_day::bs_day.eq(day)),
                };
            }
        }
    }

    if selection.filters.only_holidays {
        id_query = id_query.filter(calendar_day::is_holiday.eq(true));
    }
    if selection.filters.except_holidays {
        id_query = id_query.filter(calendar_day::is_holiday.eq(false));
    }
    if !selection.filters.tithi_names.is_empty() {
        id_query = id_query
            .filter(event::event_class.eq(EventClass::Tithi))
            .filter(event::event_name.eq_any(&selection.filters.tithi_names));
    }
    if !selection.filters.search_text.is_empty() {
        id_query = id_query.filter(event::event_name.like(selection.filters.search_text.clone()));
    }

    let matching_ids: Vec<i32> = id_query.load(conn).await?;

    let mut day_query = calendar_day::table
        .filter(calendar_day::id.eq_any(matching_ids))
        .select(CalendarDay::as_select())
        .into_boxed();
    day_query = match selection.system {
        CalendarSystem::Ad => day_query.order(calendar_day::ad_serial.asc()),
        CalendarSystem::Bs => day_query.order(calendar_day::bs_serial.asc()),
    };

    Ok(day_query.load(conn).await?)
}

/// ## Summary
/// Loads every event linked to each of the given days, preserving link
/// insertion order, grouped per day in the same order as `days`.
///
/// ## Errors
/// Returns database errors if the query fails.
#[tracing::instrument(skip(conn, days), fields(day_count = days.len()))]
pub async fn load_day_events(
    conn: &mut DbConnection<'_>,
    days: &[CalendarDay],
) -> DbResult<Vec<Vec<Event>>> {
    let links: Vec<(DayEvent, Event)> = DayEvent::belonging_to(days)
        .inner_join(event::table)
        .order(day_event::id.asc())
        .select((DayEvent::as_select(), Event::as_select()))
        .load(conn)
        .await?;

    Ok(links
        .grouped_by(days)
        .into_iter()
        .map(|links| links.into_iter().map(|(_, event)| event).collect())
        .collect())
}
