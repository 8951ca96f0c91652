use crate::calendar::parse::parse_date_text;
use crate::error::{ServiceError, ServiceResult};
use patro_core::types::{CalendarSystem, DateTriple, DayFilters};
use patro_db::db::connection::DbConnection;
use patro_db::db::map::calendar::{DayTree, assemble};
use patro_db::db::query::calendar::filter::{
    build_day_selection, find_matching_days, load_day_events,
};
use patro_db::db::query::calendar::tokens;

/// Caller-facing knobs for a lookup, mirroring the request query string.
#[derive(Debug, Clone, Default)]
pub struct LookupOptions {
    pub only_holidays: bool,
    pub except_holidays: bool,
    pub tithi_names: Vec<String>,
    pub search_text: String,
    /// Key the outer tree levels by BS instead of AD components.
    pub bs_as_key: bool,
}

impl LookupOptions {
    fn filters(&self) -> DayFilters {
        DayFilters {
            only_holidays: self.only_holidays,
            except_holidays: self.except_holidays,
            tithi_names: self.tithi_names.clone(),
            search_text: self.search_text.clone(),
        }
    }

    const fn key_system(&self) -> CalendarSystem {
        if self.bs_as_key {
            CalendarSystem::Bs
        } else {
            CalendarSystem::Ad
        }
    }
}

/// ## Summary
/// Point/wildcard lookup: expands symbolic tokens, parses the date text, and
/// runs the selection pipeline.
///
/// ## Errors
/// Returns the validation taxonomy for bad inputs, `InvalidDateText` for
/// non-numeric components, and [`ServiceError::EmptyResult`] when no day
/// matches.
#[tracing::instrument(skip(conn, options))]
pub async fn lookup_date(
    conn: &mut DbConnection<'_>,
    system: CalendarSystem,
    raw_date: &str,
    options: &LookupOptions,
) -> ServiceResult<DayTree> {
    let expanded = tokens::expand(conn, system, raw_date).await?;
    let start = parse_date_text(&expanded, "start")?;
    run_lookup(conn, system, start, None, options).await
}

/// ## Summary
/// Closed-range lookup between two token-expanded date texts, inclusive of
/// both endpoints.
///
/// ## Errors
/// As [`lookup_date`], plus `InvalidRange` when the end precedes the start.
#[tracing::instrument(skip(conn, options))]
pub async fn lookup_range(
    conn: &mut DbConnection<'_>,
    system: CalendarSystem,
    raw_start: &str,
    raw_end: &str,
    options: &LookupOptions,
) -> ServiceResult<DayTree> {
    let expanded_start = tokens::expand(conn, system, raw_start).await?;
    let start = parse_date_text(&expanded_start, "start")?;
    let expanded_end = tokens::expand(conn, system, raw_end).await?;
    let end = parse_date_text(&expanded_end, "end")?;
    run_lookup(conn, system, start, Some(end), options).await
}

async fn run_lookup(
    conn: &mut DbConnection<'_>,
    system: CalendarSystem,
    start: DateTriple,
    end: Option<DateTriple>,
    options: &LookupOptions,
) -> ServiceResult<DayTree> {
    let selection = build_day_selection(conn, system, start, options.filters(), end).await?;
    let days = find_matching_days(conn, &selection).await?;
    if days.is_empty() {
        return Err(ServiceError::EmptyResult);
    }

    let events = load_day_events(conn, &days).await?;
    let paired: Vec<_> = days.into_iter().zip(events).collect();

    Ok(assemble(paired, options.key_system()))
}
