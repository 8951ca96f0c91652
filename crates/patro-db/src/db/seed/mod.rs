//! Idempotent import of yearly artifact files into the three calendar
//! tables. The serving path is read-only; this is the only writer and runs
//! to completion before the server accepts requests.

pub mod artifact;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::enums::EventClass;
use crate::db::schema::{calendar_day, day_event, event};
use crate::model::calendar::{NewCalendarDay, NewDayEvent, NewEvent};
use artifact::Artifact;
use patro_core::types::DateTriple;

/// ## Summary
/// Imports one artifact's days, events, and links. Re-importing the same
/// artifact is a no-op: days are matched by their serial natural key, events
/// are deduplicated by (name, class), and links are never duplicated for the
/// same (day, event) pair.
///
/// Returns the number of days processed.
///
/// ## Errors
/// Returns errors for malformed artifact dates or failed statements; run
/// inside a transaction to keep a partially-imported artifact out of the
/// serving tables.
#[tracing::instrument(skip(conn, artifact), fields(day_count = artifact.len()))]
pub async fn seed_artifact(conn: &mut DbConnection<'_>, artifact: &Artifact) -> anyhow::Result<usize> {
    let mut processed = 0_usize;

    for (ad_text, entry) in artifact {
        let ad = artifact::parse_slash_date(ad_text)?;
        let bs = artifact::parse_slash_date(&entry.nepali_date)?;

        let day_id = find_or_create_day(conn, ad, bs, entry.is_public_holiday).await?;

        let mut linked: Vec<(&str, EventClass)> = Vec::new();
        if !entry.tithi.trim().is_empty() {
            linked.push((entry.tithi.as_str(), EventClass::Tithi));
        }
        linked.extend(
            entry
                .events
                .iter()
                .filter(|name| !name.trim().is_empty())
                .map(|name| (name.as_str(), EventClass::Event)),
        );
        linked.extend(
            entry
                .panchangam
                .iter()
                .filter(|name| !name.trim().is_empty())
                .map(|name| (name.as_str(), EventClass::Panchangam)),
        );

        for (name, class) in linked {
            let event_id = find_or_create_event(conn, name, class).await?;
            ensure_link(conn, day_id, event_id).await?;
        }

        processed += 1;
        tracing::debug!(ad = %ad, bs = %bs, "imported day");
    }

    Ok(processed)
}

async fn find_or_create_day(
    conn: &mut DbConnection<'_>,
    ad: DateTriple,
    bs: DateTriple,
    is_holiday: bool,
) -> anyhow::Result<i32> {
    let existing: Option<i32> = calendar_day::table
        .filter(calendar_day::ad_serial.eq(ad.serial()))
        .select(calendar_day::id)
        .first(conn)
        .await
        .optional()?;

    if let Some(id) = existing {
        return Ok(id);
    }

    let id = diesel::insert_into(calendar_day::table)
        .values(NewCalendarDay {
            ad_serial: ad.serial(),
            bs_serial: bs.serial(),
            ad_year: ad.year,
            ad_month: ad.month,
            ad_day: ad.day,
            bs_year: bs.year,
            bs_month: bs.month,
            bs_day: bs.day,
            is_holiday,
        })
        .returning(calendar_day::id)
        .get_result(conn)
        .await?;

    Ok(id)
}

async fn find_or_create_event(
    conn: &mut DbConnection<'_>,
    name: &str,
    class: EventClass,
) -> anyhow::Result<i32> {
    let existing: Option<i32> = event::table
        .filter(event::event_name.eq(name))
        .filter(event::event_class.eq(class))
        .select(event::id)
        .first(conn)
        .await
        .optional()?;

    if let Some(id) = existing {
        return Ok(id);
    }

    let id = diesel::insert_into(event::table)
        .values(NewEvent {
            event_name: name,
            event_class: class,
        })
        .returning(event::id)
        .get_result(conn)
        .await?;

    Ok(id)
}

async fn ensure_link(
    conn: &mut DbConnection<'_>,
    day_id: i32,
    event_id: i32,
) -> anyhow::Result<()> {
    let existing: Option<i32> = day_event::table
        .filter(day_event::day_id.eq(day_id))
        .filter(day_event::event_id.eq(event_id))
        .select(day_event::id)
        .first(conn)
        .await
        .optional()?;

    if existing.is_none() {
        diesel::insert_into(day_event::table)
            .values(NewDayEvent { day_id, event_id })
            .execute(conn)
            .await?;
    }

    Ok(())
}
