use thiserror::Error;

use crate::types::CalendarSystem;

/// Validation and lookup failures raised while turning a partial date and
/// filter set into a calendar-day selection.
///
/// All variants are raised before any row is fetched; a query either fails
/// here atomically or runs to completion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarQueryError {
    #[error("unsupported calendar system \"{0}\"; use \"ad\" or \"bs\"")]
    InvalidSystem(String),

    #[error("range end {end_serial} is before range start {start_serial}, cannot compute")]
    InvalidRange { start_serial: i32, end_serial: i32 },

    #[error("{0}")]
    InvalidMonth(String),

    #[error("{0}")]
    InvalidDay(String),

    #[error("no calendar data recorded for {system} month {year}-{month}")]
    NoSuchMonth {
        system: CalendarSystem,
        year: i32,
        month: i32,
    },

    #[error("no calendar data recorded for {system} day {year}-{month}-{day}")]
    NoSuchDay {
        system: CalendarSystem,
        year: i32,
        month: i32,
        day: i32,
    },
}

pub type CoreResult<T> = std::result::Result<T, CalendarQueryError>;
