//! Request-level orchestration for the patro lookup service: date-text
//! parsing, the expand -> validate -> query -> assemble pipeline, and the
//! kholiday file generator used by the offline converter.

pub mod calendar;
pub mod error;
pub mod kholiday;
