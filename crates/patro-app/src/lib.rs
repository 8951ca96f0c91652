//! HTTP surface of the patro lookup service: salvo routes, depot wiring,
//! error-to-status mapping, and the startup artifact import.

pub mod app;
pub mod db_handler;
pub mod error;
pub mod import;
