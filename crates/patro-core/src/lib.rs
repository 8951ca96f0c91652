//! Core types, configuration, and error taxonomy for the patro
//! dual-calendar lookup service. No database dependencies live here.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
