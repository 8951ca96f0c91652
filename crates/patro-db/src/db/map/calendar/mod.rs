//! Flat day rows -> nested year/month/day response tree.

pub mod assemble;
mod assemble_tests;

pub use assemble::{DayRecord, DayTree, assemble};
