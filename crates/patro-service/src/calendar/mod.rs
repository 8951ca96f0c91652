//! Calendar lookup orchestration: the seam the HTTP handlers call.

pub mod lookup;
pub mod parse;

pub use lookup::{LookupOptions, lookup_date, lookup_range};
pub use parse::parse_date_text;
