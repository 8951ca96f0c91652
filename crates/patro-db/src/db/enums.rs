//! Database enum types with Diesel serialization.
//!
//! Each enum implements `ToSql` and `FromSql` for automatic conversion
//! between Rust and `PostgreSQL` CHECK-constrained text columns.

use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use std::fmt;
use std::io::Write;

/// Event classification.
///
/// Maps to `event.event_class` CHECK constraint.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsExpression,
    FromSqlRow,
    serde::Serialize,
    serde::Deserialize,
)]
#[diesel(sql_type = Text)]
pub enum EventClass {
    /// Named lunar day.
    Tithi,
    /// Festival or civil event.
    Event,
    /// Almanac (auspicious-time) entry.
    Panchangam,
}

impl ToSql<Text, Pg> for EventClass {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        let s = match self {
            Self::Tithi => "tithi",
            Self::Event => "event",
            Self::Panchangam => "panchangam",
        };
        out.write_all(s.as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for EventClass {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"tithi" => Ok(Self::Tithi),
            b"event" => Ok(Self::Event),
            b"panchangam" => Ok(Self::Panchangam),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl EventClass {
    /// Returns the database string representation of this event class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tithi => "tithi",
            Self::Event => "event",
            Self::Panchangam => "panchangam",
        }
    }
}

impl fmt::Display for EventClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
