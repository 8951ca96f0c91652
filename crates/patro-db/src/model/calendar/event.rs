use diesel::{pg::Pg, prelude::*};

use crate::db::{enums::EventClass, schema};

/// A named occurrence, deduplicated by (name, class).
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::event)]
#[diesel(check_for_backend(Pg))]
pub struct Event {
    pub id: i32,
    pub event_name: String,
    pub event_class: EventClass,
}

/// Insert struct for creating new events during import.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::event)]
pub struct NewEvent<'a> {
    pub event_name: &'a str,
    pub event_class: EventClass,
}
