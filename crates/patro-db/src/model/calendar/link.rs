use diesel::{pg::Pg, prelude::*};

use crate::db::schema;

/// Many-to-many association between a calendar day and an event. Never
/// duplicated for the same (day, event) pair.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = schema::day_event)]
#[diesel(check_for_backend(Pg))]
#[diesel(belongs_to(super::day::CalendarDay, foreign_key = day_id))]
#[diesel(belongs_to(super::event::Event, foreign_key = event_id))]
pub struct DayEvent {
    pub id: i32,
    pub day_id: i32,
    pub event_id: i32,
}

/// Insert struct for creating new day-event links during import.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::day_event)]
pub struct NewDayEvent {
    pub day_id: i32,
    pub event_id: i32,
}
