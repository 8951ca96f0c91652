diesel::table! {
    calendar_day (id) {
        id -> Int4,
        ad_serial -> Int4,
        bs_serial -> Int4,
        ad_year -> Int4,
        ad_month -> Int4,
        ad_day -> Int4,
        bs_year -> Int4,
        bs_month -> Int4,
        bs_day -> Int4,
        is_holiday -> Bool,
    }
}

diesel::table! {
    event (id) {
        id -> Int4,
        event_name -> Text,
        event_class -> Text,
    }
}

diesel::table! {
    day_event (id) {
        id -> Int4,
        day_id -> Int4,
        event_id -> Int4,
    }
}

diesel::joinable!(day_event -> calendar_day (day_id));
diesel::joinable!(day_event -> event (event_id));

diesel::allow_tables_to_appear_in_same_query!(calendar_day, event, day_event);
