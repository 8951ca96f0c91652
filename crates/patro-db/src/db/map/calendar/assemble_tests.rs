//! Unit tests for the day-tree assembler.

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::db::enums::EventClass;
    use crate::db::map::calendar::assemble;
    use crate::model::calendar::{CalendarDay, Event};
    use patro_core::types::CalendarSystem;

    fn day(
        id: i32,
        ad: (i32, i32, i32),
        bs: (i32, i32, i32),
        is_holiday: bool,
    ) -> CalendarDay {
        CalendarDay {
            id,
            ad_serial: ad.0 * 10_000 + ad.1 * 100 + ad.2,
            bs_serial: bs.0 * 10_000 + bs.1 * 100 + bs.2,
            ad_year: ad.0,
            ad_month: ad.1,
            ad_day: ad.2,
            bs_year: bs.0,
            bs_month: bs.1,
            bs_day: bs.2,
            is_holiday,
        }
    }

    fn event(id: i32, name: &str, class: EventClass) -> Event {
        Event {
            id,
            event_name: name.to_owned(),
            event_class: class,
        }
    }

    #[test_log::test]
    fn single_day_with_event_produces_expected_tree() {
        let days = vec![(
            day(1, (2023, 6, 15), (2080, 3, 1), false),
            vec![event(1, "Example Festival", EventClass::Event)],
        )];

        let tree = assemble(days, CalendarSystem::Ad);
        assert_eq!(tree.day_count(), 1);

        let expected = json!({
            "2023": {
                "6": {
                    "15": {
                        "tithi": "",
                        "event": ["Example Festival"],
                        "panchangam": [],
                        "date": {
                            "ad": {"year": 2023, "month": 6, "day": 15},
                            "bs": {"year": 2080, "month": 3, "day": 1},
                        },
                        "public_holiday": false,
                    }
                }
            }
        });
        assert_eq!(tree.into_json(), expected);
    }

    #[test]
    fn bs_keying_reuses_the_same_rows() {
        let days = vec![(day(1, (2023, 6, 15), (2080, 3, 1), true), vec![])];

        let tree = assemble(days, CalendarSystem::Bs);
        let record = tree.get(2080, 3, 1).unwrap();
        assert!(record.public_holiday);
        assert_eq!(record.date.ad.year, 2023);
        assert!(tree.get(2023, 6, 15).is_none());
    }

    #[test]
    fn two_days_same_month_keep_distinct_tithis() {
        let days = vec![
            (
                day(1, (2023, 6, 15), (2080, 3, 1), false),
                vec![event(1, "पूर्णिमा", EventClass::Tithi)],
            ),
            (
                day(2, (2023, 6, 16), (2080, 3, 2), false),
                vec![event(2, "प्रतिपदा", EventClass::Tithi)],
            ),
        ];

        let tree = assemble(days, CalendarSystem::Ad);
        assert_eq!(tree.day_count(), 2);
        assert_eq!(tree.get(2023, 6, 15).unwrap().tithi, "पूर्णिमा");
        assert_eq!(tree.get(2023, 6, 16).unwrap().tithi, "प्रतिपदा");
    }

    #[test]
    fn event_order_follows_link_order() {
        let days = vec![(
            day(1, (2023, 10, 23), (2080, 7, 6), true),
            vec![
                event(5, "फूलपाती", EventClass::Event),
                event(3, "दशैँ", EventClass::Event),
                event(9, "साइत", EventClass::Panchangam),
            ],
        )];

        let tree = assemble(days, CalendarSystem::Ad);
        let record = tree.get(2023, 10, 23).unwrap();
        assert_eq!(record.event, vec!["फूलपाती", "दशैँ"]);
        assert_eq!(record.panchangam, vec!["साइत"]);
    }

    #[test]
    fn year_wildcard_rows_group_across_all_months() {
        let days: Vec<_> = (1..=12)
            .map(|month| (day(month, (2023, month, 1), (2080, month, 15), false), vec![]))
            .collect();

        let tree = assemble(days, CalendarSystem::Ad);
        assert_eq!(tree.day_count(), 12);
        for month in 1..=12 {
            assert!(tree.get(2023, month, 1).is_some());
        }
    }

    #[test]
    fn empty_input_is_an_empty_tree() {
        let tree = assemble(Vec::new(), CalendarSystem::Ad);
        assert!(tree.is_empty());
        assert_eq!(tree.into_json(), json!({}));
    }
}
