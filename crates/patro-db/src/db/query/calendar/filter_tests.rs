//! Unit tests for day-selection validation and normalization.

#[cfg(test)]
mod tests {
    use crate::db::query::calendar::filter::{
        DayBounds, DaySelection, resolve_range_bounds, resolve_range_months, validate_point_day,
        validate_point_month,
    };
    use patro_core::error::CalendarQueryError;
    use patro_core::types::{CalendarSystem, DateTriple, DayFilters};

    #[test_log::test]
    fn range_months_pass_through_when_set() {
        assert_eq!(resolve_range_months(3, 9).unwrap(), (3, 9));
    }

    #[test]
    fn range_months_zero_selects_full_year() {
        assert_eq!(resolve_range_months(0, 0).unwrap(), (1, 12));
    }

    #[test]
    fn range_month_thirteen_is_invalid() {
        let err = resolve_range_months(13, 2).unwrap_err();
        match err {
            CalendarQueryError::InvalidMonth(msg) => assert!(msg.contains("\"13\"")),
            other => panic!("expected InvalidMonth, got {other:?}"),
        }
    }

    #[test]
    fn range_end_month_is_validated_too() {
        let err = resolve_range_months(2, 99).unwrap_err();
        assert!(matches!(err, CalendarQueryError::InvalidMonth(_)));
    }

    #[test]
    fn range_days_normalize_to_month_edges() {
        let (start, end) = resolve_range_bounds(
            DateTriple::new(2023, 1, 0),
            DateTriple::new(2023, 1, 0),
            31,
            31,
        )
        .unwrap();
        assert_eq!((start, end), (20_230_101, 20_230_131));
    }

    #[test]
    fn range_endpoints_are_inclusive_of_whole_month() {
        // An explicit 1..=31 range covers the same serial window as the
        // wildcard-day range over the month.
        let explicit = resolve_range_bounds(
            DateTriple::new(2023, 1, 1),
            DateTriple::new(2023, 1, 31),
            31,
            31,
        )
        .unwrap();
        let wildcard = resolve_range_bounds(
            DateTriple::new(2023, 1, 0),
            DateTriple::new(2023, 1, 0),
            31,
            31,
        )
        .unwrap();
        assert_eq!(explicit, wildcard);
    }

    #[test]
    fn range_day_beyond_month_length_cites_bound() {
        let err = resolve_range_bounds(
            DateTriple::new(2080, 2, 33),
            DateTriple::new(2080, 3, 0),
            32,
            31,
        )
        .unwrap_err();
        match err {
            CalendarQueryError::InvalidDay(msg) => {
                assert!(msg.contains("\"33\""));
                assert!(msg.contains("\"32\""));
            }
            other => panic!("expected InvalidDay, got {other:?}"),
        }
    }

    #[test]
    fn reversed_range_is_rejected() {
        let err = resolve_range_bounds(
            DateTriple::new(2023, 12, 5),
            DateTriple::new(2023, 1, 5),
            31,
            31,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CalendarQueryError::InvalidRange {
                start_serial: 20_231_205,
                end_serial: 20_230_105,
            }
        ));
    }

    #[test]
    fn single_day_range_is_valid() {
        let (start, end) = resolve_range_bounds(
            DateTriple::new(2023, 6, 15),
            DateTriple::new(2023, 6, 15),
            30,
            30,
        )
        .unwrap();
        assert_eq!(start, end);
    }

    #[test]
    fn point_month_zero_lifts_constraint() {
        assert_eq!(validate_point_month(0).unwrap(), None);
        assert_eq!(validate_point_month(7).unwrap(), Some(7));
    }

    #[test]
    fn point_month_thirteen_is_invalid() {
        let err = validate_point_month(13).unwrap_err();
        match err {
            CalendarQueryError::InvalidMonth(msg) => {
                assert!(msg.contains("\"13\""));
                assert!(msg.contains("\"12\""));
            }
            other => panic!("expected InvalidMonth, got {other:?}"),
        }
    }

    #[test]
    fn point_day_thirty_two_in_31_day_month_cites_bound() {
        let err = validate_point_day(32, 31).unwrap_err();
        match err {
            CalendarQueryError::InvalidDay(msg) => {
                assert!(msg.contains("\"32\""));
                assert!(msg.contains("\"31\""));
            }
            other => panic!("expected InvalidDay, got {other:?}"),
        }
    }

    #[test]
    fn point_day_zero_lifts_constraint() {
        assert_eq!(validate_point_day(0, 31).unwrap(), None);
        assert_eq!(validate_point_day(31, 31).unwrap(), Some(31));
    }

    #[test]
    fn both_holiday_flags_survive_validation() {
        // Contradictory flags are a valid (if useless) query; they must
        // carry through to the predicate instead of erroring.
        let filters = DayFilters {
            only_holidays: true,
            except_holidays: true,
            ..DayFilters::default()
        }
        .normalized();
        let selection = DaySelection {
            system: CalendarSystem::Ad,
            bounds: DayBounds::Point {
                year: Some(2023),
                month: None,
                day: None,
            },
            filters,
        };
        assert!(selection.filters.only_holidays);
        assert!(selection.filters.except_holidays);
    }
}
