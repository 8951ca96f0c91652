use crate::error::CalendarQueryError;

/// Calendar system a date is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarSystem {
    /// Gregorian ("Anno Domini").
    Ad,
    /// Bikram Sambat, the Nepali lunisolar calendar.
    Bs,
}

impl CalendarSystem {
    /// ## Summary
    /// Parses a calendar-system tag as it appears in request paths.
    ///
    /// ## Errors
    /// Returns [`CalendarQueryError::InvalidSystem`] for anything other than
    /// `ad` or `bs`.
    pub fn parse(tag: &str) -> Result<Self, CalendarQueryError> {
        match tag {
            "ad" => Ok(Self::Ad),
            "bs" => Ok(Self::Bs),
            other => Err(CalendarQueryError::InvalidSystem(other.to_owned())),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ad => "ad",
            Self::Bs => "bs",
        }
    }
}

impl std::fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A possibly-partial calendar date. A component of `0` means
/// "unspecified/all" and is resolved by the query builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTriple {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl DateTriple {
    #[must_use]
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Sortable serial encoding, `YYYY*10000 + MM*100 + DD`. Only meaningful
    /// once every component has been resolved to a concrete value.
    #[must_use]
    pub const fn serial(self) -> i32 {
        self.year * 10_000 + self.month * 100 + self.day
    }
}

impl std::fmt::Display for DateTriple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

/// One calendar day as seen through a single system: the shape downstream
/// code is written against, regardless of which system keyed the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub serial: i32,
}

/// Row-level filters applied on top of the date bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayFilters {
    /// Restrict to public holidays.
    pub only_holidays: bool,
    /// Restrict to non-holidays. Combining both flags is accepted and
    /// yields an empty result set.
    pub except_holidays: bool,
    /// Keep only days whose linked tithi-class event name is one of these.
    /// Blank entries are stripped before the filter is applied.
    pub tithi_names: Vec<String>,
    /// SQL `LIKE` pattern matched against linked event names, case-sensitive
    /// as stored. Empty string disables the filter.
    pub search_text: String,
}

impl DayFilters {
    /// Drops blank tithi entries and surrounding whitespace from the search
    /// pattern, returning the filter set the query builder actually applies.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            only_holidays: self.only_holidays,
            except_holidays: self.except_holidays,
            tithi_names: self
                .tithi_names
                .into_iter()
                .filter(|name| !name.trim().is_empty())
                .collect(),
            search_text: self.search_text.trim().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_systems() {
        assert_eq!(CalendarSystem::parse("ad").unwrap(), CalendarSystem::Ad);
        assert_eq!(CalendarSystem::parse("bs").unwrap(), CalendarSystem::Bs);
    }

    #[test]
    fn parse_unknown_system() {
        let err = CalendarSystem::parse("julian").unwrap_err();
        assert!(matches!(err, CalendarQueryError::InvalidSystem(tag) if tag == "julian"));
    }

    #[test]
    fn serial_encoding_sorts_with_chronology() {
        let jan_first = DateTriple::new(2023, 1, 1).serial();
        let jan_last = DateTriple::new(2023, 1, 31).serial();
        let dec_last = DateTriple::new(2023, 12, 31).serial();
        assert_eq!(jan_first, 20_230_101);
        assert!(jan_first < jan_last);
        assert!(jan_last < dec_last);
    }

    #[test]
    fn filters_normalization_strips_blanks() {
        let filters = DayFilters {
            tithi_names: vec![String::new(), "  ".to_owned(), "पूर्णिमा".to_owned()],
            search_text: "  %Dashain%  ".to_owned(),
            ..DayFilters::default()
        };
        let normalized = filters.normalized();
        assert_eq!(normalized.tithi_names, vec!["पूर्णिमा".to_owned()]);
        assert_eq!(normalized.search_text, "%Dashain%");
    }
}
