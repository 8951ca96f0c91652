//! Nepali rendering helpers for the holiday-definition file: Devanagari
//! digits and month names.

use anyhow::Context;

use patro_core::types::DateTriple;

pub const NEP_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

pub const NEP_MONTHS: [&str; 12] = [
    "बैशाख", "जेष्ठ", "आषाढ़", "श्रावण", "भाद्र", "आश्विन",
    "कार्तिक", "मंसिर", "पौष", "माघ", "फाल्गुन", "चैत्र",
];

pub const EN_MONTHS: [&str; 12] = [
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

/// Renders a non-negative number with Devanagari digits.
#[must_use]
pub fn to_devanagari(value: i32) -> String {
    value
        .to_string()
        .chars()
        .map(|c| c.to_digit(10).map_or(c, |d| NEP_DIGITS[d as usize]))
        .collect()
}

/// ## Summary
/// Renders a BS date as `"<month-name> <day>, <year>"` with Devanagari
/// numerals, e.g. `"आषाढ़ १, २०८०"`.
///
/// ## Errors
/// Returns an error when the month is outside `[1, 12]`.
pub fn bs_date_display(date: DateTriple) -> anyhow::Result<String> {
    let month_name = usize::try_from(date.month)
        .ok()
        .and_then(|month| month.checked_sub(1))
        .and_then(|index| NEP_MONTHS.get(index))
        .with_context(|| format!("BS month {} out of range", date.month))?;

    Ok(format!(
        "{month_name} {}, {}",
        to_devanagari(date.day),
        to_devanagari(date.year)
    ))
}

/// ## Summary
/// Returns the lowercase English month name for an AD month.
///
/// ## Errors
/// Returns an error when the month is outside `[1, 12]`.
pub fn en_month_name(month: i32) -> anyhow::Result<&'static str> {
    usize::try_from(month)
        .ok()
        .and_then(|month| month.checked_sub(1))
        .and_then(|index| EN_MONTHS.get(index))
        .copied()
        .with_context(|| format!("AD month {month} out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn devanagari_digits() {
        assert_eq!(to_devanagari(2080), "२०८०");
        assert_eq!(to_devanagari(1), "१");
        assert_eq!(to_devanagari(907), "९०७");
    }

    #[test]
    fn bs_display_uses_month_name_and_numerals() {
        let display = bs_date_display(DateTriple::new(2080, 3, 1)).unwrap();
        assert_eq!(display, "आषाढ़ १, २०८०");
    }

    #[test]
    fn out_of_range_months_fail() {
        assert!(bs_date_display(DateTriple::new(2080, 13, 1)).is_err());
        assert!(en_month_name(0).is_err());
        assert_eq!(en_month_name(6).unwrap(), "june");
    }
}
