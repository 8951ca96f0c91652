use crate::error::{ServiceError, ServiceResult};
use patro_core::types::DateTriple;

/// ## Summary
/// Parses an already-token-expanded `"yyyy[-m[-d]]"` date text into a
/// triple. Missing components default to 0 (wildcard); blank chunks are
/// skipped; components past the third are ignored.
///
/// ## Errors
/// Returns [`ServiceError::InvalidDateText`] tagged with `which` when a
/// chunk is not an integer or no component is present at all.
pub fn parse_date_text(text: &str, which: &'static str) -> ServiceResult<DateTriple> {
    let mut components = [0_i32; 3];
    let mut found = 0_usize;

    for chunk in text.split('-').filter(|chunk| !chunk.trim().is_empty()) {
        if found == components.len() {
            break;
        }
        components[found] = chunk
            .trim()
            .parse()
            .map_err(|_err| ServiceError::InvalidDateText(which))?;
        found += 1;
    }

    if found == 0 {
        return Err(ServiceError::InvalidDateText(which));
    }

    Ok(DateTriple::new(components[0], components[1], components[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_date_parses() {
        let date = parse_date_text("2023-6-15", "start").unwrap();
        assert_eq!((date.year, date.month, date.day), (2023, 6, 15));
    }

    #[test]
    fn missing_components_default_to_wildcard() {
        let date = parse_date_text("2023", "start").unwrap();
        assert_eq!((date.year, date.month, date.day), (2023, 0, 0));

        let date = parse_date_text("2023-6", "start").unwrap();
        assert_eq!((date.year, date.month, date.day), (2023, 6, 0));
    }

    #[test]
    fn blank_chunks_are_skipped() {
        let date = parse_date_text("2023--6", "start").unwrap();
        assert_eq!((date.year, date.month, date.day), (2023, 6, 0));
    }

    #[test]
    fn extra_components_are_ignored() {
        let date = parse_date_text("2023-6-15-99", "start").unwrap();
        assert_eq!((date.year, date.month, date.day), (2023, 6, 15));
    }

    #[test]
    fn non_numeric_chunk_is_rejected() {
        let err = parse_date_text("2023-june-15", "end").unwrap_err();
        assert!(matches!(err, ServiceError::InvalidDateText("end")));
    }

    #[test]
    fn empty_text_is_rejected() {
        assert!(parse_date_text("", "start").is_err());
        assert!(parse_date_text("--", "start").is_err());
    }
}
