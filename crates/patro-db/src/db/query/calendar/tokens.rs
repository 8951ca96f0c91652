use crate::db::connection::DbConnection;
use crate::db::query::calendar::today::today;
use crate::error::DbResult;
use patro_core::constants::{
    TOKEN_CUR_DAY, TOKEN_CUR_MONTH, TOKEN_CUR_YEAR, TOKEN_IGNORE, TOKEN_TODAY,
};
use patro_core::types::{CalendarSystem, DateTriple};

/// ## Summary
/// Rewrites symbolic date tokens into literal values. Substitution is plain
/// substring replacement in a fixed order, each pass applied to the result
/// of the previous one: `@today`, `@ignore`, `@cur_year`, `@cur_month`,
/// `@cur_day`. Every token is idempotent, so repeated expansion of an
/// already-expanded string is a no-op.
#[must_use]
pub fn expand_with_today(text: &str, today: DateTriple) -> String {
    let text = text.replace(
        TOKEN_TODAY,
        &format!("{}-{}-{}", today.year, today.month, today.day),
    );
    let text = text.replace(TOKEN_IGNORE, "0");
    let text = text.replace(TOKEN_CUR_YEAR, &today.year.to_string());
    let text = text.replace(TOKEN_CUR_MONTH, &today.month.to_string());
    text.replace(TOKEN_CUR_DAY, &today.day.to_string())
}

/// ## Summary
/// Expands symbolic tokens against "today" in the given calendar system.
/// Skips the today lookup entirely when the text carries no tokens, so a
/// plain literal date never touches the day table.
///
/// ## Errors
/// Propagates the reverse today lookup failure for the BS system when the
/// wall-clock AD date is absent from the dataset.
#[tracing::instrument(skip(conn))]
pub async fn expand(
    conn: &mut DbConnection<'_>,
    system: CalendarSystem,
    text: &str,
) -> DbResult<String> {
    if !text.contains('@') {
        return Ok(text.to_owned());
    }
    let today = today(conn, system).await?;
    Ok(expand_with_today(text, today))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TODAY: DateTriple = DateTriple::new(2023, 6, 15);

    #[test]
    fn today_token_becomes_dashed_literal() {
        assert_eq!(expand_with_today("@today", TODAY), "2023-6-15");
    }

    #[test]
    fn ignore_token_becomes_zero() {
        assert_eq!(expand_with_today("@cur_year-@ignore-@ignore", TODAY), "2023-0-0");
    }

    #[test]
    fn cur_tokens_expand_componentwise() {
        assert_eq!(
            expand_with_today("@cur_year-@cur_month-@cur_day", TODAY),
            "2023-6-15"
        );
    }

    #[test]
    fn expansion_is_idempotent_per_token() {
        let once = expand_with_today("@today-@ignore-@ignore", TODAY);
        let twice = expand_with_today(&once, TODAY);
        assert_eq!(once, "2023-6-15-0-0");
        assert_eq!(once, twice);
    }

    #[test]
    fn literal_text_passes_through() {
        assert_eq!(expand_with_today("2080-3-1", TODAY), "2080-3-1");
    }
}
