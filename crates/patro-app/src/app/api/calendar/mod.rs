mod date;
mod legacy;
mod range;
mod today;

use salvo::{Request, Router};

use patro_service::calendar::LookupOptions;

#[must_use]
pub fn v2_routes() -> Router {
    Router::new()
        .push(date::routes())
        .push(range::routes())
        .push(today::routes())
}

#[must_use]
pub fn v1_routes() -> Router {
    legacy::routes()
}

/// Reads the shared lookup query parameters. Numeric flags follow the
/// `0`/`1` convention; anything unparsable counts as unset.
fn lookup_options(req: &Request) -> LookupOptions {
    let flag = |name: &str| req.query::<i64>(name).unwrap_or(0) != 0;

    LookupOptions {
        only_holidays: flag("only_holidays"),
        except_holidays: flag("except_holidays"),
        tithi_names: req
            .query::<String>("filter_tithis")
            .unwrap_or_default()
            .split(';')
            .map(str::to_owned)
            .collect(),
        search_text: req.query::<String>("search").unwrap_or_default(),
        bs_as_key: flag("bs_as_key"),
    }
}
