use salvo::http::StatusCode;
use salvo::prelude::{Json, Redirect};
use salvo::{Request, Response, Router, handler};
use serde_json::json;

use patro_core::types::CalendarSystem;

/// Query parameters the shim consumes and must not forward.
const CONSUMED_PARAMS: [&str; 4] = ["calendar", "date", "start_date", "end_date"];

/// ## Summary
/// `GET /v1/{opmode}` is the legacy URL shim. Rewrites the old query-string
/// addressing (`?calendar=..&date=..` / `?start_date=..&end_date=..`) onto
/// the v2 path routes with a permanent redirect, forwarding the remaining
/// query parameters untouched.
#[handler]
async fn legacy_view(req: &mut Request, res: &mut Response) {
    let opmode = req.param::<String>("opmode").unwrap_or_default();
    let calendar = req
        .query::<String>("calendar")
        .unwrap_or_else(|| "ad".to_owned())
        .to_lowercase();

    if CalendarSystem::parse(&calendar).is_err() {
        res.status_code(StatusCode::BAD_REQUEST);
        res.render(Json(
            json!({ "error": "invalid calendar type; use \"ad\" or \"bs\"" }),
        ));
        return;
    }

    let passthrough = remaining_query(req.uri().query().unwrap_or(""), &CONSUMED_PARAMS);

    let target = match opmode.as_str() {
        "date" => {
            let date = req.query::<String>("date").unwrap_or_default();
            format!("/v2/date/{calendar}/{date}?{passthrough}")
        }
        "range" => {
            let start = req.query::<String>("start_date").unwrap_or_default();
            let end = req.query::<String>("end_date").unwrap_or_default();
            format!("/v2/range/{calendar}/from/{start}/to/{end}?{passthrough}")
        }
        _ => {
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(json!({ "error": "invalid operation mode" })));
            return;
        }
    };

    res.render(Redirect::permanent(target));
}

/// Drops the consumed key=value pairs from a raw query string, keeping the
/// rest in order.
fn remaining_query(query: &str, consumed: &[&str]) -> String {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let key = pair.split('=').next().unwrap_or("");
            !consumed.contains(&key)
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("{opmode}").get(legacy_view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumed_params_are_dropped() {
        let query = "calendar=bs&date=2080-1-1&only_holidays=1&search=%25";
        assert_eq!(
            remaining_query(query, &CONSUMED_PARAMS),
            "only_holidays=1&search=%25"
        );
    }

    #[test]
    fn range_params_are_dropped_too() {
        let query = "start_date=2080-1-1&end_date=2080-12-30&bs_as_key=1";
        assert_eq!(remaining_query(query, &CONSUMED_PARAMS), "bs_as_key=1");
    }

    #[test]
    fn empty_query_stays_empty() {
        assert_eq!(remaining_query("", &CONSUMED_PARAMS), "");
    }
}
