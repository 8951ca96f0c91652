use salvo::prelude::Redirect;
use salvo::{Request, Response, Router, handler};

use patro_db::db::query::calendar::today::today_ad;

/// ## Summary
/// `GET /v2/@today` redirects to the AD point lookup for the wall-clock
/// date, preserving the caller's query string.
#[handler]
async fn today_view(req: &mut Request, res: &mut Response) {
    let today = today_ad();
    let mut target = format!("/v2/date/ad/{}-{}-{}", today.year, today.month, today.day);
    if let Some(query) = req.uri().query() {
        target.push('?');
        target.push_str(query);
    }
    res.render(Redirect::found(target));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("@today").get(today_view)
}
