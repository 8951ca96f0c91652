use salvo::prelude::Json;
use salvo::{Depot, Request, Router, handler};

use crate::db_handler::get_db_from_depot;
use crate::error::AppResult;
use patro_core::types::CalendarSystem;
use patro_service::calendar::lookup_date;

/// ## Summary
/// Point/wildcard lookup: `GET /v2/date/{caltype}/{date}` where `date` is
/// `yyyy[-m[-d]]` with `0` or a missing component meaning "all", after
/// symbolic-token expansion.
#[handler]
async fn date_view(req: &mut Request, depot: &Depot) -> AppResult<Json<serde_json::Value>> {
    let caltype = req.param::<String>("caltype").unwrap_or_default();
    let date = req.param::<String>("date").unwrap_or_default();

    let system = CalendarSystem::parse(&caltype.to_lowercase())?;
    let options = super::lookup_options(req);

    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    let tree = lookup_date(&mut conn, system, &date, &options).await?;
    Ok(Json(tree.into_json()))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("date/{caltype}/{date}").get(date_view)
}
