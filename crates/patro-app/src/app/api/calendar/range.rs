use salvo::prelude::Json;
use salvo::{Depot, Request, Router, handler};

use crate::db_handler::get_db_from_depot;
use crate::error::AppResult;
use patro_core::types::CalendarSystem;
use patro_service::calendar::lookup_range;

/// ## Summary
/// Closed-range lookup: `GET /v2/range/{caltype}/from/{sdate}/to/{edate}`,
/// inclusive of both endpoints. Unset months and days widen the range to
/// the month/year edges.
#[handler]
async fn range_view(req: &mut Request, depot: &Depot) -> AppResult<Json<serde_json::Value>> {
    let caltype = req.param::<String>("caltype").unwrap_or_default();
    let sdate = req.param::<String>("sdate").unwrap_or_default();
    let edate = req.param::<String>("edate").unwrap_or_default();

    let system = CalendarSystem::parse(&caltype.to_lowercase())?;
    let options = super::lookup_options(req);

    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    let tree = lookup_range(&mut conn, system, &sdate, &edate, &options).await?;
    Ok(Json(tree.into_json()))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("range/{caltype}/from/{sdate}/to/{edate}").get(range_view)
}
