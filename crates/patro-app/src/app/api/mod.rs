mod app_specific;
mod calendar;

use salvo::Router;

// Re-export route constants from core
pub use patro_core::constants::{V1_ROUTE_COMPONENT, V2_ROUTE_COMPONENT};

/// ## Summary
/// Constructs the main API router: the v2 lookup surface plus the v1
/// legacy redirect shim.
#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(
            Router::with_path(V2_ROUTE_COMPONENT)
                .push(app_specific::routes())
                .push(calendar::v2_routes()),
        )
        .push(Router::with_path(V1_ROUTE_COMPONENT).push(calendar::v1_routes()))
}
