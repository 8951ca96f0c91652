mod healthcheck;

use salvo::Router;

#[must_use]
pub fn routes() -> Router {
    healthcheck::routes()
}
