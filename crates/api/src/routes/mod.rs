pub mod health;

use axum::routing::{get, put};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /ideas          fetch all (GET), create (POST)
/// /ideas/{id}     update status + commits (PUT), delete (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/ideas",
            get(handlers::ideas::list_ideas).post(handlers::ideas::create_idea),
        )
        .route(
            "/ideas/{id}",
            put(handlers::ideas::update_idea).delete(handlers::ideas::delete_idea),
        )
}
