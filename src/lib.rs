use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod store;

use crate::state::AppState;

/// Build the full application router over a shared store.
pub fn app(state: AppState) -> Router {
    let config = crate::config::config();

    let mut router = Router::new()
        .route("/api/health", get(handlers::health))
        .merge(auth_routes())
        .merge(journal_routes())
        .merge(admin_routes())
        .with_state(state);

    if config.security.enable_cors {
        // The legacy backend allowed all origins on /api/*
        router = router.layer(CorsLayer::permissive());
    }

    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

fn auth_routes() -> Router<AppState> {
    use handlers::auth;

    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
}

fn journal_routes() -> Router<AppState> {
    use handlers::{entries, reports};

    Router::new()
        .route(
            "/api/entries/:date",
            get(entries::get_day).post(entries::add_entry),
        )
        .route("/api/summary/:date", post(reports::generate_summary))
        .route("/api/insights/:date", post(reports::generate_insights))
}

fn admin_routes() -> Router<AppState> {
    use handlers::admin;

    Router::new()
        .route("/api/admin/users", get(admin::list_users))
        .route("/api/admin/users/:username/make-admin", post(admin::make_admin))
        .route(
            "/api/admin/users/:username/remove-admin",
            post(admin::remove_admin),
        )
        .route("/api/admin/users/:username", delete(admin::delete_user))
        .route("/api/admin/stats", get(admin::stats))
}
