pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::applications::handlers as applications;
use crate::auth::{handlers as auth, middleware::require_master};
use crate::jobs::handlers as jobs;
use crate::state::AppState;

/// Largest JSON body accepted, sized for long cover letters.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let master = Router::new()
        .route(
            "/api/master/applications",
            get(applications::handle_grouped_applications),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_master));

    let mut router = Router::new()
        .route("/health", get(health::health_handler))
        .route("/ready", get(health::ready_handler))
        .route(
            "/api/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route(
            "/api/applications",
            post(applications::handle_submit_application),
        )
        .route("/api/master/login", post(auth::handle_login))
        .merge(master);

    // Browser front end
    if let Some(dir) = state.config.static_dir.clone() {
        router = router
            .route_service("/master", ServeFile::new(dir.join("master-login.html")))
            .route_service(
                "/master/dashboard",
                ServeFile::new(dir.join("master-dashboard.html")),
            )
            .fallback_service(ServeDir::new(dir));
    }

    router
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
