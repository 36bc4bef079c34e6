//! Core Router
//!
//! Every route lives under `/api`. Content edits and avatar changes sit
//! behind the bearer-token middleware; reads and the auth endpoints are
//! public.

use crate::content::handlers::{get_data, section_route};
use crate::content::Section;
use crate::core::auth::handlers as auth_handlers;
use crate::core::auth::middleware::mw_require_auth;
use crate::core::avatar;
use crate::core::AppState;
use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/data", get(get_data))
        .route("/avatar", get(avatar::get_avatar))
        .route("/auth/status", get(auth_handlers::status))
        .route("/auth/setup", post(auth_handlers::setup))
        .route("/auth/login", post(auth_handlers::login))
        .route("/auth/reset", post(auth_handlers::reset))
        .route("/health", get(health_check));

    let mut admin_routes = Router::new();
    for section in Section::ALL {
        admin_routes = admin_routes.route(&format!("/{}", section), section_route(section));
    }
    let admin_routes = admin_routes
        .route(
            "/avatar",
            post(avatar::upload_avatar)
                .delete(avatar::delete_avatar)
                .layer(DefaultBodyLimit::max(state.config.avatar_body_limit())),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            mw_require_auth,
        ));

    let max_json_body = state.config.max_json_body;

    Router::new()
        .nest("/api", public_routes.merge(admin_routes))
        .layer(DefaultBodyLimit::max(max_json_body))
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
