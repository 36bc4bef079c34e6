use crate::core::config::AppState;
use crate::core::error::Result;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use super::bearer_token;

pub async fn mw_require_auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response> {
    debug!("MIDDLEWARE: require_auth");

    // A header that is not valid UTF-8 can never match; treat it as empty.
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());
    let token = bearer_token(auth_header);

    if let Err(e) = state.auth.authorize(token).await {
        warn!("Rejected {} {}: {:?}", req.method(), req.uri().path(), e);
        return Err(e);
    }

    Ok(next.run(req).await)
}
