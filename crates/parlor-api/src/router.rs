//! The full application router, built here so the integration tests drive
//! exactly what the binary serves.

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::middleware::{load_user, require_member};
use crate::{AppState, auth, chat, pages};

pub fn router(state: AppState) -> Router {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store).with_secure(false);

    let protected = Router::new()
        .route("/chat", get(chat::show_chat).post(chat::post_message))
        .layer(middleware::from_fn(require_member));

    Router::new()
        .route("/", get(pages::landing))
        .route("/sign-up", get(pages::sign_up_form).post(auth::sign_up))
        .route("/log-in", post(auth::log_in))
        .route("/log-out", get(auth::log_out))
        .merge(protected)
        // Inner to outer: identity load needs the session, which needs the
        // session layer; tracing wraps everything.
        .layer(middleware::from_fn_with_state(state.clone(), load_user))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
