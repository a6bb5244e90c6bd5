use std::sync::Arc;

use parlor_db::Database;

pub mod auth;
pub mod chat;
pub mod error;
pub mod hydrate;
pub mod middleware;
pub mod pages;
pub mod router;
pub mod session;
pub mod views;

pub type AppState = Arc<AppStateInner>;

/// Everything a request handler needs, built once at startup and injected
/// through axum `State` — handlers never reach for process-wide globals.
pub struct AppStateInner {
    pub db: Database,
}
