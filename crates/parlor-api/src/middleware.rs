use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use parlor_types::models::User;

use crate::error::AppError;
use crate::{AppState, hydrate, session};

/// The identity resolved for this request: `None` is an anonymous visitor.
/// Inserted into request extensions on every route.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Option<User>);

/// The authenticated user behind the membership guard. Only present on
/// protected routes, so handlers there can extract it infallibly.
#[derive(Debug, Clone)]
pub struct Member(pub User);

/// Rehydrate the full user record from the session's stored id. Runs on
/// every request, every route: the session holds only the id, never the
/// user.
pub async fn load_user(
    State(state): State<AppState>,
    session: Session,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = match session::current_user_id(&session).await? {
        Some(id) => state
            .db
            .get_user_by_id(&id.to_string())?
            .map(hydrate::user_from_row),
        None => None,
    };

    req.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(req).await)
}

/// Guard for the chat routes. Anonymous requests are not an error: they are
/// silently bounced to the landing page, as if nothing happened.
pub async fn require_member(mut req: Request, next: Next) -> Response {
    let current = req
        .extensions()
        .get::<CurrentUser>()
        .and_then(|c| c.0.clone());

    match current {
        Some(user) => {
            req.extensions_mut().insert(Member(user));
            next.run(req).await
        }
        None => Redirect::to("/").into_response(),
    }
}
