//! The chat read/write handlers. Both sit behind the membership guard, so
//! anonymous requests never reach them.

use axum::{
    Extension, Form,
    extract::State,
    response::{Html, Redirect},
};
use uuid::Uuid;

use parlor_types::forms::NewMessage;

use crate::error::AppError;
use crate::middleware::Member;
use crate::{AppState, hydrate, views};

/// `GET /chat`. Every message ever written, joined with its author, in
/// store order.
pub async fn show_chat(
    State(state): State<AppState>,
    Extension(Member(user)): Extension<Member>,
) -> Result<Html<String>, AppError> {
    // Run the blocking store read off the async runtime
    let db = state.clone();
    let rows = tokio::task::spawn_blocking(move || db.db.list_messages()).await??;

    let messages: Vec<_> = rows.into_iter().map(hydrate::message_from_row).collect();

    Ok(Html(views::chat_page(&user, &messages)))
}

/// `POST /chat`. Appends a message authored by the current user and reloads
/// the chat.
pub async fn post_message(
    State(state): State<AppState>,
    Extension(Member(user)): Extension<Member>,
    Form(form): Form<NewMessage>,
) -> Result<Redirect, AppError> {
    form.validate()?;

    let message_id = Uuid::new_v4();
    let author_id = user.id.to_string();

    let db = state.clone();
    tokio::task::spawn_blocking(move || {
        db.db
            .insert_message(&message_id.to_string(), &author_id, &form.message)
    })
    .await??;

    Ok(Redirect::to("/chat"))
}
