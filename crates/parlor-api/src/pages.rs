//! The public page handlers.

use axum::{
    Extension,
    response::Html,
};
use tower_sessions::Session;

use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::{session, views};

/// `GET /`. Shows the identity banner when signed in, otherwise the log-in
/// form. Consumes the flash, if one is waiting.
pub async fn landing(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let flash = session::take_flash(&session).await?;
    Ok(Html(views::landing_page(user.as_ref(), flash.as_deref())))
}

/// `GET /sign-up`.
pub async fn sign_up_form() -> Html<String> {
    Html(views::sign_up_page())
}
