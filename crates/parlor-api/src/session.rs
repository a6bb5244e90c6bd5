//! Session keys and the small operations the app performs on them.
//!
//! The session record carries at most two entries: the authenticated user's
//! id under [`USER_ID_KEY`] (never the full user — every request rehydrates
//! the record from the store), and a single-use flash string under
//! [`FLASH_KEY`] consumed by the next landing-page render.

use tower_sessions::Session;
use tower_sessions::session::Error;
use uuid::Uuid;

/// Key for the authenticated user's id.
pub const USER_ID_KEY: &str = "user_id";

/// Key for the single-use flash message.
pub const FLASH_KEY: &str = "error";

/// Bind the session to a user after successful verification. The session id
/// is cycled first so a pre-login cookie cannot be replayed as a logged-in
/// one.
pub async fn establish(session: &Session, user_id: Uuid) -> Result<(), Error> {
    session.cycle_id().await?;
    session.insert(USER_ID_KEY, user_id).await
}

pub async fn current_user_id(session: &Session) -> Result<Option<Uuid>, Error> {
    session.get::<Uuid>(USER_ID_KEY).await
}

/// Delete the session record and expire the cookie. A store failure here
/// propagates; logout must not silently leave the session live.
pub async fn clear(session: &Session) -> Result<(), Error> {
    session.flush().await
}

pub async fn set_flash(session: &Session, message: &str) -> Result<(), Error> {
    session.insert(FLASH_KEY, message).await
}

/// Remove and return the flash, if any. Single-use: a second call after one
/// render gets `None`.
pub async fn take_flash(session: &Session) -> Result<Option<String>, Error> {
    session.remove::<String>(FLASH_KEY).await
}
