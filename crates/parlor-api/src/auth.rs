//! Credential registration, verification, and the session transitions they
//! drive.

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::{Form, extract::State, response::Redirect};
use tower_sessions::Session;
use uuid::Uuid;

use parlor_db::Database;
use parlor_db::models::UserRow;
use parlor_types::forms::Credentials;

use crate::error::AppError;
use crate::{AppState, session};

/// Outcome of checking a credential pair against the store.
pub enum Verification {
    Verified(UserRow),
    Denied(&'static str),
}

/// Hash a plaintext password with Argon2id and a fresh random salt. The
/// plaintext is dropped by the caller immediately after; it never reaches
/// the store or a log statement.
pub fn hash_password(plaintext: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)?
        .to_string();
    Ok(hash)
}

/// The credential check. Unknown usernames fail before any hashing happens;
/// known usernames fail only after the argon2 verification rejects.
pub fn verify_credentials(db: &Database, creds: &Credentials) -> Result<Verification, AppError> {
    let Some(user) = db.get_user_by_username(&creds.username)? else {
        return Ok(Verification::Denied("Incorrect username"));
    };

    let parsed_hash = PasswordHash::new(&user.password)?;

    match Argon2::default().verify_password(creds.password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(Verification::Verified(user)),
        Err(argon2::password_hash::Error::Password) => {
            Ok(Verification::Denied("Incorrect password"))
        }
        Err(e) => Err(e.into()),
    }
}

/// `POST /sign-up`. Creates the user and redirects to the landing page; no
/// session is established — the user logs in separately.
pub async fn sign_up(
    State(state): State<AppState>,
    Form(creds): Form<Credentials>,
) -> Result<Redirect, AppError> {
    creds.validate()?;

    let password_hash = hash_password(&creds.password)?;
    let user_id = Uuid::new_v4();

    state
        .db
        .create_user(&user_id.to_string(), &creds.username, &password_hash)?;

    Ok(Redirect::to("/"))
}

/// `POST /log-in`. Success binds the session to the user's id and lands on
/// the chat; failure flashes the reason and bounces to the landing page.
pub async fn log_in(
    State(state): State<AppState>,
    session: Session,
    Form(creds): Form<Credentials>,
) -> Result<Redirect, AppError> {
    creds.validate()?;

    match verify_credentials(&state.db, &creds)? {
        Verification::Verified(user) => {
            let user_id: Uuid = user
                .id
                .parse()
                .map_err(|e| anyhow::anyhow!("corrupt user id '{}': {}", user.id, e))?;
            session::establish(&session, user_id).await?;
            Ok(Redirect::to("/chat"))
        }
        Verification::Denied(reason) => {
            session::set_flash(&session, reason).await?;
            Ok(Redirect::to("/"))
        }
    }
}

/// `GET /log-out`. Flushing an empty session is a no-op, so anonymous
/// visitors get the same redirect.
pub async fn log_out(session: Session) -> Result<Redirect, AppError> {
    session::clear(&session).await?;
    Ok(Redirect::to("/"))
}
