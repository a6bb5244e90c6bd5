//! Typed payloads for the browser forms, with explicit required-field
//! validation at the boundary (the store schema no longer enforces shapes).

use serde::Deserialize;
use thiserror::Error;

/// A required form field was empty.
#[derive(Debug, Error)]
#[error("{field} is required")]
pub struct MissingField {
    pub field: &'static str,
}

fn require(field: &'static str, value: &str) -> Result<(), MissingField> {
    if value.is_empty() {
        Err(MissingField { field })
    } else {
        Ok(())
    }
}

// -- Auth --

/// Body of `POST /sign-up` and `POST /log-in`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn validate(&self) -> Result<(), MissingField> {
        require("username", &self.username)?;
        require("password", &self.password)
    }
}

// -- Chat --

/// Body of `POST /chat`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewMessage {
    pub message: String,
}

impl NewMessage {
    pub fn validate(&self) -> Result<(), MissingField> {
        require("message", &self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_credentials_are_rejected() {
        let missing_name = Credentials {
            username: String::new(),
            password: "pw123".into(),
        };
        assert_eq!(missing_name.validate().unwrap_err().field, "username");

        let missing_pw = Credentials {
            username: "alice".into(),
            password: String::new(),
        };
        assert_eq!(missing_pw.validate().unwrap_err().field, "password");

        let ok = Credentials {
            username: "alice".into(),
            password: "pw123".into(),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn empty_message_is_rejected() {
        assert!(
            NewMessage {
                message: String::new()
            }
            .validate()
            .is_err()
        );
        assert!(
            NewMessage {
                message: "hello".into()
            }
            .validate()
            .is_ok()
        );
    }
}
