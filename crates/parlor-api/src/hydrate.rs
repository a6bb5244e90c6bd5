//! Row-to-domain conversions. The store hands back stringly-typed rows; the
//! handlers work with the typed records in `parlor-types`.

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::warn;
use uuid::Uuid;

use parlor_db::models::{MessageRow, UserRow};
use parlor_types::models::{ChatMessage, User};

pub fn user_from_row(row: UserRow) -> User {
    User {
        id: parse_id(&row.id, "user"),
        username: row.username,
        created_at: parse_timestamp(&row.created_at, &row.id),
    }
}

pub fn message_from_row(row: MessageRow) -> ChatMessage {
    ChatMessage {
        id: parse_id(&row.id, "message"),
        author_id: parse_id(&row.author_id, "author"),
        author_username: row.author_username,
        text: row.text,
        created_at: parse_timestamp(&row.created_at, &row.id),
    }
}

fn parse_id(raw: &str, what: &str) -> Uuid {
    raw.parse().unwrap_or_else(|e| {
        warn!("Corrupt {} id '{}': {}", what, raw, e);
        Uuid::default()
    })
}

fn parse_timestamp(raw: &str, row_id: &str) -> DateTime<Utc> {
    raw.parse::<DateTime<Utc>>()
        .or_else(|_| {
            // SQLite's datetime('now') writes "YYYY-MM-DD HH:MM:SS" with no
            // timezone. Parse as naive UTC and convert.
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|e| {
            warn!("Corrupt created_at '{}' on row '{}': {}", raw, row_id, e);
            DateTime::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_default_timestamps_parse() {
        let ts = parse_timestamp("2026-08-24 10:30:00", "r1");
        assert_eq!(ts.to_rfc3339(), "2026-08-24T10:30:00+00:00");
    }

    #[test]
    fn rfc3339_timestamps_parse() {
        let ts = parse_timestamp("2026-08-24T10:30:00Z", "r1");
        assert_eq!(ts.to_rfc3339(), "2026-08-24T10:30:00+00:00");
    }

    #[test]
    fn corrupt_fields_fall_back_instead_of_failing() {
        let msg = message_from_row(MessageRow {
            id: "not-a-uuid".into(),
            author_id: "also-bad".into(),
            author_username: "unknown".into(),
            text: "orphan".into(),
            created_at: "garbage".into(),
        });
        assert_eq!(msg.id, Uuid::default());
        assert_eq!(msg.author_id, Uuid::default());
        assert_eq!(msg.text, "orphan");
    }
}
