use crate::Database;
use crate::models::{MessageRow, UserRow};
use anyhow::Result;
use rusqlite::{Connection, OptionalExtension};

impl Database {
    // -- Users --

    pub fn create_user(&self, id: &str, username: &str, password_hash: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO users (id, username, password) VALUES (?1, ?2, ?3)",
                (id, username, password_hash),
            )?;
            Ok(())
        })
    }

    /// Exact-match lookup. Usernames are not unique, so the first row in
    /// store order wins.
    pub fn get_user_by_username(&self, username: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user_by_username(conn, username))
    }

    pub fn get_user_by_id(&self, id: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user_by_id(conn, id))
    }

    // -- Messages --

    pub fn insert_message(&self, id: &str, author_id: &str, text: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO messages (id, author_id, text) VALUES (?1, ?2, ?3)",
                (id, author_id, text),
            )?;
            Ok(())
        })
    }

    /// Every message ever written, each joined with its author. No ORDER BY:
    /// callers get store order.
    pub fn list_messages(&self) -> Result<Vec<MessageRow>> {
        self.with_conn(query_messages)
    }
}

fn query_user_by_username(conn: &Connection, username: &str) -> Result<Option<UserRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, username, password, created_at FROM users WHERE username = ?1 LIMIT 1",
    )?;

    let row = stmt
        .query_row([username], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                username: row.get(1)?,
                password: row.get(2)?,
                created_at: row.get(3)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn query_user_by_id(conn: &Connection, id: &str) -> Result<Option<UserRow>> {
    let mut stmt =
        conn.prepare("SELECT id, username, password, created_at FROM users WHERE id = ?1")?;

    let row = stmt
        .query_row([id], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                username: row.get(1)?,
                password: row.get(2)?,
                created_at: row.get(3)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn query_messages(conn: &Connection) -> Result<Vec<MessageRow>> {
    // LEFT JOIN users so a single query resolves every author (no N+1)
    let mut stmt = conn.prepare(
        "SELECT m.id, m.author_id, u.username, m.text, m.created_at
         FROM messages m
         LEFT JOIN users u ON m.author_id = u.id",
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok(MessageRow {
                id: row.get(0)?,
                author_id: row.get(1)?,
                author_username: row
                    .get::<_, Option<String>>(2)?
                    .unwrap_or_else(|| "unknown".to_string()),
                text: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_test_db() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(&dir.path().join("test.db")).unwrap();
        (dir, db)
    }

    #[test]
    fn create_and_look_up_users() {
        let (_dir, db) = open_test_db();

        db.create_user("u1", "alice", "hash-a").unwrap();

        let by_name = db.get_user_by_username("alice").unwrap().unwrap();
        assert_eq!(by_name.id, "u1");
        assert_eq!(by_name.password, "hash-a");

        let by_id = db.get_user_by_id("u1").unwrap().unwrap();
        assert_eq!(by_id.username, "alice");

        assert!(db.get_user_by_username("bob").unwrap().is_none());
        assert!(db.get_user_by_id("u2").unwrap().is_none());
    }

    #[test]
    fn duplicate_usernames_resolve_to_the_first_row() {
        let (_dir, db) = open_test_db();

        db.create_user("u1", "alice", "hash-a").unwrap();
        db.create_user("u2", "alice", "hash-b").unwrap();

        let row = db.get_user_by_username("alice").unwrap().unwrap();
        assert_eq!(row.id, "u1");
    }

    #[test]
    fn messages_join_their_author() {
        let (_dir, db) = open_test_db();

        db.create_user("u1", "alice", "hash-a").unwrap();
        db.insert_message("m1", "u1", "hello").unwrap();
        db.insert_message("m2", "u1", "again").unwrap();

        let rows = db.list_messages().unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.author_username == "alice"));
        assert!(rows.iter().any(|r| r.text == "hello"));
        assert!(rows.iter().any(|r| r.text == "again"));
    }

    #[test]
    fn dangling_author_renders_as_unknown() {
        let (_dir, db) = open_test_db();

        db.insert_message("m1", "nobody", "orphan").unwrap();

        let rows = db.list_messages().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].author_username, "unknown");
        assert_eq!(rows[0].author_id, "nobody");
    }
}
