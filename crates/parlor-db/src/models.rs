/// Database row types — these map directly to SQLite rows.
/// Distinct from the parlor-types domain models to keep the db layer
/// independent; the api layer hydrates these into typed records.
pub struct UserRow {
    pub id: String,
    pub username: String,
    pub password: String,
    pub created_at: String,
}

pub struct MessageRow {
    pub id: String,
    pub author_id: String,
    pub author_username: String,
    pub text: String,
    pub created_at: String,
}
