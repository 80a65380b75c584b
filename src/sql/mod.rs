//! Literal SQL for the users table: identifiers are fixed, values are always `$n` parameters.

pub const TABLE: &str = "users";

/// Idempotent table bootstrap, run once at startup.
pub const CREATE_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS users (id SERIAL PRIMARY KEY, name TEXT, email TEXT)";

pub const SELECT_ALL: &str = "SELECT id, name, email FROM users";

/// $1 = id
pub const SELECT_BY_ID: &str = "SELECT id, name, email FROM users WHERE id = $1";

/// $1 = name, $2 = email
pub const INSERT: &str = "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id";

/// $1 = name, $2 = email, $3 = id
pub const UPDATE: &str = "UPDATE users SET name = $1, email = $2 WHERE id = $3";

/// $1 = id
pub const DELETE: &str = "DELETE FROM users WHERE id = $1";

pub const PING: &str = "SELECT 1";
