//! SQL DDL for bootstrapping the `schools` table.
//! Only creates the table when absent; existing tables are left untouched.

/// MySQL schema, matching the production deployment.
/// - `id` BIGINT AUTO_INCREMENT so it decodes as `i64`
/// - coordinates as DOUBLE (degrees)
pub const MYSQL_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS schools (
    id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    address VARCHAR(255) NOT NULL,
    latitude DOUBLE NOT NULL,
    longitude DOUBLE NOT NULL
)
"#;

/// SQLite equivalent, used for local runs and tests.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS schools (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    address TEXT NOT NULL,
    latitude REAL NOT NULL,
    longitude REAL NOT NULL
)
"#;
