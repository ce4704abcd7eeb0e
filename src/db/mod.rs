//! Database module: the `schools` table and its storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: bootstrap DDL per backend (MySQL, SQLite)
//! - `store.rs`: pool setup plus the list/insert queries

pub mod models;
pub mod schema;
pub mod store;

pub use models::{NewSchool, School};
pub use schema::{MYSQL_INIT, SQLITE_INIT};
pub use store::{AnyPool, Backend, SchoolsStorage};
