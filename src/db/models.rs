use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `schools` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct School {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Validated insert input; `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSchool {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}
