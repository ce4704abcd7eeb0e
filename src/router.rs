use axum::{
    Router,
    routing::{get, post},
};

use crate::db::SchoolsStorage;
use crate::handlers::schools::{add_school, list_schools};

/// Shared state handed to every handler; the pool lives as long as the process.
#[derive(Clone)]
pub struct SchoolsState {
    pub storage: SchoolsStorage,
}

impl SchoolsState {
    pub fn new(storage: SchoolsStorage) -> Self {
        Self { storage }
    }
}

pub fn schools_router(state: SchoolsState) -> Router {
    Router::new()
        .route("/listSchools", get(list_schools))
        .route("/addSchool", post(add_school))
        .with_state(state)
}
