use axum::{Json, extract::State, http::StatusCode};
use tracing::{error, info};

use crate::error::{LocatorError, StoreOp};
use crate::middleware::school_request::{Coordinates, SchoolPayload};
use crate::router::SchoolsState;
use crate::service::ranking::{RankedSchool, rank_by_distance};
use crate::types::school::AddSchoolResponse;

/// GET /listSchools -> every school, nearest to the caller first.
pub async fn list_schools(
    State(state): State<SchoolsState>,
    coords: Coordinates,
) -> Result<Json<Vec<RankedSchool>>, LocatorError> {
    let schools = state.storage.list_schools().await.map_err(|e| {
        error!(error = %e, "failed to retrieve schools");
        e.during(StoreOp::ListSchools)
    })?;

    let ranked = rank_by_distance(schools, coords.latitude, coords.longitude);
    Ok(Json(ranked))
}

/// POST /addSchool -> inserts the school and returns its generated id.
pub async fn add_school(
    State(state): State<SchoolsState>,
    SchoolPayload(body): SchoolPayload,
) -> Result<(StatusCode, Json<AddSchoolResponse>), LocatorError> {
    let school = body.validate()?;

    let id = state.storage.insert_school(&school).await.map_err(|e| {
        error!(error = %e, "failed to insert school");
        e.during(StoreOp::AddSchool)
    })?;

    info!(school_id = id, name = %school.name, "school added");
    Ok((StatusCode::CREATED, Json(AddSchoolResponse::added(id))))
}
