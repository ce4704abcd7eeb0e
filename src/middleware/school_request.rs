use axum::{
    Form, Json,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{header::CONTENT_TYPE, request::Parts},
};
use tracing::debug;

use crate::error::LocatorError;
use crate::types::school::{AddSchoolRequest, CoordinateQuery};

/// Caller position from `?latitude=..&longitude=..`, already validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl<S> FromRequestParts<S> for Coordinates
where
    S: Send + Sync,
{
    type Rejection = LocatorError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<CoordinateQuery>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                debug!(error = %rejection, "rejected listSchools query");
                LocatorError::InvalidCoordinates
            })?;
        let (latitude, longitude) = query.resolve()?;
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// `POST /addSchool` body; form-encoded when the content type says so, JSON otherwise.
pub struct SchoolPayload(pub AddSchoolRequest);

impl<S> FromRequest<S> for SchoolPayload
where
    S: Send + Sync,
{
    type Rejection = LocatorError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        let body = if is_form {
            Form::<AddSchoolRequest>::from_request(req, state)
                .await
                .map(|Form(body)| body)
                .map_err(|rejection| {
                    debug!(error = %rejection, "rejected addSchool form body");
                    LocatorError::InvalidSchool
                })?
        } else {
            Json::<AddSchoolRequest>::from_request(req, state)
                .await
                .map(|Json(body)| body)
                .map_err(|rejection| {
                    debug!(error = %rejection, "rejected addSchool json body");
                    LocatorError::InvalidSchool
                })?
        };
        Ok(SchoolPayload(body))
    }
}
