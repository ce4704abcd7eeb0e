pub mod school_request;

pub use school_request::{Coordinates, SchoolPayload};
