pub mod school;

pub use school::{AddSchoolRequest, AddSchoolResponse, CoordinateQuery, NumberOrText};
