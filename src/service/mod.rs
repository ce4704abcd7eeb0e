pub mod distance;
pub mod ranking;
