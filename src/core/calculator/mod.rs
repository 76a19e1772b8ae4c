pub mod occupancy;
pub mod queries;
