pub mod actions;
pub mod data;
pub mod models;

pub use data::{ScheduleAvailabilityAddRequest, ScheduleAvailabilityUpdateRequest};
pub use models::ScheduleAvailability;
