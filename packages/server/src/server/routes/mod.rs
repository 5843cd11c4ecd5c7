// HTTP routes
pub mod health;
pub mod schedule_availabilities;
pub mod therapists;

pub use health::*;
