pub mod schedule_availability;

pub use schedule_availability::{
    CreateScheduleAvailability, ScheduleAvailability, UpdateScheduleAvailability,
};
