pub mod actions;
pub mod data;
pub mod models;

pub use data::{LocationAddRequest, TherapistAddRequest, TherapistUpdateRequest};
pub use models::{CreateTherapist, Therapist, UpdateTherapist};
