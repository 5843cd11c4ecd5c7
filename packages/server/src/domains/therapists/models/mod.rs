pub mod therapist;

pub use therapist::{CreateTherapist, Therapist, UpdateTherapist};
