// Domain modules
//
// Each domain owns its models (sqlx queries live with the entity),
// request DTOs, and action functions.

pub mod auth;
pub mod locations;
pub mod schedule_availabilities;
pub mod therapists;
