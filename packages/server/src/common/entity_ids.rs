//! Typed ID definitions for all domain entities.
//!
//! This module defines type aliases for each domain entity, providing
//! compile-time type safety for ID usage throughout the application.

// Re-export the core Id type
pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Therapist entities.
pub struct Therapist;

/// Marker type for Location entities.
pub struct Location;

/// Marker type for ScheduleAvailability entities.
pub struct ScheduleAvailability;

/// Marker type for authenticated users (ids issued by the identity provider).
pub struct User;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Therapist entities.
pub type TherapistId = Id<Therapist>;

/// Typed ID for Location entities.
pub type LocationId = Id<Location>;

/// Typed ID for ScheduleAvailability entities.
pub type ScheduleAvailabilityId = Id<ScheduleAvailability>;

/// Typed ID for authenticated users.
pub type UserId = Id<User>;
