//! Shared helper utilities for factory methods.
//!
//! Common utilities used across all factory modules, including unique value generation
//! and convenience methods for creating entities with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a ranger and a pending trip led by that ranger.
///
/// # Returns
/// - `Ok((ranger, trip))` - Created user and trip
/// - `Err(DbErr)` - Database error during creation
pub async fn create_trip_with_ranger(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::trip::Model), DbErr> {
    let ranger = crate::factory::user::create_ranger(db).await?;
    let trip = crate::factory::trip::create_trip(db, ranger.id).await?;

    Ok((ranger, trip))
}

/// Creates a ranger-led trip and an explorer holding a reservation on it.
///
/// # Returns
/// - `Ok((ranger, trip, explorer, reservation))` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reserved_trip(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::trip::Model,
        entity::user::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let (ranger, trip) = create_trip_with_ranger(db).await?;
    let explorer = crate::factory::user::create_explorer(db).await?;
    let reservation =
        crate::factory::reservation::create_reservation(db, trip.id, explorer.id).await?;

    Ok((ranger, trip, explorer, reservation))
}
