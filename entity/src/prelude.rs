pub use super::activity::Entity as Activity;
pub use super::activity_category::Entity as ActivityCategory;
pub use super::activity_trip::Entity as ActivityTrip;
pub use super::certification::Entity as Certification;
pub use super::location::Entity as Location;
pub use super::payment::Entity as Payment;
pub use super::ranger_calification::Entity as RangerCalification;
pub use super::reservation::Entity as Reservation;
pub use super::resource::Entity as Resource;
pub use super::trip::Entity as Trip;
pub use super::trip_resource::Entity as TripResource;
pub use super::user::Entity as User;
pub use super::user_role::Entity as UserRole;
