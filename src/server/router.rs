use axum::{
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::server::{
    controller::{
        activity, association, catalog, certification, payment, rating, reservation, resource,
        trip, user,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Basecamp API", description = "Booking backend for guided expedition trips"),
    paths(
        trip::create_trip,
        trip::get_trips,
        trip::get_trip,
        trip::get_trips_by_ranger,
        trip::get_trips_by_explorer,
        trip::update_trip,
        trip::delete_trip,
        trip::update_trip_status,
        trip::check_reservations,
        association::associate_activity,
        association::disassociate_activity,
        association::associate_resource,
        association::disassociate_resource,
        association::get_trip_activities,
        association::get_trip_resources,
        reservation::create_reservation,
        reservation::get_user_reservations,
        reservation::delete_reservation,
        reservation::delete_trip_reservation,
        reservation::delete_user_trip_reservation,
        payment::create_payment,
        payment::update_payment_status,
        payment::get_trip_payments,
        payment::get_user_trip_payment,
        rating::rate_trip,
        rating::get_trip_rating,
        rating::get_ranger_rating,
        resource::create_resource,
        resource::get_resources,
        resource::delete_resource,
        activity::create_activity,
        activity::get_activities,
        activity::get_activity,
        catalog::get_activity_categories,
        catalog::get_locations,
        catalog::get_roles,
        user::register,
        user::get_rangers,
        user::get_user,
        user::update_profile,
        certification::create_certification,
        certification::get_certifications,
    ),
    modifiers(&BearerAuth),
    tags(
        (name = trip::TRIP_TAG, description = "Trip lifecycle"),
        (name = association::ASSOCIATION_TAG, description = "Activities and resources linked to trips"),
        (name = reservation::RESERVATION_TAG, description = "Seat reservations"),
        (name = payment::PAYMENT_TAG, description = "Trip payments and their review status"),
        (name = rating::RATING_TAG, description = "Ranger ratings"),
        (name = resource::RESOURCE_TAG, description = "Resource catalog"),
        (name = activity::ACTIVITY_TAG, description = "Activity catalog"),
        (name = catalog::CATALOG_TAG, description = "Reference data"),
        (name = user::USER_TAG, description = "Accounts and profiles"),
        (name = certification::CERTIFICATION_TAG, description = "Ranger certifications"),
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/docs/openapi.json", get(openapi_json))
        .route("/trips", get(trip::get_trips).post(trip::create_trip))
        .route(
            "/trips/{id}",
            get(trip::get_trip)
                .put(trip::update_trip)
                .delete(trip::delete_trip),
        )
        .route("/trips/{id}/status", put(trip::update_trip_status))
        .route("/trips/{id}/reservations", get(trip::check_reservations))
        .route("/trips/{id}/activities", get(association::get_trip_activities))
        .route("/trips/{id}/resources", get(association::get_trip_resources))
        .route("/trips/{id}/rating", get(rating::get_trip_rating))
        .route("/trips/ranger/{user_id}", get(trip::get_trips_by_ranger))
        .route("/trips/explorer/{user_id}", get(trip::get_trips_by_explorer))
        .route(
            "/activity-trips",
            post(association::associate_activity).delete(association::disassociate_activity),
        )
        .route(
            "/trip-resources",
            post(association::associate_resource).delete(association::disassociate_resource),
        )
        .route("/reservations", post(reservation::create_reservation))
        .route("/reservations/{id}", delete(reservation::delete_reservation))
        .route(
            "/reservations/user/{user_id}",
            get(reservation::get_user_reservations),
        )
        .route(
            "/reservations/trip/{trip_id}",
            delete(reservation::delete_trip_reservation),
        )
        .route(
            "/reservations/trip/{trip_id}/user/{user_id}",
            delete(reservation::delete_user_trip_reservation),
        )
        .route("/payments", post(payment::create_payment))
        .route("/payments/status", put(payment::update_payment_status))
        .route("/payments/trip/{trip_id}", get(payment::get_trip_payments))
        .route(
            "/payments/trip/{trip_id}/user/{user_id}",
            get(payment::get_user_trip_payment),
        )
        .route("/ratings", post(rating::rate_trip))
        .route("/rangers", get(user::get_rangers))
        .route("/rangers/{id}/rating", get(rating::get_ranger_rating))
        .route(
            "/resources",
            get(resource::get_resources).post(resource::create_resource),
        )
        .route("/resources/{id}", delete(resource::delete_resource))
        .route(
            "/activities",
            get(activity::get_activities).post(activity::create_activity),
        )
        .route("/activities/{id}", get(activity::get_activity))
        .route("/activity-categories", get(catalog::get_activity_categories))
        .route("/locations", get(catalog::get_locations))
        .route("/roles", get(catalog::get_roles))
        .route("/register", post(user::register))
        .route("/users/{id}", get(user::get_user))
        .route("/users/{id}/profile", patch(user::update_profile))
        .route(
            "/users/{id}/certifications",
            get(certification::get_certifications).post(certification::create_certification),
        )
}
