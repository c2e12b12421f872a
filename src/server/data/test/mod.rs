mod rating;
mod reservation;
mod trip;
mod trip_resource;
mod user;
