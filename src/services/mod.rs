pub mod auth_service;
pub mod trip_service;
