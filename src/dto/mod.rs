pub mod auth_dto;
pub mod trip_dto;
