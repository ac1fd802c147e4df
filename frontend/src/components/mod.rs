pub mod generator;
pub mod upload_zone;
