pub mod models;
pub mod multipart;
pub mod retention;
pub mod upload_service;
