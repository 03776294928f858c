pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

#[cfg(test)]
pub mod test_support;

pub use routes::routes;
pub use services::UploadService;
