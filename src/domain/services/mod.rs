pub mod artifact_store;
pub mod image_service;
pub mod password_service;
pub mod token_service;
