pub mod app_state;
pub mod image_cache;
pub mod random;
pub mod server_error;
