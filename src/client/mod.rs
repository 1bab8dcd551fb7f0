pub mod scoring_client;
pub mod unsplash_client;
pub mod unsplash_client_error;
