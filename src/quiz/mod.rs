pub mod handlers;
pub mod image;
pub mod models;
pub mod word_bank;
