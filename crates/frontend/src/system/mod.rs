pub mod auth;
pub mod shop;
