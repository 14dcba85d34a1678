pub mod auth;
pub mod views;
