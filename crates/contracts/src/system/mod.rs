pub mod auth;
pub mod roles;
pub mod session;
pub mod views;
