pub mod app_state;
pub mod auth;
pub mod error;
pub mod format;
pub mod player;
pub mod question;
pub mod quiz;
pub mod round;
