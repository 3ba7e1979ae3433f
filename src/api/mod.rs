pub mod auth_mw;
pub mod format;
pub mod health;
pub mod player;
pub mod quiz;
pub mod round;
pub mod validation;
