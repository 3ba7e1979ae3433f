pub mod format;
pub mod health;
pub mod player;
pub mod question;
pub mod quiz;
pub mod round;
