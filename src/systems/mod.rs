pub mod answer;
pub mod hud;
pub mod map;
pub mod menu;
pub mod round;
pub mod session;
