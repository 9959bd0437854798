pub mod algebra_2d;
pub mod app_game_drawer;
pub mod config;
pub mod mechanics;
pub mod session;
