pub mod app;
pub mod frame_clock;
pub mod game;
pub mod sound;
pub mod util;
