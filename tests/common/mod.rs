use arkanoid::game::config::GameConfig;
use arkanoid::game::session::{FrameInput, Session};

pub const SEED: u64 = 0x5eed;

#[ctor::ctor]
fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn session() -> Session {
    Session::new(GameConfig::default(), SEED)
}

/// Runs `frames` frames with the same input and returns how many scoring collisions happened.
#[allow(dead_code)]
pub fn run(session: &mut Session, input: &FrameInput, frames: usize) -> usize {
    (0..frames).map(|_| session.frame(input).len()).sum()
}
