use std::time::Duration;

use crate::game::session::{FrameInput, MenuKey, Session};
use crate::sound::SoundCue;

/// Frames to catch up at most per repaint, e.g. after the window was dragged
pub const MAX_FRAMES_PER_UPDATE: u32 = 4;

/// Turns wall-clock time between repaints into whole fixed-length frames.
#[derive(Debug)]
pub struct FrameClock {
    tick: Duration,
    accumulated: Duration,
    /// menu keys waiting for the next due frame
    pending_keys: Vec<MenuKey>,
}

impl FrameClock {
    pub fn new(tick: Duration) -> Self {
        Self {
            tick,
            accumulated: Duration::ZERO,
            pending_keys: vec![],
        }
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Runs every frame that is due after `elapsed` and returns how many ran.
    /// Held keys apply to all of them, menu keys only to the first.
    pub fn advance(
        &mut self,
        elapsed: Duration,
        input: FrameInput,
        session: &mut Session,
        sound: &mut dyn SoundCue,
    ) -> u32 {
        self.accumulated = (self.accumulated + elapsed).min(self.tick * MAX_FRAMES_PER_UPDATE);
        self.pending_keys.extend(input.pressed);

        let mut frames = 0;
        while self.accumulated >= self.tick {
            self.accumulated -= self.tick;
            let frame_input = FrameInput {
                held: input.held,
                pressed: std::mem::take(&mut self.pending_keys),
            };
            for _ in session.frame(&frame_input) {
                sound.play_catch();
            }
            frames += 1;
        }
        frames
    }
}

#[cfg(test)]
mod tests {
    use egui::{Pos2, Vec2};
    use rstest::rstest;

    use super::*;
    use crate::game::algebra_2d::AaBB;
    use crate::game::config::GameConfig;
    use crate::game::mechanics::GameInput;
    use crate::game::session::Screen;
    use crate::sound::LogCue;

    const TICK: Duration = Duration::from_millis(10);

    fn session() -> Session {
        Session::new(GameConfig::default(), 5)
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(3, 3)]
    #[case(4, 4)]
    #[case(10, MAX_FRAMES_PER_UPDATE)]
    fn frames_per_advance_are_capped(#[case] ticks: u32, #[case] expected: u32) {
        let mut clock = FrameClock::new(TICK);
        let mut s = session();
        let mut cue = LogCue::default();
        assert_eq!(clock.advance(TICK * ticks, FrameInput::default(), &mut s, &mut cue), expected);
    }

    #[test]
    fn excess_time_is_dropped_not_carried() {
        let mut clock = FrameClock::new(TICK);
        let mut s = session();
        let mut cue = LogCue::default();
        clock.advance(TICK * 10, FrameInput::default(), &mut s, &mut cue);
        assert_eq!(clock.advance(Duration::ZERO, FrameInput::default(), &mut s, &mut cue), 0);
    }

    #[rstest]
    #[case(MenuKey::Escape, Screen::Paused)]
    #[case(MenuKey::Settings, Screen::Running)]
    fn menu_key_reaches_only_the_first_frame(#[case] key: MenuKey, #[case] expected: Screen) {
        let mut clock = FrameClock::new(TICK);
        let mut s = session();
        let mut cue = LogCue::default();
        clock.advance(TICK * 3, FrameInput::press(key), &mut s, &mut cue);
        assert_eq!(s.screen, expected);
    }

    #[test]
    fn menu_key_waits_for_a_due_frame() {
        let mut clock = FrameClock::new(TICK);
        let mut s = session();
        let mut cue = LogCue::default();

        let frames = clock.advance(TICK / 2, FrameInput::press(MenuKey::Escape), &mut s, &mut cue);
        assert_eq!(frames, 0);
        assert_eq!(s.screen, Screen::Running);

        let frames = clock.advance(TICK / 2, FrameInput::default(), &mut s, &mut cue);
        assert_eq!(frames, 1);
        assert_eq!(s.screen, Screen::Paused);

        // delivered once: another frame does not toggle back
        clock.advance(TICK, FrameInput::default(), &mut s, &mut cue);
        assert_eq!(s.screen, Screen::Paused);
    }

    #[test]
    fn paddle_bounce_plays_one_cue() {
        let mut clock = FrameClock::new(TICK);
        let mut s = session();
        let mut cue = LogCue::default();
        s.mechanics.blocks.clear();
        let len = s.mechanics.config.ball_len();
        // falling onto the paddle's top edge
        s.mechanics.ball.shape = AaBB::from_min_size(Pos2::new(590.0, 720.0), Vec2::new(len, len));
        s.mechanics.ball.direction = Vec2::new(1.0, 1.0);

        clock.advance(TICK, FrameInput::held(GameInput::none()), &mut s, &mut cue);

        assert_eq!(s.mechanics.score, 1);
        assert_eq!(cue.played, 1);
    }
}
