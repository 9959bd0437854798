use crate::game::config::GameConfig;
use crate::game::mechanics::{ArkanoidMechanics, GameEvent, GameInput, Outcome};

/// What the player is looking at. Only `Running` advances the playfield.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Running,
    Paused,
    Settings { selected: SettingsOption },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SettingsOption {
    BallSpeed,
    StartGame,
    BackToGame,
}

impl SettingsOption {
    pub const ALL: [SettingsOption; 3] = [
        SettingsOption::BallSpeed,
        SettingsOption::StartGame,
        SettingsOption::BackToGame,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|o| *o == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Edge-triggered keys; each press is delivered exactly once.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuKey {
    Escape,
    Settings,
    Up,
    Down,
    Confirm,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub held: GameInput,
    pub pressed: Vec<MenuKey>,
}

impl FrameInput {
    pub fn held(held: GameInput) -> Self {
        Self { held, pressed: vec![] }
    }

    pub fn press(key: MenuKey) -> Self {
        Self { held: GameInput::none(), pressed: vec![key] }
    }
}

/// The one game state of the program: the playfield plus the menu screen on top of it.
#[derive(Clone, Debug)]
pub struct Session {
    pub mechanics: ArkanoidMechanics,
    pub screen: Screen,
    last_outcome: Outcome,
}

impl Session {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            mechanics: ArkanoidMechanics::new(config, seed),
            screen: Screen::Running,
            last_outcome: Outcome::InPlay,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.mechanics.outcome()
    }

    pub fn frame(&mut self, input: &FrameInput) -> Vec<GameEvent> {
        let mut step_blocked = false;
        for key in &input.pressed {
            let before = self.screen;
            self.screen = self.handle_key(*key);
            if before != self.screen {
                log::debug!("screen {:?} -> {:?}", before, self.screen);
                step_blocked = true;
            }
        }

        if self.screen != Screen::Running || step_blocked {
            return vec![];
        }

        let events = self.mechanics.time_step(&input.held);
        self.log_outcome_change();
        events
    }

    fn handle_key(&mut self, key: MenuKey) -> Screen {
        match (self.screen, key) {
            (Screen::Running, MenuKey::Escape) => Screen::Paused,
            (Screen::Paused, MenuKey::Escape) => Screen::Running,
            (Screen::Paused, MenuKey::Settings) => Screen::Settings { selected: SettingsOption::BallSpeed },
            (Screen::Settings { .. }, MenuKey::Escape) => Screen::Paused,
            (Screen::Settings { selected }, MenuKey::Down) => Screen::Settings { selected: selected.next() },
            (Screen::Settings { selected }, MenuKey::Up) => Screen::Settings { selected: selected.previous() },
            (Screen::Settings { selected }, MenuKey::Confirm) => self.confirm(selected),
            (screen, _) => screen,
        }
    }

    fn confirm(&mut self, option: SettingsOption) -> Screen {
        match option {
            SettingsOption::BallSpeed => {
                let increment = self.mechanics.config.settings_speed_increment;
                self.mechanics.increase_ball_speed(increment);
                log::info!("ball speed set to {}", self.mechanics.ball.speed);
                Screen::Settings { selected: option }
            }
            SettingsOption::StartGame => {
                self.mechanics.reset();
                self.last_outcome = Outcome::InPlay;
                log::info!("new game");
                Screen::Running
            }
            SettingsOption::BackToGame => Screen::Paused,
        }
    }

    fn log_outcome_change(&mut self) {
        let outcome = self.mechanics.outcome();
        if outcome != self.last_outcome {
            log::info!("{:?} with score {}", outcome, self.mechanics.score);
            self.last_outcome = outcome;
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn session() -> Session {
        Session::new(GameConfig::default(), 3)
    }

    fn settings(selected: SettingsOption) -> Screen {
        Screen::Settings { selected }
    }

    #[rstest]
    #[case(SettingsOption::BallSpeed, SettingsOption::StartGame)]
    #[case(SettingsOption::StartGame, SettingsOption::BackToGame)]
    #[case(SettingsOption::BackToGame, SettingsOption::BallSpeed)]
    fn settings_options_cycle(#[case] from: SettingsOption, #[case] to: SettingsOption) {
        assert_eq!(from.next(), to);
        assert_eq!(to.previous(), from);
    }

    #[rstest]
    #[case(Screen::Running, MenuKey::Escape, Screen::Paused)]
    #[case(Screen::Running, MenuKey::Settings, Screen::Running)]
    #[case(Screen::Running, MenuKey::Confirm, Screen::Running)]
    #[case(Screen::Paused, MenuKey::Escape, Screen::Running)]
    #[case(Screen::Paused, MenuKey::Settings, settings(SettingsOption::BallSpeed))]
    #[case(Screen::Paused, MenuKey::Down, Screen::Paused)]
    #[case(settings(SettingsOption::BallSpeed), MenuKey::Escape, Screen::Paused)]
    #[case(settings(SettingsOption::BallSpeed), MenuKey::Down, settings(SettingsOption::StartGame))]
    #[case(settings(SettingsOption::BallSpeed), MenuKey::Up, settings(SettingsOption::BackToGame))]
    #[case(settings(SettingsOption::BackToGame), MenuKey::Confirm, Screen::Paused)]
    #[case(settings(SettingsOption::StartGame), MenuKey::Confirm, Screen::Running)]
    #[case(settings(SettingsOption::BallSpeed), MenuKey::Confirm, settings(SettingsOption::BallSpeed))]
    fn screen_transitions(#[case] from: Screen, #[case] key: MenuKey, #[case] expected: Screen) {
        let mut s = session();
        s.screen = from;
        s.frame(&FrameInput::press(key));
        assert_eq!(s.screen, expected);
    }

    #[test]
    fn no_step_while_paused() {
        let mut s = session();
        s.frame(&FrameInput::press(MenuKey::Escape));
        let ball = s.mechanics.ball.clone();
        for _ in 0..10 {
            s.frame(&FrameInput::held(GameInput::left()));
        }
        assert_eq!(s.mechanics.ball, ball);
        assert_eq!(s.screen, Screen::Paused);
    }

    #[test]
    fn start_game_frame_does_not_step() {
        let mut s = session();
        s.screen = settings(SettingsOption::StartGame);
        s.frame(&FrameInput::press(MenuKey::Confirm));
        let fresh = s.mechanics.ball.clone();
        assert_eq!(fresh.shape.min.y, 400.0);
        assert_eq!(fresh.direction, egui::Vec2::new(1.0, -1.0));
    }

    #[test]
    fn pausing_frame_does_not_step() {
        let mut s = session();
        let ball = s.mechanics.ball.clone();
        s.frame(&FrameInput::press(MenuKey::Escape));
        assert_eq!(s.mechanics.ball, ball);
    }

    #[test]
    fn running_frame_steps() {
        let mut s = session();
        let ball = s.mechanics.ball.clone();
        s.frame(&FrameInput::default());
        assert_ne!(s.mechanics.ball.shape, ball.shape);
    }

    #[test]
    fn settings_speed_adjustment() {
        let mut s = session();
        s.screen = settings(SettingsOption::BallSpeed);
        s.frame(&FrameInput::press(MenuKey::Confirm));
        s.frame(&FrameInput::press(MenuKey::Confirm));
        assert_eq!(s.mechanics.ball.speed, 8.0);
    }

    #[test]
    fn start_game_resets() {
        let mut s = session();
        s.mechanics.score = 12;
        s.mechanics.blocks.truncate(10);
        s.mechanics.increase_ball_speed(2.0);
        s.screen = settings(SettingsOption::StartGame);
        s.frame(&FrameInput::press(MenuKey::Confirm));
        assert_eq!(s.screen, Screen::Running);
        assert_eq!(s.mechanics.score, 0);
        assert_eq!(s.mechanics.blocks.len(), 54);
        assert_eq!(s.mechanics.ball.speed, 6.0);
    }
}
