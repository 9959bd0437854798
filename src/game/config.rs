use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;

use egui::{Pos2, Vec2};

/// TOP / LEFT corner is 0/0
pub const SCREEN_LEN_X: f32 = 1200.0;
pub const SCREEN_LEN_Y: f32 = 800.0;
pub const FRAMES_PER_SECOND: u32 = 60;

const BLOCK_LEN_X: f32 = 120.0;
const BLOCK_LEN_Y: f32 = 60.0;
const BLOCK_SPACING: f32 = 10.0;
/// space above the block grid; also the ceiling the ball bounces off
const TOP_MARGIN: f32 = 70.0;

const PADDLE_LEN_X: f32 = 200.0;
const PADDLE_LEN_Y: f32 = 25.0;
const PADDLE_STEP: f32 = 20.0;
const PADDLE_DISTANCE_BOTTOM: f32 = 30.0;

const BALL_RADIUS: f32 = 20.0;
const BALL_START_SPEED: f32 = 6.0;
const POWERUP_SPEED_INCREMENT: f32 = 1.0;
const SETTINGS_SPEED_INCREMENT: f32 = 1.0;

const POWERUP_BLOCK_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError(pub String);

impl ConfigError {
    pub fn from(msg: &str) -> Self { ConfigError(msg.to_string()) }
}

impl Display for ConfigError {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

/// All tunables of a game. Lengths are pixels, speeds are pixels per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub screen_len_x: f32,
    pub screen_len_y: f32,
    pub frames_per_second: u32,
    pub block_len_x: f32,
    pub block_len_y: f32,
    pub block_spacing: f32,
    pub top_margin: f32,
    pub paddle_len_x: f32,
    pub paddle_len_y: f32,
    pub paddle_step: f32,
    pub paddle_distance_bottom: f32,
    pub ball_radius: f32,
    pub ball_start_speed: f32,
    pub powerup_speed_increment: f32,
    pub settings_speed_increment: f32,
    pub powerup_block_count: usize,
    /// Sound file for the catch cue, only read with the `audio` feature. No file ships with the
    /// crate: supply one at this path or point `ARKANOID_CATCH_SOUND` at it.
    pub catch_sound: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_len_x: SCREEN_LEN_X,
            screen_len_y: SCREEN_LEN_Y,
            frames_per_second: FRAMES_PER_SECOND,
            block_len_x: BLOCK_LEN_X,
            block_len_y: BLOCK_LEN_Y,
            block_spacing: BLOCK_SPACING,
            top_margin: TOP_MARGIN,
            paddle_len_x: PADDLE_LEN_X,
            paddle_len_y: PADDLE_LEN_Y,
            paddle_step: PADDLE_STEP,
            paddle_distance_bottom: PADDLE_DISTANCE_BOTTOM,
            ball_radius: BALL_RADIUS,
            ball_start_speed: BALL_START_SPEED,
            powerup_speed_increment: POWERUP_SPEED_INCREMENT,
            settings_speed_increment: SETTINGS_SPEED_INCREMENT,
            powerup_block_count: POWERUP_BLOCK_COUNT,
            catch_sound: PathBuf::from("assets/catch.mp3"),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_len_x", self.screen_len_x),
            ("screen_len_y", self.screen_len_y),
            ("block_len_x", self.block_len_x),
            ("block_len_y", self.block_len_y),
            ("paddle_len_x", self.paddle_len_x),
            ("paddle_len_y", self.paddle_len_y),
            ("paddle_step", self.paddle_step),
            ("ball_radius", self.ball_radius),
            ("ball_start_speed", self.ball_start_speed),
        ];
        if let Some((name, value)) = positive.iter().find(|(_, v)| !(*v > 0.0)) {
            return Err(ConfigError(format!("{name} must be positive, got {value}")));
        }
        if self.block_spacing < 0.0 || self.top_margin < 0.0 || self.paddle_distance_bottom < 0.0 {
            return Err(ConfigError::from("spacing, top margin and paddle distance must not be negative"));
        }
        if self.powerup_speed_increment < 0.0 || self.settings_speed_increment < 0.0 {
            return Err(ConfigError::from("speed increments must not be negative"));
        }
        if self.frames_per_second == 0 {
            return Err(ConfigError::from("frames_per_second must be at least 1"));
        }
        if self.grid_size() == 0 {
            return Err(ConfigError::from("screen too small for a single block"));
        }
        if self.powerup_block_count > self.grid_size() {
            return Err(ConfigError(format!(
                "powerup_block_count {} exceeds grid size {}",
                self.powerup_block_count,
                self.grid_size()
            )));
        }
        if self.ball_start_range().is_empty() {
            return Err(ConfigError::from("screen too narrow for the ball"));
        }
        if self.paddle_len_x > self.screen_len_x {
            return Err(ConfigError::from("paddle wider than the screen"));
        }
        Ok(())
    }

    pub fn tick(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frames_per_second as f64)
    }

    /// Edge length of the square the ball collides with; the inscribed square of the drawn circle, rounded down.
    pub fn ball_len(&self) -> f32 {
        (self.ball_radius * std::f32::consts::SQRT_2).floor()
    }

    pub fn grid_columns(&self) -> usize {
        (self.screen_len_x / (self.block_len_x + self.block_spacing)).floor() as usize
    }

    pub fn grid_rows(&self) -> usize {
        let row_pitch = self.block_len_y + (self.block_spacing / 3.0).floor();
        (self.screen_len_y / (2.0 * row_pitch)).floor() as usize
    }

    pub fn grid_size(&self) -> usize {
        self.grid_columns() * self.grid_rows()
    }

    pub fn block_origin(&self, column: usize, row: usize) -> Pos2 {
        Pos2::new(
            column as f32 * (self.block_len_x + self.block_spacing),
            row as f32 * (self.block_len_y + self.block_spacing) + self.top_margin,
        )
    }

    pub fn paddle_origin(&self) -> Pos2 {
        Pos2::new(
            (self.screen_len_x / 2.0).floor() - (self.paddle_len_x / 2.0).floor(),
            self.screen_len_y - self.paddle_len_y - self.paddle_distance_bottom,
        )
    }

    pub fn paddle_size(&self) -> Vec2 {
        Vec2::new(self.paddle_len_x, self.paddle_len_y)
    }

    /// Range of whole-pixel x positions the ball may start at
    pub fn ball_start_range(&self) -> std::ops::Range<u32> {
        let len = self.ball_len().max(0.0) as u32;
        let screen = self.screen_len_x.max(0.0) as u32;
        len..screen.saturating_sub(len)
    }

    pub fn ball_start_y(&self) -> f32 {
        (self.screen_len_y / 2.0).floor()
    }
}

#[cfg(test)]
mod tests {
    use egui::Pos2;
    use rstest::rstest;

    use super::*;

    #[test]
    fn default_grid_layout() {
        let config = GameConfig::default();
        assert_eq!(config.grid_columns(), 9);
        assert_eq!(config.grid_rows(), 6);
        assert_eq!(config.grid_size(), 54);
        assert_eq!(config.block_origin(0, 0), Pos2::new(0.0, 70.0));
        assert_eq!(config.block_origin(8, 5), Pos2::new(1040.0, 420.0));
    }

    #[test]
    fn default_entities() {
        let config = GameConfig::default();
        assert_eq!(config.ball_len(), 28.0);
        assert_eq!(config.ball_start_range(), 28..1172);
        assert_eq!(config.ball_start_y(), 400.0);
        assert_eq!(config.paddle_origin(), Pos2::new(500.0, 745.0));
        assert!(config.validate().is_ok());
    }

    #[rstest]
    #[case(GameConfig { powerup_block_count: 55, ..GameConfig::default() })]
    #[case(GameConfig { frames_per_second: 0, ..GameConfig::default() })]
    #[case(GameConfig { ball_start_speed: 0.0, ..GameConfig::default() })]
    #[case(GameConfig { screen_len_y: 100.0, ..GameConfig::default() })]
    #[case(GameConfig { screen_len_x: 50.0, block_len_x: 20.0, paddle_len_x: 20.0, ..GameConfig::default() })]
    #[case(GameConfig { paddle_len_x: 1300.0, ..GameConfig::default() })]
    fn invalid_configs_are_rejected(#[case] config: GameConfig) {
        assert!(config.validate().is_err());
    }
}
