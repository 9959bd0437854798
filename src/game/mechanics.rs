use egui::{Color32, Pos2, Vec2};
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::algebra_2d::AaBB;
use crate::game::config::GameConfig;

#[derive(Clone, Debug)]
pub struct ArkanoidMechanics {
    pub config: GameConfig,
    pub blocks: Vec<Block>,
    pub ball: Ball,
    pub paddle: Paddle,
    pub score: u32,
    rng: StdRng,
}

impl ArkanoidMechanics {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let blocks = Self::initial_blocks(&config, &mut rng);
        let ball = Self::initial_ball(&config, &mut rng);
        let paddle = Self::initial_paddle(&config);
        Self {
            config,
            blocks,
            ball,
            paddle,
            score: 0,
            rng,
        }
    }

    /// Throws away the whole playfield and sets up a fresh one; the RNG keeps running.
    pub fn reset(&mut self) {
        self.blocks = Self::initial_blocks(&self.config, &mut self.rng);
        self.ball = Self::initial_ball(&self.config, &mut self.rng);
        self.paddle = Self::initial_paddle(&self.config);
        self.score = 0;
        log::debug!("reset: {} blocks, ball at {:?}", self.blocks.len(), self.ball.shape.min);
    }

    fn initial_blocks(config: &GameConfig, rng: &mut StdRng) -> Vec<Block> {
        let size = Vec2::new(config.block_len_x, config.block_len_y);
        let mut blocks = (0..config.grid_columns())
            .cartesian_product(0..config.grid_rows())
            .map(|(column, row)| Block {
                shape: AaBB::from_min_size(config.block_origin(column, row), size),
                color: Color32::from_rgb(rng.gen(), rng.gen(), rng.gen()),
                is_powerup: false,
            })
            .collect_vec();

        let count = config.powerup_block_count.min(blocks.len());
        for idx in rand::seq::index::sample(rng, blocks.len(), count) {
            blocks[idx].is_powerup = true;
        }
        blocks
    }

    fn initial_ball(config: &GameConfig, rng: &mut StdRng) -> Ball {
        let range = config.ball_start_range();
        let x = if range.is_empty() { range.start } else { rng.gen_range(range) };
        let len = config.ball_len();
        Ball {
            shape: AaBB::from_min_size(Pos2::new(x as f32, config.ball_start_y()), Vec2::new(len, len)),
            direction: Vec2::new(1.0, -1.0),
            speed: config.ball_start_speed,
        }
    }

    fn initial_paddle(config: &GameConfig) -> Paddle {
        Paddle {
            shape: AaBB::from_min_size(config.paddle_origin(), config.paddle_size()),
        }
    }

    /// Advances the playfield by one frame and reports the scoring collisions of that frame.
    pub fn time_step(&mut self, input: &GameInput) -> Vec<GameEvent> {
        let mut events = vec![];
        self.paddle.process_input(input, &self.config);
        self.ball.proceed();
        self.ball.bounce_off_walls(&self.config);

        if self.ball.shape.intersects(&self.paddle.shape) && self.ball.direction.y > 0.0 {
            self.ball.direction.y = -self.ball.direction.y;
            self.score += 1;
            events.push(GameEvent::PaddleBounce);
        }

        self.collide_with_blocks(&mut events);
        events
    }

    fn collide_with_blocks(&mut self, events: &mut Vec<GameEvent>) {
        let hit = self.blocks.iter()
            .enumerate()
            .filter(|(_, block)| block.shape.intersects(&self.ball.shape))
            .map(|(idx, block)| (idx, block.is_powerup))
            .collect_vec();

        // every hit block flips the ball; two hits in one frame cancel each other out
        for &(_, is_powerup) in &hit {
            self.ball.direction.y = -self.ball.direction.y;
            self.score += 1;
            if is_powerup {
                self.ball.speed += self.config.powerup_speed_increment;
                events.push(GameEvent::PowerupHit { ball_speed: self.ball.speed });
            } else {
                events.push(GameEvent::BlockDestroyed);
            }
        }

        for block_idx in hit.iter()
            .filter(|(_, is_powerup)| !is_powerup)
            .map(|(idx, _)| *idx)
            .sorted_unstable()
            .rev()
        {
            self.blocks.remove(block_idx);
        }
    }

    pub fn outcome(&self) -> Outcome {
        if self.ball.shape.center().y > self.config.screen_len_y || self.remaining_powerup_blocks() == 0 {
            Outcome::GameOver
        } else if self.remaining_regular_blocks() == 0 {
            Outcome::Won
        } else {
            Outcome::InPlay
        }
    }

    pub fn increase_ball_speed(&mut self, delta: f32) {
        debug_assert!(delta >= 0.0);
        self.ball.speed += delta;
    }

    pub fn remaining_powerup_blocks(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_powerup).count()
    }

    pub fn remaining_regular_blocks(&self) -> usize {
        self.blocks.iter().filter(|b| !b.is_powerup).count()
    }
}

/// Keys held during a frame. Both directions may be held at once.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GameInput {
    pub left: bool,
    pub right: bool,
}

impl GameInput {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn left() -> Self {
        Self { left: true, right: false }
    }

    pub fn right() -> Self {
        Self { left: false, right: true }
    }
}

/// Scoring collisions; each one is worth a point and a catch sound.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GameEvent {
    PaddleBounce,
    BlockDestroyed,
    PowerupHit { ball_speed: f32 },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    InPlay,
    GameOver,
    Won,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub shape: AaBB,
    pub color: Color32,
    pub is_powerup: bool,
}

/// The ball collides as a square; it is drawn as a circle around that square's center.
#[derive(Clone, Debug, PartialEq)]
pub struct Ball {
    pub shape: AaBB,
    /// each component is +1 or -1
    pub direction: Vec2,
    pub speed: f32,
}

impl Ball {
    fn proceed(&mut self) {
        self.shape = self.shape.translate(self.direction * self.speed);
    }

    /// There is no floor: a ball below the paddle is lost.
    fn bounce_off_walls(&mut self, config: &GameConfig) {
        let center = self.shape.center();
        if center.x < config.ball_radius || center.x > config.screen_len_x - config.ball_radius {
            self.direction.x = -self.direction.x;
        }
        if center.y < config.ball_radius + config.top_margin {
            self.direction.y = -self.direction.y;
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Paddle {
    pub shape: AaBB,
}

impl Paddle {
    fn process_input(&mut self, input: &GameInput, config: &GameConfig) {
        if input.left && self.shape.min.x > 0.0 {
            let step = config.paddle_step.min(self.shape.min.x);
            self.shape = self.shape.translate(Vec2::new(-step, 0.0));
        }
        if input.right && self.shape.max.x < config.screen_len_x {
            let step = config.paddle_step.min(config.screen_len_x - self.shape.max.x);
            self.shape = self.shape.translate(Vec2::new(step, 0.0));
        }
    }
}
