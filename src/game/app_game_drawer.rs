use egui::epaint::{CircleShape, RectShape};
use egui::{Align2, Color32, Pos2, Rect, Rounding, Shape, Vec2};

use super::algebra_2d::AaBB;
use super::mechanics::{ArkanoidMechanics, Ball, Block, Outcome, Paddle};
use super::session::{Screen, Session, SettingsOption};

const BACKGROUND: Color32 = Color32::from_rgb(255, 192, 203);
const PADDLE: Color32 = Color32::from_rgb(234, 250, 177);
const BALL: Color32 = Color32::from_rgb(250, 241, 157);
const MENU_SELECTED: Color32 = Color32::from_rgb(255, 0, 0);

const TEXT_SIZE: f32 = 40.0;
const WIN_TEXT_SIZE: f32 = 60.0;
const MENU_LINE_HEIGHT: f32 = 40.0;

/// Whatever covers the playfield in the current frame
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Overlay {
    None,
    GameOver,
    Won,
    Paused,
    Settings,
}

/// A line of text in canvas coordinates, ready for `Painter::text`
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    pub pos: Pos2,
    pub anchor: Align2,
    pub text: String,
    pub size: f32,
    pub color: Color32,
}

pub struct AppGameDrawer<'a> {
    canvas_size: Vec2,
    session: &'a Session,
}

impl<'a> AppGameDrawer<'a> {
    pub fn new(
        canvas_size: Vec2,
        session: &'a Session,
    ) -> Self {
        Self { canvas_size, session }
    }

    fn mechanics(&self) -> &ArkanoidMechanics {
        &self.session.mechanics
    }

    /// pos / SCREEN_LEN = result / canvas_size
    /// => result = pos * canvas_size / SCREEN_LEN
    fn scale(
        &self,
        pos: Pos2,
    ) -> Pos2 {
        let config = &self.mechanics().config;
        Pos2::new(
            pos.x * self.canvas_size.x / config.screen_len_x,
            pos.y * self.canvas_size.y / config.screen_len_y,
        )
    }

    fn scale_x(
        &self,
        len_x: f32,
    ) -> f32 {
        len_x * self.canvas_size.x / self.mechanics().config.screen_len_x
    }

    fn scale_rect(&self, aabb: &AaBB) -> Rect {
        Rect::from_two_pos(self.scale(aabb.min), self.scale(aabb.max))
    }

    pub fn overlay(&self) -> Overlay {
        match self.session.screen {
            Screen::Paused => Overlay::Paused,
            Screen::Settings { .. } => Overlay::Settings,
            Screen::Running => match self.mechanics().outcome() {
                Outcome::InPlay => Overlay::None,
                Outcome::GameOver => Overlay::GameOver,
                Outcome::Won => Overlay::Won,
            },
        }
    }

    pub fn shapes(&self) -> Vec<Shape> {
        let canvas = Rect::from_min_size(Pos2::ZERO, self.canvas_size);
        let mut result = Vec::with_capacity(self.mechanics().blocks.len() + 4);
        result.push(fill(canvas, BACKGROUND));

        match self.overlay() {
            Overlay::Paused | Overlay::Settings => {}
            overlay => {
                result.push(self.paddle());
                result.push(self.ball());
                result.extend(self.blocks());
                if overlay == Overlay::GameOver {
                    result.push(fill(canvas, Color32::BLACK));
                }
            }
        }
        result
    }

    pub fn texts(&self) -> Vec<TextLine> {
        let center = (self.canvas_size / 2.0).to_pos2();
        let mut result = vec![];
        match self.session.screen {
            Screen::Paused => result.push(TextLine {
                pos: center,
                anchor: Align2::CENTER_CENTER,
                text: "Paused".to_string(),
                size: TEXT_SIZE,
                color: Color32::WHITE,
            }),
            Screen::Settings { selected } => result.extend(self.settings_menu(selected)),
            Screen::Running => {
                match self.overlay() {
                    Overlay::GameOver => result.push(TextLine {
                        pos: center,
                        anchor: Align2::CENTER_CENTER,
                        text: "Game Over".to_string(),
                        size: TEXT_SIZE,
                        color: Color32::WHITE,
                    }),
                    Overlay::Won => result.push(TextLine {
                        pos: center,
                        anchor: Align2::CENTER_CENTER,
                        text: "Congratulations! You won!".to_string(),
                        size: WIN_TEXT_SIZE,
                        color: Color32::WHITE,
                    }),
                    _ => {}
                }
                result.push(TextLine {
                    pos: Pos2::new(10.0, 10.0),
                    anchor: Align2::LEFT_TOP,
                    text: format!("Your game score is: {}", self.mechanics().score),
                    size: TEXT_SIZE,
                    color: Color32::BLACK,
                });
            }
        }
        result
    }

    fn settings_menu(&self, selected: SettingsOption) -> Vec<TextLine> {
        let center = (self.canvas_size / 2.0).to_pos2();
        SettingsOption::ALL.iter()
            .enumerate()
            .map(|(i, option)| TextLine {
                pos: Pos2::new(center.x - 100.0, center.y + i as f32 * MENU_LINE_HEIGHT - 20.0),
                anchor: Align2::LEFT_TOP,
                text: self.settings_label(*option),
                size: TEXT_SIZE,
                color: if *option == selected { MENU_SELECTED } else { Color32::WHITE },
            })
            .collect()
    }

    fn settings_label(&self, option: SettingsOption) -> String {
        match option {
            SettingsOption::BallSpeed => format!("Ball Speed: {}", self.mechanics().ball.speed),
            SettingsOption::StartGame => "Start Game (ENTER)".to_string(),
            SettingsOption::BackToGame => "Back to Game (ESC)".to_string(),
        }
    }

    fn blocks(&self) -> Vec<Shape> { self.mechanics().blocks.iter().map(|b| self.draw_block(b)).collect() }

    fn ball(&self) -> Shape { self.draw_ball(&self.mechanics().ball) }

    fn draw_ball(
        &self,
        ball: &Ball,
    ) -> Shape {
        CircleShape::filled(
            self.scale(ball.shape.center()),
            self.scale_x(self.mechanics().config.ball_radius),
            BALL,
        )
        .into()
    }

    fn paddle(&self) -> Shape { self.draw_paddle(&self.mechanics().paddle) }

    fn draw_paddle(
        &self,
        paddle: &Paddle,
    ) -> Shape {
        fill(self.scale_rect(&paddle.shape), PADDLE)
    }

    fn draw_block(
        &self,
        block: &Block,
    ) -> Shape {
        fill(self.scale_rect(&block.shape), block.color)
    }
}

fn fill(rect: Rect, color: Color32) -> Shape {
    RectShape::filled(rect, Rounding::none(), color).into()
}
