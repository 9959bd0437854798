use std::time::Instant;

use eframe::glow;
use egui::{Context, FontId, Id, InputState, Key, LayerId, Order, Painter};

use crate::frame_clock::FrameClock;
use crate::game::app_game_drawer::AppGameDrawer;
use crate::game::mechanics::GameInput;
use crate::game::session::{FrameInput, MenuKey, Session};
use crate::sound::SoundCue;

pub struct ArkanoidApp {
    session: Session,
    sound: Box<dyn SoundCue>,
    clock: FrameClock,
    last_update: Option<Instant>,
}

impl ArkanoidApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        session: Session,
        sound: Box<dyn SoundCue>,
    ) -> Self {
        let clock = FrameClock::new(session.mechanics.config.tick());
        Self {
            session,
            sound,
            clock,
            last_update: None,
        }
    }

    fn read_ui_control(
        &self,
        ctx: &Context,
    ) -> FrameInput {
        ctx.input(|i| FrameInput {
            held: GameInput {
                left: i.key_down(Key::ArrowLeft),
                right: i.key_down(Key::ArrowRight),
            },
            pressed: pressed_menu_keys(i),
        })
    }

    /// Advances the session by as many fixed frames as wall-clock time asks for.
    fn run_frames(&mut self, input: FrameInput) {
        let now = Instant::now();
        let elapsed = self.last_update.map_or(self.clock.tick(), |last| now - last);
        self.last_update = Some(now);
        self.clock.advance(elapsed, input, &mut self.session, self.sound.as_mut());
    }

    fn draw_game_content(&self, painter: &Painter) {
        let paint_offset = painter.clip_rect().min;
        let canvas_size = painter.clip_rect().size();

        let drawer = AppGameDrawer::new(canvas_size, &self.session);
        for mut shape in drawer.shapes() {
            shape.translate(paint_offset.to_vec2());
            painter.add(shape);
        }
        for line in drawer.texts() {
            painter.text(
                line.pos + paint_offset.to_vec2(),
                line.anchor,
                line.text,
                FontId::proportional(line.size),
                line.color,
            );
        }
    }
}

fn pressed_menu_keys(input: &InputState) -> Vec<MenuKey> {
    [
        (Key::Escape, MenuKey::Escape),
        (Key::S, MenuKey::Settings),
        (Key::ArrowUp, MenuKey::Up),
        (Key::ArrowDown, MenuKey::Down),
        (Key::Enter, MenuKey::Confirm),
    ]
    .into_iter()
    .filter(|(key, _)| input.key_pressed(*key))
    .map(|(_, menu_key)| menu_key)
    .collect()
}

impl eframe::App for ArkanoidApp {
    fn update(
        &mut self,
        ctx: &Context,
        _frame: &mut eframe::Frame,
    ) {
        let input = self.read_ui_control(ctx);
        self.run_frames(input);

        let game_painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("game")));
        self.draw_game_content(&game_painter);
        ctx.request_repaint_after(self.clock.tick());
    }

    fn on_exit(
        &mut self,
        _: Option<&glow::Context>,
    ) {
        log::info!("quit with score {}", self.session.mechanics.score);
    }
}
