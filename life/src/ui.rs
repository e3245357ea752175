// ui.rs - eframe/egui window acting as the simulation's host

use eframe::egui;
use egui::{Color32, Painter, Pos2, Rect, Vec2};

use crate::config::{KeyBindings, LifeConfig};
use crate::host::{Host, LogicalKey, PointerButton};
use crate::simulation::BoardSimulation;

/// Input read from egui at the start of a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub toggle_pressed: bool,
    pub toggle_held: bool,
    pub reset_pressed: bool,
    pub reset_held: bool,
    pub fast_forward_held: bool,
    pub primary_held: bool,
    pub secondary_held: bool,
    pub pointer: Option<Pos2>,
    /// Seconds since the previous frame.
    pub elapsed: f32,
}

impl FrameInput {
    pub fn sample(input: &egui::InputState, keys: &KeyBindings) -> Self {
        Self {
            toggle_pressed: first_press(input, keys.toggle_pause),
            toggle_held: input.key_down(keys.toggle_pause),
            reset_pressed: first_press(input, keys.reset),
            reset_held: input.key_down(keys.reset),
            fast_forward_held: input.modifiers.shift,
            primary_held: input.pointer.primary_down(),
            secondary_held: input.pointer.secondary_down(),
            pointer: input.pointer.hover_pos(),
            elapsed: input.unstable_dt,
        }
    }
}

/// True when `key` went down this frame. Unlike `InputState::key_pressed`,
/// auto-repeat events while the key is held do not count.
fn first_press(input: &egui::InputState, key: egui::Key) -> bool {
    input.events.iter().any(|event| {
        matches!(
            event,
            egui::Event::Key { key: k, pressed: true, repeat: false, .. } if *k == key
        )
    })
}

/// Host over an egui painter; one board cell is `pixel_size` points square.
pub struct PainterHost<'a> {
    pub input: &'a FrameInput,
    pub painter: &'a Painter,
    pub board: Rect,
    pub pixel_size: f32,
}

impl Host for PainterHost<'_> {
    fn key_pressed(&self, key: LogicalKey) -> bool {
        match key {
            LogicalKey::FastForward => false,   // Modifier, no press edge
            LogicalKey::TogglePause => self.input.toggle_pressed,
            LogicalKey::Reset => self.input.reset_pressed,
        }
    }

    fn key_held(&self, key: LogicalKey) -> bool {
        match key {
            LogicalKey::FastForward => self.input.fast_forward_held,
            LogicalKey::TogglePause => self.input.toggle_held,
            LogicalKey::Reset => self.input.reset_held,
        }
    }

    fn pointer_button_held(&self, button: PointerButton) -> bool {
        match button {
            PointerButton::Primary => self.input.primary_held,
            PointerButton::Secondary => self.input.secondary_held,
        }
    }

    fn pointer_position(&self) -> Option<(i32, i32)> {
        self.input.pointer.map(|pos| {
            let local = pos - self.board.min;
            (
                (local.x / self.pixel_size).floor() as i32,
                (local.y / self.pixel_size).floor() as i32,
            )
        })
    }

    fn plot_pixel(&mut self, x: i32, y: i32, color: Color32) {
        let min = self.board.min + Vec2::new(x as f32, y as f32) * self.pixel_size;
        let rect = Rect::from_min_size(min, Vec2::splat(self.pixel_size));
        self.painter.rect_filled(rect, 0.0, color);
    }

    fn screen_dimensions(&self) -> (i32, i32) {
        (
            (self.board.width() / self.pixel_size) as i32,
            (self.board.height() / self.pixel_size) as i32,
        )
    }
}

/// The running game window.
pub struct LifeApp {
    simulation: BoardSimulation,
}

impl LifeApp {
    pub fn new(config: LifeConfig) -> Self {
        Self {
            simulation: BoardSimulation::new(config),
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let keys = self.simulation.config().keys;
        let pixel_size = self.simulation.config().pixel_size;
        let input = ctx.input(|i| FrameInput::sample(i, &keys));

        let mut keep_running = true;
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let mut host = PainterHost {
                    input: &input,
                    painter: ui.painter(),
                    board: ui.max_rect(),
                    pixel_size,
                };
                keep_running = self.simulation.advance(&mut host, input.elapsed);
            });

        if keep_running {
            // Keep frames coming so the clock advances without input events
            ctx.request_repaint();
        } else {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
